//! Canvas 2D presentation layer
//!
//! Pure consumer of the simulation state: draws the arena, both
//! combatants, the score and health gauges, and the static screens for
//! the non-playing phases. Sprites that have not loaded are skipped.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::{Assets, image_ready};
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Render one frame for the current phase
    pub fn render(&self, state: &GameState, assets: &Assets) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_background(assets);

        match state.phase {
            GamePhase::Playing => self.draw_playing(state, assets),
            GamePhase::Start => self.draw_start_screen(),
            GamePhase::Victory => self.draw_end_screen("Victory!", state.score),
            GamePhase::Defeat => self.draw_end_screen("Game Over", state.score),
        }
    }

    fn draw_background(&self, assets: &Assets) {
        if let Some(bg) = assets.background.as_ref().filter(|img| image_ready(img)) {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    bg, 0.0, 0.0, self.width, self.height,
                );
        }
    }

    fn draw_playing(&self, state: &GameState, assets: &Assets) {
        // Player sprite, mirrored when facing left
        if let Some(sprite) = assets.player_sprite.as_ref().filter(|img| image_ready(img)) {
            let body = &state.player.body;
            if state.player.facing_right {
                self.draw_sprite(sprite, body.pos.x as f64, body.pos.y as f64, body.size.x as f64, body.size.y as f64);
            } else {
                self.ctx.save();
                let _ = self.ctx.scale(-1.0, 1.0);
                self.draw_sprite(
                    sprite,
                    -(body.pos.x + body.size.x) as f64,
                    body.pos.y as f64,
                    body.size.x as f64,
                    body.size.y as f64,
                );
                self.ctx.restore();
            }
        }

        if let Some(sprite) = assets.boss_sprite.as_ref().filter(|img| image_ready(img)) {
            let body = &state.boss.body;
            self.draw_sprite(sprite, body.pos.x as f64, body.pos.y as f64, body.size.x as f64, body.size.y as f64);
        }

        // Ground strip
        self.ctx.set_fill_style_str("green");
        self.ctx.fill_rect(
            0.0,
            GROUND_Y as f64,
            self.width,
            self.height - GROUND_Y as f64,
        );

        // Score
        self.ctx.set_fill_style_str("black");
        self.ctx.set_font("20px Arial");
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), 10.0, 30.0);

        // Health gauges: player left, boss right
        self.draw_health_gauge(10.0, 50.0, state.player.body.display_health, "green");
        self.draw_health_gauge(
            self.width - GAUGE_WIDTH as f64 - 10.0,
            50.0,
            state.boss.body.display_health,
            "red",
        );
    }

    fn draw_sprite(&self, sprite: &HtmlImageElement, x: f64, y: f64, w: f64, h: f64) {
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(sprite, x, y, w, h);
    }

    fn draw_health_gauge(&self, x: f64, y: f64, display_health: u32, color: &str) {
        let border = GAUGE_BORDER as f64;
        let width = GAUGE_WIDTH as f64;
        let height = GAUGE_HEIGHT as f64;

        self.ctx.set_fill_style_str("black");
        self.ctx
            .fill_rect(x - border, y - border, width + 2.0 * border, height + 2.0 * border);

        self.ctx.set_fill_style_str("white");
        self.ctx.fill_rect(x, y, width, height);

        self.ctx.set_fill_style_str(color);
        let fill = width * (display_health.min(MAX_HEALTH) as f64 / MAX_HEALTH as f64);
        self.ctx.fill_rect(x, y, fill, height);
    }

    fn draw_start_screen(&self) {
        self.ctx.set_fill_style_str("black");
        self.ctx.set_font("40px Arial");
        let _ = self.ctx.fill_text(
            "Boss Battle",
            self.width / 2.0 - 110.0,
            self.height / 2.0 - 40.0,
        );
        self.ctx.set_font("20px Arial");
        let _ = self.ctx.fill_text(
            "Press Enter or click to begin",
            self.width / 2.0 - 130.0,
            self.height / 2.0 + 20.0,
        );
    }

    fn draw_end_screen(&self, title: &str, score: u64) {
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("40px Arial");
        let _ = self
            .ctx
            .fill_text(title, self.width / 2.0 - 90.0, self.height / 2.0 - 40.0);

        self.ctx.set_font("20px Arial");
        let _ = self.ctx.fill_text(
            &format!("Final Score: {}", score),
            self.width / 2.0 - 60.0,
            self.height / 2.0 + 20.0,
        );
        let _ = self.ctx.fill_text(
            "Press Space to Restart",
            self.width / 2.0 - 100.0,
            self.height / 2.0 + 60.0,
        );
    }
}
