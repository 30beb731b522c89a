//! Shared combatant body
//!
//! Player and Boss share the same physical shape: a gravity-bound box that
//! lands on the ground strip, is clamped to the arena, and carries a health
//! gauge. Variant behavior (double jump, ducking, chase AI) lives on the
//! variant types in `player` and `boss`.

use glam::Vec2;

use super::collision::Hitbox;
use crate::consts::*;

/// Physics body and health shared by both combatants
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity in px/tick
    pub vel: Vec2,
    /// Width and height of the hitbox
    pub size: Vec2,
    /// True health, 0..=MAX_HEALTH
    pub health: u32,
    /// Gauge value shown on screen; drains toward `health`, never below it
    pub display_health: u32,
    /// Airborne due to a jump (not a plain fall)
    pub is_jumping: bool,
    /// Ticks remaining in the post-landing jump lockout
    pub landing_timer: u32,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            health: MAX_HEALTH,
            display_health: MAX_HEALTH,
            is_jumping: false,
            landing_timer: 0,
        }
    }

    /// One physics step: gravity, integration, ground and arena resolution.
    pub fn apply_physics(&mut self) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;

        // Ground collision
        if self.pos.y + self.size.y > GROUND_Y {
            self.pos.y = GROUND_Y - self.size.y;
            self.vel.y = 0.0;
            if self.is_jumping {
                self.is_jumping = false;
                self.landing_timer = LANDING_TIME;
            }
        }

        if self.landing_timer > 0 {
            self.landing_timer -= 1;
        }

        // Arena bounds
        self.pos.x = self.pos.x.clamp(0.0, ARENA_WIDTH - self.size.x);
    }

    /// Whether a primary jump is currently permitted
    #[inline]
    pub fn can_jump(&self) -> bool {
        !self.is_jumping && self.landing_timer == 0
    }

    /// Moving downward (the only direction a stomp can land from)
    #[inline]
    pub fn is_falling(&self) -> bool {
        self.vel.y > 0.0
    }

    /// Apply damage. Display health snaps down with it; the gauge-drain
    /// animation in the tick only covers gradual catch-up, not the hit
    /// itself.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        self.display_health = self.health;
    }

    /// Drain the display gauge toward true health by up to
    /// GAUGE_ANIMATION_SPEED. Runs every tick whether or not damage landed.
    pub fn animate_gauge(&mut self) {
        if self.display_health > self.health {
            self.display_health = self
                .display_health
                .saturating_sub(GAUGE_ANIMATION_SPEED)
                .max(self.health);
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
        }
    }
}
