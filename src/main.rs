//! Boss Battle entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use boss_battle::assets::Assets;
    use boss_battle::audio::MusicPlayer;
    use boss_battle::consts::*;
    use boss_battle::render::Renderer;
    use boss_battle::sim::{GamePhase, GameState, TickInput, tick};
    use boss_battle::{HighScores, Settings};

    /// Game instance holding all process-scoped state
    struct Game {
        state: GameState,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        renderer: Renderer,
        assets: Assets,
        music: MusicPlayer,
        settings: Settings,
        highscores: HighScores,
        // Track phase for music/leaderboard side effects
        last_phase: GamePhase,
    }

    impl Game {
        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.jump = false;
                self.input.stop = false;
                self.input.start = false;
                self.input.restart = false;
            }
        }

        /// Music and leaderboard react to phase transitions
        fn handle_phase_change(&mut self) {
            let phase = self.state.phase;
            if phase == self.last_phase {
                return;
            }

            match phase {
                GamePhase::Playing => {
                    self.music.set_volume(self.settings.effective_volume());
                    self.music.play();
                }
                GamePhase::Victory | GamePhase::Defeat => {
                    self.music.stop();
                    let won = phase == GamePhase::Victory;
                    if let Some(rank) = self.highscores.add_score(
                        self.state.score,
                        won,
                        self.settings.difficulty,
                        js_sys::Date::now(),
                    ) {
                        log::info!("New high score: rank {}", rank);
                        self.highscores.save();
                    }
                }
                GamePhase::Start => {}
            }
            self.last_phase = phase;
        }

        fn render(&self) {
            self.renderer.render(&self.state, &self.assets);
        }
    }

    /// Window-level listeners kept alive for the session and removed on
    /// teardown
    struct InputListeners {
        keydown: Closure<dyn FnMut(KeyboardEvent)>,
        keyup: Closure<dyn FnMut(KeyboardEvent)>,
        click: Closure<dyn FnMut(MouseEvent)>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Boss Battle starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);

        let settings = Settings::load();
        let highscores = HighScores::load();

        let music = MusicPlayer::new();
        music.set_volume(settings.effective_volume());
        music.load_track("song.mp3");

        let renderer = Renderer::new(&canvas).expect("2d canvas context");

        log::info!("Starting at {} difficulty", settings.difficulty.as_str());

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(settings.difficulty),
            input: TickInput::default(),
            accumulator: 0.0,
            last_time: 0.0,
            renderer,
            assets: Assets::load(),
            music,
            settings,
            highscores,
            last_phase: GamePhase::Start,
        }));

        let running = Rc::new(Cell::new(true));

        let listeners = setup_input_handlers(&canvas, game.clone());
        setup_teardown(&canvas, game.clone(), running.clone(), listeners);

        request_animation_frame(game, running);

        log::info!("Boss Battle running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> InputListeners {
        let window = web_sys::window().unwrap();

        let keydown = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match g.state.phase {
                    GamePhase::Playing => match event.key().as_str() {
                        "z" | " " => g.input.jump = true,
                        "s" => g.input.duck = true,
                        "q" => {
                            g.input.move_left = true;
                            g.input.accelerate = event.shift_key();
                        }
                        "d" => {
                            g.input.move_right = true;
                            g.input.accelerate = event.shift_key();
                        }
                        _ => {}
                    },
                    GamePhase::Start => {
                        if event.key() == "Enter" {
                            g.input.start = true;
                        }
                    }
                    GamePhase::Victory | GamePhase::Defeat => {
                        if event.key() == " " {
                            g.input.restart = true;
                        }
                    }
                }
            })
        };
        let _ = window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());

        let keyup = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "s" => g.input.duck = false,
                    "q" => {
                        g.input.move_left = false;
                        if !g.input.move_right {
                            g.input.stop = true;
                        }
                    }
                    "d" => {
                        g.input.move_right = false;
                        if !g.input.move_left {
                            g.input.stop = true;
                        }
                    }
                    _ => {}
                }
            })
        };
        let _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());

        // Click starts a round from the title screen
        let click = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Start {
                    g.input.start = true;
                }
            })
        };
        let _ = canvas.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());

        InputListeners {
            keydown,
            keyup,
            click,
        }
    }

    /// Stop the frame loop, drop the listeners, and silence the music when
    /// the page goes away
    fn setup_teardown(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
        running: Rc<Cell<bool>>,
        listeners: InputListeners,
    ) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            running.set(false);

            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    listeners.keydown.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "keyup",
                    listeners.keyup.as_ref().unchecked_ref(),
                );
            }
            let _ = canvas.remove_event_listener_with_callback(
                "click",
                listeners.click.as_ref().unchecked_ref(),
            );

            game.borrow_mut().music.stop();
            log::info!("Torn down");
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, running: Rc<Cell<bool>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, running, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, running: Rc<Cell<bool>>, time: f64) {
        if !running.get() {
            log::info!("Frame loop stopped");
            return;
        }

        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.handle_phase_change();
            g.render();
        }

        request_animation_frame(game, running);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use boss_battle::consts::*;
    use boss_battle::sim::{Difficulty, GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Boss Battle (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    // Smoke-run a round: jump toward the boss until someone drops
    let mut state = GameState::new(Difficulty::Easy);
    tick(&mut state, &TickInput {
        start: true,
        ..Default::default()
    });

    let input = TickInput {
        jump: true,
        move_right: true,
        ..Default::default()
    };
    for _ in 0..(60 * 120) {
        tick(&mut state, &input);
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    println!(
        "{} ticks: score {}, player {}/{}, boss {}/{}, phase {:?}",
        state.time_ticks,
        state.score,
        state.player.body.health,
        MAX_HEALTH,
        state.boss.body.health,
        MAX_HEALTH,
        state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
