//! Fixed timestep simulation tick
//!
//! Advances the game by one 60 Hz step: apply input, update both
//! combatants, resolve combat, drain the health gauges, and evaluate the
//! end conditions. Phases other than Playing only react to their trigger
//! input.

use super::collision::{Stomp, resolve_combat};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick. Held flags are maintained by the key handlers;
/// one-shot flags are cleared by the caller after each consumed tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump press (one-shot)
    pub jump: bool,
    /// Duck key held
    pub duck: bool,
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
    /// Accelerate modifier held
    pub accelerate: bool,
    /// Movement key released this frame (one-shot)
    pub stop: bool,
    /// Start trigger (one-shot, Start phase only)
    pub start: bool,
    /// Restart trigger (one-shot, terminal phases only)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Start => {
            if input.start {
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Playing => {
            apply_player_input(state, input);

            state.player.update();
            let player_pos = state.player.body.pos;
            state.boss.update(player_pos);

            if let Some(Stomp::PlayerOnBoss) =
                resolve_combat(&mut state.player, &mut state.boss)
            {
                state.score += STOMP_SCORE;
            }

            state.player.body.animate_gauge();
            state.boss.body.animate_gauge();

            if state.boss.body.health == 0 {
                state.phase = GamePhase::Victory;
            } else if state.player.body.health == 0 {
                state.phase = GamePhase::Defeat;
            }

            state.time_ticks += 1;
        }

        GamePhase::Victory | GamePhase::Defeat => {
            if input.restart {
                state.reset();
            }
        }
    }
}

fn apply_player_input(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if input.jump {
        player.jump();
    }

    if input.duck && !player.is_ducking {
        player.duck();
    } else if !input.duck && player.is_ducking {
        player.unduck();
    }

    if input.move_left {
        player.move_left(input.accelerate);
    } else if input.move_right {
        player.move_right(input.accelerate);
    } else if input.stop {
        player.stop_moving();
    }
}
