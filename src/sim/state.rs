//! Game state and the round lifecycle

use super::boss::{Boss, Difficulty};
use super::player::Player;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start trigger
    Start,
    /// Active gameplay
    Playing,
    /// Boss defeated; terminal until restart
    Victory,
    /// Player defeated; terminal until restart
    Defeat,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Monotonically non-decreasing while Playing; reset on restart
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub boss: Boss,
}

impl GameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            time_ticks: 0,
            player: Player::new(),
            boss: Boss::new(difficulty),
        }
    }

    /// Back to the title screen with fresh entities and a zero score.
    /// Difficulty is kept for the next round.
    pub fn reset(&mut self) {
        *self = Self::new(self.boss.difficulty);
    }
}
