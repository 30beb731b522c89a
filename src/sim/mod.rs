//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable update order (player, then boss, then combat)
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod combatant;
pub mod player;
pub mod state;
pub mod tick;

pub use boss::{Boss, Difficulty, DifficultyProfile};
pub use collision::{Hitbox, Stomp, resolve_combat};
pub use combatant::Body;
pub use player::Player;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
