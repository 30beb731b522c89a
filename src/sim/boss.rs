//! The boss and its reactive AI
//!
//! The boss chases the player horizontally every tick and considers a jump
//! on a fixed interval: it jumps when the player is above it or horizontally
//! close. All tuning comes from the difficulty profile fixed at construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combatant::Body;
use crate::consts::*;

/// Boss difficulty, fixed for the lifetime of a boss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

/// Tuning constants selected by a difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Horizontal chase speed, px/tick
    pub move_speed: f32,
    /// Jump impulse, px/tick (negative is up)
    pub jump_strength: f32,
    /// Ticks between jump decisions
    pub jump_interval: u32,
    /// Ticks of reaction latency budgeted for this tier
    pub reaction_time: u32,
}

impl Difficulty {
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                move_speed: 3.0,
                jump_strength: -15.0,
                jump_interval: 150,
                reaction_time: 50,
            },
            Difficulty::Normal => DifficultyProfile {
                move_speed: 5.0,
                jump_strength: -18.0,
                jump_interval: 100,
                reaction_time: 30,
            },
            Difficulty::Hard => DifficultyProfile {
                move_speed: 7.0,
                jump_strength: -20.0,
                jump_interval: 70,
                reaction_time: 10,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub body: Body,
    pub difficulty: Difficulty,
    /// Ticks since the last jump decision
    pub jump_timer: u32,
}

impl Boss {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            body: Body::new(
                Vec2::new(BOSS_START_X, GROUND_Y - BOSS_SIZE),
                Vec2::splat(BOSS_SIZE),
            ),
            difficulty,
            jump_timer: 0,
        }
    }

    /// One AI + physics step. Reads the player's position by value; the boss
    /// holds no reference to the player.
    pub fn update(&mut self, player_pos: Vec2) {
        let profile = self.difficulty.profile();

        // Chase
        if self.body.pos.x < player_pos.x {
            self.body.vel.x = profile.move_speed;
        } else if self.body.pos.x > player_pos.x {
            self.body.vel.x = -profile.move_speed;
        } else {
            self.body.vel.x = 0.0;
        }

        // Periodic jump decision
        self.jump_timer += 1;
        if self.jump_timer >= profile.jump_interval {
            if self.should_jump(player_pos) {
                self.jump();
            }
            self.jump_timer = 0;
        }

        self.body.apply_physics();
    }

    /// Jump when the player is above the boss or horizontally within one
    /// boss-width, and the landing lockout has expired.
    fn should_jump(&self, player_pos: Vec2) -> bool {
        self.body.landing_timer == 0
            && (player_pos.y < self.body.pos.y
                || (self.body.pos.x - player_pos.x).abs() < self.body.size.x)
    }

    fn jump(&mut self) {
        if self.body.can_jump() {
            self.body.vel.y = self.difficulty.profile().jump_strength;
            self.body.is_jumping = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_profiles() {
        let easy = Difficulty::Easy.profile();
        assert_eq!(easy.move_speed, 3.0);
        assert_eq!(easy.jump_strength, -15.0);
        assert_eq!(easy.jump_interval, 150);
        assert_eq!(easy.reaction_time, 50);

        let hard = Difficulty::Hard.profile();
        assert_eq!(hard.move_speed, 7.0);
        assert_eq!(hard.jump_strength, -20.0);
        assert_eq!(hard.jump_interval, 70);
        assert_eq!(hard.reaction_time, 10);
    }

    #[test]
    fn test_boss_chases_player() {
        let mut boss = Boss::new(Difficulty::Easy);
        let speed = boss.difficulty.profile().move_speed;

        boss.update(Vec2::new(0.0, 450.0));
        assert_eq!(boss.body.vel.x, -speed);

        boss.update(Vec2::new(ARENA_WIDTH, 450.0));
        assert_eq!(boss.body.vel.x, speed);
    }

    #[test]
    fn test_boss_jumps_on_interval_when_player_close() {
        let mut boss = Boss::new(Difficulty::Easy);
        let interval = boss.difficulty.profile().jump_interval;

        // Player directly on top of the boss: jump fires exactly when the
        // interval elapses, not before.
        let player_pos = boss.body.pos;
        for _ in 0..interval - 1 {
            boss.update(player_pos);
            assert!(!boss.body.is_jumping);
        }
        boss.update(player_pos);
        assert!(boss.body.is_jumping);
        assert_eq!(boss.jump_timer, 0);
    }

    #[test]
    fn test_boss_ignores_distant_grounded_player() {
        let mut boss = Boss::new(Difficulty::Easy);
        let interval = boss.difficulty.profile().jump_interval;

        // Player far away at ground level, below the boss's top edge. By the
        // first jump decision the chase has closed to ~150 px, still beyond
        // one boss-width.
        let player_pos = Vec2::new(0.0, GROUND_Y - 50.0);
        for _ in 0..interval {
            boss.update(player_pos);
        }
        assert!(!boss.body.is_jumping);
    }

    #[test]
    fn test_boss_jumps_when_player_above() {
        let mut boss = Boss::new(Difficulty::Normal);
        let interval = boss.difficulty.profile().jump_interval;

        // Player far away horizontally but high in the air
        let player_pos = Vec2::new(0.0, 100.0);
        for _ in 0..interval {
            boss.update(player_pos);
        }
        assert!(boss.body.is_jumping);
        assert_eq!(boss.body.vel.y, Difficulty::Normal.profile().jump_strength + GRAVITY);
    }
}
