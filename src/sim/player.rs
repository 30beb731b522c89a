//! The player character
//!
//! Adds the variant behavior on top of the shared body: double jump,
//! ducking, and the tap-vs-accelerate movement modes.

use glam::Vec2;

use super::combatant::Body;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// One double jump per airborne period
    pub has_double_jumped: bool,
    pub is_ducking: bool,
    /// Holding the accelerate modifier; disables passive deceleration
    pub is_accelerating: bool,
    pub facing_right: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Body::new(
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                Vec2::splat(PLAYER_SIZE),
            ),
            has_double_jumped: false,
            is_ducking: false,
            is_accelerating: false,
            facing_right: true,
        }
    }

    /// Primary jump from the ground, or the one double jump while airborne.
    /// A press while grounded during the landing lockout does nothing.
    pub fn jump(&mut self) {
        if self.body.can_jump() {
            self.body.vel.y = JUMP_STRENGTH;
            self.body.is_jumping = true;
            self.has_double_jumped = false;
        } else if self.body.is_jumping && !self.has_double_jumped {
            self.body.vel.y = DOUBLE_JUMP_STRENGTH;
            self.has_double_jumped = true;
        }
    }

    pub fn duck(&mut self) {
        self.is_ducking = true;
        self.body.size.y = PLAYER_DUCK_HEIGHT;
    }

    pub fn unduck(&mut self) {
        self.is_ducking = false;
        self.body.size.y = PLAYER_SIZE;
    }

    pub fn move_left(&mut self, accelerate: bool) {
        self.facing_right = false;
        if accelerate {
            self.is_accelerating = true;
            self.body.vel.x = (self.body.vel.x - ACCELERATION).max(-MAX_SPEED);
        } else {
            self.is_accelerating = false;
            self.body.vel.x = -MOVE_SPEED;
        }
    }

    pub fn move_right(&mut self, accelerate: bool) {
        self.facing_right = true;
        if accelerate {
            self.is_accelerating = true;
            self.body.vel.x = (self.body.vel.x + ACCELERATION).min(MAX_SPEED);
        } else {
            self.is_accelerating = false;
            self.body.vel.x = MOVE_SPEED;
        }
    }

    pub fn stop_moving(&mut self) {
        self.is_accelerating = false;
        self.body.vel.x = 0.0;
    }

    /// Physics step plus passive deceleration when not accelerating.
    pub fn update(&mut self) {
        self.body.apply_physics();

        if !self.is_accelerating {
            if self.body.vel.x > 0.0 {
                self.body.vel.x = (self.body.vel.x - ACCELERATION).max(0.0);
            } else if self.body.vel.x < 0.0 {
                self.body.vel.x = (self.body.vel.x + ACCELERATION).min(0.0);
            }
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> Player {
        let mut player = Player::new();
        for _ in 0..120 {
            player.update();
        }
        player.body.landing_timer = 0;
        player
    }

    #[test]
    fn test_double_jump_gating() {
        let mut player = grounded_player();

        player.jump();
        assert_eq!(player.body.vel.y, JUMP_STRENGTH);
        assert!(player.body.is_jumping);

        player.jump();
        assert_eq!(player.body.vel.y, DOUBLE_JUMP_STRENGTH);
        assert!(player.has_double_jumped);

        // Third press while airborne is ignored
        player.body.vel.y = 3.0;
        player.jump();
        assert_eq!(player.body.vel.y, 3.0);
    }

    #[test]
    fn test_landing_lockout_blocks_primary_jump() {
        let mut player = grounded_player();
        player.jump();
        while player.body.is_jumping {
            player.update();
        }
        assert!(player.body.landing_timer > 0);

        // Grounded with the timer running: nothing happens
        player.jump();
        assert_eq!(player.body.vel.y, 0.0);
        assert!(!player.body.is_jumping);

        // Once the timer expires the jump works again
        for _ in 0..LANDING_TIME {
            player.update();
        }
        player.jump();
        assert_eq!(player.body.vel.y, JUMP_STRENGTH);
    }

    #[test]
    fn test_duck_shrinks_hitbox() {
        let mut player = grounded_player();
        player.duck();
        assert_eq!(player.body.size.y, PLAYER_DUCK_HEIGHT);
        player.unduck();
        assert_eq!(player.body.size.y, PLAYER_SIZE);
    }

    #[test]
    fn test_tap_movement_is_fixed_speed() {
        let mut player = grounded_player();
        player.move_left(false);
        assert_eq!(player.body.vel.x, -MOVE_SPEED);
        assert!(!player.facing_right);

        player.move_right(false);
        assert_eq!(player.body.vel.x, MOVE_SPEED);
        assert!(player.facing_right);

        player.stop_moving();
        assert_eq!(player.body.vel.x, 0.0);
    }

    #[test]
    fn test_accelerating_movement_clamps_at_max_speed() {
        let mut player = grounded_player();
        for _ in 0..200 {
            player.move_right(true);
        }
        assert_eq!(player.body.vel.x, MAX_SPEED);
    }

    #[test]
    fn test_deceleration_never_overshoots_zero() {
        let mut player = grounded_player();
        player.move_right(true);
        player.is_accelerating = false;
        player.body.vel.x = 0.3;

        player.update();
        assert!((player.body.vel.x - 0.1).abs() < 1e-6);
        player.update();
        assert_eq!(player.body.vel.x, 0.0);
        player.update();
        assert_eq!(player.body.vel.x, 0.0);
    }
}
