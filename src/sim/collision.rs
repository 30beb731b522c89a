//! Collision detection and combat resolution
//!
//! Combat is strictly vertical: the only damaging contact is a stomp, where
//! a falling combatant's bottom edge is above the other's vertical midpoint
//! while the hitboxes overlap. Side-on contact deals no damage.

use super::boss::Boss;
use super::player::Player;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    /// Standard AABB overlap test
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y + self.height > other.y
            && self.y < other.y + other.height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Which combatant landed a stomp this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stomp {
    /// Player landed on the boss's head
    PlayerOnBoss,
    /// Boss landed on the player's head
    BossOnPlayer,
}

/// Resolve contact between the combatants for one tick.
///
/// On a stomp the victim takes STOMP_DAMAGE and the attacker bounces back
/// up. Score bookkeeping is the caller's job.
pub fn resolve_combat(player: &mut Player, boss: &mut Boss) -> Option<Stomp> {
    let player_box = player.body.hitbox();
    let boss_box = boss.body.hitbox();

    if !player_box.overlaps(&boss_box) {
        return None;
    }

    if player.body.is_falling() && player_box.bottom() < boss_box.mid_y() {
        boss.body.take_damage(STOMP_DAMAGE);
        player.body.vel.y = JUMP_STRENGTH;
        Some(Stomp::PlayerOnBoss)
    } else if boss.body.is_falling() && boss_box.bottom() < player_box.mid_y() {
        player.body.take_damage(STOMP_DAMAGE);
        boss.body.vel.y = BOSS_JUMP_STRENGTH;
        Some(Stomp::BossOnPlayer)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;
    use glam::Vec2;

    fn contact_pair() -> (Player, Boss) {
        let mut player = Player::new();
        let mut boss = Boss::new(Difficulty::Easy);
        // Player's bottom edge dips into the boss's upper half
        boss.body.pos = Vec2::new(580.0, 400.0);
        player.body.pos = Vec2::new(560.0, 370.0);
        (player, boss)
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Hitbox { x: 0.0, y: 0.0, width: 50.0, height: 50.0 };
        let b = Hitbox { x: 40.0, y: 40.0, width: 50.0, height: 50.0 };
        let c = Hitbox { x: 51.0, y: 0.0, width: 50.0, height: 50.0 };

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        // Edge touch is not an overlap
        let d = Hitbox { x: 50.0, y: 0.0, width: 50.0, height: 50.0 };
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_player_stomp_damages_boss_and_bounces() {
        let (mut player, mut boss) = contact_pair();
        player.body.vel.y = 6.0;

        let stomp = resolve_combat(&mut player, &mut boss);
        assert_eq!(stomp, Some(Stomp::PlayerOnBoss));
        assert_eq!(boss.body.health, 90);
        assert_eq!(boss.body.display_health, 90);
        assert_eq!(player.body.health, 100);
        assert_eq!(player.body.vel.y, JUMP_STRENGTH);
    }

    #[test]
    fn test_boss_stomp_damages_player() {
        let mut player = Player::new();
        let mut boss = Boss::new(Difficulty::Easy);
        player.body.pos = Vec2::new(300.0, 400.0);
        boss.body.pos = Vec2::new(260.0, 310.0);
        boss.body.vel.y = 8.0;

        let stomp = resolve_combat(&mut player, &mut boss);
        assert_eq!(stomp, Some(Stomp::BossOnPlayer));
        assert_eq!(player.body.health, 90);
        assert_eq!(boss.body.health, 100);
        assert_eq!(boss.body.vel.y, BOSS_JUMP_STRENGTH);
    }

    #[test]
    fn test_rising_contact_is_harmless() {
        let (mut player, mut boss) = contact_pair();
        player.body.vel.y = -4.0;

        assert_eq!(resolve_combat(&mut player, &mut boss), None);
        assert_eq!(player.body.health, 100);
        assert_eq!(boss.body.health, 100);
    }

    #[test]
    fn test_side_on_contact_is_harmless() {
        let mut player = Player::new();
        let mut boss = Boss::new(Difficulty::Easy);
        // Both grounded, side by side with a slight overlap
        boss.body.pos = Vec2::new(400.0, GROUND_Y - BOSS_SIZE);
        player.body.pos = Vec2::new(360.0, GROUND_Y - PLAYER_SIZE);
        player.body.vel.y = 2.0;

        assert_eq!(resolve_combat(&mut player, &mut boss), None);
        assert_eq!(player.body.health, 100);
        assert_eq!(boss.body.health, 100);
    }

    #[test]
    fn test_no_overlap_no_stomp() {
        let mut player = Player::new();
        let mut boss = Boss::new(Difficulty::Easy);
        player.body.vel.y = 6.0;

        assert_eq!(resolve_combat(&mut player, &mut boss), None);
    }
}
