//! Floor progression and enemy generation.
//!
//! Every enemy stat scales from the floor number alone, so a floor fully
//! determines the strength of its encounters. Advancing is gated by an
//! attack requirement that grows 10% per floor.

use rand::Rng;
use uuid::Uuid;

use crate::combat::types::{Enemy, ENEMY_GLYPHS};
use crate::constants::{
    ENEMY_ATTACK_BASE, ENEMY_ATTACK_GROWTH, ENEMY_GOLD_BASE, ENEMY_GOLD_GROWTH, ENEMY_HEALTH_BASE,
    ENEMY_HEALTH_GROWTH, ENEMY_XP_BASE, ENEMY_XP_GROWTH, FLOOR_REQUIREMENT_BASE,
    FLOOR_REQUIREMENT_GROWTH, MAX_ENEMIES_PER_BATCH, MIN_ENEMIES_PER_BATCH,
};

/// Outcome of a floor-advance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorOutcome {
    /// The climb succeeded; `floor` is the floor now being fought.
    Advanced { floor: u32 },
    /// Attack is below the gate; nothing changed.
    AttackTooLow { required: u32 },
}

/// Minimum character attack needed to advance past the given floor.
pub fn next_floor_attack_requirement(floor: u32) -> u32 {
    let exponent = floor.saturating_sub(1) as f64;
    (floor as f64 * FLOOR_REQUIREMENT_BASE * FLOOR_REQUIREMENT_GROWTH.powf(exponent)).floor()
        as u32
}

/// Rolls one enemy for the given floor: a random glyph from the palette and
/// floor-scaled stats.
pub fn generate_enemy(floor: u32, rng: &mut impl Rng) -> Enemy {
    let f = floor as f64;
    Enemy {
        id: Uuid::new_v4(),
        glyph: ENEMY_GLYPHS[rng.gen_range(0..ENEMY_GLYPHS.len())],
        health: (f * ENEMY_HEALTH_BASE * ENEMY_HEALTH_GROWTH.powf(f)).floor() as u32,
        attack: (f * ENEMY_ATTACK_BASE * ENEMY_ATTACK_GROWTH.powf(f)).floor() as u32,
        gold_reward: (f * ENEMY_GOLD_BASE * ENEMY_GOLD_GROWTH.powf(f)).floor() as u64,
        xp_reward: (f * ENEMY_XP_BASE * ENEMY_XP_GROWTH.powf(f)).floor() as u64,
    }
}

/// Rolls a fresh batch of 3 to 5 enemies for the given floor.
pub fn generate_enemies(floor: u32, rng: &mut impl Rng) -> Vec<Enemy> {
    let count = rng.gen_range(MIN_ENEMIES_PER_BATCH..=MAX_ENEMIES_PER_BATCH);
    (0..count).map(|_| generate_enemy(floor, rng)).collect()
}
