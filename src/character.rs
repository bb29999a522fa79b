//! The player character: stats, gold, and the leveling curve.

use serde::{Deserialize, Serialize};

use crate::constants::{
    LEVEL_UP_HEALTH_BONUS, STARTING_ATTACK, STARTING_DEFENSE, STARTING_MAX_HEALTH,
    STARTING_XP_TO_NEXT_LEVEL, XP_REQUIREMENT_GROWTH,
};

/// Persisted character record. Field names serialize in camelCase so saves
/// written by earlier versions of the game load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
    pub max_health: u32,
    pub gold: u64,
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl Character {
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            health: STARTING_MAX_HEALTH,
            max_health: STARTING_MAX_HEALTH,
            gold: 0,
        }
    }

    /// Adds XP and applies any level-ups it pays for. Returns the number of
    /// levels gained.
    ///
    /// Each level consumes the current requirement and raises the next one by
    /// 10% (floored). Stat bonuses are applied once for the whole gain:
    /// +1 attack and defense per level, +10 health and max health per level.
    /// The health bonus is intentionally not clamped to the new maximum.
    pub fn gain_xp(&mut self, amount: u64) -> u32 {
        self.xp += amount;
        let mut levels_gained = 0u32;
        while self.xp >= self.xp_to_next_level {
            self.xp -= self.xp_to_next_level;
            self.level += 1;
            levels_gained += 1;
            self.xp_to_next_level =
                (self.xp_to_next_level as f64 * XP_REQUIREMENT_GROWTH).floor() as u64;
        }
        if levels_gained > 0 {
            self.attack += levels_gained;
            self.defense += levels_gained;
            self.max_health += levels_gained * LEVEL_UP_HEALTH_BONUS;
            self.health += levels_gained * LEVEL_UP_HEALTH_BONUS;
        }
        levels_gained
    }

    /// Restores health, clamped to max health.
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// A character with no health left cannot act.
    pub fn is_incapacitated(&self) -> bool {
        self.health == 0
    }
}
