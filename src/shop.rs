//! Gold sinks: permanent stat upgrades and healing potions.
//!
//! Nothing here touches storage; the engine persists after applying an
//! outcome. Rejections leave the character untouched and are plain outcomes,
//! never errors.

use std::fmt;

use rand::Rng;

use crate::character::Character;
use crate::constants::{
    HEALTH_UPGRADE_COST_FACTOR, HEALTH_UPGRADE_GROWTH, POTION_COST_FACTOR, POTION_HEAL_FACTOR,
    STAT_UPGRADE_BASE_COST, STAT_UPGRADE_COST_GROWTH,
};

/// The three purchasable stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Attack,
    Defense,
    Health,
}

impl StatKind {
    pub fn all() -> [StatKind; 3] {
        [StatKind::Attack, StatKind::Defense, StatKind::Health]
    }

    /// Uniform random choice, used by the auto-upgrade cadence.
    pub fn random(rng: &mut impl Rng) -> StatKind {
        Self::all()[rng.gen_range(0..3)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::Health => "health",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Applied { stat: StatKind, cost: u64 },
    InsufficientGold { stat: StatKind, cost: u64 },
}

impl UpgradeOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, UpgradeOutcome::Applied { .. })
    }
}

/// Outcome of a potion purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Bought { cost: u64 },
    InsufficientGold { cost: u64 },
}

impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseOutcome::Bought { .. } => f.write_str("Bought a healing potion!"),
            PurchaseOutcome::InsufficientGold { .. } => {
                f.write_str("Not enough gold to buy a potion!")
            }
        }
    }
}

/// Outcome of drinking a potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotionUse {
    Healed { amount: u32 },
    NoPotions,
}

impl fmt::Display for PotionUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PotionUse::Healed { .. } => {
                f.write_str("Used a healing potion! Healed 50% of max health!")
            }
            PotionUse::NoPotions => f.write_str("No healing potions in inventory!"),
        }
    }
}

/// Current price of upgrading the given stat. Health is priced from max
/// health; attack and defense follow an exponential curve on their own value.
pub fn upgrade_cost(character: &Character, stat: StatKind) -> u64 {
    match stat {
        StatKind::Health => {
            (character.max_health as f64 * HEALTH_UPGRADE_COST_FACTOR).floor() as u64
        }
        StatKind::Attack => {
            (STAT_UPGRADE_BASE_COST * STAT_UPGRADE_COST_GROWTH.powf(character.attack as f64))
                .floor() as u64
        }
        StatKind::Defense => {
            (STAT_UPGRADE_BASE_COST * STAT_UPGRADE_COST_GROWTH.powf(character.defense as f64))
                .floor() as u64
        }
    }
}

/// Applies one upgrade if the character can afford it. Attack and defense
/// gain a point; a health upgrade raises max health 10% (floored) and fully
/// heals.
pub fn apply_upgrade(character: &mut Character, stat: StatKind) -> UpgradeOutcome {
    let cost = upgrade_cost(character, stat);
    if character.gold < cost {
        return UpgradeOutcome::InsufficientGold { stat, cost };
    }
    character.gold -= cost;
    match stat {
        StatKind::Attack => character.attack += 1,
        StatKind::Defense => character.defense += 1,
        StatKind::Health => {
            character.max_health =
                (character.max_health as f64 * HEALTH_UPGRADE_GROWTH).floor() as u32;
            character.health = character.max_health;
        }
    }
    UpgradeOutcome::Applied { stat, cost }
}

/// Price of one healing potion: 5% of max health.
pub fn potion_cost(character: &Character) -> u64 {
    (character.max_health as f64 * POTION_COST_FACTOR).floor() as u64
}

/// Healing granted by one potion: half of max health.
pub fn potion_heal_amount(character: &Character) -> u32 {
    (character.max_health as f64 * POTION_HEAL_FACTOR).floor() as u32
}
