//! State-change notifications drained by the presentation layer.

use crate::combat::logic::CombatEvent;
use crate::shop::StatKind;

/// One state change. Rejected operations do not appear here; they are
/// reported through their operation's return value instead. Variants that
/// correspond to a line the player sees carry a preformatted `message`.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Combat ──────────────────────────────────────────────────
    Combat(CombatEvent),

    // ── Shop ────────────────────────────────────────────────────
    StatUpgraded {
        stat: StatKind,
        cost: u64,
    },
    PotionBought {
        cost: u64,
        message: String,
    },
    PotionUsed {
        healed: u32,
        message: String,
    },

    // ── Progression & lifecycle ─────────────────────────────────
    FloorAdvanced {
        floor: u32,
        message: String,
    },
    EnemiesSpawned {
        count: u32,
    },
    GameReset {
        message: String,
    },
}
