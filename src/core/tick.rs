//! Tick scheduling for the two periodic activities.
//!
//! The host clock calls [`crate::core::engine::Engine::tick`] once per time
//! unit. Every running tick fires one auto-attack; every
//! [`AUTO_UPGRADE_PERIOD_TICKS`]th running tick additionally fires one
//! auto-upgrade. The ticker itself only tracks lifecycle and cadence; the
//! engine owns what a tick actually does.

use crate::constants::AUTO_UPGRADE_PERIOD_TICKS;
use crate::shop::UpgradeOutcome;

/// Start/stop lifecycle and the auto-upgrade countdown.
///
/// Ticks received while stopped are ignored entirely and do not advance the
/// countdown, so stopping guarantees no further activity fires.
#[derive(Debug, Default)]
pub struct Ticker {
    running: bool,
    counter: u32,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the ticker. Returns false if it was already running (a second
    /// start is rejected, not restarted).
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.counter = 0;
        true
    }

    /// Disarms the ticker. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances one running tick; true when this tick is an auto-upgrade
    /// tick. Callers must check [`Ticker::is_running`] first.
    pub(crate) fn advance(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= AUTO_UPGRADE_PERIOD_TICKS {
            self.counter = 0;
            return true;
        }
        false
    }
}

/// What one tick did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickResult {
    /// Damage dealt by the auto-attack, when one resolved.
    pub damage_dealt: Option<u32>,
    /// Outcome of the auto-upgrade, when this was an upgrade tick.
    pub auto_upgrade: Option<UpgradeOutcome>,
}
