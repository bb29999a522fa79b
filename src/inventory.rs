//! Item inventory: a forward-compatible map of item identifiers to counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inventory key for healing potions, the only item current content uses.
pub const HEALING_POTIONS: &str = "healingPotions";

/// Counts are kept in a plain string-keyed map so saves containing item kinds
/// this version does not recognize survive a load/save cycle intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(flatten)]
    items: BTreeMap<String, u64>,
}

impl Inventory {
    /// A fresh inventory with the potion slot present at zero.
    pub fn new() -> Self {
        let mut items = BTreeMap::new();
        items.insert(HEALING_POTIONS.to_string(), 0);
        Self { items }
    }

    /// Count for an item, 0 when absent.
    pub fn count(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn add(&mut self, item: &str, amount: u64) {
        let count = self.count(item);
        self.items.insert(item.to_string(), count + amount);
    }

    /// Removes up to `amount`; the count never goes below zero.
    pub fn remove(&mut self, item: &str, amount: u64) {
        let count = self.count(item);
        self.items.insert(item.to_string(), count.saturating_sub(amount));
    }

    pub fn healing_potions(&self) -> u64 {
        self.count(HEALING_POTIONS)
    }
}
