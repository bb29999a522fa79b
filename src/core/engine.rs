//! The game engine: owns the live game state, exposes the player-facing
//! operations, and drives the two automatic activities.
//!
//! Every mutating operation re-establishes the queue/target invariant and
//! persists whatever piece of saved state it changed before returning, so a
//! host observing the engine between calls always sees a consistent game.
//! State changes are additionally buffered as [`GameEvent`]s for the
//! presentation layer to drain.

use rand::Rng;

use crate::combat::logic::resolve_attack;
use crate::constants::{MASTER_MILESTONE_KILLS, QUEUE_REFILL_THRESHOLD};
use crate::core::events::GameEvent;
use crate::core::game_state::GameState;
use crate::core::tick::{TickResult, Ticker};
use crate::floors::{generate_enemies, next_floor_attack_requirement, FloorOutcome};
use crate::inventory::{Inventory, HEALING_POTIONS};
use crate::shop::{self, PotionUse, PurchaseOutcome, StatKind, UpgradeOutcome};
use crate::storage::{self, StateStore};

/// The simulation engine. Owns the [`GameState`], the [`Inventory`], and the
/// injected store; all play flows through its methods.
///
/// Operations that consume randomness take `&mut impl Rng`. Hosts pass
/// `rand::thread_rng()`; tests pass a seeded generator.
pub struct Engine<S: StateStore> {
    state: GameState,
    inventory: Inventory,
    store: S,
    ticker: Ticker,
    events: Vec<GameEvent>,
    last_damage_dealt: Option<u32>,
}

impl<S: StateStore> Engine<S> {
    /// Builds an engine on top of the given store, resuming whatever
    /// character, floor, and inventory it holds (defaults for anything
    /// absent or unreadable), and spawns the floor's first enemy batch.
    pub fn new(store: S, rng: &mut impl Rng) -> Self {
        let character = storage::load_character(&store);
        let current_floor = storage::load_floor(&store);
        let inventory = storage::load_inventory(&store);
        let mut engine = Self {
            state: GameState::with_progress(character, current_floor),
            inventory,
            store,
            ticker: Ticker::new(),
            events: Vec::new(),
            last_damage_dealt: None,
        };
        engine.refill_queue(rng);
        engine
    }

    // ── Read access ─────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for hosts that poke the simulation directly
    /// (debug tooling, tests). Callers are responsible for leaving the
    /// queue/target invariant intact.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Damage dealt by the most recent effective attack, kept around for
    /// animation cueing. Cleared on reset.
    pub fn last_damage_dealt(&self) -> Option<u32> {
        self.last_damage_dealt
    }

    /// Attack the character needs to advance past the current floor.
    pub fn floor_requirement(&self) -> u32 {
        next_floor_attack_requirement(self.state.current_floor)
    }

    /// Current price of upgrading the given stat.
    pub fn upgrade_cost(&self, stat: StatKind) -> u64 {
        shop::upgrade_cost(&self.state.character, stat)
    }

    /// Current price of one healing potion.
    pub fn potion_cost(&self) -> u64 {
        shop::potion_cost(&self.state.character)
    }

    /// Takes the buffered state-change events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Operations ──────────────────────────────────────────────

    /// One attack against the current target. Returns the damage dealt, or
    /// `None` when the attack was a null action (no enemy queued, or the
    /// character is incapacitated).
    pub fn attack(&mut self, rng: &mut impl Rng) -> Option<u32> {
        let damage = self.state.character.attack;
        let combat = resolve_attack(&mut self.state);
        if combat.is_empty() {
            return None;
        }
        self.last_damage_dealt = Some(damage);
        if self.state.enemies_defeated >= MASTER_MILESTONE_KILLS {
            tracing::debug!(
                "You have defeated {} enemies! You are now a master!",
                MASTER_MILESTONE_KILLS
            );
        }
        self.events.extend(combat.into_iter().map(GameEvent::Combat));
        storage::save_character(&mut self.store, &self.state.character);
        self.refill_queue(rng);
        Some(damage)
    }

    /// Buys one stat upgrade if the character can afford it.
    pub fn upgrade(&mut self, stat: StatKind) -> UpgradeOutcome {
        let outcome = shop::apply_upgrade(&mut self.state.character, stat);
        if let UpgradeOutcome::Applied { stat, cost } = outcome {
            self.events.push(GameEvent::StatUpgraded { stat, cost });
            storage::save_character(&mut self.store, &self.state.character);
        }
        outcome
    }

    /// Buys one healing potion for 5% of max health.
    pub fn buy_potion(&mut self) -> PurchaseOutcome {
        let cost = shop::potion_cost(&self.state.character);
        if self.state.character.gold < cost {
            return PurchaseOutcome::InsufficientGold { cost };
        }
        self.state.character.gold -= cost;
        self.inventory.add(HEALING_POTIONS, 1);
        let outcome = PurchaseOutcome::Bought { cost };
        self.events.push(GameEvent::PotionBought {
            cost,
            message: outcome.to_string(),
        });
        storage::save_character(&mut self.store, &self.state.character);
        storage::save_inventory(&mut self.store, &self.inventory);
        outcome
    }

    /// Drinks one potion, healing half of max health (clamped to the
    /// maximum).
    pub fn use_potion(&mut self) -> PotionUse {
        if self.inventory.healing_potions() == 0 {
            return PotionUse::NoPotions;
        }
        let amount = shop::potion_heal_amount(&self.state.character);
        self.state.character.heal(amount);
        self.inventory.remove(HEALING_POTIONS, 1);
        let outcome = PotionUse::Healed { amount };
        self.events.push(GameEvent::PotionUsed {
            healed: amount,
            message: outcome.to_string(),
        });
        storage::save_character(&mut self.store, &self.state.character);
        storage::save_inventory(&mut self.store, &self.inventory);
        outcome
    }

    /// Climbs to the next floor when the character's attack meets the gate.
    /// Success discards the old encounter queue, zeroes the defeat count,
    /// and spawns a fresh batch scaled to the new floor.
    pub fn advance_floor(&mut self, rng: &mut impl Rng) -> FloorOutcome {
        let required = next_floor_attack_requirement(self.state.current_floor);
        if self.state.character.attack < required {
            return FloorOutcome::AttackTooLow { required };
        }
        self.state.current_floor += 1;
        self.state.enemies.clear();
        self.state.enemies_defeated = 0;
        self.state.sync_current_enemy();
        let floor = self.state.current_floor;
        self.events.push(GameEvent::FloorAdvanced {
            floor,
            message: format!("Progressed to floor {floor}!"),
        });
        storage::save_floor(&mut self.store, floor);
        self.refill_queue(rng);
        FloorOutcome::Advanced { floor }
    }

    /// Deletes the character: wipes all saved entries and restarts from a
    /// fresh game on floor 1. Destructive; the presentation layer is
    /// expected to confirm with the player before calling this.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        storage::clear_all(&mut self.store);
        self.state = GameState::new();
        self.inventory = Inventory::new();
        self.last_damage_dealt = None;
        self.events.push(GameEvent::GameReset {
            message: "Character deleted. Starting a new game...".to_string(),
        });
        self.refill_queue(rng);
    }

    // ── Automatic activities ────────────────────────────────────

    /// Arms the tick scheduler. A second start without an intervening stop
    /// is rejected and returns false.
    pub fn start(&mut self) -> bool {
        let started = self.ticker.start();
        if started {
            tracing::debug!("tick scheduler started");
        }
        started
    }

    /// Disarms the tick scheduler; ticks received afterwards fire nothing.
    /// Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.ticker.stop();
        if stopped {
            tracing::debug!("tick scheduler stopped");
        }
        stopped
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// One firing of the host clock. While running, every tick auto-attacks
    /// and every tenth tick also attempts one upgrade of a uniformly random
    /// stat, whether or not it is affordable. Ticks while stopped do
    /// nothing and leave the upgrade cadence where it was.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickResult {
        if !self.ticker.is_running() {
            return TickResult::default();
        }
        let upgrade_due = self.ticker.advance();
        let mut result = TickResult {
            damage_dealt: self.attack(rng),
            auto_upgrade: None,
        };
        if upgrade_due {
            result.auto_upgrade = Some(self.upgrade(StatKind::random(rng)));
        }
        result
    }

    // ── Internals ───────────────────────────────────────────────

    /// Tops up the encounter queue when it runs dry: a fresh batch is
    /// rolled whenever the queue is empty, or short of
    /// [`QUEUE_REFILL_THRESHOLD`] with no active target. A non-empty queue
    /// mid-fight is left alone.
    fn refill_queue(&mut self, rng: &mut impl Rng) {
        let run_dry = self.state.enemies.is_empty()
            || (self.state.enemies.len() < QUEUE_REFILL_THRESHOLD
                && self.state.current_enemy.is_none());
        if !run_dry {
            return;
        }
        let batch = generate_enemies(self.state.current_floor, rng);
        let count = batch.len() as u32;
        self.state.enemies.extend(batch);
        self.state.sync_current_enemy();
        self.events.push(GameEvent::EnemiesSpawned { count });
    }
}
