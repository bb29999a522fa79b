//! Integration test: Engine operations
//!
//! Covers the player-facing operations outside combat itself: stat upgrades,
//! the potion shop, floor progression, and the destructive reset. Every
//! rejection path must leave state untouched and emit no events.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spire::core::events::GameEvent;
use spire::floors::{next_floor_attack_requirement, FloorOutcome};
use spire::shop::{PotionUse, PurchaseOutcome, UpgradeOutcome};
use spire::storage::{StateStore, CHARACTER_KEY, FLOOR_KEY, INVENTORY_KEY};
use spire::{Character, Engine, MemoryStore, StatKind};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn new_engine() -> (Engine<MemoryStore>, ChaCha8Rng) {
    let mut rng = test_rng();
    let engine = Engine::new(MemoryStore::new(), &mut rng);
    (engine, rng)
}

// =============================================================================
// Stat upgrades
// =============================================================================

#[test]
fn test_upgrade_rejected_when_gold_is_short() {
    let (mut engine, _) = new_engine();
    engine.state_mut().character.gold = 10;
    engine.drain_events();

    // attack upgrade at the starting value costs floor(10 * 1.1^5) = 16
    let outcome = engine.upgrade(StatKind::Attack);

    assert_eq!(
        outcome,
        UpgradeOutcome::InsufficientGold {
            stat: StatKind::Attack,
            cost: 16
        }
    );
    assert_eq!(engine.state().character.gold, 10);
    assert_eq!(engine.state().character.attack, 5);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_attack_and_defense_upgrades_add_one_point() {
    let (mut engine, _) = new_engine();
    engine.state_mut().character.gold = 100;

    assert!(engine.upgrade(StatKind::Attack).applied());
    assert!(engine.upgrade(StatKind::Defense).applied());

    let character = &engine.state().character;
    assert_eq!(character.attack, 6);
    assert_eq!(character.defense, 6);
    assert_eq!(character.gold, 100 - 16 - 16);
}

#[test]
fn test_health_upgrade_grows_maximum_and_fully_heals() {
    let (mut engine, _) = new_engine();
    engine.state_mut().character.gold = 20;
    engine.state_mut().character.health = 3;

    let outcome = engine.upgrade(StatKind::Health);

    assert_eq!(
        outcome,
        UpgradeOutcome::Applied {
            stat: StatKind::Health,
            cost: 20
        }
    );
    assert_eq!(engine.state().character.max_health, 110);
    assert_eq!(engine.state().character.health, 110);
    assert_eq!(engine.state().character.gold, 0);
}

#[test]
fn test_upgrade_costs_track_current_stats() {
    let (mut engine, _) = new_engine();
    assert_eq!(engine.upgrade_cost(StatKind::Attack), 16);
    assert_eq!(engine.upgrade_cost(StatKind::Defense), 16);
    assert_eq!(engine.upgrade_cost(StatKind::Health), 20);

    engine.state_mut().character.gold = 1_000;
    engine.upgrade(StatKind::Attack);
    engine.upgrade(StatKind::Health);

    // attack moved to 6, max health to 110
    assert_eq!(engine.upgrade_cost(StatKind::Attack), 17);
    assert_eq!(engine.upgrade_cost(StatKind::Health), 22);
}

#[test]
fn test_applied_upgrade_is_persisted() {
    let (mut engine, _) = new_engine();
    engine.state_mut().character.gold = 50;

    engine.upgrade(StatKind::Defense);

    let raw = engine.store().load(CHARACTER_KEY).unwrap().unwrap();
    let saved: Character = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved.defense, 6);
    assert_eq!(saved.gold, 34);
}

// =============================================================================
// Potions
// =============================================================================

#[test]
fn test_buy_potion_rejected_without_gold() {
    let (mut engine, _) = new_engine();
    engine.drain_events();

    let outcome = engine.buy_potion();

    assert_eq!(outcome, PurchaseOutcome::InsufficientGold { cost: 5 });
    assert_eq!(outcome.to_string(), "Not enough gold to buy a potion!");
    assert_eq!(engine.inventory().healing_potions(), 0);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_buy_then_use_a_potion() {
    let (mut engine, _) = new_engine();
    engine.state_mut().character.gold = 9;

    let bought = engine.buy_potion();
    assert_eq!(bought, PurchaseOutcome::Bought { cost: 5 });
    assert_eq!(bought.to_string(), "Bought a healing potion!");
    assert_eq!(engine.state().character.gold, 4);
    assert_eq!(engine.inventory().healing_potions(), 1);

    engine.state_mut().character.health = 20;
    let used = engine.use_potion();
    assert_eq!(used, PotionUse::Healed { amount: 50 });
    assert_eq!(
        used.to_string(),
        "Used a healing potion! Healed 50% of max health!"
    );
    assert_eq!(engine.state().character.health, 70);
    assert_eq!(engine.inventory().healing_potions(), 0);
}

#[test]
fn test_potion_heal_clamps_at_max_health() {
    let (mut engine, _) = new_engine();
    engine.state_mut().character.gold = 5;
    engine.buy_potion();
    engine.state_mut().character.health = 80;

    engine.use_potion();

    assert_eq!(engine.state().character.health, 100);
}

#[test]
fn test_use_potion_rejected_with_empty_inventory() {
    let (mut engine, _) = new_engine();
    engine.drain_events();

    let outcome = engine.use_potion();

    assert_eq!(outcome, PotionUse::NoPotions);
    assert_eq!(outcome.to_string(), "No healing potions in inventory!");
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_potion_price_follows_max_health() {
    let (mut engine, _) = new_engine();
    assert_eq!(engine.potion_cost(), 5);

    engine.state_mut().character.max_health = 250;
    assert_eq!(engine.potion_cost(), 12);
}

// =============================================================================
// Floor progression
// =============================================================================

#[test]
fn test_advance_rejected_below_attack_requirement() {
    let (mut engine, mut rng) = new_engine();
    engine.state_mut().character.attack = 4;
    engine.drain_events();
    let front_before = engine.state().enemies.front().unwrap().id;

    let outcome = engine.advance_floor(&mut rng);

    assert_eq!(outcome, FloorOutcome::AttackTooLow { required: 5 });
    assert_eq!(engine.state().current_floor, 1);
    assert_eq!(engine.state().enemies.front().unwrap().id, front_before);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_advance_moves_to_next_floor_and_restarts_the_hunt() {
    let (mut engine, mut rng) = new_engine();
    engine.state_mut().enemies_defeated = 4;
    engine.drain_events();

    // the starting character's 5 attack exactly meets floor 1's gate
    let outcome = engine.advance_floor(&mut rng);

    assert_eq!(outcome, FloorOutcome::Advanced { floor: 2 });
    assert_eq!(engine.state().current_floor, 2);
    assert_eq!(engine.state().enemies_defeated, 0);
    // the fresh batch is scaled to floor 2: floor(2 * 50 * 1.05^2) = 110
    assert!((3..=5).contains(&engine.state().enemies.len()));
    assert_eq!(engine.state().enemies.front().unwrap().health, 110);

    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::FloorAdvanced {
        floor: 2,
        message: "Progressed to floor 2!".to_string(),
    }));
}

#[test]
fn test_advance_persists_the_new_floor() {
    let (mut engine, mut rng) = new_engine();
    engine.advance_floor(&mut rng);

    assert_eq!(
        engine.store().load(FLOOR_KEY).unwrap().as_deref(),
        Some("2")
    );
}

#[test]
fn test_floor_requirement_rises_each_climb() {
    let (mut engine, mut rng) = new_engine();
    engine.state_mut().character.attack = 1_000_000;

    for expected_floor in 2..=10 {
        assert_eq!(
            engine.floor_requirement(),
            next_floor_attack_requirement(engine.state().current_floor)
        );
        assert_eq!(
            engine.advance_floor(&mut rng),
            FloorOutcome::Advanced {
                floor: expected_floor
            }
        );
    }
    assert_eq!(engine.state().current_floor, 10);
    // floor(10 * 5 * 1.1^9) = 117
    assert_eq!(engine.floor_requirement(), 117);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_restores_a_fresh_game() {
    let (mut engine, mut rng) = new_engine();
    engine.state_mut().character.gold = 500;
    engine.upgrade(StatKind::Attack);
    engine.buy_potion();
    engine.advance_floor(&mut rng);
    engine.attack(&mut rng);
    engine.drain_events();

    engine.reset(&mut rng);

    assert_eq!(engine.state().character, Character::new());
    assert_eq!(engine.state().current_floor, 1);
    assert_eq!(engine.state().enemies_defeated, 0);
    assert_eq!(engine.inventory().healing_potions(), 0);
    assert_eq!(engine.last_damage_dealt(), None);
    assert!((3..=5).contains(&engine.state().enemies.len()));

    for key in [CHARACTER_KEY, FLOOR_KEY, INVENTORY_KEY] {
        assert_eq!(engine.store().load(key).unwrap(), None, "{key} not wiped");
    }

    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::GameReset {
        message: "Character deleted. Starting a new game...".to_string(),
    }));
}
