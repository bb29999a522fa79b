//! Spire - Idle RPG Game-State and Simulation Engine
//!
//! This library owns the whole game simulation: the character, the encounter
//! queue, combat resolution, floor progression, the shop, and persistence.
//! Presentation layers are external consumers that read state, invoke the
//! engine's operations, and drain its event stream.

pub mod character;
pub mod combat;
pub mod constants;
pub mod core;
pub mod floors;
pub mod inventory;
pub mod shop;
pub mod storage;

pub use character::Character;
pub use combat::{CombatEvent, Enemy};
pub use inventory::Inventory;
pub use shop::StatKind;
pub use storage::{FileStore, MemoryStore, StateStore};

pub use crate::core::{Engine, GameEvent, GameState, TickResult, Ticker};
