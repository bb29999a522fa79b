//! The engine core: aggregate state, the orchestrator, and tick scheduling.

#![allow(unused_imports)]

pub mod engine;
pub mod events;
pub mod game_state;
pub mod tick;

pub use engine::*;
pub use events::*;
pub use game_state::*;
pub use tick::*;
