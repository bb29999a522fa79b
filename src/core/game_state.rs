//! The aggregate game state owned by the engine.

use std::collections::VecDeque;

use crate::character::Character;
use crate::combat::types::Enemy;

/// Everything the simulation mutates: the character, the floor, and the
/// floor's encounter queue. The queue front is the active target;
/// `current_enemy` mirrors it and must be re-synced after any queue change.
#[derive(Debug, Clone)]
pub struct GameState {
    pub character: Character,
    pub current_floor: u32,
    pub enemies: VecDeque<Enemy>,
    pub current_enemy: Option<Enemy>,
    pub enemies_defeated: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state: new character, floor 1, no encounters yet.
    pub fn new() -> Self {
        Self::with_progress(Character::new(), 1)
    }

    /// State resuming saved progress. The encounter queue always starts
    /// empty; floors regenerate their enemies each session.
    pub fn with_progress(character: Character, current_floor: u32) -> Self {
        Self {
            character,
            current_floor,
            enemies: VecDeque::new(),
            current_enemy: None,
            enemies_defeated: 0,
        }
    }

    /// Re-establishes the invariant that `current_enemy` equals the queue
    /// front, or is `None` when the queue is empty.
    pub fn sync_current_enemy(&mut self) {
        self.current_enemy = self.enemies.front().cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floors::generate_enemy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_state_starts_on_floor_one_with_empty_queue() {
        let state = GameState::new();
        assert_eq!(state.current_floor, 1);
        assert!(state.enemies.is_empty());
        assert!(state.current_enemy.is_none());
        assert_eq!(state.enemies_defeated, 0);
        assert_eq!(state.character, Character::new());
    }

    #[test]
    fn test_with_progress_keeps_queue_empty() {
        let mut character = Character::new();
        character.level = 9;
        let state = GameState::with_progress(character, 7);
        assert_eq!(state.current_floor, 7);
        assert_eq!(state.character.level, 9);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_sync_tracks_queue_front() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = GameState::new();
        state.enemies.push_back(generate_enemy(1, &mut rng));
        state.enemies.push_back(generate_enemy(1, &mut rng));

        state.sync_current_enemy();
        assert_eq!(
            state.current_enemy.as_ref().map(|enemy| enemy.id),
            state.enemies.front().map(|enemy| enemy.id)
        );

        state.enemies.pop_front();
        state.sync_current_enemy();
        assert_eq!(
            state.current_enemy.as_ref().map(|enemy| enemy.id),
            state.enemies.front().map(|enemy| enemy.id)
        );

        state.enemies.clear();
        state.sync_current_enemy();
        assert!(state.current_enemy.is_none());
    }
}
