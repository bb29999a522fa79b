use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ten enemy kinds, rendered as their display glyphs.
pub const ENEMY_GLYPHS: [char; 10] = ['👾', '👹', '👻', '👽', '🤖', '🎃', '👿', '👺', '🧟', '🧛'];

/// One enemy in the encounter queue. Identity is the generated `id`, compared
/// by value; two enemies with identical stats are still distinct encounters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: Uuid,
    pub glyph: char,
    pub health: u32,
    pub attack: u32,
    pub gold_reward: u64,
    pub xp_reward: u64,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage, flooring health at zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enemy() -> Enemy {
        Enemy {
            id: Uuid::new_v4(),
            glyph: '👾',
            health: 10,
            attack: 3,
            gold_reward: 5,
            xp_reward: 5,
        }
    }

    #[test]
    fn test_take_damage_reduces_health() {
        let mut enemy = sample_enemy();
        enemy.take_damage(4);
        assert_eq!(enemy.health, 6);
        assert!(enemy.is_alive());
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut enemy = sample_enemy();
        enemy.take_damage(50);
        assert_eq!(enemy.health, 0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_glyph_palette_has_ten_distinct_kinds() {
        let mut glyphs = ENEMY_GLYPHS.to_vec();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 10);
    }
}
