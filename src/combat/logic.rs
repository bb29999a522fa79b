//! Combat resolution: one attack exchange against the front of the
//! encounter queue.

use crate::core::game_state::GameState;

/// What happened during one resolved attack, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The character's attack landed for this much damage.
    AttackLanded { damage: u32 },
    /// The target was destroyed and its rewards granted.
    EnemyDefeated { gold: u64, xp: u64 },
    /// Reward XP pushed the character to a new level.
    LevelUp { level: u32 },
    /// The surviving enemy struck back.
    Retaliation { damage: u32 },
    /// Retaliation reduced the character to zero health.
    CharacterDowned,
}

/// Resolves a single attack exchange and returns the events it produced.
///
/// An empty result means the attack was a null action: either no enemy is
/// queued or the character is incapacitated. That case is an expected idle
/// state, not an error.
///
/// When the blow defeats the enemy, its gold and XP are granted exactly once,
/// the kill counter advances, and the enemy leaves the queue without
/// retaliating. Otherwise the enemy survives with reduced health and strikes
/// back for `max(1, attack - defense)`; character health floors at zero.
pub fn resolve_attack(state: &mut GameState) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    if state.character.is_incapacitated() {
        return events;
    }
    let damage = state.character.attack;
    let enemy = match state.enemies.front_mut() {
        Some(enemy) => enemy,
        None => return events,
    };

    enemy.take_damage(damage);
    let defeated = !enemy.is_alive();
    let gold = enemy.gold_reward;
    let xp = enemy.xp_reward;
    let retaliation = enemy.attack.saturating_sub(state.character.defense).max(1);

    events.push(CombatEvent::AttackLanded { damage });
    if defeated {
        state.enemies.pop_front();
        state.character.gold += gold;
        let levels_gained = state.character.gain_xp(xp);
        state.enemies_defeated += 1;
        events.push(CombatEvent::EnemyDefeated { gold, xp });
        if levels_gained > 0 {
            events.push(CombatEvent::LevelUp {
                level: state.character.level,
            });
        }
    } else {
        state.character.health = state.character.health.saturating_sub(retaliation);
        events.push(CombatEvent::Retaliation {
            damage: retaliation,
        });
        if state.character.is_incapacitated() {
            events.push(CombatEvent::CharacterDowned);
        }
    }
    state.sync_current_enemy();
    events
}
