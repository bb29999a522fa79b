// Starting character
pub const STARTING_ATTACK: u32 = 5;
pub const STARTING_DEFENSE: u32 = 5;
pub const STARTING_MAX_HEALTH: u32 = 100;
pub const STARTING_XP_TO_NEXT_LEVEL: u64 = 100;

// Leveling. Each level gained grants +1 attack, +1 defense, and
// LEVEL_UP_HEALTH_BONUS to both health and max health; the XP requirement
// grows by XP_REQUIREMENT_GROWTH (floored) per level.
pub const XP_REQUIREMENT_GROWTH: f64 = 1.1;
pub const LEVEL_UP_HEALTH_BONUS: u32 = 10;

// Upgrade costs: health costs a fraction of max health, attack/defense cost
// STAT_UPGRADE_BASE_COST * STAT_UPGRADE_COST_GROWTH^current_stat.
pub const HEALTH_UPGRADE_COST_FACTOR: f64 = 0.2;
pub const STAT_UPGRADE_BASE_COST: f64 = 10.0;
pub const STAT_UPGRADE_COST_GROWTH: f64 = 1.1;
pub const HEALTH_UPGRADE_GROWTH: f64 = 1.1;

// Healing potions
pub const POTION_COST_FACTOR: f64 = 0.05;
pub const POTION_HEAL_FACTOR: f64 = 0.5;

// Enemy generation: stat = floor(floor_no * base * growth^floor_no)
pub const ENEMY_HEALTH_BASE: f64 = 50.0;
pub const ENEMY_HEALTH_GROWTH: f64 = 1.05;
pub const ENEMY_ATTACK_BASE: f64 = 2.0;
pub const ENEMY_ATTACK_GROWTH: f64 = 1.03;
pub const ENEMY_GOLD_BASE: f64 = 10.0;
pub const ENEMY_GOLD_GROWTH: f64 = 1.1;
pub const ENEMY_XP_BASE: f64 = 20.0;
pub const ENEMY_XP_GROWTH: f64 = 1.05;
pub const MIN_ENEMIES_PER_BATCH: usize = 3;
pub const MAX_ENEMIES_PER_BATCH: usize = 5;

// Encounter queue: refill when empty, or when it drops below this size with
// no active target.
pub const QUEUE_REFILL_THRESHOLD: usize = 3;

// Floor progression: requirement = floor(floor_no * 5 * 1.1^(floor_no - 1))
pub const FLOOR_REQUIREMENT_BASE: f64 = 5.0;
pub const FLOOR_REQUIREMENT_GROWTH: f64 = 1.1;

// Tick cadence: auto-attack fires every tick, auto-upgrade every Nth
pub const AUTO_UPGRADE_PERIOD_TICKS: u32 = 10;

// Defeat milestone logged once the kill count reaches this value
pub const MASTER_MILESTONE_KILLS: u32 = 10;
