// Player constants
pub const MAX_HP: i32 = 100;
pub const INSTANT_HEAL_AMOUNT: i32 = 30;

// Timed effect constants
pub const EFFECT_DURATION_SECONDS: i64 = 300;
pub const REGEN_HEAL_PER_TICK: i32 = 1;

// Battle roll ranges (inclusive)
pub const ENEMY_HP_MIN: i32 = 20;
pub const ENEMY_HP_MAX: i32 = 50;
pub const PLAYER_DAMAGE_MIN: u32 = 10;
pub const PLAYER_DAMAGE_MAX: u32 = 30;
pub const ENEMY_DAMAGE_MIN: u32 = 5;
pub const ENEMY_DAMAGE_MAX: u32 = 15;
pub const VICTORY_GOLD_MIN: u32 = 5;
pub const VICTORY_GOLD_MAX: u32 = 20;
pub const ESCAPE_CHANCE: f64 = 0.5;

// Other encounter roll ranges (inclusive)
pub const TREASURE_GOLD_MIN: u32 = 10;
pub const TREASURE_GOLD_MAX: u32 = 50;
pub const TRAP_DAMAGE_MIN: u32 = 10;
pub const TRAP_DAMAGE_MAX: u32 = 25;
pub const GATHER_AMOUNT_MIN: u32 = 1;
pub const GATHER_AMOUNT_MAX: u32 = 3;
