//! Battle action resolution.
//!
//! Pure logic over the player and the battle's remaining enemy health;
//! callers translate the returned events into messages and transitions.

use rand::Rng;

use crate::constants::{
    ENEMY_DAMAGE_MAX, ENEMY_DAMAGE_MIN, ESCAPE_CHANCE, PLAYER_DAMAGE_MAX, PLAYER_DAMAGE_MIN,
    VICTORY_GOLD_MAX, VICTORY_GOLD_MIN,
};
use crate::player::Player;

/// What happened during one battle action, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttack { damage: u32 },
    /// Victory; `gold` is the amount credited (Luck already applied).
    EnemyDefeated { gold: u32 },
    /// Retaliation; `damage` is what landed after armor reduction.
    EnemyAttack { damage: u32 },
    Escaped,
    EscapeFailed,
    PlayerDied,
}

/// Resolves one attack. `enemy_hp` is updated in place; a kill awards gold,
/// a survivor retaliates.
pub fn attack(player: &mut Player, enemy_hp: &mut i32, rng: &mut impl Rng) -> Vec<BattleEvent> {
    let mut events = Vec::new();

    let damage = rng.gen_range(PLAYER_DAMAGE_MIN..=PLAYER_DAMAGE_MAX) + player.weapon_bonus();
    *enemy_hp -= damage as i32;
    events.push(BattleEvent::PlayerAttack { damage });

    if *enemy_hp <= 0 {
        let gold = player.award_gold(rng.gen_range(VICTORY_GOLD_MIN..=VICTORY_GOLD_MAX));
        events.push(BattleEvent::EnemyDefeated { gold });
    } else {
        retaliate(player, rng, &mut events);
    }

    events
}

/// Resolves one run attempt: a coin flip between a clean escape and the
/// same retaliation a failed attack draws.
pub fn attempt_escape(player: &mut Player, rng: &mut impl Rng) -> Vec<BattleEvent> {
    let mut events = Vec::new();

    if rng.gen_bool(ESCAPE_CHANCE) {
        events.push(BattleEvent::Escaped);
    } else {
        events.push(BattleEvent::EscapeFailed);
        retaliate(player, rng, &mut events);
    }

    events
}

fn retaliate(player: &mut Player, rng: &mut impl Rng, events: &mut Vec<BattleEvent>) {
    let dealt = player.apply_damage(rng.gen_range(ENEMY_DAMAGE_MIN..=ENEMY_DAMAGE_MAX));
    events.push(BattleEvent::EnemyAttack { damage: dealt });
    if player.is_dead() {
        events.push(BattleEvent::PlayerDied);
    }
}
