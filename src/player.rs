//! The player: the single mutable domain entity.
//!
//! Every field carries a serde default matching its creation value, so save
//! files written before a field existed load cleanly with that default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{EFFECT_DURATION_SECONDS, INSTANT_HEAL_AMOUNT, MAX_HP, REGEN_HEAL_PER_TICK};
use crate::effects::{lucky_gold, EffectKind};
use crate::items::{Armor, Material, PotionKind, Weapon};

/// Per-material resource counters, serialized as a name-keyed integer map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Materials {
    #[serde(rename = "Iron", default)]
    pub iron: u32,
    #[serde(rename = "Wood", default)]
    pub wood: u32,
    #[serde(rename = "Crystal", default)]
    pub crystal: u32,
}

impl Materials {
    pub fn get(&self, material: Material) -> u32 {
        match material {
            Material::Iron => self.iron,
            Material::Wood => self.wood,
            Material::Crystal => self.crystal,
        }
    }

    pub fn add(&mut self, material: Material, amount: u32) {
        *self.slot_mut(material) += amount;
    }

    /// Debits `amount` if available. Returns whether the debit happened;
    /// on failure the counter is untouched.
    pub fn spend(&mut self, material: Material, amount: u32) -> bool {
        let slot = self.slot_mut(material);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    fn slot_mut(&mut self, material: Material) -> &mut u32 {
        match material {
            Material::Iron => &mut self.iron,
            Material::Wood => &mut self.wood,
            Material::Crystal => &mut self.crystal,
        }
    }
}

/// Per-kind potion counters, serialized as a name-keyed integer map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Potions {
    #[serde(rename = "Regen", default)]
    pub regen: u32,
    #[serde(rename = "Luck", default)]
    pub luck: u32,
    #[serde(rename = "Instant Heal", default)]
    pub instant_heal: u32,
}

impl Potions {
    pub fn add(&mut self, kind: PotionKind, amount: u32) {
        *self.slot_mut(kind) += amount;
    }

    /// Consumes one potion of `kind` if any is held.
    pub fn consume(&mut self, kind: PotionKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    fn slot_mut(&mut self, kind: PotionKind) -> &mut u32 {
        match kind {
            PotionKind::Regen => &mut self.regen,
            PotionKind::Luck => &mut self.luck,
            PotionKind::InstantHeal => &mut self.instant_heal,
        }
    }
}

fn default_hp() -> i32 {
    MAX_HP
}

/// Player state. Heals clamp hp to [0, 100]; damage does not clamp, so hp
/// may go negative and death is `hp <= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub armor: Option<Armor>,
    #[serde(default)]
    pub materials: Materials,
    #[serde(default)]
    pub potions: Potions,
    #[serde(default)]
    pub effects: BTreeMap<EffectKind, i64>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            hp: MAX_HP,
            gold: 0,
            position: 0,
            inventory: Vec::new(),
            weapon: None,
            armor: None,
            materials: Materials::default(),
            potions: Potions::default(),
            effects: BTreeMap::new(),
        }
    }

    pub fn weapon_bonus(&self) -> u32 {
        self.weapon.map_or(0, |w| w.attack_bonus())
    }

    pub fn armor_bonus(&self) -> u32 {
        self.armor.map_or(0, |a| a.damage_reduction())
    }

    /// Applies incoming damage after armor reduction and returns the amount
    /// actually dealt. Death checks are the caller's via `is_dead`.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let reduced = amount.saturating_sub(self.armor_bonus());
        self.hp -= reduced as i32;
        reduced
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Heals up to the hp cap.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(MAX_HP);
    }

    /// Drinks an Instant Heal potion if one is held. No effect otherwise.
    pub fn use_instant_heal(&mut self) -> bool {
        if !self.potions.consume(PotionKind::InstantHeal) {
            return false;
        }
        self.heal(INSTANT_HEAL_AMOUNT);
        true
    }

    /// Consumes the matching potion and starts (or restarts) the effect.
    /// An already-active effect has its expiry overwritten, never stacked.
    pub fn activate_effect(&mut self, kind: EffectKind, now: i64) -> bool {
        if !self.potions.consume(kind.potion()) {
            return false;
        }
        self.effects.insert(kind, now + EFFECT_DURATION_SECONDS);
        true
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.contains_key(&kind)
    }

    /// Runs once per loop iteration: applies the Regen heal while the effect
    /// is held (including the call that expires it), then drops every effect
    /// whose expiry has passed.
    pub fn decay_effects(&mut self, now: i64) {
        if self.has_effect(EffectKind::Regen) {
            self.heal(REGEN_HEAL_PER_TICK);
        }
        self.effects.retain(|_, expiry| *expiry > now);
    }

    /// Credits gold, applying the Luck multiplier while that effect is
    /// active. Returns the amount actually credited.
    pub fn award_gold(&mut self, base: u32) -> u32 {
        let amount = if self.has_effect(EffectKind::Luck) {
            lucky_gold(base)
        } else {
            base
        };
        self.gold += amount;
        amount
    }

    /// Status readout shown by the Map's "Check Status" action.
    pub fn status_lines(&self) -> Vec<String> {
        let weapon = self.weapon.map_or("None", |w| w.name());
        let armor = self.armor.map_or("None", |a| a.name());
        let effects = if self.effects.is_empty() {
            "None".to_string()
        } else {
            self.effects
                .keys()
                .map(|kind| kind.name())
                .collect::<Vec<_>>()
                .join(", ")
        };

        vec![
            format!(
                "HP: {}, Gold: {}, Position: {}, Weapon: {}, Armor: {}",
                self.hp, self.gold, self.position, weapon, armor
            ),
            format!("Inventory: {:?}", self.inventory),
            format!(
                "Materials: Iron x{}, Wood x{}, Crystal x{}",
                self.materials.iron, self.materials.wood, self.materials.crystal
            ),
            format!(
                "Potions: Regen x{}, Luck x{}, Instant Heal x{}",
                self.potions.regen, self.potions.luck, self.potions.instant_heal
            ),
            format!("Active Effects: {}", effects),
        ]
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_creation_defaults() {
        let player = Player::new();
        assert_eq!(player.hp, 100);
        assert_eq!(player.gold, 0);
        assert_eq!(player.position, 0);
        assert!(player.inventory.is_empty());
        assert!(player.weapon.is_none());
        assert!(player.armor.is_none());
        assert_eq!(player.materials, Materials::default());
        assert_eq!(player.potions, Potions::default());
        assert!(player.effects.is_empty());
    }

    #[test]
    fn test_bonuses_are_zero_when_unequipped() {
        let player = Player::new();
        assert_eq!(player.weapon_bonus(), 0);
        assert_eq!(player.armor_bonus(), 0);
    }

    #[test]
    fn test_apply_damage_reduced_by_armor() {
        let mut player = Player::new();
        player.armor = Some(Armor::IronArmor);

        let dealt = player.apply_damage(15);
        assert_eq!(dealt, 7);
        assert_eq!(player.hp, 93);
    }

    #[test]
    fn test_apply_damage_never_heals() {
        let mut player = Player::new();
        player.armor = Some(Armor::UpgradedPlate);

        // Reduction exceeds the hit; damage floors at zero
        let dealt = player.apply_damage(10);
        assert_eq!(dealt, 0);
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn test_damage_can_drive_hp_negative() {
        let mut player = Player::new();
        player.hp = 5;
        player.apply_damage(20);
        assert_eq!(player.hp, -15);
        assert!(player.is_dead());
    }

    #[test]
    fn test_instant_heal_without_potion_changes_nothing() {
        let mut player = Player::new();
        player.hp = 50;
        assert!(!player.use_instant_heal());
        assert_eq!(player.hp, 50);
        assert_eq!(player.potions.instant_heal, 0);
    }

    #[test]
    fn test_instant_heal_clamps_at_cap() {
        let mut player = Player::new();
        player.hp = 90;
        player.potions.instant_heal = 2;

        assert!(player.use_instant_heal());
        assert_eq!(player.hp, 100);
        assert_eq!(player.potions.instant_heal, 1);
    }

    #[test]
    fn test_activate_effect_consumes_potion_and_sets_expiry() {
        let mut player = Player::new();
        player.potions.regen = 1;

        assert!(player.activate_effect(EffectKind::Regen, 1_000));
        assert_eq!(player.potions.regen, 0);
        assert_eq!(player.effects[&EffectKind::Regen], 1_000 + EFFECT_DURATION_SECONDS);

        // No potion left: activation fails, effect untouched
        assert!(!player.activate_effect(EffectKind::Regen, 2_000));
        assert_eq!(player.effects[&EffectKind::Regen], 1_000 + EFFECT_DURATION_SECONDS);
    }

    #[test]
    fn test_reactivation_overwrites_expiry_without_stacking() {
        let mut player = Player::new();
        player.potions.luck = 2;

        assert!(player.activate_effect(EffectKind::Luck, 1_000));
        assert!(player.activate_effect(EffectKind::Luck, 1_100));

        assert_eq!(player.effects.len(), 1);
        assert_eq!(player.effects[&EffectKind::Luck], 1_100 + EFFECT_DURATION_SECONDS);
    }

    #[test]
    fn test_effects_map_never_exceeds_distinct_kinds() {
        let mut player = Player::new();
        player.potions.regen = 2;
        player.potions.luck = 2;

        player.activate_effect(EffectKind::Regen, 0);
        player.activate_effect(EffectKind::Luck, 0);
        player.activate_effect(EffectKind::Regen, 100);
        player.activate_effect(EffectKind::Luck, 100);

        assert_eq!(player.effects.len(), EffectKind::all().len());
    }

    #[test]
    fn test_decay_removes_expired_effects() {
        let mut player = Player::new();
        player.potions.luck = 1;
        player.activate_effect(EffectKind::Luck, 0);

        player.decay_effects(EFFECT_DURATION_SECONDS - 1);
        assert!(player.has_effect(EffectKind::Luck));

        player.decay_effects(EFFECT_DURATION_SECONDS);
        assert!(!player.has_effect(EffectKind::Luck));
    }

    #[test]
    fn test_regen_heals_once_per_decay_including_expiring_call() {
        let mut player = Player::new();
        player.hp = 50;
        player.potions.regen = 1;
        player.activate_effect(EffectKind::Regen, 0);

        player.decay_effects(10);
        player.decay_effects(20);
        assert_eq!(player.hp, 52);

        // Expiring tick still heals before removal
        player.decay_effects(EFFECT_DURATION_SECONDS);
        assert_eq!(player.hp, 53);
        assert!(!player.has_effect(EffectKind::Regen));

        // Gone: no further healing
        player.decay_effects(EFFECT_DURATION_SECONDS + 10);
        assert_eq!(player.hp, 53);
    }

    #[test]
    fn test_award_gold_applies_luck_while_active() {
        let mut player = Player::new();
        assert_eq!(player.award_gold(10), 10);
        assert_eq!(player.gold, 10);

        player.effects.insert(EffectKind::Luck, i64::MAX);
        assert_eq!(player.award_gold(10), 15);
        assert_eq!(player.gold, 25);
    }

    #[test]
    fn test_materials_spend_is_gated() {
        let mut materials = Materials::default();
        materials.add(Material::Iron, 4);

        assert!(!materials.spend(Material::Iron, 5));
        assert_eq!(materials.get(Material::Iron), 4);

        assert!(materials.spend(Material::Iron, 4));
        assert_eq!(materials.get(Material::Iron), 0);
    }
}
