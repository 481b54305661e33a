//! Equipment and resource item definitions.
//!
//! All bonus values are fixed lookup tables keyed by the item itself; an
//! empty slot always contributes 0.

use serde::{Deserialize, Serialize};

/// Equippable weapons, ordered by tier. Serialized as the display name so
/// save files carry `"Wood Sword"` rather than a variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weapon {
    #[serde(rename = "Wood Sword")]
    WoodSword,
    #[serde(rename = "Stone Sword")]
    StoneSword,
    #[serde(rename = "Iron Sword")]
    IronSword,
    #[serde(rename = "Crafted Blade")]
    CraftedBlade,
    #[serde(rename = "Upgraded Blade")]
    UpgradedBlade,
}

impl Weapon {
    pub fn name(&self) -> &'static str {
        match self {
            Weapon::WoodSword => "Wood Sword",
            Weapon::StoneSword => "Stone Sword",
            Weapon::IronSword => "Iron Sword",
            Weapon::CraftedBlade => "Crafted Blade",
            Weapon::UpgradedBlade => "Upgraded Blade",
        }
    }

    /// Flat damage added to every attack roll.
    pub fn attack_bonus(&self) -> u32 {
        match self {
            Weapon::WoodSword => 5,
            Weapon::StoneSword => 10,
            Weapon::IronSword => 15,
            Weapon::CraftedBlade => 25,
            Weapon::UpgradedBlade => 35,
        }
    }
}

/// Equippable armor, ordered by tier. Serialized as the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Armor {
    #[serde(rename = "Wood Armor")]
    WoodArmor,
    #[serde(rename = "Stone Armor")]
    StoneArmor,
    #[serde(rename = "Iron Armor")]
    IronArmor,
    #[serde(rename = "Crafted Plate")]
    CraftedPlate,
    #[serde(rename = "Upgraded Plate")]
    UpgradedPlate,
}

impl Armor {
    pub fn name(&self) -> &'static str {
        match self {
            Armor::WoodArmor => "Wood Armor",
            Armor::StoneArmor => "Stone Armor",
            Armor::IronArmor => "Iron Armor",
            Armor::CraftedPlate => "Crafted Plate",
            Armor::UpgradedPlate => "Upgraded Plate",
        }
    }

    /// Flat reduction applied to every incoming hit.
    pub fn damage_reduction(&self) -> u32 {
        match self {
            Armor::WoodArmor => 2,
            Armor::StoneArmor => 5,
            Armor::IronArmor => 8,
            Armor::CraftedPlate => 12,
            Armor::UpgradedPlate => 18,
        }
    }
}

/// Craftable raw materials dropped by gather encounters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Iron,
    Wood,
    Crystal,
}

impl Material {
    pub fn name(&self) -> &'static str {
        match self {
            Material::Iron => "Iron",
            Material::Wood => "Wood",
            Material::Crystal => "Crystal",
        }
    }

    pub fn all() -> [Material; 3] {
        [Material::Iron, Material::Wood, Material::Crystal]
    }
}

/// Potion kinds stocked by the shop. Regen and Luck start a timed effect,
/// Instant Heal applies immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionKind {
    Regen,
    Luck,
    #[serde(rename = "Instant Heal")]
    InstantHeal,
}

impl PotionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PotionKind::Regen => "Regen",
            PotionKind::Luck => "Luck",
            PotionKind::InstantHeal => "Instant Heal",
        }
    }
}
