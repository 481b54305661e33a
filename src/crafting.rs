//! Crafting recipes: all-or-nothing check-then-debit upgrades.

use crate::items::{Armor, Material, Weapon};
use crate::player::Player;

const BLADE_IRON_COST: u32 = 5;
const BLADE_CRYSTAL_COST: u32 = 2;
const PLATE_IRON_COST: u32 = 5;
const PLATE_WOOD_COST: u32 = 3;
const UPGRADE_CRYSTAL_COST: u32 = 3;

/// The four fixed recipes, in menu order. Upgrades are one-way and require
/// the prerequisite tier equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    CraftedBlade,
    CraftedPlate,
    UpgradedBlade,
    UpgradedPlate,
}

impl Recipe {
    pub fn all() -> [Recipe; 4] {
        [
            Recipe::CraftedBlade,
            Recipe::CraftedPlate,
            Recipe::UpgradedBlade,
            Recipe::UpgradedPlate,
        ]
    }

    /// The item produced on success.
    pub fn product(&self) -> &'static str {
        match self {
            Recipe::CraftedBlade => Weapon::CraftedBlade.name(),
            Recipe::CraftedPlate => Armor::CraftedPlate.name(),
            Recipe::UpgradedBlade => Weapon::UpgradedBlade.name(),
            Recipe::UpgradedPlate => Armor::UpgradedPlate.name(),
        }
    }

    /// Requirement summary shown in the crafting menu.
    pub fn requirements(&self) -> &'static str {
        match self {
            Recipe::CraftedBlade => "5 Iron + 2 Crystal",
            Recipe::CraftedPlate => "5 Iron + 3 Wood",
            Recipe::UpgradedBlade => "Crafted Blade + 3 Crystal",
            Recipe::UpgradedPlate => "Crafted Plate + 3 Crystal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftOutcome {
    Crafted { item: &'static str },
    NotEnoughMaterials,
    /// The upgrade's base item is not equipped.
    MissingBase { needed: &'static str },
}

/// Attempts a recipe. Every precondition is checked before anything is
/// debited; a failed attempt leaves the player untouched.
pub fn craft(player: &mut Player, recipe: Recipe) -> CraftOutcome {
    match recipe {
        Recipe::CraftedBlade => {
            if player.materials.get(Material::Iron) < BLADE_IRON_COST
                || player.materials.get(Material::Crystal) < BLADE_CRYSTAL_COST
            {
                return CraftOutcome::NotEnoughMaterials;
            }
            player.materials.spend(Material::Iron, BLADE_IRON_COST);
            player.materials.spend(Material::Crystal, BLADE_CRYSTAL_COST);
            player.weapon = Some(Weapon::CraftedBlade);
            CraftOutcome::Crafted { item: Weapon::CraftedBlade.name() }
        }
        Recipe::CraftedPlate => {
            if player.materials.get(Material::Iron) < PLATE_IRON_COST
                || player.materials.get(Material::Wood) < PLATE_WOOD_COST
            {
                return CraftOutcome::NotEnoughMaterials;
            }
            player.materials.spend(Material::Iron, PLATE_IRON_COST);
            player.materials.spend(Material::Wood, PLATE_WOOD_COST);
            player.armor = Some(Armor::CraftedPlate);
            CraftOutcome::Crafted { item: Armor::CraftedPlate.name() }
        }
        Recipe::UpgradedBlade => {
            if player.weapon != Some(Weapon::CraftedBlade) {
                return CraftOutcome::MissingBase { needed: Weapon::CraftedBlade.name() };
            }
            if player.materials.get(Material::Crystal) < UPGRADE_CRYSTAL_COST {
                return CraftOutcome::NotEnoughMaterials;
            }
            player.materials.spend(Material::Crystal, UPGRADE_CRYSTAL_COST);
            player.weapon = Some(Weapon::UpgradedBlade);
            CraftOutcome::Crafted { item: Weapon::UpgradedBlade.name() }
        }
        Recipe::UpgradedPlate => {
            if player.armor != Some(Armor::CraftedPlate) {
                return CraftOutcome::MissingBase { needed: Armor::CraftedPlate.name() };
            }
            if player.materials.get(Material::Crystal) < UPGRADE_CRYSTAL_COST {
                return CraftOutcome::NotEnoughMaterials;
            }
            player.materials.spend(Material::Crystal, UPGRADE_CRYSTAL_COST);
            player.armor = Some(Armor::UpgradedPlate);
            CraftOutcome::Crafted { item: Armor::UpgradedPlate.name() }
        }
    }
}
