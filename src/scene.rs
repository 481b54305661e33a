//! Game scenes: the nodes of the state machine.
//!
//! Each variant owns its per-instance parameters, drawn once at
//! construction; transitions replace the whole scene, so there is no scene
//! stack and no shared state between scenes.

use rand::Rng;

use crate::constants::{
    ENEMY_HP_MAX, ENEMY_HP_MIN, GATHER_AMOUNT_MAX, GATHER_AMOUNT_MIN, TRAP_DAMAGE_MAX,
    TRAP_DAMAGE_MIN, TREASURE_GOLD_MAX, TREASURE_GOLD_MIN,
};
use crate::crafting::Recipe;
use crate::items::Material;
use crate::player::Player;
use crate::shop;

/// Which value the cheat menu's next input token sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheatPrompt {
    Choose,
    SetHp,
    SetGold,
}

/// The active scene. Exactly one is live at a time; the loop renders it,
/// then feeds it one input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Menu,
    CheatMenu { prompt: CheatPrompt },
    Map,
    Battle { enemy_hp: i32 },
    Treasure { gold: u32 },
    Trap { damage: u32 },
    Gather { material: Material, amount: u32 },
    Shop,
    PotionMenu,
    Crafting,
}

impl Scene {
    pub fn cheat_menu() -> Self {
        Scene::CheatMenu { prompt: CheatPrompt::Choose }
    }

    pub fn battle(rng: &mut impl Rng) -> Self {
        Scene::Battle { enemy_hp: rng.gen_range(ENEMY_HP_MIN..=ENEMY_HP_MAX) }
    }

    pub fn treasure(rng: &mut impl Rng) -> Self {
        Scene::Treasure { gold: rng.gen_range(TREASURE_GOLD_MIN..=TREASURE_GOLD_MAX) }
    }

    pub fn trap(rng: &mut impl Rng) -> Self {
        Scene::Trap { damage: rng.gen_range(TRAP_DAMAGE_MIN..=TRAP_DAMAGE_MAX) }
    }

    pub fn gather(rng: &mut impl Rng) -> Self {
        let material = Material::all()[rng.gen_range(0..3)];
        Scene::Gather { material, amount: rng.gen_range(GATHER_AMOUNT_MIN..=GATHER_AMOUNT_MAX) }
    }

    /// Picks the next encounter uniformly and constructs it; parameter
    /// draws stay local to each constructor.
    pub fn random_encounter(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Scene::battle(rng),
            1 => Scene::treasure(rng),
            2 => Scene::trap(rng),
            _ => Scene::gather(rng),
        }
    }

    /// Renders this scene's view as display lines.
    pub fn render(&self, player: &Player) -> Vec<String> {
        match self {
            Scene::Menu => vec![
                "=== MAIN MENU ===".to_string(),
                "1. Start Game".to_string(),
                "2. Load Game".to_string(),
                "3. Cheat Menu".to_string(),
                "4. Quit".to_string(),
            ],
            Scene::CheatMenu { prompt } => match prompt {
                CheatPrompt::Choose => vec![
                    "=== CHEAT MENU ===".to_string(),
                    "1. Set HP".to_string(),
                    "2. Set Gold".to_string(),
                    "3. Back to Menu".to_string(),
                ],
                CheatPrompt::SetHp => vec!["Enter new HP:".to_string()],
                CheatPrompt::SetGold => vec!["Enter new Gold:".to_string()],
            },
            Scene::Map => vec![
                format!("You are at position {}.", player.position),
                "1. Move Forward".to_string(),
                "2. Check Status".to_string(),
                "3. Save Game".to_string(),
                "4. Return to Menu".to_string(),
                "5. Visit Shop".to_string(),
                "6. Crafting".to_string(),
                "7. Use Potion".to_string(),
            ],
            Scene::Battle { enemy_hp } => vec![
                "You encountered an enemy!".to_string(),
                format!("Enemy HP: {}", enemy_hp),
                "1. Attack".to_string(),
                "2. Run".to_string(),
            ],
            Scene::Treasure { gold } => {
                vec![format!("You found a treasure chest with {} gold!", gold)]
            }
            Scene::Trap { damage } => vec![
                "You fell into a trap!".to_string(),
                format!("You took {} damage!", damage),
            ],
            Scene::Gather { material, amount } => {
                vec![format!("You found {} {}!", amount, material.name())]
            }
            Scene::Shop => {
                let mut lines = vec![
                    "Welcome to the Shop!".to_string(),
                    format!("Your Gold: {}", player.gold),
                ];
                for (i, (ware, price)) in shop::CATALOG.iter().enumerate() {
                    lines.push(format!("{}. {} - {} Gold", i + 1, ware.label(), price));
                }
                lines.push(format!("{}. Exit Shop", shop::EXIT_CHOICE));
                lines
            }
            Scene::PotionMenu => vec![
                "=== POTIONS ===".to_string(),
                format!("1. Regen Potion (x{})", player.potions.regen),
                format!("2. Luck Potion (x{})", player.potions.luck),
                format!("3. Instant Heal Potion (x{})", player.potions.instant_heal),
                "4. Back".to_string(),
            ],
            Scene::Crafting => {
                let mut lines = vec![
                    "=== CRAFTING ===".to_string(),
                    format!(
                        "Materials: Iron x{}, Wood x{}, Crystal x{}",
                        player.materials.iron, player.materials.wood, player.materials.crystal
                    ),
                ];
                for (i, recipe) in Recipe::all().iter().enumerate() {
                    lines.push(format!(
                        "{}. {} ({})",
                        i + 1,
                        recipe.product(),
                        recipe.requirements()
                    ));
                }
                lines.push(format!("{}. Back", Recipe::all().len() + 1));
                lines
            }
        }
    }
}
