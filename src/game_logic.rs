//! Input dispatch: one token per loop iteration.
//!
//! Each handler consumes the token for the active scene, mutates the game
//! in place (player state, scene transition, or the running flag), and
//! returns the message lines to show before the next render. Domain
//! failures (bad input, unaffordable purchases, missing saves) are messages
//! here, never errors.

use std::io;

use rand::Rng;

use crate::combat::{self, BattleEvent};
use crate::constants::EFFECT_DURATION_SECONDS;
use crate::crafting::{self, CraftOutcome, Recipe};
use crate::effects::EffectKind;
use crate::game_state::Game;
use crate::save_manager::SaveManager;
use crate::scene::{CheatPrompt, Scene};
use crate::shop::{self, PurchaseOutcome};

/// Consumes one input token for the active scene.
pub fn handle_input(
    game: &mut Game,
    saves: &SaveManager,
    input: &str,
    now: i64,
    rng: &mut impl Rng,
) -> Vec<String> {
    match game.scene {
        Scene::Menu => menu_input(game, saves, input),
        Scene::CheatMenu { prompt } => cheat_input(game, prompt, input),
        Scene::Map => map_input(game, saves, input, rng),
        Scene::Battle { .. } => battle_input(game, input, rng),
        Scene::Treasure { gold } => treasure_input(game, gold),
        Scene::Trap { damage } => trap_input(game, damage),
        Scene::Gather { material, amount } => {
            game.player.materials.add(material, amount);
            game.scene = Scene::Map;
            Vec::new()
        }
        Scene::Shop => shop_input(game, input),
        Scene::PotionMenu => potion_input(game, input, now),
        Scene::Crafting => crafting_input(game, input),
    }
}

fn menu_input(game: &mut Game, saves: &SaveManager, input: &str) -> Vec<String> {
    match input {
        "1" => {
            game.scene = Scene::Map;
            Vec::new()
        }
        "2" => {
            let messages = match saves.load() {
                Ok(player) => {
                    game.player = player;
                    vec!["Game Loaded.".to_string()]
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    vec!["No save file found.".to_string()]
                }
                Err(e) => vec![format!("Failed to load save: {}", e)],
            };
            game.scene = Scene::Map;
            messages
        }
        "3" => {
            game.scene = Scene::cheat_menu();
            Vec::new()
        }
        "4" => {
            game.running = false;
            Vec::new()
        }
        _ => vec!["Invalid choice.".to_string()],
    }
}

fn cheat_input(game: &mut Game, prompt: CheatPrompt, input: &str) -> Vec<String> {
    match prompt {
        CheatPrompt::Choose => match input {
            "1" => {
                game.scene = Scene::CheatMenu { prompt: CheatPrompt::SetHp };
                Vec::new()
            }
            "2" => {
                game.scene = Scene::CheatMenu { prompt: CheatPrompt::SetGold };
                Vec::new()
            }
            "3" => {
                game.scene = Scene::Menu;
                Vec::new()
            }
            _ => vec!["Invalid choice.".to_string()],
        },
        CheatPrompt::SetHp => {
            let messages = match input.parse::<u32>() {
                Ok(value) => {
                    game.player.hp = value as i32;
                    vec!["HP updated.".to_string()]
                }
                Err(_) => vec!["Invalid input.".to_string()],
            };
            game.scene = Scene::cheat_menu();
            messages
        }
        CheatPrompt::SetGold => {
            let messages = match input.parse::<u32>() {
                Ok(value) => {
                    game.player.gold = value;
                    vec!["Gold updated.".to_string()]
                }
                Err(_) => vec!["Invalid input.".to_string()],
            };
            game.scene = Scene::cheat_menu();
            messages
        }
    }
}

fn map_input(game: &mut Game, saves: &SaveManager, input: &str, rng: &mut impl Rng) -> Vec<String> {
    match input {
        "1" => {
            game.player.position += 1;
            game.scene = Scene::random_encounter(rng);
            Vec::new()
        }
        "2" => game.player.status_lines(),
        "3" => match saves.save(&game.player) {
            Ok(()) => vec!["Game Saved.".to_string()],
            Err(e) => vec![format!("Failed to save: {}", e)],
        },
        "4" => {
            game.scene = Scene::Menu;
            Vec::new()
        }
        "5" => {
            game.scene = Scene::Shop;
            Vec::new()
        }
        "6" => {
            game.scene = Scene::Crafting;
            Vec::new()
        }
        "7" => {
            game.scene = Scene::PotionMenu;
            Vec::new()
        }
        _ => vec!["Invalid choice.".to_string()],
    }
}

fn battle_input(game: &mut Game, input: &str, rng: &mut impl Rng) -> Vec<String> {
    let events = match input {
        "1" => {
            let Scene::Battle { enemy_hp } = &mut game.scene else {
                return Vec::new();
            };
            combat::attack(&mut game.player, enemy_hp, rng)
        }
        "2" => combat::attempt_escape(&mut game.player, rng),
        _ => return vec!["Invalid choice.".to_string()],
    };

    let mut messages = Vec::new();
    let mut next = None;
    for event in events {
        match event {
            BattleEvent::PlayerAttack { damage } => {
                messages.push(format!("You dealt {} damage!", damage));
            }
            BattleEvent::EnemyDefeated { gold } => {
                messages.push("Enemy defeated!".to_string());
                messages.push(format!("You earned {} gold!", gold));
                next = Some(Scene::Map);
            }
            BattleEvent::EnemyAttack { damage } => {
                messages.push(format!("Enemy dealt {} damage!", damage));
            }
            BattleEvent::Escaped => {
                messages.push("You escaped!".to_string());
                next = Some(Scene::Map);
            }
            BattleEvent::EscapeFailed => {
                messages.push("Failed to escape!".to_string());
            }
            BattleEvent::PlayerDied => {
                messages.push("You died!".to_string());
                game.running = false;
            }
        }
    }
    // A dead player never transitions again; the loop sees running=false.
    if game.running {
        if let Some(scene) = next {
            game.scene = scene;
        }
    }
    messages
}

fn treasure_input(game: &mut Game, gold: u32) -> Vec<String> {
    let gained = game.player.award_gold(gold);
    game.scene = Scene::Map;
    vec![format!("You picked up {} gold!", gained)]
}

fn trap_input(game: &mut Game, damage: u32) -> Vec<String> {
    game.player.apply_damage(damage);
    if game.player.is_dead() {
        game.running = false;
        return vec!["You died!".to_string()];
    }
    game.scene = Scene::Map;
    Vec::new()
}

fn shop_input(game: &mut Game, input: &str) -> Vec<String> {
    let Ok(choice) = input.parse::<usize>() else {
        return vec!["Invalid input.".to_string()];
    };
    match shop::purchase(&mut game.player, choice) {
        PurchaseOutcome::Bought { label } => vec![format!("You bought a {}!", label)],
        PurchaseOutcome::NotEnoughGold => vec!["Not enough gold!".to_string()],
        PurchaseOutcome::Exit => {
            game.scene = Scene::Map;
            Vec::new()
        }
        PurchaseOutcome::InvalidChoice => vec!["Invalid choice.".to_string()],
    }
}

fn potion_input(game: &mut Game, input: &str, now: i64) -> Vec<String> {
    match input {
        "1" => activate_message(game, EffectKind::Regen, now),
        "2" => activate_message(game, EffectKind::Luck, now),
        "3" => {
            if game.player.use_instant_heal() {
                vec!["You used an Instant Heal Potion!".to_string()]
            } else {
                vec!["You don't have any!".to_string()]
            }
        }
        "4" => {
            game.scene = Scene::Map;
            Vec::new()
        }
        _ => vec!["Invalid choice.".to_string()],
    }
}

fn activate_message(game: &mut Game, kind: EffectKind, now: i64) -> Vec<String> {
    if game.player.activate_effect(kind, now) {
        vec![format!(
            "{} activated for {} seconds!",
            kind.name(),
            EFFECT_DURATION_SECONDS
        )]
    } else {
        vec!["You don't have any!".to_string()]
    }
}

fn crafting_input(game: &mut Game, input: &str) -> Vec<String> {
    let recipe = match input {
        "1" => Recipe::CraftedBlade,
        "2" => Recipe::CraftedPlate,
        "3" => Recipe::UpgradedBlade,
        "4" => Recipe::UpgradedPlate,
        "5" => {
            game.scene = Scene::Map;
            return Vec::new();
        }
        _ => return vec!["Invalid choice.".to_string()],
    };
    match crafting::craft(&mut game.player, recipe) {
        CraftOutcome::Crafted { item } => vec![format!("You crafted a {}!", item)],
        CraftOutcome::NotEnoughMaterials => vec!["Not enough materials!".to_string()],
        CraftOutcome::MissingBase { needed } => vec![format!("You need a {} equipped!", needed)],
    }
}
