//! Integration test: shop and crafting economy
//!
//! Walks the equipment economy end to end: buying gear tier by tier,
//! stocking potions, and the full crafting progression from raw materials
//! to upgraded equipment.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wayfarer::game_logic::handle_input;
use wayfarer::items::{Armor, Material, Weapon};
use wayfarer::scene::Scene;
use wayfarer::{Game, SaveManager};

fn saves_in(dir: &tempfile::TempDir) -> SaveManager {
    SaveManager::at_path(dir.path().join("savegame.json"))
}

fn drive(game: &mut Game, saves: &SaveManager, inputs: &[&str]) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut last = Vec::new();
    for input in inputs {
        last = handle_input(game, saves, input, 0, &mut rng);
    }
    last
}

#[test]
fn test_buying_up_the_weapon_tiers_replaces_gear() {
    let dir = tempfile::tempdir().unwrap();
    let saves = saves_in(&dir);

    let mut game = Game::new();
    game.player.gold = 215;
    game.scene = Scene::Shop;

    drive(&mut game, &saves, &["4"]);
    assert_eq!(game.player.weapon, Some(Weapon::WoodSword));

    // Each upgrade overwrites the slot; the replaced sword is not refunded
    drive(&mut game, &saves, &["5", "6"]);
    assert_eq!(game.player.weapon, Some(Weapon::IronSword));
    assert_eq!(game.player.gold, 25);

    drive(&mut game, &saves, &["7"]);
    assert_eq!(game.player.armor, Some(Armor::WoodArmor));
    assert_eq!(game.player.gold, 0);
}

#[test]
fn test_potion_purchases_fill_each_counter() {
    let dir = tempfile::tempdir().unwrap();
    let saves = saves_in(&dir);

    let mut game = Game::new();
    game.player.gold = 90;
    game.scene = Scene::Shop;

    drive(&mut game, &saves, &["1", "2", "3"]);
    assert_eq!(game.player.potions.instant_heal, 1);
    assert_eq!(game.player.potions.regen, 1);
    assert_eq!(game.player.potions.luck, 1);
    assert_eq!(game.player.gold, 0);
    assert_eq!(game.scene, Scene::Shop);
}

#[test]
fn test_crafting_progression_from_materials_to_upgrades() {
    let dir = tempfile::tempdir().unwrap();
    let saves = saves_in(&dir);

    let mut game = Game::new();
    game.player.materials.add(Material::Iron, 10);
    game.player.materials.add(Material::Wood, 3);
    game.player.materials.add(Material::Crystal, 5);
    game.scene = Scene::Crafting;

    let messages = drive(&mut game, &saves, &["1"]);
    assert_eq!(messages, vec!["You crafted a Crafted Blade!".to_string()]);
    assert_eq!(game.player.weapon, Some(Weapon::CraftedBlade));

    let messages = drive(&mut game, &saves, &["2"]);
    assert_eq!(messages, vec!["You crafted a Crafted Plate!".to_string()]);
    assert_eq!(game.player.armor, Some(Armor::CraftedPlate));
    assert_eq!(game.player.materials.get(Material::Iron), 0);
    assert_eq!(game.player.materials.get(Material::Wood), 0);

    let messages = drive(&mut game, &saves, &["3"]);
    assert_eq!(messages, vec!["You crafted a Upgraded Blade!".to_string()]);
    assert_eq!(game.player.weapon, Some(Weapon::UpgradedBlade));
    assert_eq!(game.player.materials.get(Material::Crystal), 0);

    // The blade is already upgraded; its recipe needs the base tier back
    let messages = drive(&mut game, &saves, &["3"]);
    assert_eq!(messages, vec!["You need a Crafted Blade equipped!".to_string()]);

    // And the plate upgrade is out of crystal
    let messages = drive(&mut game, &saves, &["4"]);
    assert_eq!(messages, vec!["Not enough materials!".to_string()]);
    assert_eq!(game.player.armor, Some(Armor::CraftedPlate));
}

#[test]
fn test_crafting_failure_consumes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let saves = saves_in(&dir);

    let mut game = Game::new();
    game.player.materials.add(Material::Iron, 4);
    game.player.materials.add(Material::Crystal, 2);
    game.scene = Scene::Crafting;

    let messages = drive(&mut game, &saves, &["1"]);
    assert_eq!(messages, vec!["Not enough materials!".to_string()]);
    assert_eq!(game.player.materials.get(Material::Iron), 4);
    assert_eq!(game.player.materials.get(Material::Crystal), 2);
    assert!(game.player.weapon.is_none());
}

#[test]
fn test_gather_encounters_feed_the_crafting_economy() {
    let dir = tempfile::tempdir().unwrap();
    let saves = saves_in(&dir);

    let mut game = Game::new();
    for _ in 0..3 {
        game.scene = Scene::Gather { material: Material::Iron, amount: 2 };
        drive(&mut game, &saves, &[""]);
    }
    game.scene = Scene::Gather { material: Material::Crystal, amount: 2 };
    drive(&mut game, &saves, &[""]);

    assert_eq!(game.player.materials.get(Material::Iron), 6);
    assert_eq!(game.player.materials.get(Material::Crystal), 2);

    game.scene = Scene::Crafting;
    let messages = drive(&mut game, &saves, &["1"]);
    assert_eq!(messages, vec!["You crafted a Crafted Blade!".to_string()]);
    assert_eq!(game.player.materials.get(Material::Iron), 1);
}
