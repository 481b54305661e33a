//! The session context owned by the loop driver.

use crate::player::Player;
use crate::scene::Scene;

/// One interactive session: the loop flag, the active scene, and the player
/// it exclusively owns. Constructed once at startup and passed explicitly;
/// there is no global game object.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub running: bool,
    pub scene: Scene,
    pub player: Player,
}

impl Game {
    pub fn new() -> Self {
        Self {
            running: true,
            scene: Scene::Menu,
            player: Player::new(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_at_menu() {
        let game = Game::new();
        assert!(game.running);
        assert_eq!(game.scene, Scene::Menu);
        assert_eq!(game.player, Player::new());
    }
}
