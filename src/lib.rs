//! Wayfarer - a turn-based text adventure.
//!
//! This module exposes the game engine for testing and the binary: a
//! state machine of scenes over a single player, driven one input token
//! at a time.

pub mod build_info;
pub mod combat;
pub mod constants;
pub mod crafting;
pub mod effects;
pub mod game_logic;
pub mod game_state;
pub mod items;
pub mod player;
pub mod save_manager;
pub mod scene;
pub mod shop;
pub mod ui;

pub use game_logic::handle_input;
pub use game_state::Game;
pub use player::Player;
pub use save_manager::SaveManager;
pub use scene::Scene;
