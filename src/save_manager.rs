//! Saving and loading the player as a single JSON object.
//!
//! The schema is versionless: every player field carries a serde default
//! matching its creation value, so a file written before a field existed
//! (older saves have no materials, potions, or effects) loads cleanly.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::player::Player;

pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Save file under the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "wayfarer").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self { save_path: config_dir.join("savegame.json") })
    }

    /// Save file at an explicit path. Used by tests.
    pub fn at_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// Writes the whole player, pretty-printed.
    pub fn save(&self, player: &Player) -> io::Result<()> {
        let json = serde_json::to_string_pretty(player)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)
    }

    /// Reads a full player back. A missing file surfaces as `NotFound`;
    /// the caller reports it and keeps the current player.
    pub fn load(&self) -> io::Result<Player> {
        let json = fs::read_to_string(&self.save_path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
