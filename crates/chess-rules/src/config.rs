//! Game configuration loaded from TOML.
//!
//! ```toml
//! start_position = "4k3/8/8/8/8/8/8/R3K3"
//! first_to_move = "black"
//! orientation = "fen"
//! ```

use crate::GameError;
use chess_types::{Colour, Orientation, Placement};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Starting layout in placement notation.
    #[serde(default = "default_start_position")]
    pub start_position: String,
    #[serde(default = "default_first_to_move")]
    pub first_to_move: Colour,
    /// How `start_position` is laid out.
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_start_position() -> String {
    Placement::STARTPOS.to_string()
}

fn default_first_to_move() -> Colour {
    Colour::White
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            start_position: default_start_position(),
            first_to_move: default_first_to_move(),
            orientation: Orientation::default(),
        }
    }
}

impl GameConfig {
    /// Parses a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded game configuration");
        Ok(config)
    }
}
