use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, COLS, ROWS};

/// Largest board dimension accepted from configuration.
pub const MAX_DIMENSION: usize = 64;

/// Board and turn settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed first mover; a random player starts when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_player: Option<Player>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: COLS,
            height: ROWS,
            starting_player: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width == 0 {
            return Err(ConfigError::Validation("game.width must be >= 1".into()));
        }
        if self.game.height == 0 {
            return Err(ConfigError::Validation("game.height must be >= 1".into()));
        }
        if self.game.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.width must be <= {}",
                MAX_DIMENSION
            )));
        }
        if self.game.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.height must be <= {}",
                MAX_DIMENSION
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
