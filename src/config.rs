use std::path::Path;

use crate::error::ConfigError;
use crate::game::{PlacementMode, Session};

/// Names of the two seats.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: String,
    pub second: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: "Player 1".to_string(),
            second: "Player 2".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: PlacementMode,
    /// Render boards with column and row numbers
    pub show_header: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: PlacementMode::ColumnDrop,
            show_header: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.first.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first must not be empty".into(),
            ));
        }
        if self.players.second.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second must not be empty".into(),
            ));
        }
        if self.players.first == self.players.second {
            return Err(ConfigError::Validation(
                "players.first and players.second must differ".into(),
            ));
        }
        Ok(())
    }

    /// Start a fresh session with the configured players and mode
    pub fn new_session(&self) -> Session {
        Session::new(
            self.players.first.clone(),
            self.players.second.clone(),
            self.game.mode,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
