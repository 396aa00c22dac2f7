//! Game configuration.
//!
//! A `GameConfig` describes one game: board size, seats, and either an
//! explicit list of teleport links or `None` to have them generated.
//! Configs are plain data; `validate` checks them and `Game::new` refuses
//! any config that fails validation.
//!
//! Configs can be written by hand in TOML:
//!
//! ```
//! use tile_race::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     tile_count = 36
//!     row_width = 6
//!     player_count = 3
//!
//!     [[links]]
//!     from = 4
//!     to = 20
//! "#).unwrap();
//!
//! assert_eq!(config.tile_count, 36);
//! assert_eq!(config.links.as_ref().map(Vec::len), Some(1));
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::MAX_PLAYERS;
use crate::rules::Link;

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tiles on the track (at least 2).
    pub tile_count: u32,

    /// Tiles per display row (1..=tile_count).
    pub row_width: u32,

    /// Number of players (1-255).
    pub player_count: usize,

    /// Explicit teleport links. `None` generates them from the game RNG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,

    /// Emit a trace line per round from `auto_play`.
    pub trace: bool,

    /// Rounds `auto_play` may run before giving up.
    pub max_rounds: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 100,
            row_width: 10,
            player_count: 2,
            links: None,
            trace: false,
            max_rounds: 10_000,
        }
    }
}

impl GameConfig {
    /// Create a config with generated links and default limits.
    pub fn new(tile_count: u32, row_width: u32, player_count: usize) -> Self {
        Self {
            tile_count,
            row_width,
            player_count,
            ..Self::default()
        }
    }

    /// Parse a config from TOML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML; the result is not
    /// validated.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Use these links instead of generating them.
    #[must_use]
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }

    /// Play without any teleports.
    #[must_use]
    pub fn without_links(self) -> Self {
        self.with_links(Vec::new())
    }

    /// Enable or disable the per-round trace.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set the round limit for `auto_play`.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_count < 2 {
            return Err(ConfigError::TooFewTiles {
                tile_count: self.tile_count,
            });
        }
        if self.row_width == 0 {
            return Err(ConfigError::ZeroRowWidth);
        }
        if self.row_width > self.tile_count {
            return Err(ConfigError::RowWidthTooLarge {
                row_width: self.row_width,
                tile_count: self.tile_count,
            });
        }
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                player_count: self.player_count,
            });
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRoundLimit);
        }
        Ok(())
    }
}
