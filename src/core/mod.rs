//! Core engine types: tiles, players, RNG, dice, configuration, errors.
//!
//! Everything above this module (board, rules, game) is built from these
//! pieces and never reaches for global state.

pub mod tile;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use tile::{Position, Tile};
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, DIE_FACES};
pub use dice::{DiceSource, ScriptedDice};
pub use config::GameConfig;
pub use error::{ConfigError, GameError, RulesError};
