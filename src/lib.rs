//! # tile-race
//!
//! A seedable engine for Snakes-and-Ladders style races: players roll a die
//! and move along a linear track of tiles, overshooting the last tile
//! bounces them back, and teleport links (ladders and snakes) move them
//! once more after they land. First to land exactly on the last tile wins.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: every game owns a `GameRng`. Same seed, same
//!    teleports, same game. Tests can swap dice for a `ScriptedDice`.
//!
//! 2. **N-Player First**: 1-255 players, strict round-robin turns.
//!
//! 3. **Pure state machine**: `Game` never prints. Per-round diagnostics go
//!    through a `RoundObserver` supplied by the driver.
//!
//! ## Modules
//!
//! - `core`: Tiles, players, RNG, dice, configuration, errors
//! - `board`: Board layout queries
//! - `rules`: Teleport tables and the rule generator
//! - `game`: Turn state machine, round outcomes, observers
//! - `render`: Plain-text board rendering
//! - `stats`: Parallel batch win statistics

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod render;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DiceSource, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap,
    Position, RulesError, ScriptedDice, Tile,
};

pub use crate::board::Board;

pub use crate::rules::{Link, LinkKind, RuleGenerator, TeleportRules};

pub use crate::game::{Game, GameStatus, RoundLog, RoundObserver, RoundOutcome, TracingObserver};

pub use crate::stats::{run_batch, BatchConfig, WinTally};
