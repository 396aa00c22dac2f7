//! Error types.
//!
//! Every failure here is a deterministic configuration or programming
//! error. Nothing is retryable.

use super::player::PlayerId;
use super::tile::Tile;

/// Invalid construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Fewer than two tiles.
    #[display("tile count must be at least 2, got {tile_count}")]
    TooFewTiles {
        /// The rejected tile count.
        tile_count: u32,
    },

    /// Row width of zero.
    #[display("row width must be at least 1")]
    ZeroRowWidth,

    /// Row width wider than the whole board.
    #[display("row width {row_width} exceeds tile count {tile_count}")]
    RowWidthTooLarge {
        /// The rejected row width.
        row_width: u32,
        /// The board's tile count.
        tile_count: u32,
    },

    /// No players.
    #[display("a game needs at least 1 player")]
    NoPlayers,

    /// More players than `PlayerId` can address.
    #[display("at most 255 players supported, got {player_count}")]
    TooManyPlayers {
        /// The rejected player count.
        player_count: usize,
    },

    /// A round limit of zero would stop every game before it starts.
    #[display("max rounds must be at least 1")]
    ZeroRoundLimit,

    /// A configuration file could not be parsed.
    #[display("could not parse config: {_0}")]
    Parse(String),
}

impl std::error::Error for ConfigError {}

/// Invalid explicit teleport links.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// An endpoint lies past the last tile.
    #[display("tile {tile} is outside a board of {tile_count} tiles")]
    OutOfBoard {
        /// The offending endpoint.
        tile: Tile,
        /// The board's tile count.
        tile_count: u32,
    },

    /// The start tile or the final tile used as an endpoint.
    #[display("tile {_0} is reserved and cannot be a teleport endpoint")]
    ReservedTile(Tile),

    /// A link from a tile to itself.
    #[display("tile {_0} teleports to itself")]
    SelfLoop(Tile),

    /// The same source listed twice.
    #[display("tile {_0} has more than one teleport")]
    DuplicateSource(Tile),

    /// A link whose target is itself a source.
    #[display("teleport {from} -> {via} chains into another teleport")]
    Chain {
        /// Source of the first link.
        from: Tile,
        /// Target of the first link, also a source.
        via: Tile,
    },
}

impl std::error::Error for RulesError {}

/// Errors raised while building or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Construction parameters were invalid.
    #[display("invalid configuration: {_0}")]
    #[from]
    Config(ConfigError),

    /// Explicit links were invalid.
    #[display("invalid teleport rules: {_0}")]
    #[from]
    Rules(RulesError),

    /// `play_round` for a player who is not seated.
    #[display("{player} is out of range for a {player_count}-player game")]
    PlayerOutOfRange {
        /// The requested player.
        player: PlayerId,
        /// Players in the game.
        player_count: usize,
    },

    /// A die face outside `1..=6`.
    #[display("die face {_0} is not in 1..=6")]
    InvalidDice(u8),

    /// `auto_play` hit its round limit without a winner.
    #[display("no winner after {_0} rounds")]
    RoundLimit(u64),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(e) => Some(e),
            GameError::Rules(e) => Some(e),
            _ => None,
        }
    }
}
