//! Tile and position identification.
//!
//! ## Tile
//!
//! Tiles are numbered `0..tile_count` internally. Everything user-facing
//! (trace lines, rendered boards) shows them 1-based and zero-padded,
//! so tile `0` prints as `001`.
//!
//! ## Position
//!
//! A player is either off the board (not yet entered) or standing on a tile.
//! Numerically the off-board position is `-1`, which lets a first roll of
//! `d` land on tile `d - 1`.
//!
//! ```
//! use tile_race::core::{Position, Tile};
//!
//! let start = Position::OffBoard;
//! assert_eq!(start.raw(), -1);
//! assert_eq!(Position::OnTile(Tile::new(4)).raw(), 4);
//! assert_eq!(Tile::new(0).label(), "001");
//! ```

use serde::{Deserialize, Serialize};

/// A tile on the track, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(pub u32);

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Zero-padded 3-digit 1-based label.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:03}", u64::from(self.0) + 1)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a player currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered the board (numerically `-1`).
    #[default]
    OffBoard,
    /// Standing on a tile.
    OnTile(Tile),
}

impl Position {
    /// Numeric value: `-1` off the board, otherwise the tile index.
    #[must_use]
    pub const fn raw(self) -> i64 {
        match self {
            Position::OffBoard => -1,
            Position::OnTile(tile) => tile.0 as i64,
        }
    }

    /// The occupied tile, if on the board.
    #[must_use]
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Position::OffBoard => None,
            Position::OnTile(tile) => Some(tile),
        }
    }

    /// Is this player still waiting to enter?
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Position::OffBoard)
    }
}

impl From<Tile> for Position {
    fn from(tile: Tile) -> Self {
        Position::OnTile(tile)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::OffBoard => write!(f, "start"),
            Position::OnTile(tile) => write!(f, "{}", tile),
        }
    }
}
