//! Board layout.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::{ConfigError, Tile};

/// A linear track of `tile_count` tiles folded into rows of `row_width`.
///
/// Rows only matter for display and for rule generation, which spreads
/// links across rows. Movement always follows the flat `0..tile_count`
/// number line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tile_count: u32,
    row_width: u32,
}

impl Board {
    /// Create a board.
    ///
    /// # Errors
    ///
    /// Fails when `tile_count < 2`, `row_width == 0`, or the row is wider
    /// than the board.
    pub fn new(tile_count: u32, row_width: u32) -> Result<Self, ConfigError> {
        if tile_count < 2 {
            return Err(ConfigError::TooFewTiles { tile_count });
        }
        if row_width == 0 {
            return Err(ConfigError::ZeroRowWidth);
        }
        if row_width > tile_count {
            return Err(ConfigError::RowWidthTooLarge { row_width, tile_count });
        }
        Ok(Self { tile_count, row_width })
    }

    #[must_use]
    pub const fn tile_count(&self) -> u32 {
        self.tile_count
    }

    #[must_use]
    pub const fn row_width(&self) -> u32 {
        self.row_width
    }

    /// The winning tile.
    #[must_use]
    pub const fn last_tile(&self) -> Tile {
        Tile(self.tile_count - 1)
    }

    /// Number of rows, counting a short last row.
    #[must_use]
    pub const fn row_count(&self) -> u32 {
        self.tile_count.div_ceil(self.row_width)
    }

    /// Is `tile` on this board?
    #[must_use]
    pub const fn contains(&self, tile: Tile) -> bool {
        tile.0 < self.tile_count
    }

    /// Is `tile` the start or the finish?
    #[must_use]
    pub const fn is_reserved(&self, tile: Tile) -> bool {
        tile.0 == 0 || tile.0 == self.tile_count - 1
    }

    /// Row (0-based, counted from the start) holding `tile`.
    #[must_use]
    pub const fn row_of(&self, tile: Tile) -> u32 {
        tile.0 / self.row_width
    }

    /// Tile indices in `row`, clamped to the last tile.
    ///
    /// Returns an empty range for rows past the end of the board.
    #[must_use]
    pub fn row_band(&self, row: u32) -> RangeInclusive<u32> {
        let start = row.saturating_mul(self.row_width);
        if start >= self.tile_count {
            return RangeInclusive::new(start, start - 1);
        }
        let end = start.saturating_add(self.row_width).min(self.tile_count) - 1;
        start..=end
    }

    /// Rows as printed, top to bottom.
    ///
    /// Tiles are split into rows of `row_width` (the last may be shorter),
    /// odd rows run right-to-left, and the row list is flipped so tile 0
    /// sits in the bottom row, like a physical board read bottom-up.
    ///
    /// ```
    /// use tile_race::board::Board;
    ///
    /// let board = Board::new(7, 3).unwrap();
    /// let rows: Vec<Vec<u32>> = board
    ///     .rows_for_display()
    ///     .into_iter()
    ///     .map(|row| row.into_iter().map(|t| t.index()).collect())
    ///     .collect();
    ///
    /// assert_eq!(rows, vec![vec![6], vec![5, 4, 3], vec![0, 1, 2]]);
    /// ```
    #[must_use]
    pub fn rows_for_display(&self) -> Vec<Vec<Tile>> {
        let mut rows: Vec<Vec<Tile>> = (0..self.row_count())
            .map(|row| {
                let band = self.row_band(row).map(Tile);
                if row % 2 == 1 {
                    band.rev().collect()
                } else {
                    band.collect()
                }
            })
            .collect();

        rows.reverse();
        rows
    }
}
