//! Random teleport generation.
//!
//! Links are generated row by row so every part of the board gets some.
//! Each row may use up to half of its width as endpoints (at least 2 links
//! are attempted). A link always jumps to a different row, and a tile is
//! never reused as an endpoint, so chains and conflicts cannot occur.
//! Attempts that collide are dropped rather than retried; a row coming up
//! short is fine.

use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

use super::teleport::TeleportRules;
use crate::board::Board;
use crate::core::{GameRng, Tile};

/// Fewest link attempts per row.
pub const MIN_LINKS_PER_ROW: u32 = 2;

/// Generates `TeleportRules` for a board.
#[derive(Clone, Copy, Debug)]
pub struct RuleGenerator {
    board: Board,
}

impl RuleGenerator {
    /// Create a generator for `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Upper bound on link attempts in one row: half the row width,
    /// rounded up, but never below `MIN_LINKS_PER_ROW`.
    #[must_use]
    pub fn max_links_per_row(&self) -> u32 {
        self.board.row_width().div_ceil(2).max(MIN_LINKS_PER_ROW)
    }

    /// Tiles in `row` that may be an endpoint: the row's band minus the
    /// start and final tiles. `None` if nothing is left.
    fn eligible(&self, row: u32) -> Option<RangeInclusive<u32>> {
        let band = self.board.row_band(row);
        let lo = (*band.start()).max(1);
        let hi = (*band.end()).min(self.board.last_tile().index() - 1);
        (!band.is_empty() && lo <= hi).then_some(lo..=hi)
    }

    /// Generate a rule table, drawing every random choice from `rng`.
    #[instrument(skip(self, rng), fields(tiles = self.board.tile_count(), row_width = self.board.row_width()))]
    pub fn generate(&self, rng: &mut GameRng) -> TeleportRules {
        let rows = self.board.row_count();
        let mut forward: FxHashMap<Tile, Tile> = FxHashMap::default();
        let mut reverse: FxHashMap<Tile, Tile> = FxHashMap::default();

        if rows < 2 {
            debug!("single row board, no teleports");
            return TeleportRules::empty();
        }

        let max_links = self.max_links_per_row();

        for row in 0..rows {
            let Some(sources) = self.eligible(row) else {
                continue;
            };

            let attempts = rng.gen_range_inclusive(MIN_LINKS_PER_ROW..=max_links);
            let mut accepted = 0u32;

            for _ in 0..attempts {
                let source = Tile(rng.gen_range_inclusive(sources.clone()));

                // Uniform over the other rows
                let mut other = rng.gen_range_inclusive(0..=rows - 2);
                if other >= row {
                    other += 1;
                }
                let Some(targets) = self.eligible(other) else {
                    continue;
                };
                let target = Tile(rng.gen_range_inclusive(targets));

                let used = |tile: &Tile| forward.contains_key(tile) || reverse.contains_key(tile);
                if used(&source) || used(&target) {
                    continue;
                }

                forward.insert(source, target);
                reverse.insert(target, source);
                accepted += 1;
            }

            debug!(row, attempts, accepted, "generated row links");
        }

        debug!(links = forward.len(), "teleport rules generated");
        TeleportRules::from_checked(forward)
    }
}
