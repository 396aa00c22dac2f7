//! Teleport links and the rule table.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::board::Board;
use crate::core::{RulesError, Tile};

/// Whether a link helps or hurts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Moves the player forward.
    Ladder,
    /// Moves the player back.
    Snake,
}

/// A directed teleport from one tile to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Landing here triggers the teleport.
    pub from: Tile,
    /// Where the player ends up.
    pub to: Tile,
}

impl Link {
    /// Create a link.
    #[must_use]
    pub const fn new(from: Tile, to: Tile) -> Self {
        Self { from, to }
    }

    /// Ladder if it moves forward, snake otherwise.
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        if self.to > self.from {
            LinkKind::Ladder
        } else {
            LinkKind::Snake
        }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Source tile → destination tile.
///
/// A table built through `from_links` is guaranteed to:
/// - keep every endpoint on the board
/// - never touch the start tile or the final tile
/// - have one link per source, none pointing at its own source
/// - contain no chains, so applying a rule is always exactly one hop
///
/// Several sources may share a target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeleportRules {
    links: FxHashMap<Tile, Tile>,
}

impl TeleportRules {
    /// A table with no links.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate hand-written links against `board`.
    ///
    /// # Errors
    ///
    /// Returns the first invalid link found, in input order.
    #[instrument(skip(links), fields(tiles = board.tile_count()))]
    pub fn from_links(board: &Board, links: impl IntoIterator<Item = Link>) -> Result<Self, RulesError> {
        let links: Vec<Link> = links.into_iter().collect();
        let mut table = FxHashMap::default();

        for link in &links {
            for tile in [link.from, link.to] {
                if !board.contains(tile) {
                    return Err(RulesError::OutOfBoard {
                        tile,
                        tile_count: board.tile_count(),
                    });
                }
                if board.is_reserved(tile) {
                    return Err(RulesError::ReservedTile(tile));
                }
            }
            if link.from == link.to {
                return Err(RulesError::SelfLoop(link.from));
            }
            if table.insert(link.from, link.to).is_some() {
                return Err(RulesError::DuplicateSource(link.from));
            }
        }

        if let Some(link) = links.iter().find(|link| table.contains_key(&link.to)) {
            return Err(RulesError::Chain {
                from: link.from,
                via: link.to,
            });
        }

        Ok(Self { links: table })
    }

    /// Wrap a table the generator has already checked.
    pub(crate) fn from_checked(links: FxHashMap<Tile, Tile>) -> Self {
        Self { links }
    }

    /// Where landing on `tile` sends the player, if anywhere.
    #[must_use]
    pub fn destination(&self, tile: Tile) -> Option<Tile> {
        self.links.get(&tile).copied()
    }

    /// Number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// All links, ordered by source tile.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|(&from, &to)| Link::new(from, to))
            .collect();
        links.sort_unstable_by_key(|link| link.from);
        links
    }

    /// Number of links of the given kind.
    #[must_use]
    pub fn count(&self, kind: LinkKind) -> usize {
        self.links().iter().filter(|link| link.kind() == kind).count()
    }

    /// Every tile used as a source or a target.
    #[must_use]
    pub fn endpoints(&self) -> FxHashSet<Tile> {
        self.links
            .iter()
            .flat_map(|(&from, &to)| [from, to])
            .collect()
    }
}
