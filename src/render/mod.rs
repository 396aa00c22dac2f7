//! Plain-text board rendering.
//!
//! Reads only the board layout and the occupancy view of a game. Each tile
//! prints as its zero-padded 1-based label, optionally followed by the
//! sorted 1-based ids of the players on it, e.g. `042[1,3]`. Occupant tags
//! are padded to a common width so columns line up.
//!
//! ```text
//! 010 | 009 | 008 | 007 | 006
//! 001 | 002 | 003 | 004 | 005
//! ```

use std::collections::BTreeMap;

use crate::board::Board;
use crate::core::{PlayerId, Tile};
use crate::game::Game;

/// Separator between cells in a row.
pub const CELL_SEPARATOR: &str = " | ";

/// `[1,3]` for players 0 and 2. Ids are sorted first.
#[must_use]
pub fn occupant_tag(players: &[PlayerId]) -> String {
    let mut numbers: Vec<u16> = players.iter().map(|p| p.number()).collect();
    numbers.sort_unstable();
    let list: Vec<String> = numbers.iter().map(u16::to_string).collect();
    format!("[{}]", list.join(","))
}

/// Render `board` with the given occupants, top row first.
#[must_use]
pub fn render_board<P: AsRef<[PlayerId]>>(board: &Board, occupancy: &BTreeMap<Tile, P>) -> String {
    let tags: BTreeMap<Tile, String> = occupancy
        .iter()
        .filter(|(_, players)| !players.as_ref().is_empty())
        .map(|(&tile, players)| (tile, occupant_tag(players.as_ref())))
        .collect();
    let tag_width = tags.values().map(String::len).max().unwrap_or(0);
    let label_width = board.last_tile().label().len();

    board
        .rows_for_display()
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| {
                    let tag = tags.get(tile).map_or("", String::as_str);
                    format!("{:0>label_width$}{tag:<tag_width$}", tile.label())
                })
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a game's board with its current occupants.
#[must_use]
pub fn render_game(game: &Game) -> String {
    render_board(game.board(), &game.occupancy())
}
