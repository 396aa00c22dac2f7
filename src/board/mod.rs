//! Board description and layout queries.
//!
//! A `Board` is just a tile count and a row width. It knows nothing about
//! players or teleports; rendering and rule generation ask it how tiles are
//! grouped into rows.

mod layout;

pub use layout::Board;
