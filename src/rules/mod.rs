//! Teleport rules.
//!
//! - `TeleportRules`: the source → destination table the game consults
//!   after every move
//! - `Link`: one entry, used for hand-written configs
//! - `RuleGenerator`: random, non-overlapping links spread over the rows
//!
//! Whichever way a table is built, applying it is always a single hop.

pub mod teleport;
pub mod generator;

pub use teleport::{Link, LinkKind, TeleportRules};
pub use generator::{RuleGenerator, MIN_LINKS_PER_ROW};
