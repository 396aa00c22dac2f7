//! The game: turn state machine, round outcomes and observers.
//!
//! ## Lifecycle
//!
//! A `Game` starts `InProgress` with every player off the board. Each
//! round moves one player; the first to land exactly on the final tile
//! moves the game to `Completed`, after which positions are frozen.
//!
//! ```
//! use tile_race::core::{GameConfig, PlayerId};
//! use tile_race::game::Game;
//!
//! let mut game = Game::with_seed(GameConfig::new(100, 10, 4), 7).unwrap();
//! let winner = game.auto_play().unwrap();
//!
//! assert!(game.is_completed());
//! assert_eq!(game.winner(), Some(winner));
//! ```

mod state;
mod round;
mod observer;

pub use state::{Game, Occupants};
pub use round::{GameStatus, RoundOutcome};
pub use observer::{RoundLog, RoundObserver, TracingObserver};
