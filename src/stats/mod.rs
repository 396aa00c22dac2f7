//! Win statistics across many independent games.
//!
//! Every game in a batch gets its own `GameRng` stream derived from the
//! batch seed and the game's index, so a batch is reproducible no matter
//! how rayon schedules it and no generator is shared between threads.
//!
//! ```
//! use tile_race::core::GameConfig;
//! use tile_race::stats::{run_batch, BatchConfig};
//!
//! let config = BatchConfig::new(GameConfig::new(100, 10, 4), 50).with_seed(1);
//! let tally = run_batch(&config).unwrap();
//!
//! assert_eq!(tally.games(), 50);
//! assert_eq!(tally.ranking().iter().map(|(_, wins)| u64::from(*wins)).sum::<u64>(), 50);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};
use crate::game::Game;

const RULE: &str = "-------------------------------------------------------";

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Template for every game in the batch.
    pub game: GameConfig,

    /// Number of games to play.
    pub games: usize,

    /// Base seed; game `i` uses stream `i` of this seed.
    pub seed: u64,
}

impl BatchConfig {
    /// Create a batch config with seed 0.
    pub fn new(game: GameConfig, games: usize) -> Self {
        Self { game, games, seed: 0 }
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Wins per player over a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    wins: PlayerMap<u32>,
    games: u64,
}

impl WinTally {
    /// An empty tally for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            wins: PlayerMap::with_value(player_count, 0),
            games: 0,
        }
    }

    /// Count one game won by `winner`.
    pub fn record(&mut self, winner: PlayerId) {
        self.wins[winner] += 1;
        self.games += 1;
    }

    /// Combine two tallies over the same seats.
    #[must_use]
    pub fn merge(self, other: &Self) -> Self {
        Self {
            wins: self.wins.zip_with(&other.wins, |a, b| *a += *b),
            games: self.games + other.games,
        }
    }

    /// Games counted.
    #[must_use]
    pub fn games(&self) -> u64 {
        self.games
    }

    /// Wins for one player.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins[player]
    }

    /// Fraction of games `player` won, 0.0 for an empty tally.
    #[must_use]
    pub fn share(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / self.games as f64
        }
    }

    /// Players with at least one win, most wins first; ties by seat.
    #[must_use]
    pub fn ranking(&self) -> Vec<(PlayerId, u32)> {
        let mut ranking: Vec<(PlayerId, u32)> = self
            .wins
            .iter()
            .filter(|(_, wins)| **wins > 0)
            .map(|(player, &wins)| (player, wins))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranking
    }
}

impl std::fmt::Display for WinTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Result of {} games", self.games)?;
        writeln!(f, "{RULE}")?;
        for (player, wins) in self.ranking() {
            writeln!(f, "{player}: {wins}")?;
        }
        Ok(())
    }
}

/// Play `config.games` games in parallel and tally the winners.
///
/// # Errors
///
/// Fails if the game config is invalid or any game hits its round limit.
#[instrument(skip(config), fields(games = config.games, seed = config.seed))]
pub fn run_batch(config: &BatchConfig) -> Result<WinTally, GameError> {
    config.game.validate()?;
    let base = GameRng::new(config.seed);

    let winners: Vec<PlayerId> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let mut game = Game::new(config.game.clone(), base.stream(index as u64))?;
            game.auto_play()
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    let mut tally = WinTally::new(config.game.player_count);
    for winner in winners {
        tally.record(winner);
    }

    info!(games = tally.games(), "batch complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;

    #[test]
    fn test_tally_ranking_sorted_descending() {
        let mut tally = WinTally::new(4);
        for p in [2, 0, 2, 3, 2, 0, 3] {
            tally.record(PlayerId::new(p));
        }

        assert_eq!(tally.games(), 7);
        assert_eq!(
            tally.ranking(),
            vec![(PlayerId::new(2), 3), (PlayerId::new(0), 2), (PlayerId::new(3), 2)]
        );
        assert_eq!(tally.wins(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_tally_share() {
        let mut tally = WinTally::new(2);
        assert_eq!(tally.share(PlayerId::new(0)), 0.0);

        tally.record(PlayerId::new(0));
        tally.record(PlayerId::new(0));
        tally.record(PlayerId::new(1));
        tally.record(PlayerId::new(0));
        assert!((tally.share(PlayerId::new(0)) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_tally_merge() {
        let mut a = WinTally::new(3);
        a.record(PlayerId::new(0));
        let mut b = WinTally::new(3);
        b.record(PlayerId::new(2));
        b.record(PlayerId::new(0));

        let merged = a.merge(&b);
        assert_eq!(merged.games(), 3);
        assert_eq!(merged.wins(PlayerId::new(0)), 2);
        assert_eq!(merged.wins(PlayerId::new(2)), 1);
    }

    #[test]
    fn test_tally_report() {
        let mut tally = WinTally::new(3);
        tally.record(PlayerId::new(1));
        tally.record(PlayerId::new(1));
        tally.record(PlayerId::new(0));

        let report = tally.to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Result of 3 games");
        assert_eq!(&lines[3..], &["Player 2: 2", "Player 1: 1"]);
    }

    #[test]
    fn test_run_batch_counts_every_game() {
        let config = BatchConfig::new(GameConfig::new(100, 10, 3), 40).with_seed(8);
        let tally = run_batch(&config).unwrap();

        assert_eq!(tally.games(), 40);
        let total: u32 = PlayerId::all(3).map(|p| tally.wins(p)).sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn test_run_batch_is_reproducible() {
        let config = BatchConfig::new(GameConfig::new(64, 8, 4), 30).with_seed(123);
        assert_eq!(run_batch(&config).unwrap(), run_batch(&config).unwrap());
    }

    #[test]
    fn test_run_batch_rejects_bad_config() {
        let config = BatchConfig::new(GameConfig::new(10, 0, 2), 5);
        assert_eq!(run_batch(&config), Err(GameError::Config(ConfigError::ZeroRowWidth)));
    }

    #[test]
    fn test_empty_batch() {
        let tally = run_batch(&BatchConfig::new(GameConfig::default(), 0)).unwrap();
        assert_eq!(tally.games(), 0);
        assert!(tally.ranking().is_empty());
    }
}
