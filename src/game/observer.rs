//! Round observers.
//!
//! The state machine never prints or logs per-round detail itself. The
//! driving loop hands every `RoundOutcome` to a `RoundObserver`, which can
//! trace it, record it, or ignore it.

use tracing::info;

use super::round::RoundOutcome;
use super::state::Game;
use crate::core::PlayerId;

/// Receives each round as `auto_play` resolves it.
pub trait RoundObserver {
    /// Called after every round with the game in its post-round state.
    fn on_round(&mut self, game: &Game, outcome: &RoundOutcome);

    /// Called once, after the winning round.
    fn on_complete(&mut self, _game: &Game, _winner: PlayerId) {}
}

/// Ignores everything.
impl RoundObserver for () {
    fn on_round(&mut self, _game: &Game, _outcome: &RoundOutcome) {}
}

/// Observes only when present.
impl<O: RoundObserver> RoundObserver for Option<O> {
    fn on_round(&mut self, game: &Game, outcome: &RoundOutcome) {
        if let Some(inner) = self {
            inner.on_round(game, outcome);
        }
    }

    fn on_complete(&mut self, game: &Game, winner: PlayerId) {
        if let Some(inner) = self {
            inner.on_complete(game, winner);
        }
    }
}

/// Emits one `info` event per round and one for the winner.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn on_round(&mut self, game: &Game, outcome: &RoundOutcome) {
        info!(
            round = game.rounds(),
            player = outcome.player.number(),
            dice = outcome.dice,
            from = %outcome.from,
            to = %outcome.to,
            "{outcome}"
        );
    }

    fn on_complete(&mut self, game: &Game, winner: PlayerId) {
        info!(rounds = game.rounds(), "winner: {winner}");
    }
}

/// Keeps every outcome, in order.
#[derive(Clone, Debug, Default)]
pub struct RoundLog {
    outcomes: Vec<RoundOutcome>,
    winner: Option<PlayerId>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Winner reported by `on_complete`.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Number of rounds that ended on a teleport.
    #[must_use]
    pub fn teleports(&self) -> usize {
        self.outcomes.iter().filter(|o| o.teleport.is_some()).count()
    }
}

impl RoundObserver for RoundLog {
    fn on_round(&mut self, _game: &Game, outcome: &RoundOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn on_complete(&mut self, _game: &Game, winner: PlayerId) {
        self.winner = Some(winner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, ScriptedDice, Tile};
    use crate::rules::Link;

    #[test]
    fn test_round_log_records_in_order() {
        let config = GameConfig::new(12, 4, 2).with_links(vec![Link::new(Tile::new(2), Tile::new(9))]);
        let mut game = Game::with_seed(config, 0).unwrap();
        let mut log = RoundLog::new();

        // P0 lands on 2 and climbs to 9; P1 to 1; P0 9 + 2 = 11 wins
        let winner = game
            .auto_play_with(&mut ScriptedDice::new(vec![3, 2, 2]), &mut log)
            .unwrap();

        assert_eq!(winner, PlayerId::new(0));
        let players: Vec<_> = log.outcomes().iter().map(|o| o.player.index()).collect();
        assert_eq!(players, vec![0, 1, 0]);
        assert_eq!(log.teleports(), 1);
        assert!(log.outcomes()[2].won);
        assert_eq!(log.winner(), Some(winner));
    }

    #[test]
    fn test_absent_observer_sees_nothing() {
        let mut game = Game::with_seed(GameConfig::new(10, 5, 1).without_links(), 0).unwrap();
        let mut observer: Option<RoundLog> = None;

        game.auto_play_with(&mut ScriptedDice::new(vec![5, 5]), &mut observer)
            .unwrap();
        assert!(observer.is_none());
        assert!(game.is_completed());
    }

    #[test]
    fn test_present_observer_forwards() {
        let mut game = Game::with_seed(GameConfig::new(10, 5, 1).without_links(), 0).unwrap();
        let mut observer = Some(RoundLog::new());

        game.auto_play_with(&mut ScriptedDice::new(vec![5, 5]), &mut observer)
            .unwrap();
        let log = observer.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.winner(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_tracing_observer_runs_without_subscriber() {
        let mut game = Game::with_seed(GameConfig::new(30, 6, 3).with_trace(true), 5).unwrap();
        assert!(game.auto_play().is_ok());
    }
}
