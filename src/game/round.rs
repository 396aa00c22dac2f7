//! Game status and round outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};
use crate::rules::Link;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Rounds are still being played.
    InProgress,
    /// A player landed exactly on the final tile.
    Completed {
        /// The player who got there first.
        winner: PlayerId,
    },
}

impl GameStatus {
    /// The winner, once there is one.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Completed { winner } => Some(winner),
        }
    }

    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, GameStatus::Completed { .. })
    }
}

/// Everything that happened in one round.
///
/// `landed` is the position after the dice (and any bounce-back) but before
/// teleporting; `to` is where the player was left standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Who rolled.
    pub player: PlayerId,
    /// The face rolled.
    pub dice: u8,
    /// Position before the roll.
    pub from: Position,
    /// Position after movement, before any teleport.
    pub landed: Position,
    /// The move overshot the final tile and bounced back.
    pub bounced: bool,
    /// The teleport taken, if the player landed on a source tile.
    pub teleport: Option<Link>,
    /// Position stored for the player.
    pub to: Position,
    /// This round won the game.
    pub won: bool,
    /// Whose turn it is next.
    pub next_player: PlayerId,
}

impl RoundOutcome {
    /// A round played after completion: nothing moves.
    pub(crate) fn frozen(player: PlayerId, dice: u8, at: Position, next_player: PlayerId) -> Self {
        Self {
            player,
            dice,
            from: at,
            landed: at,
            bounced: false,
            teleport: None,
            to: at,
            won: false,
            next_player,
        }
    }

    /// Did the player's position change?
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolled {}: {} -> {}", self.player, self.dice, self.from, self.landed)?;
        if self.bounced {
            write!(f, " (bounced)")?;
        }
        if let Some(link) = self.teleport {
            write!(f, ", {:?} to {}", link.kind(), link.to)?;
        }
        if self.won {
            write!(f, ", wins")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert!(!GameStatus::InProgress.is_completed());

        let done = GameStatus::Completed { winner: PlayerId::new(2) };
        assert_eq!(done.winner(), Some(PlayerId::new(2)));
        assert!(done.is_completed());
    }

    #[test]
    fn test_frozen_round_does_not_move() {
        let at = Position::OnTile(Tile::new(99));
        let outcome = RoundOutcome::frozen(PlayerId::new(1), 4, at, PlayerId::new(0));
        assert!(!outcome.moved());
        assert!(!outcome.won);
        assert_eq!(outcome.to, at);
    }

    #[test]
    fn test_display() {
        let outcome = RoundOutcome {
            player: PlayerId::new(0),
            dice: 3,
            from: Position::OnTile(Tile::new(47)),
            landed: Position::OnTile(Tile::new(50)),
            bounced: false,
            teleport: Some(Link::new(Tile::new(50), Tile::new(11))),
            to: Position::OnTile(Tile::new(11)),
            won: false,
            next_player: PlayerId::new(1),
        };
        assert_eq!(outcome.to_string(), "Player 1 rolled 3: 048 -> 051, Snake to 012");
        assert!(outcome.moved());
    }
}
