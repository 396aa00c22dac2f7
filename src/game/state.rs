//! The turn state machine.

use im::Vector;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

use super::observer::{RoundObserver, TracingObserver};
use super::round::{GameStatus, RoundOutcome};
use crate::board::Board;
use crate::core::{
    DiceSource, GameConfig, GameError, GameRng, Player, PlayerId, Position, Tile, DIE_FACES,
};
use crate::rules::{Link, RuleGenerator, TeleportRules};

/// Context name for the rule generation stream.
const RULES_CONTEXT: &str = "teleport-rules";

/// Players standing on one tile, in id order.
pub type Occupants = SmallVec<[PlayerId; 4]>;

/// One game: board, teleports, players and the outcome.
///
/// Players are kept in an `im::Vector` of immutable records; a round
/// replaces the mover's record, so cloning a `Game` to snapshot it is cheap.
///
/// `Game` has no interior mutability. `play_round` takes `&mut self`, so
/// concurrent mutation of one game is ruled out by the borrow checker;
/// independent games can run on separate threads.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    rules: TeleportRules,
    players: Vector<Player>,
    status: GameStatus,
    current: PlayerId,
    rounds: u64,
    rng: GameRng,
}

impl Game {
    /// Create a game.
    ///
    /// When `config.links` is `None`, teleports are generated from a
    /// context stream of `rng`, so the same seed gives the same board.
    /// Dice are drawn from `rng` itself.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` for bad parameters and
    /// `GameError::Rules` for invalid explicit links.
    #[instrument(skip(config, rng), fields(tiles = config.tile_count, players = config.player_count, seed = rng.seed()))]
    pub fn new(config: GameConfig, rng: GameRng) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(config.tile_count, config.row_width)?;

        let rules = match &config.links {
            Some(links) => TeleportRules::from_links(&board, links.iter().copied())?,
            None => RuleGenerator::new(board).generate(&mut rng.for_context(RULES_CONTEXT)),
        };

        let players = std::iter::repeat(Player::new())
            .take(config.player_count)
            .collect();

        Ok(Self {
            config,
            board,
            rules,
            players,
            status: GameStatus::InProgress,
            current: PlayerId::new(0),
            rounds: 0,
            rng,
        })
    }

    /// Create a game with a fresh `GameRng` from `seed`.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, GameRng::new(seed))
    }

    // === Read-only views ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> &TeleportRules {
        &self.rules
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player records in turn order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// A player's position, or `None` if no such player.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<Position> {
        self.players.get(player.index()).map(Player::position)
    }

    /// Every player's position in turn order.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.players.iter().map(Player::position).collect()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Whose turn `auto_play` takes next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Rounds played so far, including ignored post-completion rounds.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Tiles with at least one player on them, with their occupants.
    ///
    /// Players who have not entered the board are left out.
    #[must_use]
    pub fn occupancy(&self) -> BTreeMap<Tile, Occupants> {
        let mut occupancy: BTreeMap<Tile, Occupants> = BTreeMap::new();
        for (index, player) in self.players.iter().enumerate() {
            if let Some(tile) = player.position().tile() {
                occupancy.entry(tile).or_default().push(PlayerId::new(index as u8));
            }
        }
        occupancy
    }

    // === Transitions ===

    /// Play one round for `player` with a die showing `dice`, returning
    /// the next player in the rotation.
    ///
    /// # Errors
    ///
    /// `PlayerOutOfRange` for an unseated player, `InvalidDice` for a
    /// face outside `1..=6`.
    pub fn play_round(&mut self, player: PlayerId, dice: u8) -> Result<PlayerId, GameError> {
        self.step(player, dice).map(|outcome| outcome.next_player)
    }

    /// Play one round and report everything that happened.
    ///
    /// 1. Move `dice` tiles forward from the current position
    ///    (off-board counts as `-1`).
    /// 2. Landing exactly on the final tile wins.
    /// 3. Overshooting bounces back by the excess, clamped at tile 0.
    /// 4. Otherwise, a teleport on the landing tile is applied once.
    ///
    /// After completion, rounds are accepted but move nobody.
    ///
    /// # Errors
    ///
    /// See [`Game::play_round`].
    pub fn step(&mut self, player: PlayerId, dice: u8) -> Result<RoundOutcome, GameError> {
        let player_count = self.player_count();
        let Some(record) = self.players.get(player.index()).copied() else {
            return Err(GameError::PlayerOutOfRange { player, player_count });
        };
        if !DIE_FACES.contains(&dice) {
            return Err(GameError::InvalidDice(dice));
        }

        let next_player = player.next(player_count);
        self.rounds += 1;
        self.current = next_player;

        let from = record.position();
        if let GameStatus::Completed { winner } = self.status {
            warn!(%player, %winner, "round played after completion, ignoring");
            return Ok(RoundOutcome::frozen(player, dice, from, next_player));
        }

        let last = i64::from(self.board.last_tile().index());
        let proposed = from.raw() + i64::from(dice);

        let (landed, bounced) = if proposed > last {
            ((last - (proposed - last)).max(0), true)
        } else {
            (proposed, false)
        };
        // `landed` is within 0..=last here
        let landed = Tile(landed as u32);
        let won = landed == self.board.last_tile();

        let teleport = if won {
            None
        } else {
            self.rules
                .destination(landed)
                .map(|to| Link::new(landed, to))
        };
        let to = Position::OnTile(teleport.map_or(landed, |link| link.to));

        self.players.set(player.index(), record.moved_to(to));
        if won {
            self.status = GameStatus::Completed { winner: player };
        }

        Ok(RoundOutcome {
            player,
            dice,
            from,
            landed: Position::OnTile(landed),
            bounced,
            teleport,
            to,
            won,
            next_player,
        })
    }

    /// Play with the game's own dice until someone wins.
    ///
    /// Per-round trace lines are emitted when `config.trace` is set.
    ///
    /// # Errors
    ///
    /// `RoundLimit` if `config.max_rounds` rounds pass without a winner.
    pub fn auto_play(&mut self) -> Result<PlayerId, GameError> {
        let mut observer = self.config.trace.then_some(TracingObserver);
        self.drive(|game| game.rng.roll_die(), &mut observer)
    }

    /// Play with `dice` until someone wins, reporting each round to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// `RoundLimit` if `config.max_rounds` rounds pass without a winner;
    /// `InvalidDice` if `dice` produces a face outside `1..=6`.
    pub fn auto_play_with(
        &mut self,
        dice: &mut impl DiceSource,
        observer: &mut impl RoundObserver,
    ) -> Result<PlayerId, GameError> {
        self.drive(|_| dice.roll(), observer)
    }

    fn drive(
        &mut self,
        mut roll: impl FnMut(&mut Self) -> u8,
        observer: &mut impl RoundObserver,
    ) -> Result<PlayerId, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            if self.rounds >= self.config.max_rounds {
                warn!(rounds = self.rounds, "round limit reached without a winner");
                return Err(GameError::RoundLimit(self.rounds));
            }

            let face = roll(self);
            let outcome = self.step(self.current, face)?;
            observer.on_round(self, &outcome);

            if outcome.won {
                info!(winner = %outcome.player, rounds = self.rounds, "game completed");
                observer.on_complete(self, outcome.player);
            }
        }
    }
}
