//! Property tests over random board shapes, seeds and dice scripts.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use tile_race::board::Board;
use tile_race::core::{GameConfig, GameRng, PlayerId, ScriptedDice};
use tile_race::game::{Game, RoundLog};
use tile_race::rules::{RuleGenerator, TeleportRules};

/// Tile count and a row width that fits it.
fn board_shape() -> impl Strategy<Value = (u32, u32)> {
    (2u32..300).prop_flat_map(|tiles| (Just(tiles), 1..=tiles))
}

fn dice_script() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 1..64)
}

proptest! {
    #[test]
    fn prop_generated_rules_never_overlap((tiles, width) in board_shape(), seed in any::<u64>()) {
        let board = Board::new(tiles, width).unwrap();
        let rules = RuleGenerator::new(board).generate(&mut GameRng::new(seed));

        let mut endpoints = FxHashSet::default();
        for link in rules.links() {
            prop_assert!(endpoints.insert(link.from));
            prop_assert!(endpoints.insert(link.to));
            prop_assert!(!board.is_reserved(link.from));
            prop_assert!(!board.is_reserved(link.to));
            prop_assert!(board.contains(link.to));
        }
        prop_assert_eq!(endpoints.len(), rules.len() * 2);
    }

    #[test]
    fn prop_generated_rules_validate((tiles, width) in board_shape(), seed in any::<u64>()) {
        let board = Board::new(tiles, width).unwrap();
        let rules = RuleGenerator::new(board).generate(&mut GameRng::new(seed));
        prop_assert_eq!(TeleportRules::from_links(&board, rules.links()), Ok(rules));
    }

    #[test]
    fn prop_positions_stay_in_bounds(
        (tiles, width) in board_shape(),
        players in 1usize..8,
        seed in any::<u64>(),
        script in dice_script(),
    ) {
        let mut game = Game::with_seed(GameConfig::new(tiles, width, players), seed).unwrap();
        let mut dice = ScriptedDice::new(script);
        let last = i64::from(tiles) - 1;

        let mut player = PlayerId::new(0);
        for _ in 0..200 {
            let face = tile_race::core::DiceSource::roll(&mut dice);
            player = game.play_round(player, face).unwrap();
            for position in game.positions() {
                prop_assert!((-1..=last).contains(&position.raw()));
            }
        }
    }

    #[test]
    fn prop_completion_freezes_positions(
        players in 1usize..6,
        seed in any::<u64>(),
        script in dice_script(),
    ) {
        let mut game = Game::with_seed(GameConfig::new(40, 8, players), seed).unwrap();
        let mut dice = ScriptedDice::new(script);
        let mut player = PlayerId::new(0);
        let mut frozen = None;

        for _ in 0..400 {
            let face = tile_race::core::DiceSource::roll(&mut dice);
            player = game.play_round(player, face).unwrap();
            if let Some((winner, positions)) = frozen.as_ref() {
                prop_assert_eq!(Some(*winner), game.winner());
                prop_assert_eq!(positions, &game.positions());
            } else if let Some(winner) = game.winner() {
                frozen = Some((winner, game.positions()));
            }
        }
    }

    #[test]
    fn prop_scripted_games_are_deterministic(seed in any::<u64>(), script in dice_script()) {
        let config = GameConfig::new(60, 6, 3).with_max_rounds(2_000);
        let run = || {
            let mut game = Game::with_seed(config.clone(), seed).unwrap();
            let mut log = RoundLog::new();
            let result = game.auto_play_with(&mut ScriptedDice::new(script.clone()), &mut log);
            (result, log.outcomes().to_vec())
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn prop_auto_play_single_winner(seed in any::<u64>(), players in 1usize..10) {
        let mut game = Game::with_seed(GameConfig::new(100, 10, players), seed).unwrap();
        let winner = game.auto_play().unwrap();

        prop_assert!(game.is_completed());
        prop_assert!(winner.index() < players);
        prop_assert_eq!(game.winner(), Some(winner));
    }
}
