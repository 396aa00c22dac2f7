//! Dice sources.
//!
//! The driving loop draws one face per round from a `DiceSource`. Games use
//! their `GameRng`; tests and replays use `ScriptedDice` to take randomness
//! out of the picture entirely.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Anything that can produce die faces.
pub trait DiceSource {
    /// Produce the next face, expected in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fixed sequence of faces, replayed in order and cycled when exhausted.
///
/// ```
/// use tile_race::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![6, 1]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 1);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a script. An empty script always rolls 1.
    pub fn new(faces: Vec<u8>) -> Self {
        Self { faces, cursor: 0 }
    }

    /// How many faces have been rolled so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_dice_cycles() {
        let mut dice = ScriptedDice::new(vec![3, 4, 5]);
        let rolls: Vec<_> = (0..7).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![3, 4, 5, 3, 4, 5, 3]);
        assert_eq!(dice.rolled(), 7);
    }

    #[test]
    fn test_empty_script_rolls_one() {
        let mut dice = ScriptedDice::new(vec![]);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 1);
    }

    #[test]
    fn test_game_rng_is_a_dice_source() {
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);

        let via_trait: Vec<_> = (0..10).map(|_| DiceSource::roll(&mut a)).collect();
        let direct: Vec<_> = (0..10).map(|_| b.roll_die()).collect();

        assert_eq!(via_trait, direct);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn roll_twice(mut source: impl DiceSource) -> (u8, u8) {
            (source.roll(), source.roll())
        }

        let mut dice = ScriptedDice::new(vec![2, 5]);
        assert_eq!(roll_twice(&mut dice), (2, 5));
        assert_eq!(dice.rolled(), 2);
    }
}
