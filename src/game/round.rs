//! Round generation: the ordered color sequence for one cycle.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::color::GameColor;

/// One cycle of colors: distinct random distractors followed by the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    colors: Vec<GameColor>,
}

impl Round {
    /// Sample `distractors` distinct colors (uniformly, without replacement)
    /// and append the target as the final entry.
    ///
    /// Every call draws a fresh independent sequence from the RNG.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, distractors: usize) -> Self {
        let mut pool = GameColor::DISTRACTORS;
        let count = distractors.min(pool.len());
        // Partial Fisher-Yates: unbiased, unlike the sort-by-coin-flip
        // shuffle this replaces.
        let (picked, _) = pool.partial_shuffle(rng, count);
        let mut colors = picked.to_vec();
        colors.push(GameColor::Green);
        Round { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `cursor`, if the round still has one there.
    pub fn get(&self, cursor: usize) -> Option<GameColor> {
        self.colors.get(cursor).copied()
    }

    pub fn colors(&self) -> &[GameColor] {
        &self.colors
    }
}
