//! A single die.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};

/// A die with a fixed number of faces.
///
/// Dice hold no randomness of their own; every roll draws from the
/// caller's `GameRng`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u8,
}

impl Die {
    /// Create a die. Fails for a zero-sided die.
    pub fn new(sides: u8) -> Result<Self> {
        if sides == 0 {
            return Err(GameError::InvalidSides(sides));
        }
        Ok(Self { sides })
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Lowest face `roll_biased_high` can produce: `floor(sides / 2) + 1`.
    #[must_use]
    pub fn upper_half_floor(&self) -> u8 {
        self.sides / 2 + 1
    }

    /// Uniform face in `[1, sides]`.
    pub fn roll(&self, rng: &mut GameRng) -> u8 {
        rng.gen_range_inclusive(1, self.sides)
    }

    /// Uniform face in `[floor(sides / 2) + 1, sides]`.
    ///
    /// Fails when the die has fewer than two sides.
    pub fn roll_biased_high(&self, rng: &mut GameRng) -> Result<u8> {
        if self.sides < 2 {
            return Err(GameError::BiasedRollUnsupported(self.sides));
        }
        Ok(rng.gen_range_inclusive(self.upper_half_floor(), self.sides))
    }
}
