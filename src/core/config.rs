//! Session configuration.
//!
//! Every rule parameter lives here rather than in free-floating constants,
//! so independent sessions can run side by side with different settings.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Faces on each die.
pub const DEFAULT_SIDES: u8 = 6;

/// Chance that the biased contestant skews one die upward in a round.
pub const DEFAULT_CHEAT_PROBABILITY: f64 = 0.7;

/// Complete session configuration.
///
/// ```
/// use cheaters_dice::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7).with_tokens("roll", "quit");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.sides, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Faces per die.
    pub sides: u8,

    /// Probability in `[0, 1]` that the biased contestant cheats on a roll.
    pub cheat_probability: f64,

    /// Token the interactive contestant enters to roll.
    pub roll_token: String,

    /// Token the interactive contestant enters to quit.
    pub quit_token: String,

    /// Display name of the automatic contestant.
    pub computer_name: String,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            cheat_probability: DEFAULT_CHEAT_PROBABILITY,
            roll_token: "r".to_string(),
            quit_token: "q".to_string(),
            computer_name: "COMPUTER".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the number of faces per die.
    #[must_use]
    pub fn with_sides(mut self, sides: u8) -> Self {
        self.sides = sides;
        self
    }

    /// Set the cheat probability of the biased contestant.
    #[must_use]
    pub fn with_cheat_probability(mut self, probability: f64) -> Self {
        self.cheat_probability = probability;
        self
    }

    /// Set the roll and quit tokens.
    #[must_use]
    pub fn with_tokens(mut self, roll: impl Into<String>, quit: impl Into<String>) -> Self {
        self.roll_token = roll.into();
        self.quit_token = quit.into();
        self
    }

    /// Set the automatic contestant's name.
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = name.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.sides == 0 {
            return Err(GameError::InvalidSides(self.sides));
        }
        if self.sides < 2 {
            return Err(GameError::BiasedRollUnsupported(self.sides));
        }
        let p = self.cheat_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(GameError::InvalidProbability(self.cheat_probability));
        }

        let roll = self.roll_token.trim();
        let quit = self.quit_token.trim();
        if roll.is_empty() {
            return Err(GameError::EmptyToken("roll"));
        }
        if quit.is_empty() {
            return Err(GameError::EmptyToken("quit"));
        }
        if roll.eq_ignore_ascii_case(quit) {
            return Err(GameError::DuplicateTokens(roll.to_lowercase()));
        }

        Ok(())
    }
}
