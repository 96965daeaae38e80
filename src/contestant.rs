//! Contestants: identity, score, dice and the way they roll.
//!
//! A contestant's [`Role`] decides how its outcome is produced:
//!
//! - **Fair**: both dice rolled uniformly.
//! - **Biased**: with the configured cheat probability, one die picked at
//!   random is rolled in the upper half of its range and the other fairly.
//!   Otherwise both dice are fair.
//!
//! Each contestant owns its dice and its own RNG stream; nothing is shared
//! with the opponent.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, Result};
use crate::dice::{Die, RollOutcome};

/// How a contestant's dice behave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Fair,
    Biased,
}

/// A participant in a dice session.
#[derive(Clone, Debug)]
pub struct Contestant {
    name: String,
    role: Role,
    score: u32,
    current_outcome: RollOutcome,
    dice: [Die; 2],
    cheat_probability: f64,
    rng: GameRng,
}

impl Contestant {
    /// Create a contestant with a zero score and an unrolled `(0, 0)` outcome.
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn new(
        name: impl Into<String>,
        role: Role,
        config: &GameConfig,
        rng: GameRng,
    ) -> Result<Self> {
        config.validate()?;
        let die = Die::new(config.sides)?;

        Ok(Self {
            name: name.into(),
            role,
            score: 0,
            current_outcome: RollOutcome::default(),
            dice: [die, die],
            cheat_probability: config.cheat_probability,
            rng,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Latest outcome, `(0, 0)` before the first roll.
    #[must_use]
    pub fn current_outcome(&self) -> RollOutcome {
        self.current_outcome
    }

    #[must_use]
    pub fn dice(&self) -> &[Die; 2] {
        &self.dice
    }

    /// Roll both dice according to this contestant's role.
    ///
    /// The outcome is returned and also kept as `current_outcome`.
    pub fn produce_outcome(&mut self) -> Result<RollOutcome> {
        let [left, right] = self.dice;
        let outcome = match self.role {
            Role::Fair => RollOutcome::new(left.roll(&mut self.rng), right.roll(&mut self.rng)),
            Role::Biased if self.rng.gen_bool(self.cheat_probability) => {
                let outcome = if self.rng.gen_bool(0.5) {
                    let high = left.roll_biased_high(&mut self.rng)?;
                    RollOutcome::new(high, right.roll(&mut self.rng))
                } else {
                    let low = left.roll(&mut self.rng);
                    RollOutcome::new(low, right.roll_biased_high(&mut self.rng)?)
                };
                debug!("{} skewed a die: {}", self.name, outcome);
                outcome
            }
            Role::Biased => RollOutcome::new(left.roll(&mut self.rng), right.roll(&mut self.rng)),
        };

        debug!("{} rolled {}", self.name, outcome);
        self.current_outcome = outcome;
        Ok(outcome)
    }

    /// Award one point.
    pub fn record_win(&mut self) {
        self.score += 1;
    }
}

impl std::fmt::Display for Contestant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {}, points = {}", self.name, self.score)
    }
}
