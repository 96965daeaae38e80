//! Round resolution between two outcomes.
//!
//! Precedence, in order:
//! 1. A double beats a non-double, whatever the totals.
//! 2. Two doubles compare by the strict partial order of `RollOutcome`;
//!    incomparable doubles draw.
//! 3. Two non-doubles compare by total; equal totals draw.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::Seat;
use crate::dice::RollOutcome;

/// Result of one resolved round, relative to initiative order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    /// The contestant who acted first wins.
    FirstWins,
    /// The contestant who acted second wins.
    SecondWins,
    /// Nobody scores.
    Draw,
}

impl RoundResult {
    /// Winning seat given the round's initiative order.
    #[must_use]
    pub fn winner(self, order: [Seat; 2]) -> Option<Seat> {
        match self {
            RoundResult::FirstWins => Some(order[0]),
            RoundResult::SecondWins => Some(order[1]),
            RoundResult::Draw => None,
        }
    }

    /// Same result seen from the other side of the table.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            RoundResult::FirstWins => RoundResult::SecondWins,
            RoundResult::SecondWins => RoundResult::FirstWins,
            RoundResult::Draw => RoundResult::Draw,
        }
    }

    fn from_ordering(ordering: Option<Ordering>) -> Self {
        match ordering {
            Some(Ordering::Greater) => RoundResult::FirstWins,
            Some(Ordering::Less) => RoundResult::SecondWins,
            Some(Ordering::Equal) | None => RoundResult::Draw,
        }
    }
}

/// Decide a round from the first and second contestants' outcomes.
///
/// ```
/// use cheaters_dice::dice::RollOutcome;
/// use cheaters_dice::rules::{resolve, RoundResult};
///
/// // Double beats a higher total
/// let result = resolve(RollOutcome::new(2, 2), RollOutcome::new(6, 5));
/// assert_eq!(result, RoundResult::FirstWins);
/// ```
#[must_use]
pub fn resolve(first: RollOutcome, second: RollOutcome) -> RoundResult {
    match (first.is_double(), second.is_double()) {
        (true, false) => RoundResult::FirstWins,
        (false, true) => RoundResult::SecondWins,
        (true, true) => RoundResult::from_ordering(first.partial_cmp(&second)),
        (false, false) => RoundResult::from_ordering(Some(first.total().cmp(&second.total()))),
    }
}
