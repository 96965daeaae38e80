//! The result of rolling two dice.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordered pair of faces from one two-dice roll.
///
/// ## Ordering
///
/// Outcomes are only partially ordered: one outcome is greater than another
/// when *both* of its faces are strictly greater, and less when both are
/// strictly less. Anything else, including faces that disagree in direction,
/// is incomparable and `partial_cmp` returns `None`.
///
/// ```
/// use cheaters_dice::dice::RollOutcome;
///
/// let high = RollOutcome::new(5, 5);
/// assert!(high > RollOutcome::new(3, 3));
/// assert_eq!(high.partial_cmp(&RollOutcome::new(3, 6)), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollOutcome {
    pub first: u8,
    pub second: u8,
}

impl RollOutcome {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// Sum of both faces.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.first as u16 + self.second as u16
    }
}

impl PartialOrd for RollOutcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.first.cmp(&other.first), self.second.cmp(&other.second)) {
            (Ordering::Equal, Ordering::Equal) => Some(Ordering::Equal),
            (Ordering::Greater, Ordering::Greater) => Some(Ordering::Greater),
            (Ordering::Less, Ordering::Less) => Some(Ordering::Less),
            _ => None,
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrolled() {
        let outcome = RollOutcome::default();
        assert_eq!(outcome, RollOutcome::new(0, 0));
    }

    #[test]
    fn test_double_and_total() {
        assert!(RollOutcome::new(4, 4).is_double());
        assert!(!RollOutcome::new(4, 5).is_double());
        assert_eq!(RollOutcome::new(6, 5).total(), 11);
        assert_eq!(RollOutcome::new(255, 255).total(), 510);
    }

    #[test]
    fn test_strict_dominance() {
        let a = RollOutcome::new(5, 5);
        let b = RollOutcome::new(3, 3);
        assert!(a > b);
        assert!(b < a);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn test_incomparable_pairs() {
        let a = RollOutcome::new(5, 5);
        let b = RollOutcome::new(3, 6);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a > b) && !(a < b) && a != b);

        // One face tied, the other higher: still not a strict win
        let c = RollOutcome::new(4, 4);
        let d = RollOutcome::new(4, 6);
        assert_eq!(c.partial_cmp(&d), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RollOutcome::new(2, 6).to_string(), "[2, 6]");
    }
}
