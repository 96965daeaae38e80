//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The two fixed places at the table: the interactive human seat and the
//! automatic computer seat.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by an array for O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// Interactive seat, asked to continue or quit each round.
    Human,
    /// Automatic seat, always rolls.
    Computer,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// Array index of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Whether this seat is offered the continue/quit decision.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Seat::Human)
    }

    /// Initiative order for a round: odd rounds open with the human seat,
    /// even rounds with the computer seat.
    ///
    /// ```
    /// use cheaters_dice::core::Seat;
    ///
    /// assert_eq!(Seat::order_for_round(1), [Seat::Human, Seat::Computer]);
    /// assert_eq!(Seat::order_for_round(2), [Seat::Computer, Seat::Human]);
    /// ```
    #[must_use]
    pub const fn order_for_round(round: u32) -> [Seat; 2] {
        if round % 2 == 1 {
            [Seat::Human, Seat::Computer]
        } else {
            [Seat::Computer, Seat::Human]
        }
    }

    /// Label used to derive this seat's RNG stream.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Seat::Human => "human",
            Seat::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use cheaters_dice::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(0);
/// scores[Seat::Computer] += 1;
/// assert_eq!(scores[Seat::Human], 0);
/// assert_eq!(scores[Seat::Computer], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(&mut factory),
        }
    }

    /// Create a SeatMap from each seat's value.
    pub fn from_parts(human: T, computer: T) -> Self {
        Self {
            data: [human, computer],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Apply `f` to each entry, keeping the seat layout.
    pub fn map<U>(&self, mut f: impl FnMut(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
