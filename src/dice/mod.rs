//! Dice and two-dice outcomes.
//!
//! - `Die`: fair rolls in `[1, sides]` and upper-half rolls for the cheater
//! - `RollOutcome`: an immutable pair of faces, partially ordered

pub mod die;
pub mod outcome;

pub use die::Die;
pub use outcome::RollOutcome;
