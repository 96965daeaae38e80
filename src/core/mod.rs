//! Core engine types: seats, RNG, configuration, errors.
//!
//! Sessions are configured through `GameConfig` rather than global constants.

pub mod seat;
pub mod rng;
pub mod config;
pub mod error;

pub use seat::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_CHEAT_PROBABILITY, DEFAULT_SIDES};
pub use error::{GameError, Result};
