//! Round rules.
//!
//! `resolve` is a pure function of two outcomes; the session applies its
//! `RoundResult` to scores.

pub mod resolver;

pub use resolver::{resolve, RoundResult};
