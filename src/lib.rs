//! # cheaters-dice
//!
//! A two-player dice duel against a computer that cheats.
//!
//! Each round both contestants roll two six-sided dice. A double beats any
//! non-double, two doubles compare face by face, and everything else
//! compares by total. The computer skews one of its dice into the upper
//! half of the range 70% of the time.
//!
//! ## Design Principles
//!
//! 1. **Pure resolution**: `rules::resolve` is a function of two outcomes.
//!    Scores are applied by the session, never by the resolver.
//!
//! 2. **Configuration over globals**: dice sides, cheat probability and
//!    decision tokens live in `GameConfig`, so sessions are independent.
//!
//! 3. **Deterministic replay**: a seed fixes every roll; each contestant
//!    draws from its own stream.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `dice`: Dice and two-dice outcomes
//! - `contestant`: Fair and biased contestants
//! - `rules`: Round resolution
//! - `game`: Session state machine, decisions and events
//! - `console`: Text prompting and rendering
//!
//! ## Example
//!
//! ```
//! use cheaters_dice::contestant::Contestant;
//! use cheaters_dice::core::GameConfig;
//! use cheaters_dice::game::{Decision, GameEvent, GameSession};
//!
//! let mut session = GameSession::new("Alice", GameConfig::default().with_seed(42)).unwrap();
//! let mut events: Vec<GameEvent> = Vec::new();
//! let mut decisions = |_: &Contestant, round: u32| {
//!     if round <= 3 { Decision::Continue } else { Decision::Quit }
//! };
//!
//! let summary = session.run(&mut decisions, &mut events).unwrap();
//! assert_eq!(summary.rounds_played, 3);
//! ```

pub mod core;
pub mod dice;
pub mod contestant;
pub mod rules;
pub mod game;
pub mod console;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Result, Seat, SeatMap};
pub use crate::dice::{Die, RollOutcome};
pub use crate::contestant::{Contestant, Role};
pub use crate::rules::{resolve, RoundResult};
pub use crate::game::{
    Decision, DecisionSource, GameEvent, GameObserver, GameSession, GameSummary, Phase, RoundReport,
};
