//! Session state machine and its seams to the outside world.
//!
//! - `GameSession`: the round loop
//! - `DecisionSource`: where continue/quit choices come from
//! - `GameObserver`: where round notifications go

mod decision;
mod event;
mod session;

pub use decision::{Decision, DecisionSource};
pub use event::{GameEvent, GameObserver, GameSummary, RoundReport};
pub use session::{GameSession, Phase};
