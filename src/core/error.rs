//! Error type shared by the engine and the console shell.
//!
//! Every variant except `Io` is a caller-contract violation: bad
//! configuration or a die asked to do something its face count can't
//! support. Unrecognized decision tokens are never errors; the shell
//! re-prompts for those.

use thiserror::Error;

/// Errors raised by dice, contestants, sessions and the console shell.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("a die needs at least one side, got {0}")]
    InvalidSides(u8),
    #[error("a biased roll needs at least two sides, got {0}")]
    BiasedRollUnsupported(u8),
    #[error("cheat probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("the {0} token must not be empty")]
    EmptyToken(&'static str),
    #[error("roll and quit tokens must differ, both are {0:?}")]
    DuplicateTokens(String),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, GameError>;
