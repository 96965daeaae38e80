//! Text shell around the engine: prompting and rendering.

pub mod prompt;
pub mod render;

pub use prompt::{ConsolePrompt, DEFAULT_NAME};
pub use render::{JsonRenderer, TextRenderer};

/// Greeting printed before the name prompt.
pub const WELCOME: &str = "Welcome to the Cheater's Dice game";
