//! The continue/quit decision offered to the interactive contestant.

use serde::{Deserialize, Serialize};

use crate::contestant::Contestant;
use crate::core::{GameConfig, Result};

/// Choice made by the interactive contestant before rolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Roll the dice and play the round.
    Continue,
    /// End the session immediately.
    Quit,
}

impl Decision {
    /// Parse a typed token against the configured roll/quit tokens.
    ///
    /// Matching trims surrounding whitespace and ignores case. Returns `None`
    /// for anything else, which the caller should re-prompt for.
    ///
    /// ```
    /// use cheaters_dice::core::GameConfig;
    /// use cheaters_dice::game::Decision;
    ///
    /// let config = GameConfig::default();
    /// assert_eq!(Decision::parse(" R\n", &config), Some(Decision::Continue));
    /// assert_eq!(Decision::parse("q", &config), Some(Decision::Quit));
    /// assert_eq!(Decision::parse("roll", &config), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str, config: &GameConfig) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case(config.roll_token.trim()) {
            Some(Decision::Continue)
        } else if token.eq_ignore_ascii_case(config.quit_token.trim()) {
            Some(Decision::Quit)
        } else {
            None
        }
    }
}

/// Supplies decisions for the interactive contestant.
///
/// This is the only place a session waits on the outside world. Implementors
/// must only return recognized decisions; re-prompting on bad input is their
/// job. Closures taking `(&Contestant, round)` work as sources.
pub trait DecisionSource {
    fn decide(&mut self, contestant: &Contestant, round: u32) -> Result<Decision>;
}

impl<F> DecisionSource for F
where
    F: FnMut(&Contestant, u32) -> Decision,
{
    fn decide(&mut self, contestant: &Contestant, round: u32) -> Result<Decision> {
        Ok(self(contestant, round))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_tokens() {
        let config = GameConfig::default();
        assert_eq!(Decision::parse("r", &config), Some(Decision::Continue));
        assert_eq!(Decision::parse("R", &config), Some(Decision::Continue));
        assert_eq!(Decision::parse("  q  ", &config), Some(Decision::Quit));
        assert_eq!(Decision::parse("Q\n", &config), Some(Decision::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let config = GameConfig::default();
        for token in ["", " ", "x", "rq", "quit", "rr"] {
            assert_eq!(Decision::parse(token, &config), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_custom_tokens() {
        let config = GameConfig::default().with_tokens("Roll", "Stop");
        assert_eq!(Decision::parse("roll", &config), Some(Decision::Continue));
        assert_eq!(Decision::parse("STOP", &config), Some(Decision::Quit));
        assert_eq!(Decision::parse("r", &config), None);
    }
}
