//! Line-based prompting for the interactive contestant.

use log::warn;
use std::io::{BufRead, Write};

use crate::contestant::Contestant;
use crate::core::{GameConfig, Result};
use crate::game::{Decision, DecisionSource};

/// Name used when the player just presses enter.
pub const DEFAULT_NAME: &str = "PLAYER";

/// Reads names and decisions from a line-oriented input.
///
/// Unrecognized tokens are answered with "Invalid option." and asked again.
/// End of input counts as quitting.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            config: config.clone(),
        }
    }

    /// Ask once for the player's display name.
    pub fn read_name(&mut self) -> Result<String> {
        write!(self.output, "Enter your name: ")?;
        self.output.flush()?;

        let name = self.read_line()?.unwrap_or_default();
        let name = name.trim();
        if name.is_empty() {
            Ok(DEFAULT_NAME.to_string())
        } else {
            Ok(name.to_string())
        }
    }

    /// Give back the output, mostly for inspection in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line, `None` at end of input. Bytes that aren't UTF-8
    /// become replacement characters and so never match a token.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
        }
    }
}

impl<R: BufRead, W: Write> DecisionSource for ConsolePrompt<R, W> {
    fn decide(&mut self, contestant: &Contestant, round: u32) -> Result<Decision> {
        loop {
            writeln!(
                self.output,
                "{}: Roll dice \t {}: Quit",
                self.config.roll_token.trim().to_uppercase(),
                self.config.quit_token.trim().to_uppercase(),
            )?;
            write!(self.output, "Enter an option: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                warn!("input closed during round {}, {} quits", round, contestant.name());
                return Ok(Decision::Quit);
            };
            match Decision::parse(&line, &self.config) {
                Some(decision) => return Ok(decision),
                None => writeln!(self.output, "Invalid option.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contestant::Role;
    use crate::core::GameRng;
    use std::io::Cursor;

    fn prompt_bytes(input: &[u8]) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(input.to_vec()), Vec::new(), &GameConfig::default())
    }

    fn prompt(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        prompt_bytes(input.as_bytes())
    }

    fn player() -> Contestant {
        Contestant::new("Alice", Role::Fair, &GameConfig::default(), GameRng::new(0)).unwrap()
    }

    #[test]
    fn test_read_name() {
        let mut p = prompt("  Alice \n");
        assert_eq!(p.read_name().unwrap(), "Alice");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Enter your name: ");
    }

    #[test]
    fn test_read_name_defaults() {
        assert_eq!(prompt("\n").read_name().unwrap(), DEFAULT_NAME);
        assert_eq!(prompt("").read_name().unwrap(), DEFAULT_NAME);
    }

    #[test]
    fn test_decide_valid_tokens() {
        let mut p = prompt("R\nq\n");
        assert_eq!(p.decide(&player(), 1).unwrap(), Decision::Continue);
        assert_eq!(p.decide(&player(), 2).unwrap(), Decision::Quit);
    }

    #[test]
    fn test_decide_reprompts_on_invalid() {
        let mut p = prompt("x\n\nroll\nr\n");
        assert_eq!(p.decide(&player(), 1).unwrap(), Decision::Continue);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Invalid option.").count(), 3);
        assert_eq!(output.matches("Enter an option: ").count(), 4);
        assert!(output.starts_with("R: Roll dice \t Q: Quit\n"));
    }

    #[test]
    fn test_decide_reprompts_on_non_utf8() {
        let mut p = prompt_bytes(b"\xff\xfe\nr\n");
        assert_eq!(p.decide(&player(), 1).unwrap(), Decision::Continue);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Invalid option.").count(), 1);
    }

    #[test]
    fn test_read_name_non_utf8_is_kept_lossily() {
        let mut p = prompt_bytes(b"Bo\xffb\n");
        assert_eq!(p.read_name().unwrap(), "Bo\u{FFFD}b");
    }

    #[test]
    fn test_decide_eof_quits() {
        let mut p = prompt("nope\n");
        assert_eq!(p.decide(&player(), 1).unwrap(), Decision::Quit);
    }
}
