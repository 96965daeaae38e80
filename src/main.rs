use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use cheaters_dice::console::{ConsolePrompt, JsonRenderer, TextRenderer, WELCOME};
use cheaters_dice::{GameConfig, GameSession, Result};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Play Cheater's Dice against a computer that skews its rolls.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Your display name. Prompted for when omitted.
    #[arg(long)]
    name: Option<String>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format for round events.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Banner shown before play. Json mode keeps stdout for event lines only.
fn greeting(format: Format) -> Option<&'static str> {
    match format {
        Format::Text => Some(WELCOME),
        Format::Json => None,
    }
}

fn play(args: Args) -> Result<()> {
    let mut config = GameConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    // Keep stdout clean for event lines in json mode
    let prompt_output: Box<dyn Write> = match args.format {
        Format::Text => Box::new(io::stdout()),
        Format::Json => Box::new(io::stderr()),
    };
    let mut prompt = ConsolePrompt::new(io::stdin().lock(), prompt_output, &config);

    if let Some(banner) = greeting(args.format) {
        println!("{}", banner);
    }
    let name = match args.name {
        Some(name) => name,
        None => prompt.read_name()?,
    };

    let mut session = GameSession::new(name, config)?;
    match args.format {
        Format::Text => session.run(&mut prompt, &mut TextRenderer::new(io::stdout()))?,
        Format::Json => session.run(&mut prompt, &mut JsonRenderer::new(io::stdout()))?,
    };
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match play(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_with_name_flag() {
        let args = Args::try_parse_from(["cheaters-dice", "--name", "Alice"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("Alice"));
        assert_eq!(greeting(args.format), Some(WELCOME));
    }

    #[test]
    fn test_no_greeting_in_json_mode() {
        let args = Args::try_parse_from(["cheaters-dice", "--format", "json"]).unwrap();
        assert!(args.name.is_none());
        assert_eq!(greeting(args.format), None);
    }
}
