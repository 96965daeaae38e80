//! Renderers turning session events into console output.

use std::io::Write;

use crate::core::{Result, Seat};
use crate::game::{GameEvent, GameObserver};

/// Human-readable transcript of a session.
pub struct TextRenderer<W> {
    output: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> GameObserver for TextRenderer<W> {
    fn on_event(&mut self, event: &GameEvent) -> Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::SessionStarted { names, .. } => {
                writeln!(out, "{} vs {}", names[Seat::Human], names[Seat::Computer])?;
            }
            GameEvent::RoundStarted { round, .. } => {
                writeln!(out, "\n***** Round {} *****", round)?;
            }
            GameEvent::TurnStarted { name, score, .. } => {
                writeln!(out, "\nCurrent player: {}\tScore: {}", name, score)?;
            }
            GameEvent::Rolled { outcome, .. } => {
                writeln!(out, "Rolling dice...")?;
                writeln!(out, "{}", outcome)?;
            }
            GameEvent::Quit { name, .. } => {
                writeln!(out, "{} quits.", name)?;
            }
            GameEvent::RoundResolved(report) => match &report.winner_name {
                Some(name) => writeln!(out, "Player {} wins!", name)?,
                None => writeln!(out, "It's a draw!")?,
            },
            GameEvent::SessionEnded(summary) => {
                writeln!(
                    out,
                    "\nFinal score after {} rounds: {} {} - {} {}",
                    summary.rounds_played,
                    summary.names[Seat::Human],
                    summary.scores[Seat::Human],
                    summary.scores[Seat::Computer],
                    summary.names[Seat::Computer],
                )?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// One JSON object per event, newline separated.
pub struct JsonRenderer<W> {
    output: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> GameObserver for JsonRenderer<W> {
    fn on_event(&mut self, event: &GameEvent) -> Result<()> {
        serde_json::to_writer(&mut self.output, event).map_err(std::io::Error::from)?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeatMap;
    use crate::dice::RollOutcome;
    use crate::game::RoundReport;
    use crate::rules::RoundResult;

    fn report(winner: Option<Seat>) -> RoundReport {
        RoundReport {
            round: 1,
            order: Seat::order_for_round(1),
            outcomes: [RollOutcome::new(3, 4), RollOutcome::new(2, 5)],
            result: if winner.is_some() {
                RoundResult::FirstWins
            } else {
                RoundResult::Draw
            },
            winner,
            winner_name: winner.map(|_| "Alice".to_string()),
            scores: SeatMap::with_value(0),
        }
    }

    fn render_text(events: &[GameEvent]) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        for event in events {
            renderer.on_event(event).unwrap();
        }
        String::from_utf8(renderer.into_output()).unwrap()
    }

    #[test]
    fn test_text_round() {
        let text = render_text(&[
            GameEvent::RoundStarted {
                round: 3,
                order: Seat::order_for_round(3),
            },
            GameEvent::TurnStarted {
                round: 3,
                seat: Seat::Human,
                name: "Alice".into(),
                score: 2,
            },
            GameEvent::Rolled {
                round: 3,
                seat: Seat::Human,
                name: "Alice".into(),
                outcome: RollOutcome::new(6, 1),
            },
        ]);
        assert_eq!(
            text,
            "\n***** Round 3 *****\n\nCurrent player: Alice\tScore: 2\nRolling dice...\n[6, 1]\n"
        );
    }

    #[test]
    fn test_text_results() {
        let won = render_text(&[GameEvent::RoundResolved(report(Some(Seat::Human)))]);
        assert_eq!(won, "Player Alice wins!\n");

        let drawn = render_text(&[GameEvent::RoundResolved(report(None))]);
        assert_eq!(drawn, "It's a draw!\n");
    }

    #[test]
    fn test_json_lines() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.on_event(&GameEvent::RoundResolved(report(None))).unwrap();
        renderer
            .on_event(&GameEvent::Quit {
                round: 2,
                seat: Seat::Human,
                name: "Alice".into(),
            })
            .unwrap();

        let output = String::from_utf8(renderer.into_output()).unwrap();
        let lines: Vec<serde_json::Value> =
            output.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "round_resolved");
        assert_eq!(lines[0]["result"], "draw");
        assert!(lines[0]["winner"].is_null());
        assert_eq!(lines[1]["event"], "quit");
        assert_eq!(lines[1]["seat"], "human");
    }
}
