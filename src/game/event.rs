//! Notifications a session emits for the shell to render.

use serde::Serialize;

use crate::core::{Result, Seat, SeatMap};
use crate::dice::RollOutcome;
use crate::rules::RoundResult;

/// Everything a renderer needs about one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    /// Seats in initiative order.
    pub order: [Seat; 2],
    /// Outcomes in initiative order.
    pub outcomes: [RollOutcome; 2],
    pub result: RoundResult,
    pub winner: Option<Seat>,
    pub winner_name: Option<String>,
    /// Scores after the round was applied.
    pub scores: SeatMap<u32>,
}

impl RoundReport {
    /// Outcome rolled by a given seat this round.
    #[must_use]
    pub fn outcome_of(&self, seat: Seat) -> RollOutcome {
        if self.order[0] == seat {
            self.outcomes[0]
        } else {
            self.outcomes[1]
        }
    }
}

/// Final state of a terminated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Rounds that were resolved. The round ended by quitting is not counted.
    pub rounds_played: u32,
    pub names: SeatMap<String>,
    pub scores: SeatMap<u32>,
    /// Seat with the higher score, `None` when tied.
    pub leader: Option<Seat>,
}

/// Session notifications, in the order they happen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    SessionStarted {
        names: SeatMap<String>,
        seed: u64,
    },
    RoundStarted {
        round: u32,
        order: [Seat; 2],
    },
    TurnStarted {
        round: u32,
        seat: Seat,
        name: String,
        score: u32,
    },
    Rolled {
        round: u32,
        seat: Seat,
        name: String,
        outcome: RollOutcome,
    },
    Quit {
        round: u32,
        seat: Seat,
        name: String,
    },
    RoundResolved(RoundReport),
    SessionEnded(GameSummary),
}

/// Receives session notifications.
///
/// `Vec<GameEvent>` records every event it sees.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent) -> Result<()>;
}

impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RoundReport {
        RoundReport {
            round: 2,
            order: Seat::order_for_round(2),
            outcomes: [RollOutcome::new(6, 6), RollOutcome::new(2, 3)],
            result: RoundResult::FirstWins,
            winner: Some(Seat::Computer),
            winner_name: Some("COMPUTER".to_string()),
            scores: SeatMap::new(|seat| if seat == Seat::Computer { 1 } else { 0 }),
        }
    }

    #[test]
    fn test_outcome_of() {
        let report = report();
        assert_eq!(report.outcome_of(Seat::Computer), RollOutcome::new(6, 6));
        assert_eq!(report.outcome_of(Seat::Human), RollOutcome::new(2, 3));
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::RoundResolved(report());
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "round_resolved");
        assert_eq!(json["round"], 2);
        assert_eq!(json["result"], "first_wins");
        assert_eq!(json["winner"], "computer");
        assert_eq!(json["order"][0], "computer");
        assert_eq!(json["outcomes"][0]["first"], 6);
    }

    #[test]
    fn test_vec_observer_records() {
        let mut events: Vec<GameEvent> = Vec::new();
        events
            .on_event(&GameEvent::RoundStarted {
                round: 1,
                order: Seat::order_for_round(1),
            })
            .unwrap();
        assert_eq!(events.len(), 1);
    }
}
