//! The round loop: initiative, decisions, rolling, resolution, scoring.
//!
//! ## Round flow
//!
//! ```text
//! AwaitingDecision ──quit──▶ Terminated
//!        │ continue (or automatic seat)
//!        ▼
//!     Rolling ──both rolled──▶ Resolving ──score applied──▶ AwaitingDecision
//! ```
//!
//! Odd rounds open with the human seat and even rounds with the computer
//! seat, regardless of who won. Only the human seat is asked to continue;
//! a quit ends the session on the spot, before that seat rolls, so the
//! round is never resolved and no score changes. The session has no score
//! or round limit; quitting is the only way out.

use log::info;

use super::decision::{Decision, DecisionSource};
use super::event::{GameEvent, GameObserver, GameSummary, RoundReport};
use crate::contestant::{Contestant, Role};
use crate::core::{GameConfig, GameRng, Result, Seat, SeatMap};
use crate::dice::RollOutcome;
use crate::rules::resolve;

/// Where a session is in its round loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting to start a round or for the interactive contestant's choice.
    AwaitingDecision,
    /// A contestant is rolling.
    Rolling,
    /// Both outcomes are in and the round is being decided.
    Resolving,
    /// A quit was chosen. No further rounds are played.
    Terminated,
}

/// One game between a fair human contestant and a biased computer.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    contestants: SeatMap<Contestant>,
    round: u32,
    phase: Phase,
    seed: u64,
}

impl GameSession {
    /// Create a session. Uses `config.seed`, or OS entropy when unset.
    pub fn new(human_name: impl Into<String>, config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let human = Contestant::new(
            human_name,
            Role::Fair,
            &config,
            rng.for_context(Seat::Human.label()),
        )?;
        let computer = Contestant::new(
            config.computer_name.clone(),
            Role::Biased,
            &config,
            rng.for_context(Seat::Computer.label()),
        )?;

        Ok(Self {
            config,
            contestants: SeatMap::from_parts(human, computer),
            round: 1,
            phase: Phase::AwaitingDecision,
            seed: rng.seed(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the session's randomness was derived from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    #[must_use]
    pub fn contestant(&self, seat: Seat) -> &Contestant {
        &self.contestants[seat]
    }

    /// Initiative order for the current round.
    #[must_use]
    pub fn initiative(&self) -> [Seat; 2] {
        Seat::order_for_round(self.round)
    }

    /// Play one round.
    ///
    /// Returns the round's report, or `None` if the interactive contestant
    /// quit (or the session had already terminated).
    pub fn play_round(
        &mut self,
        decisions: &mut impl DecisionSource,
        observer: &mut impl GameObserver,
    ) -> Result<Option<RoundReport>> {
        if self.is_terminated() {
            return Ok(None);
        }

        let round = self.round;
        let order = self.initiative();
        observer.on_event(&GameEvent::RoundStarted { round, order })?;

        let mut outcomes = [RollOutcome::default(); 2];
        for (slot, &seat) in order.iter().enumerate() {
            let contestant = &self.contestants[seat];
            observer.on_event(&GameEvent::TurnStarted {
                round,
                seat,
                name: contestant.name().to_string(),
                score: contestant.score(),
            })?;

            if seat.is_interactive() {
                self.phase = Phase::AwaitingDecision;
                if decisions.decide(contestant, round)? == Decision::Quit {
                    info!("{} quit in round {}", contestant.name(), round);
                    self.phase = Phase::Terminated;
                    observer.on_event(&GameEvent::Quit {
                        round,
                        seat,
                        name: contestant.name().to_string(),
                    })?;
                    return Ok(None);
                }
            }

            self.phase = Phase::Rolling;
            let contestant = &mut self.contestants[seat];
            outcomes[slot] = contestant.produce_outcome()?;
            observer.on_event(&GameEvent::Rolled {
                round,
                seat,
                name: contestant.name().to_string(),
                outcome: outcomes[slot],
            })?;
        }

        self.phase = Phase::Resolving;
        let result = resolve(outcomes[0], outcomes[1]);
        let winner = result.winner(order);
        if let Some(seat) = winner {
            self.contestants[seat].record_win();
        }

        let report = RoundReport {
            round,
            order,
            outcomes,
            result,
            winner,
            winner_name: winner.map(|seat| self.contestants[seat].name().to_string()),
            scores: self.scores(),
        };
        let [first, second] = outcomes;
        match &report.winner_name {
            Some(name) => info!("round {}: {} vs {}, {} wins", round, first, second, name),
            None => info!("round {}: {} vs {}, draw", round, first, second),
        }
        observer.on_event(&GameEvent::RoundResolved(report.clone()))?;

        self.round += 1;
        self.phase = Phase::AwaitingDecision;
        Ok(Some(report))
    }

    /// Play rounds until the interactive contestant quits.
    pub fn run(
        &mut self,
        decisions: &mut impl DecisionSource,
        observer: &mut impl GameObserver,
    ) -> Result<GameSummary> {
        info!("session started with seed {}", self.seed);
        observer.on_event(&GameEvent::SessionStarted {
            names: self.names(),
            seed: self.seed,
        })?;

        while !self.is_terminated() {
            self.play_round(decisions, observer)?;
        }

        let summary = self.summary();
        info!(
            "session ended after {} rounds: {} {} - {} {}",
            summary.rounds_played,
            summary.names[Seat::Human],
            summary.scores[Seat::Human],
            summary.scores[Seat::Computer],
            summary.names[Seat::Computer],
        );
        observer.on_event(&GameEvent::SessionEnded(summary.clone()))?;
        Ok(summary)
    }

    /// Current scores by seat.
    #[must_use]
    pub fn scores(&self) -> SeatMap<u32> {
        self.contestants.map(|_, c| c.score())
    }

    fn names(&self) -> SeatMap<String> {
        self.contestants.map(|_, c| c.name().to_string())
    }

    /// Snapshot of the session as it stands.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let scores = self.scores();
        let leader = match scores[Seat::Human].cmp(&scores[Seat::Computer]) {
            std::cmp::Ordering::Greater => Some(Seat::Human),
            std::cmp::Ordering::Less => Some(Seat::Computer),
            std::cmp::Ordering::Equal => None,
        };

        GameSummary {
            rounds_played: self.round - 1,
            names: self.names(),
            scores,
            leader,
        }
    }
}
