//! Discrete round events for an external display layer.
//!
//! The engine never formats text; it emits these events through an
//! [`EventSink`] and leaves rendering to the CLI (or to a test sink).

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Seat;
use crate::round::{RoundResult, TeamScore};

/// Everything observable about a round, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new trick begins with `leader` to play first.
    TrickStarted { leader: Seat },
    /// `seat` played `card` into the current trick.
    CardPlayed { seat: Seat, card: Card },
    /// `seat` took the trick with `card`, worth `points`.
    TrickWon { seat: Seat, card: Card, points: u32 },
    /// Team totals after a completed trick.
    ScoresUpdated {
        north_south: TeamScore,
        east_west: TeamScore,
    },
    /// `seat` was caught playing `card` illegally; their team forfeits.
    CheatDetected { seat: Seat, card: Card },
    /// The round reached a terminal state.
    RoundEnded { result: RoundResult },
}

/// Collaborator contract for observing a round.
pub trait EventSink {
    fn emit(&mut self, event: &RoundEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &RoundEvent) {}
}

/// Sink that stores every event for later inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<RoundEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}
