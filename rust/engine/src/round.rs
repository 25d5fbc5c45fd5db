//! Round orchestration: trick sequencing, scoring, leader rotation,
//! cheat forfeiture.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::dealer::{self, Deal};
use crate::deck::Deck;
use crate::errors::RoundError;
use crate::events::{EventSink, RoundEvent};
use crate::monitor::{self, PlayOutcome};
use crate::player::{Player, Seat, Team};
use crate::rules::{self, Trick};

/// Tricks in a complete round.
pub const TRICKS_PER_ROUND: u8 = 10;

/// A team's running total, or the terminal forfeiture sentinel.
/// `Forfeited` overrides any numeric comparison: that team loses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TeamScore {
    Points(u32),
    Forfeited,
}

impl TeamScore {
    fn add(&mut self, points: u32) {
        if let TeamScore::Points(p) = self {
            *p += points;
        }
    }

    /// Numeric total, or `None` once forfeited.
    pub fn points(self) -> Option<u32> {
        match self {
            TeamScore::Points(p) => Some(p),
            TeamScore::Forfeited => None,
        }
    }
}

/// Terminal outcome of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Higher point total after ten tricks.
    Winner(Team),
    /// Equal point totals after ten tricks.
    Tie,
    /// `offender` was caught cheating and loses unconditionally.
    Forfeit { offender: Team },
}

/// Lifecycle of one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Dealing,
    InTrick,
    RoundOver,
}

/// Collaborator contract for whatever occupies a seat, human or AI.
///
/// Implementations must return a card present in `hand`; the controller
/// treats anything else as a caller error. Reprompting a human on bad input
/// is the implementation's job, not the controller's. The controller itself
/// performs the single removal of the chosen card from the hand.
pub trait CardChooser {
    /// Choose a card from `hand` given the trick so far.
    /// `leading_suit` is `None` exactly when this seat leads the trick.
    fn choose_card(
        &mut self,
        hand: &[Card],
        leading_suit: Option<Suit>,
        trick: &Trick,
    ) -> Result<Card, RoundError>;

    /// Identifier for display and logs.
    fn name(&self) -> &str;
}

/// Owns all mutable round state (hands, scores, leader, trick count) for
/// the lifetime of one round and drives it to a terminal state.
///
/// The controller is agnostic to which [`CardChooser`] occupies a seat; any
/// human/AI assignment works, which is how the tests exercise it. Every
/// accepted play is re-validated by the cheat monitor before the card
/// leaves its hand; an illegal play forfeits the offending team and ends
/// the round immediately.
#[derive(Debug)]
pub struct RoundController {
    trump_suit: Suit,
    trump_card: Card,
    players: [Player; 4],
    leader: Seat,
    scores: [TeamScore; 2],
    tricks_completed: u8,
    phase: Phase,
    // Standing log of every play, oldest first. Observability only:
    // legality never consults it.
    play_log: Vec<(Seat, Card)>,
}

impl RoundController {
    /// Deals from `deck` and stands ready for the first trick, with the
    /// trump seat leading.
    pub fn new(deck: &mut Deck, trump_seat: Seat) -> Result<Self, RoundError> {
        let deal = dealer::deal(deck, trump_seat)?;
        Ok(Self::from_deal(deal, trump_seat))
    }

    /// Shuffles a fresh seeded deck and deals. Same seed, same round.
    pub fn new_seeded(seed: u64, trump_seat: Seat) -> Result<Self, RoundError> {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Self::new(&mut deck, trump_seat)
    }

    /// Builds a controller from an already-dealt round.
    pub fn from_deal(deal: Deal, trump_seat: Seat) -> Self {
        let Deal {
            hands,
            trump_card,
            trump_suit,
        } = deal;
        let mut hands = hands.map(Some);
        let players = Seat::ALL.map(|seat| {
            // from_deal consumes each hand exactly once
            let hand = hands[seat.index()].take().unwrap_or_default();
            Player::new(seat, hand)
        });
        Self {
            trump_suit,
            trump_card,
            players,
            leader: trump_seat,
            scores: [TeamScore::Points(0), TeamScore::Points(0)],
            tricks_completed: 0,
            phase: Phase::InTrick,
            play_log: Vec::with_capacity(dealer::DECK_SIZE),
        }
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    pub fn trump_card(&self) -> Card {
        self.trump_card
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tricks_completed(&self) -> u8 {
        self.tricks_completed
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat.index()].hand()
    }

    pub fn score(&self, team: Team) -> TeamScore {
        self.scores[team.index()]
    }

    /// `(NorthSouth, EastWest)` totals.
    pub fn scores(&self) -> (TeamScore, TeamScore) {
        (self.scores[0], self.scores[1])
    }

    /// Every play of the round so far, in order.
    pub fn play_log(&self) -> &[(Seat, Card)] {
        &self.play_log
    }

    /// Plays one trick: four cards in rotation from the current leader.
    ///
    /// Returns `Ok(Some(result))` when the round reached its terminal state
    /// (tenth trick completed, or a cheat forfeiture mid-trick) and
    /// `Ok(None)` when more tricks remain. Chooser errors (for example a
    /// closed input stream) propagate without mutating the trick.
    pub fn play_trick(
        &mut self,
        choosers: &mut [&mut dyn CardChooser; 4],
        sink: &mut dyn EventSink,
    ) -> Result<Option<RoundResult>, RoundError> {
        if self.phase == Phase::RoundOver {
            return Err(RoundError::RoundOver);
        }

        let mut trick = Trick::new(self.leader);
        sink.emit(&RoundEvent::TrickStarted {
            leader: self.leader,
        });

        let mut seat = self.leader;
        for _ in 0..4 {
            let leading_suit = trick.leading_suit();
            let hand = self.players[seat.index()].hand();
            let card = choosers[seat.index()].choose_card(hand, leading_suit, &trick)?;

            let hand = self.players[seat.index()].hand();
            if !hand.contains(&card) {
                // Caller error, not a core failure: the chooser contract
                // requires a card from the hand it was shown.
                return Err(RoundError::CardNotInHand { seat, card });
            }
            if monitor::check_play(seat, card, hand, leading_suit) == PlayOutcome::Cheat {
                return Ok(Some(self.forfeit(seat, card, sink)));
            }

            let removed = self.players[seat.index()].take_card(card);
            debug_assert!(removed);
            self.play_log.push((seat, card));
            trick.push(seat, card);
            sink.emit(&RoundEvent::CardPlayed { seat, card });
            seat = seat.next();
        }

        let winner = rules::trick_winner(&trick, self.trump_suit).ok_or(RoundError::IncompleteTrick)?;
        let points = rules::trick_points(&trick);
        let winning_card = trick
            .plays()
            .iter()
            .find(|&&(s, _)| s == winner)
            .map(|&(_, c)| c)
            .ok_or(RoundError::IncompleteTrick)?;

        self.scores[winner.team().index()].add(points);
        self.leader = winner;
        self.tricks_completed += 1;

        sink.emit(&RoundEvent::TrickWon {
            seat: winner,
            card: winning_card,
            points,
        });
        let (north_south, east_west) = self.scores();
        sink.emit(&RoundEvent::ScoresUpdated {
            north_south,
            east_west,
        });

        if self.tricks_completed == TRICKS_PER_ROUND {
            self.phase = Phase::RoundOver;
            let result = self.final_result();
            sink.emit(&RoundEvent::RoundEnded { result });
            return Ok(Some(result));
        }
        Ok(None)
    }

    /// Runs tricks until the round ends, either after the tenth trick or
    /// early on a cheat forfeiture.
    pub fn play_round(
        &mut self,
        choosers: &mut [&mut dyn CardChooser; 4],
        sink: &mut dyn EventSink,
    ) -> Result<RoundResult, RoundError> {
        loop {
            if let Some(result) = self.play_trick(choosers, sink)? {
                return Ok(result);
            }
        }
    }

    fn forfeit(&mut self, seat: Seat, card: Card, sink: &mut dyn EventSink) -> RoundResult {
        sink.emit(&RoundEvent::CheatDetected { seat, card });
        let offender = seat.team();
        self.scores[offender.index()] = TeamScore::Forfeited;
        self.phase = Phase::RoundOver;
        let result = RoundResult::Forfeit { offender };
        sink.emit(&RoundEvent::RoundEnded { result });
        result
    }

    fn final_result(&self) -> RoundResult {
        match (self.scores[0], self.scores[1]) {
            (TeamScore::Forfeited, _) => RoundResult::Forfeit {
                offender: Team::NorthSouth,
            },
            (_, TeamScore::Forfeited) => RoundResult::Forfeit {
                offender: Team::EastWest,
            },
            (TeamScore::Points(ns), TeamScore::Points(ew)) => {
                if ns > ew {
                    RoundResult::Winner(Team::NorthSouth)
                } else if ew > ns {
                    RoundResult::Winner(Team::EastWest)
                } else {
                    RoundResult::Tie
                }
            }
        }
    }
}
