//! Trick-local greedy policy.
//!
//! Greedy and strictly per-trick: no memory of past tricks and no lookahead
//! across future ones. When it can currently win the trick it commits the
//! minimum strength necessary; when it cannot, it sacrifices the least value.

use trunfo_engine::cards::{Card, Suit};
use trunfo_engine::errors::RoundError;
use trunfo_engine::round::CardChooser;
use trunfo_engine::rules::{is_valid_play, Trick};

/// Deterministic card-selection policy for AI seats.
///
/// Selection works in two steps over the legal cards:
///
/// 1. A card is a winning candidate if it is trump-suited or leading-suited
///    and no already-played card of the same suit outranks it. If any
///    candidate exists, the weakest one is played.
/// 2. Otherwise the weakest legal card overall is played.
#[derive(Debug, Clone)]
pub struct GreedyPolicy {
    trump_suit: Suit,
}

impl GreedyPolicy {
    pub fn new(trump_suit: Suit) -> Self {
        Self { trump_suit }
    }

    fn beats_all_played(card: Card, trick: &Trick) -> bool {
        trick
            .plays()
            .iter()
            .filter(|&&(_, other)| other.suit == card.suit)
            .all(|&(_, other)| card.rank.strength() < other.rank.strength())
    }
}

impl CardChooser for GreedyPolicy {
    fn choose_card(
        &mut self,
        hand: &[Card],
        leading_suit: Option<Suit>,
        trick: &Trick,
    ) -> Result<Card, RoundError> {
        let playable: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|&c| is_valid_play(c, hand, leading_suit))
            .collect();

        let weakest_winner = playable
            .iter()
            .copied()
            .filter(|&c| c.suit == self.trump_suit || leading_suit == Some(c.suit))
            .filter(|&c| Self::beats_all_played(c, trick))
            .max_by_key(|c| c.rank.strength());
        if let Some(card) = weakest_winner {
            return Ok(card);
        }

        playable
            .into_iter()
            .max_by_key(|c| c.rank.strength())
            .ok_or(RoundError::NoPlayableCard)
    }

    fn name(&self) -> &str {
        "GreedyPolicy"
    }
}
