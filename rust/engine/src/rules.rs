//! Stateless rule functions: play legality, trick winner, trick score.
//!
//! All decisions here depend only on their arguments. The round controller
//! and the cheat monitor both call into this module so there is exactly one
//! definition of legality.

use crate::cards::{Card, Suit};
use crate::player::Seat;

/// One trick in progress or completed: up to four `(Seat, Card)` plays in
/// rotation order starting from the leader.
#[derive(Debug, Clone)]
pub struct Trick {
    leader: Seat,
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// The suit of the first card played, or `None` before any play.
    pub fn leading_suit(&self) -> Option<Suit> {
        self.plays.first().map(|&(_, c)| c.suit)
    }

    pub fn push(&mut self, seat: Seat, card: Card) {
        self.plays.push((seat, card));
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }
}

/// Checks mandatory suit-following with the void exception.
///
/// A play is legal when there is no leading suit yet (first play of the
/// trick), when the card follows the leading suit, or when the hand holds no
/// card of the leading suit at all.
///
/// # Examples
///
/// ```
/// use trunfo_engine::cards::{Card, Rank, Suit};
/// use trunfo_engine::rules::is_valid_play;
///
/// let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
/// let two_hearts = Card { rank: Rank::Two, suit: Suit::Hearts };
/// let hand = [ace_spades, two_hearts];
///
/// // First play of the trick: anything goes.
/// assert!(is_valid_play(ace_spades, &hand, None));
///
/// // Holding a heart, a spade cannot be played under a heart lead.
/// assert!(!is_valid_play(ace_spades, &hand, Some(Suit::Hearts)));
/// assert!(is_valid_play(two_hearts, &hand, Some(Suit::Hearts)));
/// ```
pub fn is_valid_play(card: Card, hand: &[Card], leading_suit: Option<Suit>) -> bool {
    match leading_suit {
        None => true,
        Some(lead) => card.suit == lead || !hand.iter().any(|c| c.suit == lead),
    }
}

/// Determines which seat won a completed trick.
///
/// If any trump cards were played, the strongest trump wins; otherwise the
/// strongest card of the leading suit wins. Ties cannot occur because ranks
/// are unique per suit within a trick. Returns `None` for an empty trick.
pub fn trick_winner(trick: &Trick, trump_suit: Suit) -> Option<Seat> {
    let leading_suit = trick.leading_suit()?;
    let best_of = |suit: Suit| {
        trick
            .plays()
            .iter()
            .filter(|&&(_, c)| c.suit == suit)
            .min_by_key(|&&(_, c)| c.rank.strength())
            .map(|&(seat, _)| seat)
    };
    best_of(trump_suit).or_else(|| best_of(leading_suit))
}

/// Sums the point values of every card in the trick.
/// The point table is suit-independent, trump included.
pub fn trick_points(trick: &Trick) -> u32 {
    trick.plays().iter().map(|&(_, c)| c.points()).sum()
}
