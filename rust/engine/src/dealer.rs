//! Dealing: trump assignment and hand distribution.

use std::collections::HashSet;

use crate::cards::{Card, Suit};
use crate::deck::Deck;
use crate::errors::RoundError;
use crate::player::Seat;

/// Number of cards in the deck before dealing.
pub const DECK_SIZE: usize = 40;
/// Number of cards each seat holds after dealing.
pub const HAND_SIZE: usize = 10;

/// Result of dealing one round: four hands plus the revealed trump.
#[derive(Debug)]
pub struct Deal {
    /// One hand per seat, indexed by [`Seat::index`]
    pub hands: [Vec<Card>; 4],
    /// The revealed card that fixed the trump suit; dealt to the trump seat
    pub trump_card: Card,
    /// The round's trump suit
    pub trump_suit: Suit,
}

/// Deals a shuffled deck into four 10-card hands.
///
/// The first card drawn is revealed as the trump card: its suit becomes the
/// round's trump suit and the card itself goes to `trump_seat` together with
/// the next nine draws. Each remaining seat then receives ten cards in turn
/// order. The deck is fully consumed.
///
/// # Errors
///
/// Returns [`RoundError::DeckIntegrity`] if the undealt deck does not hold
/// exactly 40 unique cards. This is fatal: round setup must be aborted
/// rather than continued with corrupt state.
pub fn deal(deck: &mut Deck, trump_seat: Seat) -> Result<Deal, RoundError> {
    verify_deck(deck)?;

    let mut hands: [Vec<Card>; 4] = std::array::from_fn(|_| Vec::with_capacity(HAND_SIZE));
    let mut draw = |deck: &mut Deck| {
        deck.deal_card().ok_or(RoundError::DeckIntegrity {
            expected: DECK_SIZE,
            found: 0,
        })
    };

    let trump_card = draw(deck)?;
    let trump_suit = trump_card.suit;

    hands[trump_seat.index()].push(trump_card);
    for _ in 0..HAND_SIZE - 1 {
        hands[trump_seat.index()].push(draw(deck)?);
    }

    let mut seat = trump_seat.next();
    while seat != trump_seat {
        for _ in 0..HAND_SIZE {
            hands[seat.index()].push(draw(deck)?);
        }
        seat = seat.next();
    }

    debug_assert_eq!(deck.remaining(), 0);
    Ok(Deal {
        hands,
        trump_card,
        trump_suit,
    })
}

fn verify_deck(deck: &Deck) -> Result<(), RoundError> {
    let undealt = deck.undealt();
    let unique: HashSet<Card> = undealt.iter().copied().collect();
    if undealt.len() != DECK_SIZE || unique.len() != DECK_SIZE {
        return Err(RoundError::DeckIntegrity {
            expected: DECK_SIZE,
            found: unique.len(),
        });
    }
    Ok(())
}
