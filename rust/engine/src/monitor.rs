//! Independent re-validation of accepted plays.
//!
//! Both the human-input path and the AI path are expected to only ever
//! produce legal cards; the monitor is the authority that ends the round if
//! that expectation is violated.

use crate::cards::{Card, Suit};
use crate::player::Seat;
use crate::rules::is_valid_play;

/// Verdict on an already-accepted play.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayOutcome {
    /// The play stands.
    Legal,
    /// The player held a card of the leading suit and played off-suit.
    /// The offending team forfeits the round immediately.
    Cheat,
}

/// Re-validates a play against the hand as it was before the card's removal.
///
/// `hand_before` must contain `card`; the check asks whether the play would
/// have been legal with the card still in hand. The monitor deliberately
/// recomputes legality from [`is_valid_play`] rather than trusting the
/// chooser that produced the card.
pub fn check_play(
    _seat: Seat,
    card: Card,
    hand_before: &[Card],
    leading_suit: Option<Suit>,
) -> PlayOutcome {
    if is_valid_play(card, hand_before, leading_suit) {
        PlayOutcome::Legal
    } else {
        PlayOutcome::Cheat
    }
}
