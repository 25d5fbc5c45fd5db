use crate::cards::Card;
use crate::player::Seat;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("Deck must contain exactly {expected} unique cards, found {found}")]
    DeckIntegrity { expected: usize, found: usize },
    #[error("Card {card:?} is not in {seat:?}'s hand")]
    CardNotInHand { seat: Seat, card: Card },
    #[error("No playable card available")]
    NoPlayableCard,
    #[error("Trick is incomplete")]
    IncompleteTrick,
    #[error("Round is already over")]
    RoundOver,
    #[error("Input stream closed before a card was chosen")]
    InputClosed,
}
