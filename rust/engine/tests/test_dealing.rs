use std::collections::HashSet;

use trunfo_engine::cards::{full_deck, Card};
use trunfo_engine::dealer::{deal, DECK_SIZE, HAND_SIZE};
use trunfo_engine::deck::Deck;
use trunfo_engine::errors::RoundError;
use trunfo_engine::player::Seat;

fn shuffled_deck(seed: u64) -> Deck {
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    deck
}

#[test]
fn hands_partition_the_full_deck_exactly_once() {
    for seed in [0u64, 1, 42, 0xDEAD_BEEF] {
        let mut deck = shuffled_deck(seed);
        let deal = deal(&mut deck, Seat::South).unwrap();

        let mut seen: Vec<Card> = deal.hands.iter().flatten().copied().collect();
        assert_eq!(seen.len(), DECK_SIZE);
        let unique: HashSet<Card> = seen.drain(..).collect();
        assert_eq!(unique, full_deck().into_iter().collect::<HashSet<_>>());
        assert_eq!(deck.remaining(), 0);
    }
}

#[test]
fn every_seat_receives_ten_cards() {
    let mut deck = shuffled_deck(7);
    let deal = deal(&mut deck, Seat::South).unwrap();
    for hand in &deal.hands {
        assert_eq!(hand.len(), HAND_SIZE);
    }
}

#[test]
fn trump_card_goes_to_the_trump_seat_and_fixes_the_suit() {
    let mut deck = shuffled_deck(99);
    let deal = deal(&mut deck, Seat::West).unwrap();
    assert_eq!(deal.trump_suit, deal.trump_card.suit);
    assert!(deal.hands[Seat::West.index()].contains(&deal.trump_card));
    for seat in [Seat::South, Seat::East, Seat::North] {
        assert!(!deal.hands[seat.index()].contains(&deal.trump_card));
    }
}

#[test]
fn same_seed_produces_the_same_deal() {
    let mut d1 = shuffled_deck(42);
    let mut d2 = shuffled_deck(42);
    let a = deal(&mut d1, Seat::South).unwrap();
    let b = deal(&mut d2, Seat::South).unwrap();
    assert_eq!(a.trump_card, b.trump_card);
    assert_eq!(a.hands, b.hands);
}

#[test]
fn dealing_from_a_short_deck_is_rejected() {
    let mut deck = shuffled_deck(3);
    let _ = deck.deal_card();
    let err = deal(&mut deck, Seat::South).unwrap_err();
    assert!(matches!(err, RoundError::DeckIntegrity { expected: 40, .. }));
}
