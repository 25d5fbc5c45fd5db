use serde::{Deserialize, Serialize};

/// Represents one of the four suits in the 40-card deck.
/// Used as a component of [`Card`] and to designate the round's trump suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank of a card in the 10-rank Belote-style deck.
///
/// Variants are declared in strength order: the declaration index is the
/// rank-strength index, with 0 (Ace) the strongest. The same ordering is used
/// whether or not the card's suit is trump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace, strongest rank, worth 11 points
    Ace,
    /// Seven, worth 10 points
    Seven,
    /// King, worth 4 points
    King,
    /// Jack, worth 3 points
    Jack,
    /// Queen, worth 2 points
    Queen,
    /// Six, no points
    Six,
    /// Five, no points
    Five,
    /// Four, no points
    Four,
    /// Three, no points
    Three,
    /// Two, weakest rank, no points
    Two,
}

impl Rank {
    /// Rank-strength index: position in the fixed ordering, lower is stronger.
    pub fn strength(self) -> usize {
        self as usize
    }

    /// Point value of the rank, identical in and out of trump.
    pub fn points(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Seven => 10,
            Rank::King => 4,
            Rank::Jack => 3,
            Rank::Queen => 2,
            Rank::Six | Rank::Five | Rank::Four | Rank::Three | Rank::Two => 0,
        }
    }
}

/// Represents a single playing card with a rank and suit.
/// Cards are immutable value types compared by value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through Two, strength-ordered)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    /// Point value contributed to a trick's score.
    pub fn points(self) -> u32 {
        self.rank.points()
    }

    /// True if this card beats `other` within the same suit.
    /// Cards of different suits are not comparable here.
    pub fn outranks(self, other: Card) -> bool {
        self.suit == other.suit && self.rank.strength() < other.rank.strength()
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 10] {
    [
        Rank::Ace,
        Rank::Seven,
        Rank::King,
        Rank::Jack,
        Rank::Queen,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(40);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
