use crate::cards::{Card, Suit};
use serde::{Deserialize, Serialize};

/// A player position at the table, in turn order South → East → North → West.
/// Partners sit opposite each other: South/North against East/West.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    South,
    East,
    North,
    West,
}

impl Seat {
    /// All seats in turn order.
    pub const ALL: [Seat; 4] = [Seat::South, Seat::East, Seat::North, Seat::West];

    /// The seat that plays after this one.
    pub fn next(self) -> Seat {
        match self {
            Seat::South => Seat::East,
            Seat::East => Seat::North,
            Seat::North => Seat::West,
            Seat::West => Seat::South,
        }
    }

    /// The team this seat belongs to.
    pub fn team(self) -> Team {
        match self {
            Seat::South | Seat::North => Team::NorthSouth,
            Seat::East | Seat::West => Team::EastWest,
        }
    }

    /// Index of the seat in turn order (South = 0).
    pub fn index(self) -> usize {
        match self {
            Seat::South => 0,
            Seat::East => 1,
            Seat::North => 2,
            Seat::West => 3,
        }
    }
}

/// One of the two partnerships.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// South and North
    NorthSouth,
    /// East and West
    EastWest,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::NorthSouth => 0,
            Team::EastWest => 1,
        }
    }
}

/// A seated player and the hand they exclusively own.
/// Cards leave the hand only through [`take_card`](Player::take_card),
/// one per play, so a played card is never playable again.
#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(seat: Seat, hand: Vec<Card>) -> Self {
        Self { seat, hand }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit == suit)
    }

    /// Removes `card` from the hand. Returns `false` if the card is absent.
    pub fn take_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(i) => {
                self.hand.remove(i);
                true
            }
            None => false,
        }
    }
}
