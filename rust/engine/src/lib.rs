//! # trunfo-engine: Trick-Taking Round Engine Core
//!
//! A deterministic round engine for a four-player, two-team Belote-style
//! card game with a fixed trump suit, mandatory suit-following, and a
//! cheat-forfeiture rule. Provides dealing, rule validation, trick
//! sequencing, scoring, and JSONL round logging with reproducible RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 40-card deck
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`dealer`] - Trump assignment and hand distribution
//! - [`rules`] - Play legality, trick winner, trick scoring
//! - [`monitor`] - Independent re-validation of accepted plays
//! - [`round`] - Round controller, team scores, forfeiture
//! - [`events`] - Round events and the display collaborator contract
//! - [`player`] - Seats, teams, and hand ownership
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for round operations
//!
//! ## Quick Start
//!
//! ```rust
//! use trunfo_engine::cards::{Card, Rank, Suit};
//! use trunfo_engine::player::Seat;
//! use trunfo_engine::rules::{trick_winner, Trick};
//!
//! let mut trick = Trick::new(Seat::South);
//! trick.push(Seat::South, Card { rank: Rank::Jack, suit: Suit::Spades });
//! trick.push(Seat::East, Card { rank: Rank::Ace, suit: Suit::Hearts });
//! trick.push(Seat::North, Card { rank: Rank::Ace, suit: Suit::Spades });
//! trick.push(Seat::West, Card { rank: Rank::Seven, suit: Suit::Hearts });
//!
//! // Hearts are trump: the ace of hearts takes the trick.
//! assert_eq!(trick_winner(&trick, Suit::Hearts), Some(Seat::East));
//! ```
//!
//! ## Deterministic Rounds
//!
//! All outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use trunfo_engine::deck::Deck;
//!
//! // Same seed produces the same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod events;
pub mod logger;
pub mod monitor;
pub mod player;
pub mod round;
pub mod rules;
