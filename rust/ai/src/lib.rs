//! # trunfo-ai: Card-Selection Policies
//!
//! AI occupants for the round engine's seats. Every policy implements the
//! engine's [`CardChooser`] contract, so the round controller stays agnostic
//! to whether a seat is a human or one of these.
//!
//! ## Core Components
//!
//! - [`greedy`] - Trick-local greedy policy (win cheap, duck cheaper)
//! - [`random`] - Seeded uniformly-random legal play, a baseline for sims
//! - [`create_policy`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use trunfo_ai::create_policy;
//! use trunfo_engine::cards::Suit;
//!
//! let policy = create_policy("greedy", Suit::Hearts, 42);
//! assert_eq!(policy.name(), "GreedyPolicy");
//! ```

use trunfo_engine::cards::Suit;
use trunfo_engine::round::CardChooser;

pub mod greedy;
pub mod random;

pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;

/// Factory function to create a policy by name.
///
/// Policies are constructed per round: `trump_suit` is the round's trump,
/// `seed` feeds the RNG of stochastic policies and is ignored by
/// deterministic ones.
///
/// # Supported policies
///
/// - `"greedy"` - [`GreedyPolicy`]
/// - `"random"` - [`RandomPolicy`]
///
/// # Panics
///
/// Panics on an unknown policy name; callers validate names first.
pub fn create_policy(kind: &str, trump_suit: Suit, seed: u64) -> Box<dyn CardChooser> {
    match kind {
        "greedy" => Box::new(GreedyPolicy::new(trump_suit)),
        "random" => Box::new(RandomPolicy::new(seed)),
        _ => panic!("Unknown policy: {}", kind),
    }
}
