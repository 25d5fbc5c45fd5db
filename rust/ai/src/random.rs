//! Uniformly random legal play from a seeded RNG.
//!
//! Useful as a simulation baseline and for shaking out rule-engine edge
//! cases: whatever it plays must still pass the cheat monitor.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use trunfo_engine::cards::{Card, Suit};
use trunfo_engine::errors::RoundError;
use trunfo_engine::round::CardChooser;
use trunfo_engine::rules::{is_valid_play, Trick};

#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl CardChooser for RandomPolicy {
    fn choose_card(
        &mut self,
        hand: &[Card],
        leading_suit: Option<Suit>,
        _trick: &Trick,
    ) -> Result<Card, RoundError> {
        let playable: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|&c| is_valid_play(c, hand, leading_suit))
            .collect();
        playable
            .choose(&mut self.rng)
            .copied()
            .ok_or(RoundError::NoPlayableCard)
    }

    fn name(&self) -> &str {
        "RandomPolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trunfo_engine::cards::Rank;
    use trunfo_engine::player::Seat;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn only_ever_plays_legal_cards() {
        let mut policy = RandomPolicy::new(7);
        let hand = [
            card(Rank::Ace, Suit::Spades),
            card(Rank::Two, Suit::Hearts),
            card(Rank::King, Suit::Hearts),
        ];
        let trick = Trick::new(Seat::South);
        for _ in 0..100 {
            let chosen = policy
                .choose_card(&hand, Some(Suit::Hearts), &trick)
                .unwrap();
            assert!(is_valid_play(chosen, &hand, Some(Suit::Hearts)));
            assert_eq!(chosen.suit, Suit::Hearts);
        }
    }

    #[test]
    fn same_seed_gives_the_same_sequence() {
        let hand = [
            card(Rank::Ace, Suit::Spades),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
        ];
        let trick = Trick::new(Seat::South);
        let mut a = RandomPolicy::new(42);
        let mut b = RandomPolicy::new(42);
        for _ in 0..20 {
            assert_eq!(
                a.choose_card(&hand, None, &trick).unwrap(),
                b.choose_card(&hand, None, &trick).unwrap()
            );
        }
    }

    #[test]
    fn empty_hand_is_an_error() {
        let mut policy = RandomPolicy::new(0);
        let trick = Trick::new(Seat::South);
        assert_eq!(
            policy.choose_card(&[], None, &trick),
            Err(RoundError::NoPlayableCard)
        );
    }
}
