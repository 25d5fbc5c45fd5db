//! Deal command handler: deal one round and display every hand.
//!
//! Deals a single round and prints the four hands, the revealed trump card,
//! and the trump suit. Supports optional seeding for deterministic dealing.

use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_suit, seat_name};
use std::io::Write;
use trunfo_engine::player::Seat;
use trunfo_engine::round::RoundController;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O or dealing errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let ctrl = RoundController::new_seeded(seed, Seat::South)?;

    writeln!(out, "deal: seed={}", seed)?;
    writeln!(out, "Trump card: {}", format_card(&ctrl.trump_card()))?;
    writeln!(out, "Trump suit: {}", format_suit(&ctrl.trump_suit()))?;
    for seat in Seat::ALL {
        writeln!(out, "\n{}'s hand:", seat_name(seat))?;
        writeln!(out, "{}", format_hand(ctrl.hand(seat), ctrl.trump_suit()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_lists_every_seat() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        for name in ["South", "East", "North", "West"] {
            assert!(output.contains(&format!("{}'s hand:", name)));
        }
        assert!(output.contains("Trump card:"));
        assert!(output.contains("seed=42"));
    }

    #[test]
    fn test_deal_command_is_deterministic_with_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(7), &mut a).unwrap();
        handle_deal_command(Some(7), &mut b).unwrap();
        assert_eq!(a, b);
    }
}
