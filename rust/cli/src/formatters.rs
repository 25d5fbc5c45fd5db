//! Card, hand, and result formatters for terminal display.
//!
//! Pure functions formatting game elements for terminal output. Suit
//! symbols use Unicode with an ASCII fallback for terminals that can't
//! render them. Hands are shown grouped by suit with the trump suit first
//! and ranks in strength order, the way players fan their cards.
//!
//! ## Example
//!
//! ```rust
//! use trunfo_engine::cards::{Card, Rank, Suit};
//! use trunfo_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use trunfo_engine::cards::{all_suits, Card, Rank, Suit};
use trunfo_engine::player::{Seat, Team};
use trunfo_engine::round::{RoundResult, TeamScore};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (A, 7, K, J, Q, 6-2).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A",
        Rank::Seven => "7",
        Rank::King => "K",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::Six => "6",
        Rank::Five => "5",
        Rank::Four => "4",
        Rank::Three => "3",
        Rank::Two => "2",
    }
    .to_string()
}

/// Format a Card as rank followed by suit, e.g. "A♠".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Seat name for display.
pub fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::South => "South",
        Seat::East => "East",
        Seat::North => "North",
        Seat::West => "West",
    }
}

/// Team name for display.
pub fn team_name(team: Team) -> &'static str {
    match team {
        Team::NorthSouth => "North/South",
        Team::EastWest => "East/West",
    }
}

fn suit_order(suit: Suit, trump_suit: Suit) -> usize {
    let suits = all_suits();
    let index = |s: Suit| suits.iter().position(|&x| x == s).unwrap_or(0);
    (index(suit) + suits.len() - index(trump_suit)) % suits.len()
}

/// Format a hand grouped by suit, one line per suit held.
///
/// The trump suit comes first, remaining suits follow in fixed order, and
/// ranks within each suit run strongest to weakest:
///
/// ```text
/// ♥: A, K, 2
/// ♣: 7, Q
/// ```
pub fn format_hand(hand: &[Card], trump_suit: Suit) -> String {
    let mut sorted: Vec<Card> = hand.to_vec();
    sorted.sort_by_key(|c| (suit_order(c.suit, trump_suit), c.rank.strength()));

    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<(Suit, Vec<String>)> = None;
    for card in sorted {
        match &mut current {
            Some((suit, ranks)) if *suit == card.suit => ranks.push(format_rank(&card.rank)),
            _ => {
                if let Some((suit, ranks)) = current.take() {
                    lines.push(format!("{}: {}", format_suit(&suit), ranks.join(", ")));
                }
                current = Some((card.suit, vec![format_rank(&card.rank)]));
            }
        }
    }
    if let Some((suit, ranks)) = current {
        lines.push(format!("{}: {}", format_suit(&suit), ranks.join(", ")));
    }
    lines.join("\n")
}

/// Format a team total, with the forfeiture sentinel spelled out.
pub fn format_score(score: TeamScore) -> String {
    match score.points() {
        Some(p) => p.to_string(),
        None => "forfeited".to_string(),
    }
}

/// One-line score summary for both teams.
pub fn format_scores(north_south: TeamScore, east_west: TeamScore) -> String {
    format!(
        "North/South: {} points | East/West: {} points",
        format_score(north_south),
        format_score(east_west)
    )
}

/// Final result banner.
pub fn format_result(result: &RoundResult) -> String {
    match result {
        RoundResult::Winner(team) => format!("{} win the round!", team_name(*team)),
        RoundResult::Tie => "It's a tie!".to_string(),
        RoundResult::Forfeit { offender } => format!(
            "{} lose due to cheating. {} win the round!",
            team_name(*offender),
            team_name(offender.opponent())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn test_format_card_rank_then_suit() {
        let c = format_card(&card(Rank::Seven, Suit::Diamonds));
        assert!(c == "7♦" || c == "7d");
    }

    #[test]
    fn test_hand_groups_by_suit_trump_first() {
        let hand = [
            card(Rank::Two, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            card(Rank::Seven, Suit::Spades),
        ];
        let text = format_hand(&hand, Suit::Clubs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        // Clubs are trump and come first, strongest rank first.
        assert!(lines[0].contains("A, K"));
        assert!(lines[1].contains("7, 2"));
    }

    #[test]
    fn test_hand_omits_void_suits() {
        let hand = [card(Rank::Ace, Suit::Hearts)];
        let text = format_hand(&hand, Suit::Spades);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_format_scores_spells_out_forfeiture() {
        let line = format_scores(TeamScore::Points(66), TeamScore::Forfeited);
        assert!(line.contains("66"));
        assert!(line.contains("forfeited"));
    }

    #[test]
    fn test_format_result_banners() {
        assert_eq!(
            format_result(&RoundResult::Winner(Team::NorthSouth)),
            "North/South win the round!"
        );
        assert_eq!(format_result(&RoundResult::Tie), "It's a tie!");
        let forfeit = format_result(&RoundResult::Forfeit {
            offender: Team::EastWest,
        });
        assert!(forfeit.contains("East/West lose due to cheating"));
        assert!(forfeit.contains("North/South win"));
    }
}
