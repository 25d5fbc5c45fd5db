//! Input parsing and validation for interactive commands.
//!
//! Parses the shorthand card tokens a human types during play. Token
//! grammar: a suit letter followed by a rank token, case-insensitive —
//! `SA` is the ace of spades, `h7` the seven of hearts. This is
//! presentation-layer logic; the engine never sees raw tokens.

use trunfo_engine::cards::{Card, Rank, Suit};

/// Result type for parsing user input into a card choice.
///
/// Represents the three possible outcomes when parsing user input during
/// interactive play:
/// - A card token the player's hand may or may not contain
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid card token parsed from input
    Card(Card),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a user input string into a card or a special command.
///
/// Accepts the following input formats (case-insensitive):
/// - Suit letter: `S`, `H`, `D`, `C`
/// - Rank token: `A`, `K`, `Q`, `J`, `7`, `6`, `5`, `4`, `3`, `2`
/// - `q` or `quit` → Quit command
///
/// # Example
///
/// ```rust
/// # use trunfo_cli::validation::{parse_card_token, ParseResult};
/// use trunfo_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(
///     parse_card_token("SA"),
///     ParseResult::Card(Card { rank: Rank::Ace, suit: Suit::Spades })
/// );
/// assert_eq!(
///     parse_card_token("h7"),
///     ParseResult::Card(Card { rank: Rank::Seven, suit: Suit::Hearts })
/// );
/// assert_eq!(parse_card_token("q"), ParseResult::Quit);
///
/// match parse_card_token("xyz") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("suit")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_card_token(input: &str) -> ParseResult {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }

    let token = input.to_ascii_uppercase();
    if token.len() < 2 {
        return ParseResult::Invalid(
            "Card tokens are a suit letter followed by a rank, e.g. 'SA'".to_string(),
        );
    }

    // Split on the first character boundary; tokens may be non-ASCII.
    let mut chars = token.chars();
    let suit = match chars.next() {
        Some('S') => Suit::Spades,
        Some('H') => Suit::Hearts,
        Some('D') => Suit::Diamonds,
        Some('C') => Suit::Clubs,
        other => {
            return ParseResult::Invalid(format!(
                "Unknown suit '{}'. Valid suits: S, H, D, C",
                other.map(String::from).unwrap_or_default()
            ))
        }
    };

    let rank = match chars.as_str() {
        "A" => Rank::Ace,
        "7" => Rank::Seven,
        "K" => Rank::King,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "6" => Rank::Six,
        "5" => Rank::Five,
        "4" => Rank::Four,
        "3" => Rank::Three,
        "2" => Rank::Two,
        other => {
            return ParseResult::Invalid(format!(
                "Unknown rank '{}'. Valid ranks: A, K, Q, J, 7, 6, 5, 4, 3, 2",
                other
            ))
        }
    };

    ParseResult::Card(Card { rank, suit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_court_and_pip_ranks() {
        assert_eq!(
            parse_card_token("SK"),
            ParseResult::Card(Card {
                rank: Rank::King,
                suit: Suit::Spades
            })
        );
        assert_eq!(
            parse_card_token("d2"),
            ParseResult::Card(Card {
                rank: Rank::Two,
                suit: Suit::Diamonds
            })
        );
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(parse_card_token("ca"), parse_card_token("CA"));
        assert_eq!(parse_card_token("Hq"), parse_card_token("hQ"));
    }

    #[test]
    fn quit_commands_are_recognized() {
        assert_eq!(parse_card_token("q"), ParseResult::Quit);
        assert_eq!(parse_card_token("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn a_bare_queen_token_is_not_quit() {
        // 'Q' alone is the quit command; the queen needs a suit first.
        assert!(matches!(
            parse_card_token("SQ"),
            ParseResult::Card(Card {
                rank: Rank::Queen,
                ..
            })
        ));
    }

    #[test]
    fn rejects_short_and_malformed_tokens() {
        assert!(matches!(parse_card_token("s"), ParseResult::Invalid(_)));
        assert!(matches!(parse_card_token("XA"), ParseResult::Invalid(_)));
        assert!(matches!(parse_card_token("S9"), ParseResult::Invalid(_)));
        assert!(matches!(parse_card_token(""), ParseResult::Invalid(_)));
    }
}
