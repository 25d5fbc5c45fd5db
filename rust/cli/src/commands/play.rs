//! Play command: one interactive round against three AI seats.
//!
//! The human sits South (the trump seat for the round) with North as
//! partner; East and West complete the table with the selected AI policy.
//! The human seat implements the engine's chooser contract: it owns the
//! reprompt loop on malformed tokens, cards not in hand, and illegal
//! plays, so the round controller only ever sees legal cards from it.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::cli::AiKind;
use crate::commands::resolve_ai;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_result, format_scores, format_suit, seat_name};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_card_token, ParseResult};
use trunfo_ai::create_policy;
use trunfo_engine::cards::{Card, Suit};
use trunfo_engine::errors::RoundError;
use trunfo_engine::events::{EventSink, RoundEvent};
use trunfo_engine::player::Seat;
use trunfo_engine::round::{CardChooser, RoundController};
use trunfo_engine::rules::{is_valid_play, Trick};

/// The interactive terminal shared by the human seat (prompts, input) and
/// the event sink (game narration). Single-threaded: borrows never overlap.
struct Console<'a> {
    out: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
}

/// Human occupant of a seat. Loops until the player supplies a card that
/// is in hand and legal, or quits.
struct HumanSeat<'c, 'a> {
    console: &'c RefCell<Console<'a>>,
    trump_suit: Suit,
}

impl CardChooser for HumanSeat<'_, '_> {
    fn choose_card(
        &mut self,
        hand: &[Card],
        leading_suit: Option<Suit>,
        _trick: &Trick,
    ) -> Result<Card, RoundError> {
        loop {
            {
                let mut con = self.console.borrow_mut();
                let _ = writeln!(
                    con.out,
                    "\nYour hand:\n{}",
                    format_hand(hand, self.trump_suit)
                );
                if let Some(lead) = leading_suit {
                    let _ = writeln!(con.out, "Leading suit: {}", format_suit(&lead));
                }
                let _ = write!(
                    con.out,
                    "Choose a card to play (e.g. 'SA' for the ace of spades): "
                );
                let _ = con.out.flush();
            }

            let line = {
                let mut con = self.console.borrow_mut();
                read_stdin_line(&mut *con.input)
            };
            let Some(line) = line else {
                return Err(RoundError::InputClosed);
            };

            let mut con = self.console.borrow_mut();
            match parse_card_token(&line) {
                ParseResult::Quit => return Err(RoundError::InputClosed),
                ParseResult::Invalid(_) => {
                    let _ = writeln!(con.out, "Invalid choice, please try again.");
                }
                ParseResult::Card(card) if !hand.contains(&card) => {
                    let _ = writeln!(con.out, "Invalid choice, please try again.");
                }
                ParseResult::Card(card) => {
                    if is_valid_play(card, hand, leading_suit) {
                        return Ok(card);
                    }
                    let _ = writeln!(con.out, "Invalid play. You must follow suit if possible.");
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

/// Renders round events for the terminal.
struct TermSink<'c, 'a> {
    console: &'c RefCell<Console<'a>>,
    human: Seat,
}

impl EventSink for TermSink<'_, '_> {
    fn emit(&mut self, event: &RoundEvent) {
        let mut con = self.console.borrow_mut();
        let out = &mut *con.out;
        let _ = match event {
            RoundEvent::TrickStarted { leader } => {
                writeln!(out, "\n-- {} leads the trick --", seat_name(*leader))
            }
            RoundEvent::CardPlayed { seat, card } if *seat == self.human => {
                writeln!(out, "You play {}", format_card(card))
            }
            RoundEvent::CardPlayed { seat, card } => {
                writeln!(out, "{} plays {}", seat_name(*seat), format_card(card))
            }
            RoundEvent::TrickWon { seat, card, points } => writeln!(
                out,
                "{} wins the trick with {} ({} points)",
                seat_name(*seat),
                format_card(card),
                points
            ),
            RoundEvent::ScoresUpdated {
                north_south,
                east_west,
            } => writeln!(out, "{}", format_scores(*north_south, *east_west)),
            RoundEvent::CheatDetected { seat, card } => writeln!(
                out,
                "Cheating detected! {} played {} while holding the leading suit.",
                seat_name(*seat),
                format_card(card)
            ),
            RoundEvent::RoundEnded { result } => writeln!(out, "\n{}", format_result(result)),
        };
    }
}

/// Handle the play command: one interactive round.
///
/// # Arguments
///
/// * `seed` - RNG seed for a reproducible deal (default: config, then random)
/// * `ai` - AI policy for the non-human seats (default: config)
/// * `stdin` - Input stream for the human seat
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
///
/// # Returns
///
/// * `Ok(())` when the round reaches a terminal state
/// * `Err(CliError::Interrupted)` when the player quits mid-round
/// * `Err(CliError)` on configuration, engine, or I/O errors
pub fn handle_play_command(
    seed: Option<u64>,
    ai: Option<AiKind>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_warning(err, &format!("Configuration ignored: {}", e))?;
            config::Config::default()
        }
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let ai_kind = resolve_ai(ai, &cfg.ai, err)?;

    writeln!(out, "play: seed={} ai={}", seed, ai_kind.as_str())?;
    let mut ctrl = RoundController::new_seeded(seed, Seat::South)?;
    let trump_suit = ctrl.trump_suit();
    writeln!(out, "Trump card: {}", format_card(&ctrl.trump_card()))?;
    writeln!(out, "You are South; North is your partner.")?;

    let outcome = {
        let console = RefCell::new(Console {
            out: &mut *out,
            input: &mut *stdin,
        });
        let mut human = HumanSeat {
            console: &console,
            trump_suit,
        };
        let mut east = create_policy(ai_kind.as_str(), trump_suit, seed.wrapping_add(1));
        let mut north = create_policy(ai_kind.as_str(), trump_suit, seed.wrapping_add(2));
        let mut west = create_policy(ai_kind.as_str(), trump_suit, seed.wrapping_add(3));
        let mut choosers: [&mut dyn CardChooser; 4] =
            [&mut human, &mut *east, &mut *north, &mut *west];
        let mut sink = TermSink {
            console: &console,
            human: Seat::South,
        };
        ctrl.play_round(&mut choosers, &mut sink)
    };

    match outcome {
        Ok(_result) => {
            let (north_south, east_west) = ctrl.scores();
            writeln!(out, "\nFinal Scores:")?;
            writeln!(out, "{}", format_scores(north_south, east_west))?;
            Ok(())
        }
        Err(RoundError::InputClosed) => {
            writeln!(out, "Round abandoned.")?;
            Err(CliError::Interrupted("round abandoned".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
