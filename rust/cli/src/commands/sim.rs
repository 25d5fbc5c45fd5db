//! Sim command: batch AI-only rounds with an optional JSONL history.
//!
//! Round i of a batch is seeded with `base_seed + i` so any single round
//! from a summary can be replayed on its own with the deal command.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::AiKind;
use crate::commands::resolve_ai;
use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use trunfo_ai::create_policy;
use trunfo_engine::events::NullSink;
use trunfo_engine::logger::{PlayRecord, RoundLogger, RoundRecord};
use trunfo_engine::player::Seat;
use trunfo_engine::round::{CardChooser, RoundController, RoundResult};

/// Handle the sim command: play AI-only rounds and print a summary.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (default: config)
/// * `seed` - Base RNG seed; round i uses `seed + i` (default: config, then random)
/// * `ai` - Policy occupying all four seats (default: config)
/// * `output` - Optional JSONL path for the full round history
/// * `out` - Output stream for the summary
/// * `err` - Error stream for warnings and errors
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on invalid input, I/O, or
/// engine errors.
pub fn handle_sim_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    ai: Option<AiKind>,
    output: Option<String>,
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
    let rounds = rounds.unwrap_or(cfg.rounds);
    if rounds == 0 {
        ui::write_error(err, "rounds must be at least 1")?;
        return Err(CliError::InvalidInput("rounds must be at least 1".into()));
    }
    let ai_kind = resolve_ai(ai, &cfg.ai, err)?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "sim: rounds={} seed={} ai={}",
        rounds,
        base_seed,
        ai_kind.as_str()
    )?;

    let mut logger = match &output {
        Some(path) => {
            let path = PathBuf::from(path);
            ensure_parent_dir(&path).map_err(CliError::InvalidInput)?;
            Some(RoundLogger::create(&path)?)
        }
        None => None,
    };

    let mut wins = [0u32; 2];
    let mut ties = 0u32;
    for i in 0..rounds {
        let round_seed = base_seed.wrapping_add(u64::from(i));
        let mut ctrl = RoundController::new_seeded(round_seed, Seat::South)?;
        let trump_suit = ctrl.trump_suit();
        let mut south = create_policy(ai_kind.as_str(), trump_suit, round_seed);
        let mut east = create_policy(ai_kind.as_str(), trump_suit, round_seed.wrapping_add(1));
        let mut north = create_policy(ai_kind.as_str(), trump_suit, round_seed.wrapping_add(2));
        let mut west = create_policy(ai_kind.as_str(), trump_suit, round_seed.wrapping_add(3));
        let mut choosers: [&mut dyn CardChooser; 4] =
            [&mut *south, &mut *east, &mut *north, &mut *west];
        let mut sink = NullSink;
        let result = ctrl.play_round(&mut choosers, &mut sink)?;

        match result {
            RoundResult::Winner(team) => wins[team.index()] += 1,
            RoundResult::Tie => ties += 1,
            RoundResult::Forfeit { offender } => wins[offender.opponent().index()] += 1,
        }

        if let Some(logger) = logger.as_mut() {
            let plays = ctrl
                .play_log()
                .iter()
                .enumerate()
                .map(|(n, &(seat, card))| PlayRecord {
                    trick: (n / 4 + 1) as u8,
                    seat,
                    card,
                })
                .collect();
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(round_seed),
                trump_card: ctrl.trump_card(),
                plays,
                result: Some(result),
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "North/South wins: {}", wins[0])?;
    writeln!(out, "East/West wins: {}", wins[1])?;
    writeln!(out, "Ties: {}", ties)?;
    if let Some(path) = &output {
        writeln!(out, "Rounds written to {}", path)?;
    }
    Ok(())
}
