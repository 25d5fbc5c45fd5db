//! Command-line interface for trunfo rounds.
//!
//! Provides subcommands to play an interactive round against AI seats,
//! deal and inspect hands, simulate AI-only batches with JSONL history,
//! and print the resolved configuration. The entry point is [`run`],
//! which takes the argument iterator and output streams as parameters so
//! integration tests can drive the whole binary without a process spawn.

use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

pub use error::CliError;

use cli::{Commands, TrunfoCli};

/// Parses arguments, dispatches to the subcommand handler, and maps the
/// outcome to a process exit code.
///
/// # Arguments
///
/// * `args` - Argument iterator, the first entry being the program name
/// * `out` - Output stream for normal command output
/// * `err` - Error stream for warnings and errors
///
/// # Returns
///
/// * `exit_code::SUCCESS` on success (including `--help` / `--version`)
/// * `exit_code::INTERRUPTED` when the player quit mid-round
/// * `exit_code::ERROR` for every other failure
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = match TrunfoCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.command {
        Commands::Play { seed, ai } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            commands::handle_play_command(seed, ai, &mut input, out, err)
        }
        Commands::Deal { seed } => commands::handle_deal_command(seed, out),
        Commands::Sim {
            rounds,
            seed,
            ai,
            output,
        } => commands::handle_sim_command(rounds, seed, ai, output, out, err),
        Commands::Cfg => commands::handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
