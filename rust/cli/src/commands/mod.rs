//! Command handler modules for the trunfo CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: streams (`&mut dyn Write` / `&mut dyn BufRead`)
//!   passed as parameters so tests can script them
//! - Error propagation via the `CliError` enum

use std::io::Write;

use crate::cli::AiKind;
use crate::ui;

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

/// Resolve the AI policy from the flag, falling back to configuration.
/// An unknown configured name degrades to greedy with a warning rather
/// than failing the command.
pub(crate) fn resolve_ai(
    flag: Option<AiKind>,
    configured: &str,
    err: &mut dyn Write,
) -> std::io::Result<AiKind> {
    if let Some(kind) = flag {
        return Ok(kind);
    }
    match AiKind::from_name(configured) {
        Some(kind) => Ok(kind),
        None => {
            ui::display_warning(
                err,
                &format!("Unknown AI '{}' in configuration, using greedy", configured),
            )?;
            Ok(AiKind::Greedy)
        }
    }
}
