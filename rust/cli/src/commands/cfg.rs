//! Cfg command: print the resolved configuration.
//!
//! Shows every configuration value together with where it came from
//! (default, file, or environment) so users can debug precedence.

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the cfg command.
///
/// # Arguments
///
/// * `out` - Output stream for the resolved values
/// * `err` - Error stream for load failures
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError::Config` when the
/// configuration cannot be loaded.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            ui::write_error(err, &format!("Failed to load configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    writeln!(
        out,
        "rounds = {} ({})",
        resolved.config.rounds,
        resolved.sources.rounds.as_str()
    )?;
    let seed = resolved
        .config
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    writeln!(out, "seed = {} ({})", seed, resolved.sources.seed.as_str())?;
    writeln!(
        out,
        "ai = {} ({})",
        resolved.config.ai,
        resolved.sources.ai.as_str()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_command_prints_every_key_with_a_source() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).unwrap();
        let output = String::from_utf8(out).unwrap();
        for key in ["rounds = ", "seed = ", "ai = "] {
            assert!(output.contains(key), "missing {} in {}", key, output);
        }
        for line in output.lines() {
            assert!(line.ends_with("(default)") || line.ends_with("(file)") || line.ends_with("(env)"));
        }
    }
}
