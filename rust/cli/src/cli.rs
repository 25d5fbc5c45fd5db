//! Clap definitions for the `trunfo` binary.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "trunfo",
    about = "Four-player Belote-style trick-taking rounds",
    version
)]
pub struct TrunfoCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one interactive round against three AI seats
    Play {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Policy occupying the AI seats
        #[arg(long, value_enum)]
        ai: Option<AiKind>,
    },
    /// Deal a round and print all hands for inspection
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate AI-only rounds, optionally recording JSONL history
    Sim {
        /// Number of rounds to simulate
        #[arg(long)]
        rounds: Option<u32>,
        /// Base RNG seed (round i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Policy occupying all four seats
        #[arg(long, value_enum)]
        ai: Option<AiKind>,
        /// Path for the JSONL round history
        #[arg(long)]
        output: Option<String>,
    },
    /// Print resolved configuration and where each value came from
    Cfg,
}

/// AI policy selector shared by the play and sim commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum AiKind {
    Greedy,
    Random,
}

impl AiKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AiKind::Greedy => "greedy",
            AiKind::Random => "random",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "greedy" => Some(AiKind::Greedy),
            "random" => Some(AiKind::Random),
            _ => None,
        }
    }
}
