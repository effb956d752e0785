//! Command-line interface for roster_draft.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Roster Draft - split a pickup roster into balanced teams
#[derive(Parser, Debug)]
#[command(name = "roster_draft")]
#[command(about = "Randomized, pick-order balanced team drafting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if missing)
    #[arg(short, long, global = true, default_value = "roster_draft.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal UI
    Tui {
        /// Number of teams (overrides the config file)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
        teams: Option<u8>,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draft a roster file in one go and print the teams
    Simulate {
        /// Roster file listing captains and players
        #[arg(short, long)]
        roster: PathBuf,

        /// Number of teams (overrides the config file)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
        teams: Option<u8>,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
