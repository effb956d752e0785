//! Roster Draft - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use roster_draft::{DraftConfig, DraftController, RosterFile, TeamCount, log_filter, run_tui};
use tracing::{info, instrument, warn};

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The TUI owns the terminal and logs to a file instead.
    if matches!(cli.command, Command::Simulate { .. }) {
        init_tracing();
    }
    let config = DraftConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Tui { teams, seed } => run_tui(apply_overrides(config, teams, seed)?),
        Command::Simulate {
            roster,
            teams,
            seed,
            json,
        } => simulate(apply_overrides(config, teams, seed)?, &roster, json),
    }
}

/// Applies command-line flags on top of the config file.
fn apply_overrides(
    mut config: DraftConfig,
    teams: Option<u8>,
    seed: Option<u64>,
) -> Result<DraftConfig> {
    if let Some(teams) = teams {
        config = config.with_team_count(TeamCount::try_from(teams)?);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Drafts a roster file to completion and prints the team sheets.
#[instrument(skip(config), fields(roster = %roster.display()))]
fn simulate(config: DraftConfig, roster: &std::path::Path, json: bool) -> Result<()> {
    let roster_file = RosterFile::from_file(roster)?;
    let mut draft = DraftController::new(&config);

    let summary = roster_file.apply(&mut draft);
    if summary.ignored > 0 {
        warn!(ignored = summary.ignored, "Some roster entries were ignored");
    }

    let picks = draft
        .distribute_all()
        .context("Cannot draft this roster")?;
    info!(picks = picks.len(), "Simulation complete");

    let snapshot = draft.snapshot();
    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        print!("{}", snapshot.to_text());
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();
}
