//! Roster files for batch drafts.
//!
//! ```toml
//! [[captains]]
//! name = "Ana"
//! team = "Falcons"
//!
//! [[players]]
//! name = "Wei"
//! number = "7"
//! ```

use std::path::Path;

use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::ConfigError;
use crate::controller::DraftController;

/// A captain entry in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CaptainEntry {
    /// Captain's name.
    name: String,
    /// Team name; required in three-team drafts.
    #[serde(default)]
    team: Option<String>,
}

/// A player entry in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Player's name.
    name: String,
    /// Shirt number.
    number: String,
}

/// Captains and players to register before a batch draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterFile {
    /// Captains, in slot order.
    captains: Vec<CaptainEntry>,
    /// Players, in insertion order.
    players: Vec<PlayerEntry>,
}

/// How many roster entries were accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Captains registered.
    pub captains: usize,
    /// Players registered.
    pub players: usize,
    /// Entries the roster refused.
    pub ignored: usize,
}

impl RosterFile {
    /// Parses a roster file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading roster file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read roster file: {}", e)))?;
        let roster: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse roster file: {}", e)))?;
        info!(
            captains = roster.captains.len(),
            players = roster.players.len(),
            "Roster file loaded"
        );
        Ok(roster)
    }

    /// Registers captains, then players, with the controller.
    #[instrument(skip(self, controller))]
    pub fn apply<R: Rng>(&self, controller: &mut DraftController<R>) -> LoadSummary {
        let mut summary = LoadSummary::default();

        for entry in &self.captains {
            match controller.add_captain(&entry.name, entry.team.as_deref()) {
                Some(_) => summary.captains += 1,
                None => {
                    warn!(name = %entry.name, "Captain entry ignored");
                    summary.ignored += 1;
                }
            }
        }

        for entry in &self.players {
            match controller.add_player(&entry.name, &entry.number) {
                Some(_) => summary.players += 1,
                None => {
                    warn!(name = %entry.name, "Player entry ignored");
                    summary.ignored += 1;
                }
            }
        }

        info!(?summary, "Roster applied");
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ThreeTeamOrder;
    use crate::mode::TeamCount;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ROSTER: &str = r#"
[[captains]]
name = "Ana"
team = "Falcons"

[[captains]]
name = "Bo"

[[captains]]
name = "Extra"

[[players]]
name = "Wei"
number = "7"

[[players]]
name = ""
number = "8"
"#;

    #[test]
    fn test_apply_counts_ignored_entries() {
        let roster: RosterFile = toml::from_str(ROSTER).expect("parse");
        let mut draft = DraftController::with_rng(
            TeamCount::Two,
            ThreeTeamOrder::Balanced,
            StdRng::seed_from_u64(1),
        );

        let summary = roster.apply(&mut draft);
        assert_eq!(
            summary,
            LoadSummary {
                captains: 2,
                players: 1,
                ignored: 2
            }
        );
        assert_eq!(draft.roster().captains()[0].team_label(), "Falcons");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let roster: RosterFile = toml::from_str("").expect("parse");
        assert!(roster.captains().is_empty());
        assert!(roster.players().is_empty());
    }
}
