//! Serializable team sheets.

use serde::Serialize;
use tracing::instrument;

use crate::draft::DraftState;
use crate::mode::TeamCount;
use crate::roster::{Player, TeamColor, TeamIndex};

/// One team as shown on a team sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSheet {
    /// Team index.
    pub team: TeamIndex,
    /// Palette color of the team's slot.
    pub color: Option<TeamColor>,
    /// Team name from the captain, or the color name when there is none.
    pub label: String,
    /// Captain's name, if the slot is filled.
    pub captain: Option<String>,
    /// Drafted players in insertion order.
    pub players: Vec<Player>,
}

/// Point-in-time view of the whole draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSnapshot {
    /// Team-count mode.
    pub team_count: TeamCount,
    /// Picks made since the last reset.
    pub cursor: usize,
    /// Whether a draft is underway.
    pub distributing: bool,
    /// One sheet per team.
    pub teams: Vec<TeamSheet>,
    /// Players still waiting.
    pub unassigned: Vec<Player>,
}

impl DraftSnapshot {
    /// Captures the current state.
    #[instrument(skip(state))]
    pub fn capture(state: &DraftState) -> Self {
        let roster = state.roster();
        let teams = state
            .mode()
            .teams()
            .map(|team| {
                let captain = roster.captain_for(team);
                let color = TeamColor::for_slot(team);
                let label = match (captain, color) {
                    (Some(c), _) => c.team_label().clone(),
                    (None, Some(color)) => color.to_string(),
                    (None, None) => team.to_string(),
                };
                TeamSheet {
                    team,
                    color,
                    label,
                    captain: captain.map(|c| c.name().clone()),
                    players: roster.team_players(team).cloned().collect(),
                }
            })
            .collect();

        Self {
            team_count: state.mode(),
            cursor: state.engine().cursor(),
            distributing: state.engine().is_distributing(),
            teams,
            unassigned: roster.unassigned_players().cloned().collect(),
        }
    }

    /// Renders the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the snapshot as plain text, one block per team.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for DraftSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sheet in &self.teams {
            writeln!(
                f,
                "{} ({}) - captain: {}",
                sheet.label,
                sheet.team,
                sheet.captain.as_deref().unwrap_or("-")
            )?;
            for player in &sheet.players {
                writeln!(f, "  #{:<4} {}", player.number(), player.name())?;
            }
            writeln!(f)?;
        }
        if !self.unassigned.is_empty() {
            writeln!(f, "Unassigned:")?;
            for player in &self.unassigned {
                writeln!(f, "  #{:<4} {}", player.number(), player.name())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ThreeTeamOrder;

    #[test]
    fn test_capture_empty_three_team_state() {
        let state = DraftState::new(TeamCount::Three, ThreeTeamOrder::Balanced);
        let snapshot = DraftSnapshot::capture(&state);
        assert_eq!(snapshot.teams.len(), 3);
        assert_eq!(snapshot.teams[2].label, "Green");
        assert!(snapshot.teams.iter().all(|t| t.captain.is_none()));
        assert!(!snapshot.distributing);
    }

    #[test]
    fn test_text_lists_captains_and_unassigned() {
        let mut state = DraftState::new(TeamCount::Two, ThreeTeamOrder::Balanced);
        state.roster.add_captain("Ana", Some("Falcons"), TeamCount::Two);
        state.roster.add_player("Wei", "7");

        let text = DraftSnapshot::capture(&state).to_text();
        assert!(text.contains("Falcons (Team 1) - captain: Ana"));
        assert!(text.contains("Blue (Team 2) - captain: -"));
        assert!(text.contains("Unassigned:"));
        assert!(text.contains("Wei"));
    }

    #[test]
    fn test_display_ends_each_team_with_blank_line() {
        let mut state = DraftState::new(TeamCount::Two, ThreeTeamOrder::Balanced);
        state.roster.add_captain("Ana", None, TeamCount::Two);
        state.roster.add_captain("Bo", None, TeamCount::Two);
        let id = state.roster.add_player("Wei", "7").expect("added");
        state.roster.assign(id, TeamIndex::new(1));

        let snapshot = DraftSnapshot::capture(&state);
        let text = snapshot.to_string();
        assert_eq!(text, snapshot.to_text());
        assert_eq!(
            text,
            "Red (Team 1) - captain: Ana\n\nBlue (Team 2) - captain: Bo\n  #7    Wei\n\n"
        );
    }

    #[test]
    fn test_json_uses_plain_numbers() {
        let state = DraftState::new(TeamCount::Two, ThreeTeamOrder::Balanced);
        let json = DraftSnapshot::capture(&state).to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["team_count"], 2);
        assert_eq!(value["teams"][1]["team"], 1);
        assert_eq!(value["teams"][0]["color"], "red");
    }
}
