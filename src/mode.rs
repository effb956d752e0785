//! Team-count mode: how many teams the roster is split into.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::draft::DraftError;
use crate::roster::{TeamColor, TeamIndex};

/// Number of teams the roster is drafted into.
///
/// Defaults to [`TeamCount::Two`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamCount {
    /// Two teams, no team label required.
    #[default]
    Two,
    /// Three teams; captains must name their team.
    Three,
}

impl TeamCount {
    /// Returns the number of teams.
    pub const fn value(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Two => "2 teams",
            Self::Three => "3 teams",
        }
    }

    /// Returns true if captains must supply a team label in this mode.
    pub const fn requires_team_label(self) -> bool {
        matches!(self, Self::Three)
    }

    /// Iterates over the team indices of this mode.
    pub fn teams(self) -> impl Iterator<Item = TeamIndex> {
        (0..self.value()).map(TeamIndex::new)
    }

    /// Returns true if the index names a team in this mode.
    pub fn contains(self, team: TeamIndex) -> bool {
        team.get() < self.value()
    }

    /// Returns the captain palette for this mode, indexed by slot.
    pub fn palette(self) -> Vec<TeamColor> {
        self.teams().filter_map(TeamColor::for_slot).collect()
    }
}

impl TryFrom<u8> for TeamCount {
    type Error = DraftError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(DraftError::InvalidTeamCount(other)),
        }
    }
}

impl From<TeamCount> for u8 {
    fn from(count: TeamCount) -> Self {
        match count {
            TeamCount::Two => 2,
            TeamCount::Three => 3,
        }
    }
}

impl std::fmt::Display for TeamCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
