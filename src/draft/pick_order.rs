//! Fixed pick-order tables.
//!
//! A pick order is consumed cyclically: the cursor selects the destination
//! team of the next drafted player. The tables approximate a snake draft so
//! that no team gets two early picks in a row.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::mode::TeamCount;
use crate::roster::TeamIndex;

const TWO_TEAMS: &[usize] = &[0, 1, 0, 1, 1, 0];
const THREE_TEAMS_BALANCED: &[usize] = &[0, 1, 2, 0, 2, 1, 1, 2, 0];
const THREE_TEAMS_LEGACY: &[usize] = &[0, 1, 2, 2, 1, 0];

/// Which table to use in three-team mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThreeTeamOrder {
    /// Nine picks, each team three times with interleaved turns.
    #[default]
    Balanced,
    /// Six-pick plain snake. Superseded by `Balanced`.
    Legacy,
}

/// Pick-order table for a team-count mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickOrder {
    mode: TeamCount,
    sequence: &'static [usize],
}

impl PickOrder {
    /// Selects the table for a mode.
    #[instrument]
    pub fn new(mode: TeamCount, three_team_order: ThreeTeamOrder) -> Self {
        let sequence = match (mode, three_team_order) {
            (TeamCount::Two, _) => TWO_TEAMS,
            (TeamCount::Three, ThreeTeamOrder::Balanced) => THREE_TEAMS_BALANCED,
            (TeamCount::Three, ThreeTeamOrder::Legacy) => THREE_TEAMS_LEGACY,
        };
        Self { mode, sequence }
    }

    /// Returns the mode this table serves.
    pub fn mode(&self) -> TeamCount {
        self.mode
    }

    /// Returns the length of one full cycle.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the table has no picks.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Destination team for the pick at `cursor`.
    pub fn team_at(&self, cursor: usize) -> TeamIndex {
        TeamIndex::new(self.sequence[cursor % self.sequence.len()])
    }

    /// Iterates over one full cycle.
    pub fn cycle(&self) -> impl Iterator<Item = TeamIndex> + '_ {
        self.sequence.iter().copied().map(TeamIndex::new)
    }
}
