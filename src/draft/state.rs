//! The complete draft state owned by the controller.

use tracing::{info, instrument};

use super::engine::DraftEngine;
use super::pick_order::ThreeTeamOrder;
use crate::mode::TeamCount;
use crate::roster::RosterStore;

/// Roster, pick-order progress and mode in one value.
///
/// Cloning is cheap enough for debug-build postcondition checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    pub(crate) roster: RosterStore,
    pub(crate) engine: DraftEngine,
    pub(crate) mode: TeamCount,
}

impl DraftState {
    /// Creates an empty state for a mode.
    #[instrument]
    pub fn new(mode: TeamCount, three_team_order: ThreeTeamOrder) -> Self {
        info!(mode = mode.label(), %three_team_order, "Creating draft state");
        Self {
            roster: RosterStore::new(),
            engine: DraftEngine::new(mode, three_team_order),
            mode,
        }
    }

    /// Returns the roster.
    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    /// Returns the pick-order engine.
    pub fn engine(&self) -> &DraftEngine {
        &self.engine
    }

    /// Returns the team-count mode.
    pub fn mode(&self) -> TeamCount {
        self.mode
    }
}
