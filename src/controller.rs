//! Draft controller: the single owner of draft state.
//!
//! Every mutation of the roster, the captains or the pick cursor goes
//! through [`DraftController`]. The presentation layer only reads state back
//! through the accessors and projections.

use derive_new::new;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::DraftConfig;
use crate::draft::{Contract, DistributionContract, DraftError, DraftState, ThreeTeamOrder};
use crate::mode::TeamCount;
use crate::report::DraftSnapshot;
use crate::roster::{CaptainId, Player, PlayerId, RosterStore, TeamIndex};

/// Outcome of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct Assignment {
    /// The drafted player.
    pub player: PlayerId,
    /// Team the player joined.
    pub team: TeamIndex,
    /// Zero-based pick number (the cursor before the pick).
    pub pick: usize,
}

/// Owns the draft state and the random source used for picks.
#[derive(Debug)]
pub struct DraftController<R = StdRng> {
    state: DraftState,
    rng: R,
}

impl DraftController<StdRng> {
    /// Creates a controller from configuration.
    ///
    /// A configured seed makes every draw reproducible; otherwise the
    /// generator is seeded from the operating system.
    #[instrument(skip(config))]
    pub fn new(config: &DraftConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                info!(seed, "Using seeded random source");
                StdRng::seed_from_u64(*seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::with_rng(*config.team_count(), *config.three_team_order(), rng)
    }
}

impl<R: Rng> DraftController<R> {
    /// Creates a controller with an explicit random source.
    #[instrument(skip(rng))]
    pub fn with_rng(mode: TeamCount, three_team_order: ThreeTeamOrder, rng: R) -> Self {
        Self {
            state: DraftState::new(mode, three_team_order),
            rng,
        }
    }

    /// Returns the full draft state.
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// Returns the roster.
    pub fn roster(&self) -> &RosterStore {
        self.state.roster()
    }

    /// Returns the team-count mode.
    pub fn team_count(&self) -> TeamCount {
        self.state.mode()
    }

    /// Number of successful picks since the last reset.
    pub fn cursor(&self) -> usize {
        self.state.engine().cursor()
    }

    /// True once a pick has happened since the last reset.
    pub fn is_distributing(&self) -> bool {
        self.state.engine().is_distributing()
    }

    /// Team that receives the next pick.
    pub fn next_team(&self) -> TeamIndex {
        self.state.engine().next_team()
    }

    /// Returns true if no more captains can be added.
    pub fn captains_full(&self) -> bool {
        self.state.roster().captains_full(self.state.mode())
    }

    // ─────────────────────────────────────────────────────────────
    //  Roster operations
    // ─────────────────────────────────────────────────────────────

    /// Registers a player. Blank fields are ignored.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, name: &str, number: &str) -> Option<PlayerId> {
        self.state.roster.add_player(name, number)
    }

    /// Removes a player if present.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        self.state.roster.remove_player(id)
    }

    /// Clears every player and rewinds the draft.
    #[instrument(skip(self))]
    pub fn reset_players(&mut self) {
        self.state.roster.clear_players();
        self.state.engine.reset();
        info!("Players reset");
    }

    /// Registers a captain for the next free team slot.
    ///
    /// Ignored when the name is blank, when the mode needs a team label and
    /// none is given, or when every team already has a captain.
    #[instrument(skip(self))]
    pub fn add_captain(&mut self, name: &str, team_label: Option<&str>) -> Option<CaptainId> {
        let mode = self.state.mode;
        self.state.roster.add_captain(name, team_label, mode)
    }

    /// Removes a captain if present. Other captains keep their colors.
    #[instrument(skip(self))]
    pub fn remove_captain(&mut self, id: CaptainId) -> bool {
        self.state.roster.remove_captain(id)
    }

    /// Clears every captain and rewinds the draft. Assignments are kept.
    #[instrument(skip(self))]
    pub fn reset_captains(&mut self) {
        self.state.roster.clear_captains();
        self.state.engine.reset();
        info!("Captains reset");
    }

    /// Switches the team count from a raw number (2 or 3).
    #[instrument(skip(self))]
    pub fn set_team_count(&mut self, count: u8) -> Result<(), DraftError> {
        let mode = TeamCount::try_from(count).inspect_err(|e| {
            warn!(error = %e, "Rejected team count");
        })?;
        self.set_mode(mode);
        Ok(())
    }

    /// Switches the team count, clearing captains and every assignment.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: TeamCount) {
        self.state.mode = mode;
        self.state.roster.clear_captains();
        self.state.roster.clear_assignments();
        self.state.engine.set_mode(mode);
        info!(mode = mode.label(), "Team count changed");
    }

    // ─────────────────────────────────────────────────────────────
    //  Distribution
    // ─────────────────────────────────────────────────────────────

    /// Drafts one random unassigned player into the next team in pick order.
    ///
    /// # Errors
    ///
    /// - [`DraftError::CaptainCountMismatch`] if some team has no captain
    /// - [`DraftError::NoUnassignedPlayers`] if everyone is drafted
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(cursor = self.state.engine.cursor()))]
    pub fn start_distribution(&mut self) -> Result<Assignment, DraftError> {
        DistributionContract::pre(&self.state)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let waiting: Vec<PlayerId> = self
            .state
            .roster
            .unassigned_players()
            .map(Player::id)
            .collect();
        let player = *waiting
            .choose(&mut self.rng)
            .ok_or(DraftError::NoUnassignedPlayers)?;

        let pick = self.state.engine.cursor();
        let team = self.state.engine.next_team();
        self.state.roster.assign(player, team);
        self.state.engine.advance();

        #[cfg(debug_assertions)]
        {
            if let Err(e) = DistributionContract::post(&before, &self.state) {
                warn!(error = %e, "Pick broke its contract, rolling back");
                self.state = before;
                return Err(e);
            }
        }

        info!(player_id = %player, %team, pick, waiting = waiting.len() - 1, "Player drafted");
        Ok(Assignment::new(player, team, pick))
    }

    /// Drafts every remaining player, returning the picks in order.
    ///
    /// Stops cleanly when nobody is left; a missing captain is an error.
    #[instrument(skip(self))]
    pub fn distribute_all(&mut self) -> Result<Vec<Assignment>, DraftError> {
        let mut picks = Vec::new();
        loop {
            match self.start_distribution() {
                Ok(assignment) => picks.push(assignment),
                Err(DraftError::NoUnassignedPlayers) => break,
                Err(e) => return Err(e),
            }
        }
        debug!(picks = picks.len(), "Draft complete");
        Ok(picks)
    }

    /// Strips every assignment and rewinds the cursor.
    #[instrument(skip(self))]
    pub fn reset_distribution(&mut self) {
        self.state.roster.clear_assignments();
        self.state.engine.reset();
        info!("Distribution reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Projections
    // ─────────────────────────────────────────────────────────────

    /// Players drafted into a team, in insertion order.
    pub fn team_players(&self, team: TeamIndex) -> Vec<&Player> {
        self.state.roster.team_players(team).collect()
    }

    /// Players waiting to be drafted, in insertion order.
    pub fn unassigned_players(&self) -> Vec<&Player> {
        self.state.roster.unassigned_players().collect()
    }

    /// Captures a serializable view of the current teams.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(mode: TeamCount) -> DraftController {
        DraftController::with_rng(mode, ThreeTeamOrder::Balanced, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_failed_pick_leaves_state_untouched() {
        let mut draft = controller(TeamCount::Three);
        draft.add_captain("A", Some("Tigers"));
        draft.add_player("Wei", "7");
        let before = draft.state().clone();

        assert!(matches!(
            draft.start_distribution(),
            Err(DraftError::CaptainCountMismatch { captains: 1, required: 3 })
        ));
        assert_eq!(draft.state(), &before);
    }

    #[test]
    fn test_reset_captains_keeps_assignments() {
        let mut draft = controller(TeamCount::Two);
        draft.add_captain("A", None);
        draft.add_captain("B", None);
        draft.add_player("Wei", "7");
        draft.start_distribution().expect("pick");

        draft.reset_captains();
        assert!(draft.roster().captains().is_empty());
        assert_eq!(draft.cursor(), 0);
        assert!(!draft.is_distributing());
        assert!(draft.unassigned_players().is_empty());
    }

    #[test]
    fn test_reset_players_rewinds_cursor() {
        let mut draft = controller(TeamCount::Two);
        draft.add_captain("A", None);
        draft.add_captain("B", None);
        draft.add_player("Wei", "7");
        draft.start_distribution().expect("pick");

        draft.reset_players();
        assert!(draft.roster().players().is_empty());
        assert_eq!(draft.cursor(), 0);
        assert!(!draft.is_distributing());
    }

    #[test]
    fn test_invalid_team_count_changes_nothing() {
        let mut draft = controller(TeamCount::Two);
        draft.add_captain("A", None);
        assert_eq!(draft.set_team_count(5), Err(DraftError::InvalidTeamCount(5)));
        assert_eq!(draft.roster().captains().len(), 1);
        assert_eq!(draft.team_count(), TeamCount::Two);
    }

    #[test]
    fn test_distribute_all_requires_captains() {
        let mut draft = controller(TeamCount::Two);
        draft.add_player("Wei", "7");
        assert!(draft.distribute_all().is_err());
    }

    #[test]
    fn test_distribute_all_on_empty_roster_is_empty() {
        let mut draft = controller(TeamCount::Two);
        draft.add_captain("A", None);
        draft.add_captain("B", None);
        assert_eq!(draft.distribute_all(), Ok(Vec::new()));
    }
}
