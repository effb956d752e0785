//! Contract-based validation for draft picks.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} pick {Q}.

use tracing::{instrument, warn};

use super::error::DraftError;
use super::invariants::{DraftInvariants, InvariantSet};
use super::state::DraftState;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S> {
    /// Checks preconditions before the transition.
    fn pre(state: &S) -> Result<(), DraftError>;

    /// Checks postconditions after the transition.
    fn post(before: &S, after: &S) -> Result<(), DraftError>;
}

/// Precondition: every team has a captain.
pub struct CaptainsSeated;

impl CaptainsSeated {
    /// Fails with [`DraftError::CaptainCountMismatch`] unless captains == teams.
    #[instrument(skip(state))]
    pub fn check(state: &DraftState) -> Result<(), DraftError> {
        let captains = state.roster().captains().len();
        let required = state.mode().value();
        if captains != required {
            warn!(captains, required, "Captain count mismatch");
            return Err(DraftError::CaptainCountMismatch { captains, required });
        }
        Ok(())
    }
}

/// Precondition: at least one player is waiting to be drafted.
pub struct PlayersWaiting;

impl PlayersWaiting {
    /// Fails with [`DraftError::NoUnassignedPlayers`] if everyone has a team.
    #[instrument(skip(state))]
    pub fn check(state: &DraftState) -> Result<(), DraftError> {
        if state.roster().unassigned_players().next().is_none() {
            warn!("No unassigned players");
            return Err(DraftError::NoUnassignedPlayers);
        }
        Ok(())
    }
}

/// Contract for a single distribution pick.
///
/// Preconditions:
/// - Every team has a captain
/// - Some player is unassigned
///
/// Postconditions:
/// - Exactly one previously unassigned player gained a team
/// - No other player changed
/// - Cursor advanced by one and the active flag is set
/// - All draft invariants hold
pub struct DistributionContract;

impl Contract<DraftState> for DistributionContract {
    fn pre(state: &DraftState) -> Result<(), DraftError> {
        CaptainsSeated::check(state)?;
        PlayersWaiting::check(state)
    }

    fn post(before: &DraftState, after: &DraftState) -> Result<(), DraftError> {
        let old = before.roster().players();
        let new = after.roster().players();
        if old.len() != new.len() {
            return Err(DraftError::InvariantViolation(
                "Pick changed the number of players".to_string(),
            ));
        }

        let mut changed = 0;
        for (was, now) in old.iter().zip(new) {
            if was == now {
                continue;
            }
            if was.id() != now.id() || was.team().is_some() || now.team().is_none() {
                return Err(DraftError::InvariantViolation(format!(
                    "Pick modified player {} outside the contract",
                    was.id()
                )));
            }
            changed += 1;
        }
        if changed != 1 {
            return Err(DraftError::InvariantViolation(format!(
                "Pick assigned {} players instead of one",
                changed
            )));
        }

        if after.engine().cursor() != before.engine().cursor() + 1
            || !after.engine().is_distributing()
        {
            return Err(DraftError::InvariantViolation(
                "Cursor did not advance by one".to_string(),
            ));
        }

        DraftInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            DraftError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
