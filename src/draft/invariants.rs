//! First-class invariants for the draft state.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are checked in debug builds and can be tested independently.

use super::state::DraftState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for three-element tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: there are never more captains than teams.
pub struct CaptainCapacityInvariant;

impl Invariant<DraftState> for CaptainCapacityInvariant {
    fn holds(state: &DraftState) -> bool {
        state.roster().captains().len() <= state.mode().value()
    }

    fn description() -> &'static str {
        "Captain count does not exceed team count"
    }
}

/// Invariant: each captain owns a distinct slot inside the mode.
pub struct CaptainSlotsInvariant;

impl Invariant<DraftState> for CaptainSlotsInvariant {
    fn holds(state: &DraftState) -> bool {
        let captains = state.roster().captains();
        captains.iter().enumerate().all(|(i, captain)| {
            state.mode().contains(captain.slot())
                && captains[..i].iter().all(|other| other.slot() != captain.slot())
        })
    }

    fn description() -> &'static str {
        "Captain slots are distinct and within the team count"
    }
}

/// Invariant: every drafted player sits in an existing team.
pub struct AssignmentRangeInvariant;

impl Invariant<DraftState> for AssignmentRangeInvariant {
    fn holds(state: &DraftState) -> bool {
        state
            .roster()
            .players()
            .iter()
            .filter_map(|p| p.team())
            .all(|team| state.mode().contains(team))
    }

    fn description() -> &'static str {
        "Assigned teams are within the team count"
    }
}

/// All draft invariants as a composable set.
pub type DraftInvariants = (
    CaptainCapacityInvariant,
    CaptainSlotsInvariant,
    AssignmentRangeInvariant,
);
