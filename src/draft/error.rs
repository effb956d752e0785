//! Errors surfaced by draft operations.

/// Error that can occur when running the draft.
///
/// None of these are fatal: the draft state is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DraftError {
    /// Every team needs a captain before players can be drafted.
    #[display("{} of {} captains registered; every team needs a captain", captains, required)]
    CaptainCountMismatch {
        /// Captains currently registered.
        captains: usize,
        /// Captains required by the team count.
        required: usize,
    },

    /// Every player already has a team.
    #[display("No unassigned players left to draft")]
    NoUnassignedPlayers,

    /// Only two or three teams are supported.
    #[display("Unsupported team count {}: choose 2 or 3", _0)]
    InvalidTeamCount(u8),

    /// A postcondition failed after a state transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for DraftError {}
