//! Roster Draft library - randomized, pick-order balanced team drafting
//!
//! Organizers register players and one captain per team, then draft the
//! players one at a time: each pick takes a random unassigned player and
//! hands them to the team whose turn it is in a fixed snake-like pick order.
//!
//! # Architecture
//!
//! - **Roster**: players and captains with stable IDs and captain slots
//! - **Draft**: pick-order tables, cursor, contracts and invariants
//! - **Controller**: single owner of the draft state
//! - **TUI**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use roster_draft::{DraftController, TeamCount, ThreeTeamOrder};
//!
//! let mut draft = DraftController::with_rng(
//!     TeamCount::Two,
//!     ThreeTeamOrder::Balanced,
//!     StdRng::seed_from_u64(7),
//! );
//! draft.add_captain("Ana", None);
//! draft.add_captain("Bo", None);
//! draft.add_player("Wei", "7");
//!
//! let pick = draft.start_distribution().expect("captains seated");
//! assert_eq!(pick.team.get(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod draft;
mod mode;
mod report;
mod roster;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_LOG_FILTER, DraftConfig, log_filter};

// Crate-level exports - Controller
pub use controller::{Assignment, DraftController};

// Crate-level exports - Draft engine
pub use draft::{
    AssignmentRangeInvariant, CaptainCapacityInvariant, CaptainSlotsInvariant, CaptainsSeated,
    Contract, DistributionContract, DraftEngine, DraftError, DraftInvariants, DraftState,
    Invariant, InvariantSet, InvariantViolation, PickOrder, PlayersWaiting, ThreeTeamOrder,
};

// Crate-level exports - Mode
pub use mode::TeamCount;

// Crate-level exports - Reporting
pub use report::{DraftSnapshot, TeamSheet};

// Crate-level exports - Roster
pub use roster::{
    Captain, CaptainEntry, CaptainId, LoadSummary, Player, PlayerEntry, PlayerId, RosterFile,
    RosterStore, TeamColor, TeamIndex,
};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Focus, Form, map_key, run_tui};
