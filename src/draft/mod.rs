//! Draft engine: pick order, state, contracts and invariants.

mod contracts;
mod engine;
mod error;
mod invariants;
mod pick_order;
mod state;

pub use contracts::{CaptainsSeated, Contract, DistributionContract, PlayersWaiting};
pub use engine::DraftEngine;
pub use error::DraftError;
pub use invariants::{
    AssignmentRangeInvariant, CaptainCapacityInvariant, CaptainSlotsInvariant, DraftInvariants,
    Invariant, InvariantSet, InvariantViolation,
};
pub use pick_order::{PickOrder, ThreeTeamOrder};
pub use state::DraftState;
