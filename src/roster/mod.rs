//! Roster of players and captains.

mod file;
mod store;
mod types;

pub use file::{CaptainEntry, LoadSummary, PlayerEntry, RosterFile};
pub use store::RosterStore;
pub use types::{Captain, CaptainId, Player, PlayerId, TeamColor, TeamIndex};
