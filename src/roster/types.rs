//! Core domain types for the roster.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Unique identifier for a registered player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("P{}", _0)]
pub struct PlayerId(pub(crate) u64);

/// Unique identifier for a captain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("C{}", _0)]
pub struct CaptainId(pub(crate) u64);

/// Zero-based index of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamIndex(usize);

impl TeamIndex {
    /// Creates a team index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw zero-based index.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TeamIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0 + 1)
    }
}

/// Palette color owned by a captain slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    /// Slot 0.
    Red,
    /// Slot 1.
    Blue,
    /// Slot 2.
    Green,
}

impl TeamColor {
    /// Returns the palette entry for a slot, if the palette reaches that far.
    pub fn for_slot(slot: TeamIndex) -> Option<Self> {
        Self::iter().nth(slot.get())
    }
}

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Player's unique ID.
    #[getter(skip)]
    id: PlayerId,
    /// Display name. Duplicates are allowed.
    name: String,
    /// Shirt number, kept as text.
    number: String,
    /// Team the player was drafted into, if any.
    #[getter(skip)]
    team: Option<TeamIndex>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, number: String) -> Self {
        Self {
            id,
            name,
            number,
            team: None,
        }
    }

    /// Returns the player's ID.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the team the player was drafted into, if any.
    pub fn team(&self) -> Option<TeamIndex> {
        self.team
    }

    /// Returns true if the player has not been drafted yet.
    pub fn is_unassigned(&self) -> bool {
        self.team.is_none()
    }

    pub(crate) fn set_team(&mut self, team: Option<TeamIndex>) {
        self.team = team;
    }
}

/// A team captain.
///
/// The slot is fixed at creation. Deleting another captain never moves it,
/// so a captain's color stays stable for the lifetime of the captain.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Captain {
    /// Captain's unique ID.
    #[getter(skip)]
    id: CaptainId,
    /// Display name.
    name: String,
    /// Team name shown on the team sheet.
    team_label: String,
    /// Team this captain leads.
    #[getter(skip)]
    slot: TeamIndex,
    /// Palette color derived from the slot.
    #[getter(skip)]
    color: TeamColor,
}

impl Captain {
    pub(crate) fn new(
        id: CaptainId,
        name: String,
        team_label: String,
        slot: TeamIndex,
        color: TeamColor,
    ) -> Self {
        Self {
            id,
            name,
            team_label,
            slot,
            color,
        }
    }

    /// Returns the captain's ID.
    pub fn id(&self) -> CaptainId {
        self.id
    }

    /// Returns the team this captain leads.
    pub fn slot(&self) -> TeamIndex {
        self.slot
    }

    /// Returns the captain's palette color.
    pub fn color(&self) -> TeamColor {
        self.color
    }
}
