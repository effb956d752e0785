//! In-memory roster of players and captains.

use tracing::{debug, info, instrument, warn};

use super::types::{Captain, CaptainId, Player, PlayerId, TeamColor, TeamIndex};
use crate::mode::TeamCount;

/// Holds registered players and captains.
///
/// Players keep their insertion order, which is also the order of every
/// projection. IDs are allocated from a counter that is never rewound, so
/// an ID is never reused even after a reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterStore {
    players: Vec<Player>,
    captains: Vec<Captain>,
    next_id: u64,
}

impl RosterStore {
    /// Creates an empty roster.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns all captains in insertion order.
    pub fn captains(&self) -> &[Captain] {
        &self.captains
    }

    /// Looks up a player by ID.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Returns the captain leading the given team.
    pub fn captain_for(&self, team: TeamIndex) -> Option<&Captain> {
        self.captains.iter().find(|c| c.slot() == team)
    }

    /// Returns true if no more captains fit the given mode.
    pub fn captains_full(&self, mode: TeamCount) -> bool {
        self.captains.len() >= mode.value()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Registers a player.
    ///
    /// Returns `None` without touching the roster if either field is blank.
    #[instrument(skip(self, name, number))]
    pub fn add_player(&mut self, name: &str, number: &str) -> Option<PlayerId> {
        let (name, number) = (name.trim(), number.trim());
        if name.is_empty() || number.is_empty() {
            debug!("Ignoring player with blank name or number");
            return None;
        }

        let id = PlayerId(self.allocate_id());
        self.players
            .push(Player::new(id, name.to_string(), number.to_string()));
        info!(player_id = %id, name, number, "Player added");
        Some(id)
    }

    /// Removes a player. Returns false if the ID is unknown.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id() != id);
        let removed = self.players.len() != before;
        if removed {
            info!(player_id = %id, "Player removed");
        } else {
            debug!(player_id = %id, "No such player");
        }
        removed
    }

    /// Removes every player.
    #[instrument(skip(self))]
    pub fn clear_players(&mut self) {
        info!(count = self.players.len(), "Clearing players");
        self.players.clear();
    }

    /// Registers a captain for the given mode.
    ///
    /// Returns `None` if the name is blank, if the mode requires a team label
    /// and none was given, or if every slot is already taken. The captain
    /// receives the lowest free slot and that slot's palette color.
    #[instrument(skip(self, name, team_label))]
    pub fn add_captain(
        &mut self,
        name: &str,
        team_label: Option<&str>,
        mode: TeamCount,
    ) -> Option<CaptainId> {
        let name = name.trim();
        let team_label = team_label.map(str::trim).filter(|l| !l.is_empty());

        if name.is_empty() {
            debug!("Ignoring captain with blank name");
            return None;
        }
        if mode.requires_team_label() && team_label.is_none() {
            debug!(mode = mode.label(), "Ignoring captain without team label");
            return None;
        }
        if self.captains_full(mode) {
            warn!(captains = self.captains.len(), mode = mode.label(), "Captain slots full");
            return None;
        }

        let slot = mode
            .teams()
            .find(|team| self.captain_for(*team).is_none())?;
        let color = TeamColor::for_slot(slot)?;
        let team_label = team_label
            .map(str::to_string)
            .unwrap_or_else(|| color.to_string());

        let id = CaptainId(self.allocate_id());
        info!(captain_id = %id, name, %slot, %color, "Captain added");
        self.captains
            .push(Captain::new(id, name.to_string(), team_label, slot, color));
        Some(id)
    }

    /// Removes a captain. Remaining captains keep their slots.
    #[instrument(skip(self))]
    pub fn remove_captain(&mut self, id: CaptainId) -> bool {
        let before = self.captains.len();
        self.captains.retain(|c| c.id() != id);
        let removed = self.captains.len() != before;
        if removed {
            info!(captain_id = %id, "Captain removed");
        } else {
            debug!(captain_id = %id, "No such captain");
        }
        removed
    }

    /// Removes every captain.
    #[instrument(skip(self))]
    pub fn clear_captains(&mut self) {
        info!(count = self.captains.len(), "Clearing captains");
        self.captains.clear();
    }

    /// Drafts a player into a team. Returns false if the ID is unknown.
    #[instrument(skip(self))]
    pub fn assign(&mut self, id: PlayerId, team: TeamIndex) -> bool {
        match self.players.iter_mut().find(|p| p.id() == id) {
            Some(player) => {
                player.set_team(Some(team));
                true
            }
            None => false,
        }
    }

    /// Strips the team from every player.
    #[instrument(skip(self))]
    pub fn clear_assignments(&mut self) {
        debug!("Clearing team assignments");
        for player in &mut self.players {
            player.set_team(None);
        }
    }

    /// Players not yet drafted, in insertion order.
    pub fn unassigned_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_unassigned())
    }

    /// Players drafted into the given team, in insertion order.
    pub fn team_players(&self, team: TeamIndex) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team() == Some(team))
    }

    /// Number of players with a team.
    pub fn assigned_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_unassigned()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_ignored() {
        let mut roster = RosterStore::new();
        assert_eq!(roster.add_player("", "7"), None);
        assert_eq!(roster.add_player("Wei", ""), None);
        assert_eq!(roster.add_player("   ", "7"), None);
        assert!(roster.players().is_empty());
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut roster = RosterStore::new();
        let a = roster.add_player("Wei", "7").expect("added");
        let b = roster.add_player("Wei", "7").expect("added");
        assert_ne!(a, b);
        assert_eq!(roster.players().len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut roster = RosterStore::new();
        let a = roster.add_player("Wei", "7").expect("added");
        roster.clear_players();
        let b = roster.add_player("Wei", "7").expect("added");
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_unknown_player_is_noop() {
        let mut roster = RosterStore::new();
        roster.add_player("Wei", "7");
        assert!(!roster.remove_player(PlayerId(999)));
        assert_eq!(roster.players().len(), 1);
    }

    #[test]
    fn test_captain_capacity() {
        let mut roster = RosterStore::new();
        assert!(roster.add_captain("A", None, TeamCount::Two).is_some());
        assert!(roster.add_captain("B", None, TeamCount::Two).is_some());
        assert!(roster.add_captain("C", None, TeamCount::Two).is_none());
        assert_eq!(roster.captains().len(), 2);
    }

    #[test]
    fn test_three_teams_require_label() {
        let mut roster = RosterStore::new();
        assert!(roster.add_captain("A", None, TeamCount::Three).is_none());
        assert!(roster.add_captain("A", Some("  "), TeamCount::Three).is_none());
        assert!(roster.add_captain("A", Some("Tigers"), TeamCount::Three).is_some());
        assert_eq!(roster.captains()[0].team_label(), "Tigers");
    }

    #[test]
    fn test_default_label_is_color_name() {
        let mut roster = RosterStore::new();
        roster.add_captain("A", None, TeamCount::Two);
        assert_eq!(roster.captains()[0].team_label(), "Red");
    }

    #[test]
    fn test_slots_survive_deletion() {
        let mut roster = RosterStore::new();
        let a = roster.add_captain("A", None, TeamCount::Two).expect("added");
        roster.add_captain("B", None, TeamCount::Two).expect("added");

        roster.remove_captain(a);
        let b = &roster.captains()[0];
        assert_eq!(b.slot(), TeamIndex::new(1));
        assert_eq!(b.color(), TeamColor::Blue);

        roster.add_captain("C", None, TeamCount::Two).expect("added");
        let c = roster.captain_for(TeamIndex::new(0)).expect("slot 0 filled");
        assert_eq!(c.name(), "C");
        assert_eq!(c.color(), TeamColor::Red);
    }

    #[test]
    fn test_projections_keep_insertion_order() {
        let mut roster = RosterStore::new();
        let a = roster.add_player("A", "1").expect("added");
        let b = roster.add_player("B", "2").expect("added");
        let c = roster.add_player("C", "3").expect("added");
        roster.assign(c, TeamIndex::new(0));
        roster.assign(a, TeamIndex::new(0));

        let team: Vec<_> = roster.team_players(TeamIndex::new(0)).map(|p| p.id()).collect();
        assert_eq!(team, vec![a, c]);
        let rest: Vec<_> = roster.unassigned_players().map(|p| p.id()).collect();
        assert_eq!(rest, vec![b]);
    }
}
