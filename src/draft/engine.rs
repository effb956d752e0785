//! Distribution cursor and pick-order bookkeeping.

use tracing::{debug, instrument};

use super::pick_order::{PickOrder, ThreeTeamOrder};
use crate::mode::TeamCount;
use crate::roster::TeamIndex;

/// Tracks progress through the pick-order table.
///
/// The engine never touches players; it only answers "which team picks
/// next" and records that a pick happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftEngine {
    order: PickOrder,
    three_team_order: ThreeTeamOrder,
    cursor: usize,
    distributing: bool,
}

impl DraftEngine {
    /// Creates an idle engine for a mode.
    #[instrument]
    pub fn new(mode: TeamCount, three_team_order: ThreeTeamOrder) -> Self {
        Self {
            order: PickOrder::new(mode, three_team_order),
            three_team_order,
            cursor: 0,
            distributing: false,
        }
    }

    /// Returns the active pick-order table.
    pub fn order(&self) -> &PickOrder {
        &self.order
    }

    /// Number of successful picks since the last reset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once a pick has happened since the last reset.
    pub fn is_distributing(&self) -> bool {
        self.distributing
    }

    /// Team that receives the next pick.
    pub fn next_team(&self) -> TeamIndex {
        self.order.team_at(self.cursor)
    }

    /// Records a successful pick.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn advance(&mut self) {
        self.cursor += 1;
        self.distributing = true;
        debug!(cursor = self.cursor, "Cursor advanced");
    }

    /// Rewinds the cursor and clears the active flag.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.distributing = false;
    }

    /// Switches to another mode's table and resets.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: TeamCount) {
        self.order = PickOrder::new(mode, self.three_team_order);
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_follows_table() {
        let mut engine = DraftEngine::new(TeamCount::Three, ThreeTeamOrder::Balanced);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(engine.next_team().get());
            engine.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert!(engine.is_distributing());
        assert_eq!(engine.cursor(), 4);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut engine = DraftEngine::new(TeamCount::Two, ThreeTeamOrder::Balanced);
        engine.advance();
        engine.advance();
        engine.reset();
        assert_eq!(engine.cursor(), 0);
        assert!(!engine.is_distributing());
        assert_eq!(engine.next_team(), TeamIndex::new(0));
    }

    #[test]
    fn test_set_mode_keeps_three_team_variant() {
        let mut engine = DraftEngine::new(TeamCount::Two, ThreeTeamOrder::Legacy);
        engine.advance();
        engine.set_mode(TeamCount::Three);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.order().len(), 6);
    }
}
