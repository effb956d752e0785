//! Tests for roster registration through the controller.

use rand::SeedableRng;
use rand::rngs::StdRng;
use roster_draft::{DraftController, TeamColor, TeamCount, TeamIndex, ThreeTeamOrder};
use std::collections::HashSet;

fn draft(mode: TeamCount) -> DraftController {
    DraftController::with_rng(mode, ThreeTeamOrder::Balanced, StdRng::seed_from_u64(11))
}

#[test]
fn test_every_valid_add_creates_unique_player() {
    let mut draft = draft(TeamCount::Two);
    for i in 0..25 {
        let id = draft.add_player(&format!("Player {}", i % 5), &i.to_string());
        assert!(id.is_some());
    }

    let players = draft.roster().players();
    assert_eq!(players.len(), 25);
    let ids: HashSet<_> = players.iter().map(|p| p.id()).collect();
    assert_eq!(ids.len(), 25);
    assert!(players.iter().all(|p| p.team().is_none()));
}

#[test]
fn test_captains_never_exceed_team_count() {
    for mode in [TeamCount::Two, TeamCount::Three] {
        let mut draft = draft(mode);
        for i in 0..10 {
            draft.add_captain(&format!("Captain {}", i), Some("Team"));
            assert!(draft.roster().captains().len() <= mode.value());
        }
        assert_eq!(draft.roster().captains().len(), mode.value());
        assert!(draft.captains_full());
    }
}

#[test]
fn test_captain_colors_follow_registration_order() {
    let mut draft = draft(TeamCount::Three);
    draft.add_captain("Ana", Some("Falcons"));
    draft.add_captain("Bo", Some("Hawks"));
    draft.add_captain("Cy", Some("Owls"));

    let colors: Vec<_> = draft.roster().captains().iter().map(|c| c.color()).collect();
    assert_eq!(colors, vec![TeamColor::Red, TeamColor::Blue, TeamColor::Green]);
}

#[test]
fn test_deleting_captain_does_not_recolor_others() {
    let mut draft = draft(TeamCount::Three);
    let ana = draft.add_captain("Ana", Some("Falcons")).expect("added");
    draft.add_captain("Bo", Some("Hawks"));
    draft.add_captain("Cy", Some("Owls"));

    assert!(draft.remove_captain(ana));
    let remaining: Vec<_> = draft
        .roster()
        .captains()
        .iter()
        .map(|c| (c.name().clone(), c.color()))
        .collect();
    assert_eq!(
        remaining,
        vec![
            ("Bo".to_string(), TeamColor::Blue),
            ("Cy".to_string(), TeamColor::Green)
        ]
    );

    draft.add_captain("Di", Some("Crows"));
    let di = draft
        .roster()
        .captain_for(TeamIndex::new(0))
        .expect("slot 0 refilled");
    assert_eq!(di.name(), "Di");
    assert_eq!(di.color(), TeamColor::Red);
}

#[test]
fn test_set_team_count_clears_captains_and_assignments() {
    for (from, to) in [
        (TeamCount::Two, 3),
        (TeamCount::Three, 2),
        (TeamCount::Two, 2),
    ] {
        let mut draft = draft(from);
        for name in ["A", "B", "C"] {
            draft.add_captain(name, Some("T"));
        }
        for i in 0..6 {
            draft.add_player("P", &i.to_string());
        }
        draft.distribute_all().expect("draft");

        draft.set_team_count(to).expect("valid count");
        assert!(draft.roster().captains().is_empty());
        assert_eq!(draft.roster().players().len(), 6);
        assert!(draft.roster().players().iter().all(|p| p.team().is_none()));
        assert_eq!(draft.cursor(), 0);
        assert!(!draft.is_distributing());
        assert_eq!(draft.team_count().value(), to as usize);
    }
}

#[test]
fn test_remove_player_only_removes_match() {
    let mut draft = draft(TeamCount::Two);
    let a = draft.add_player("A", "1").expect("added");
    let b = draft.add_player("B", "2").expect("added");

    assert!(draft.remove_player(a));
    assert!(!draft.remove_player(a));
    let ids: Vec<_> = draft.roster().players().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![b]);
}

#[test]
fn test_blank_captain_name_is_ignored() {
    for mode in [TeamCount::Two, TeamCount::Three] {
        let mut draft = draft(mode);
        assert!(draft.add_captain("", None).is_none());
        assert!(draft.add_captain("  ", Some("X")).is_none());
        assert!(draft.roster().captains().is_empty());
        assert!(!draft.captains_full());
    }
}
