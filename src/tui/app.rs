//! Application state for the draft screen.

use std::time::{Duration, Instant};

use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

use super::input::Action;
use crate::controller::DraftController;
use crate::roster::PlayerId;

/// Focusable widgets, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Focus {
    /// Player name field.
    #[default]
    PlayerName,
    /// Player number field.
    PlayerNumber,
    /// Captain name field.
    CaptainName,
    /// Captain team label field.
    CaptainTeam,
    /// Player list.
    Players,
    /// Captain list.
    Captains,
}

impl Focus {
    fn step(self, forward: bool) -> Self {
        let all: Vec<Focus> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        all[next]
    }
}

/// Text currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    /// Player name.
    pub player_name: String,
    /// Player number.
    pub player_number: String,
    /// Captain name.
    pub captain_name: String,
    /// Captain team label.
    pub captain_team: String,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    draft: DraftController,
    form: Form,
    focus: Focus,
    player_selected: usize,
    captain_selected: usize,
    notice: Option<String>,
    status: String,
    highlight: Option<(PlayerId, Instant)>,
    highlight_for: Duration,
    quit: bool,
}

impl App {
    /// Creates the application around a controller.
    #[instrument(skip(draft))]
    pub fn new(draft: DraftController, highlight_for: Duration) -> Self {
        Self {
            draft,
            form: Form::default(),
            focus: Focus::default(),
            player_selected: 0,
            captain_selected: 0,
            notice: None,
            status: "Add players and captains, then press F5 to draft.".to_string(),
            highlight: None,
            highlight_for,
            quit: false,
        }
    }

    /// Returns the draft controller.
    pub fn draft(&self) -> &DraftController {
        &self.draft
    }

    /// Returns the form contents.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the focused widget.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the player list.
    pub fn player_selected(&self) -> usize {
        self.player_selected
    }

    /// Selected row in the captain list.
    pub fn captain_selected(&self) -> usize {
        self.captain_selected
    }

    /// Blocking notice, if one is open.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Player currently highlighted after being drafted.
    pub fn highlighted(&self) -> Option<PlayerId> {
        self.highlight.map(|(id, _)| id)
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Expires the draft highlight once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, until)) = self.highlight
            && now >= until
        {
            self.highlight = None;
        }
    }

    /// Applies a user action.
    #[instrument(skip(self, now))]
    pub fn apply(&mut self, action: Action, now: Instant) {
        debug!(?action, focus = ?self.focus, "Applying action");
        match action {
            Action::Type(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
            }
            Action::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
            }
            Action::FocusNext => self.focus = self.focus.step(true),
            Action::FocusPrev => self.focus = self.focus.step(false),
            Action::Submit => self.submit(),
            Action::SelectPrev => self.move_selection(false),
            Action::SelectNext => self.move_selection(true),
            Action::Delete => self.delete_selected(),
            Action::SetTeams(mode) => {
                self.draft.set_mode(mode);
                self.highlight = None;
                self.captain_selected = 0;
                self.status = format!("Switched to {}; captains cleared.", mode.label());
            }
            Action::Distribute => self.distribute(now),
            Action::ResetDistribution => {
                self.draft.reset_distribution();
                self.highlight = None;
                self.status = "Teams cleared.".to_string();
            }
            Action::ResetPlayers => {
                self.draft.reset_players();
                self.highlight = None;
                self.player_selected = 0;
                self.status = "Players cleared.".to_string();
            }
            Action::ResetCaptains => {
                self.draft.reset_captains();
                self.captain_selected = 0;
                self.status = "Captains cleared.".to_string();
            }
            Action::Dismiss => self.notice = None,
            Action::Quit => {
                info!("Quit requested");
                self.quit = true;
            }
            Action::Ignore => {}
        }
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::PlayerName => Some(&mut self.form.player_name),
            Focus::PlayerNumber => Some(&mut self.form.player_number),
            Focus::CaptainName => Some(&mut self.form.captain_name),
            Focus::CaptainTeam => Some(&mut self.form.captain_team),
            Focus::Players | Focus::Captains => None,
        }
    }

    fn submit(&mut self) {
        match self.focus {
            Focus::PlayerName | Focus::PlayerNumber => {
                let added = self
                    .draft
                    .add_player(&self.form.player_name, &self.form.player_number);
                if added.is_some() {
                    self.status = format!("Added {}.", self.form.player_name.trim());
                    self.form.player_name.clear();
                    self.form.player_number.clear();
                    self.focus = Focus::PlayerName;
                }
            }
            Focus::CaptainName | Focus::CaptainTeam => {
                if self.draft.captains_full() {
                    self.status = "Every team already has a captain.".to_string();
                    return;
                }
                let team = Some(self.form.captain_team.as_str()).filter(|t| !t.trim().is_empty());
                let added = self.draft.add_captain(&self.form.captain_name, team);
                if added.is_some() {
                    self.status = format!("Captain {} added.", self.form.captain_name.trim());
                    self.form.captain_name.clear();
                    self.form.captain_team.clear();
                    self.focus = Focus::CaptainName;
                }
            }
            Focus::Players | Focus::Captains => {}
        }
    }

    fn move_selection(&mut self, down: bool) {
        let (selected, len) = match self.focus {
            Focus::Players => (&mut self.player_selected, self.draft.roster().players().len()),
            Focus::Captains => (&mut self.captain_selected, self.draft.roster().captains().len()),
            _ => return,
        };
        if len == 0 {
            *selected = 0;
        } else if down {
            *selected = (*selected + 1) % len;
        } else {
            *selected = (*selected + len - 1) % len;
        }
    }

    fn delete_selected(&mut self) {
        match self.focus {
            Focus::Players => {
                let Some(id) = self
                    .draft
                    .roster()
                    .players()
                    .get(self.player_selected)
                    .map(|p| p.id())
                else {
                    return;
                };
                self.draft.remove_player(id);
                if self.highlighted() == Some(id) {
                    self.highlight = None;
                }
                let len = self.draft.roster().players().len();
                self.player_selected = self.player_selected.min(len.saturating_sub(1));
            }
            Focus::Captains => {
                let Some(id) = self
                    .draft
                    .roster()
                    .captains()
                    .get(self.captain_selected)
                    .map(|c| c.id())
                else {
                    return;
                };
                self.draft.remove_captain(id);
                let len = self.draft.roster().captains().len();
                self.captain_selected = self.captain_selected.min(len.saturating_sub(1));
            }
            _ => {}
        }
    }

    fn distribute(&mut self, now: Instant) {
        match self.draft.start_distribution() {
            Ok(assignment) => {
                let name = self
                    .draft
                    .roster()
                    .player(assignment.player)
                    .map(|p| p.name().clone())
                    .unwrap_or_default();
                self.status = format!("Pick {}: {} joins {}.", assignment.pick + 1, name, assignment.team);
                self.highlight = Some((assignment.player, now + self.highlight_for));
            }
            Err(e) => {
                info!(error = %e, "Draft refused");
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ThreeTeamOrder;
    use crate::mode::TeamCount;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App {
        let draft = DraftController::with_rng(
            TeamCount::Two,
            ThreeTeamOrder::Balanced,
            StdRng::seed_from_u64(3),
        );
        App::new(draft, Duration::from_millis(500))
    }

    fn type_str(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.apply(Action::Type(c), now);
        }
    }

    fn add_player(app: &mut App, name: &str, number: &str, now: Instant) {
        app.focus = Focus::PlayerName;
        type_str(app, name, now);
        app.apply(Action::FocusNext, now);
        type_str(app, number, now);
        app.apply(Action::Submit, now);
    }

    fn add_captain(app: &mut App, name: &str, now: Instant) {
        app.focus = Focus::CaptainName;
        type_str(app, name, now);
        app.apply(Action::Submit, now);
    }

    #[test]
    fn test_form_adds_player_and_clears() {
        let mut app = app();
        let now = Instant::now();
        add_player(&mut app, "Wei", "7", now);

        assert_eq!(app.draft().roster().players().len(), 1);
        assert_eq!(app.form(), &Form::default());
        assert_eq!(app.focus(), Focus::PlayerName);
    }

    #[test]
    fn test_incomplete_form_is_kept() {
        let mut app = app();
        let now = Instant::now();
        type_str(&mut app, "Wei", now);
        app.apply(Action::Submit, now);

        assert!(app.draft().roster().players().is_empty());
        assert_eq!(app.form().player_name, "Wei");
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_distribute_without_captains_opens_notice() {
        let mut app = app();
        let now = Instant::now();
        add_player(&mut app, "Wei", "7", now);
        app.apply(Action::Distribute, now);

        assert!(app.notice().is_some());
        app.apply(Action::Dismiss, now);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_highlight_expires() {
        let mut app = app();
        let now = Instant::now();
        add_captain(&mut app, "A", now);
        add_captain(&mut app, "B", now);
        add_player(&mut app, "Wei", "7", now);
        app.apply(Action::Distribute, now);

        assert!(app.highlighted().is_some());
        app.tick(now + Duration::from_millis(100));
        assert!(app.highlighted().is_some());
        app.tick(now + Duration::from_millis(500));
        assert!(app.highlighted().is_none());
    }

    #[test]
    fn test_full_captains_refused_with_status() {
        let mut app = app();
        let now = Instant::now();
        add_captain(&mut app, "A", now);
        add_captain(&mut app, "B", now);
        add_captain(&mut app, "C", now);

        assert_eq!(app.draft().roster().captains().len(), 2);
        assert_eq!(app.status(), "Every team already has a captain.");
    }

    #[test]
    fn test_delete_selected_player() {
        let mut app = app();
        let now = Instant::now();
        add_player(&mut app, "Wei", "7", now);
        add_player(&mut app, "Lin", "8", now);

        app.focus = Focus::Players;
        app.apply(Action::SelectNext, now);
        app.apply(Action::Delete, now);

        let names: Vec<_> = app
            .draft()
            .roster()
            .players()
            .iter()
            .map(|p| p.name().clone())
            .collect();
        assert_eq!(names, vec!["Wei".to_string()]);
        assert_eq!(app.player_selected(), 0);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(Focus::Captains.step(true), Focus::PlayerName);
        assert_eq!(Focus::PlayerName.step(false), Focus::Captains);
    }
}
