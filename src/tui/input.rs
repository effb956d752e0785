//! Key bindings for the draft screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::mode::TeamCount;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the focused field.
    Type(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus forward.
    FocusNext,
    /// Move focus backward.
    FocusPrev,
    /// Submit the focused form group.
    Submit,
    /// Move the list selection up.
    SelectPrev,
    /// Move the list selection down.
    SelectNext,
    /// Delete the selected list entry.
    Delete,
    /// Switch the team count.
    SetTeams(TeamCount),
    /// Draft one player.
    Distribute,
    /// Strip every assignment.
    ResetDistribution,
    /// Remove every player.
    ResetPlayers,
    /// Remove every captain.
    ResetCaptains,
    /// Close the open notice.
    Dismiss,
    /// Leave the application.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key press to an action.
///
/// While a notice is open every key except Ctrl-C only dismisses it.
pub fn map_key(key: KeyEvent, notice_open: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if notice_open {
        return Action::Dismiss;
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Enter => Action::Submit,
        KeyCode::Up => Action::SelectPrev,
        KeyCode::Down => Action::SelectNext,
        KeyCode::Delete => Action::Delete,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::F(2) => Action::SetTeams(TeamCount::Two),
        KeyCode::F(3) => Action::SetTeams(TeamCount::Three),
        KeyCode::F(5) => Action::Distribute,
        KeyCode::F(6) => Action::ResetDistribution,
        KeyCode::F(7) => Action::ResetPlayers,
        KeyCode::F(8) => Action::ResetCaptains,
        KeyCode::Char(c) => Action::Type(c),
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(map_key(key(KeyCode::F(3)), false), Action::SetTeams(TeamCount::Three));
        assert_eq!(map_key(key(KeyCode::F(5)), false), Action::Distribute);
        assert_eq!(map_key(key(KeyCode::F(8)), false), Action::ResetCaptains);
    }

    #[test]
    fn test_characters_are_typed() {
        assert_eq!(map_key(key(KeyCode::Char('q')), false), Action::Type('q'));
    }

    #[test]
    fn test_notice_swallows_keys() {
        assert_eq!(map_key(key(KeyCode::F(5)), true), Action::Dismiss);
        assert_eq!(map_key(key(KeyCode::Esc), true), Action::Dismiss);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Action::Quit);
        assert_eq!(map_key(ctrl_c, true), Action::Quit);
    }
}
