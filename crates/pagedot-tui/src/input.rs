use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Nudge the pager as if dragged by a tenth of a page
    DragLeft,
    DragRight,
    /// Let go of a drag
    Release,
    AddPage,
    RemovePage,
    ToggleStyle,
    ToggleFollowScroll,
    ToggleAutoAdvance,
    ShowHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, KeyModifiers::NONE) => {
            Action::NextPage
        }
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, KeyModifiers::NONE) => {
            Action::PrevPage
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::LastPage,

        (KeyCode::Char('H'), _) | (KeyCode::Left, KeyModifiers::SHIFT) => Action::DragLeft,
        (KeyCode::Char('L'), _) | (KeyCode::Right, KeyModifiers::SHIFT) => Action::DragRight,
        (KeyCode::Char(' '), _) => Action::Release,

        (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => Action::AddPage,
        (KeyCode::Char('-'), _) => Action::RemovePage,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ToggleStyle,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::ToggleFollowScroll,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAutoAdvance,
        (KeyCode::Char('?'), _) => Action::ShowHelp,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedot_core::AppConfig;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys() {
        let app = App::new(AppConfig::default());
        let none = KeyModifiers::NONE;
        assert_eq!(handle_key_event(key(KeyCode::Char('l'), none), &app), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::Left, none), &app), Action::PrevPage);
        assert_eq!(handle_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT), &app), Action::LastPage);
        assert_eq!(handle_key_event(key(KeyCode::Right, KeyModifiers::SHIFT), &app), Action::DragRight);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &app), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('z'), none), &app), Action::None);
    }

    #[test]
    fn test_any_key_leaves_help() {
        let mut app = App::new(AppConfig::default());
        app.mode = Mode::Help;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            Action::ExitMode
        );
    }
}
