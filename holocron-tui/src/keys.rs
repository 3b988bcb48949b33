//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    Select,
    Dismiss,
    OpenSearch,
    CycleFilter,
    Refresh,
}

/// Browse-mode keymap.
pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::NextPage),
        KeyCode::Left | KeyCode::Char('p') => Some(Action::PrevPage),
        _ => None,
    }
}

/// What a keypress means while the search input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    Insert(char),
    Backspace,
    Leave,
}

pub fn map_search_key(event: KeyEvent) -> Option<SearchInput> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(SearchInput::Leave),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc | KeyCode::Enter => Some(SearchInput::Leave),
        KeyCode::Backspace => Some(SearchInput::Backspace),
        KeyCode::Char(c) => Some(SearchInput::Insert(c)),
        _ => None,
    }
}
