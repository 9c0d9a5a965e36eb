use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::Intent;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent, now: Instant) {
    // Transient status messages clear on the next keypress
    app.clear_status();

    if let Some(intent) = decode(key) {
        app.apply(intent, now);
    }
}

/// Translate a key event into an intent. Returns None for unbound keys.
pub(super) fn decode(key: KeyEvent) -> Option<Intent> {
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),

        (m, KeyCode::Char('d')) if m.contains(KeyModifiers::CONTROL) => {
            Some(Intent::ToggleComplete)
        }
        (m, KeyCode::Char('t')) if m.contains(KeyModifiers::CONTROL) => {
            Some(Intent::RequestClearAll)
        }

        (_, KeyCode::Enter) => Some(Intent::CreateRow),

        (_, KeyCode::Up) => Some(Intent::FocusUp),
        (_, KeyCode::Down) => Some(Intent::FocusDown),

        (_, KeyCode::Left) => Some(Intent::CursorLeft),
        (_, KeyCode::Right) => Some(Intent::CursorRight),
        (_, KeyCode::Home) => Some(Intent::CursorHome),
        (_, KeyCode::End) => Some(Intent::CursorEnd),

        (_, KeyCode::Backspace) => Some(Intent::DeleteBack),
        (_, KeyCode::Delete) => Some(Intent::DeleteForward),

        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            Some(Intent::InsertChar(c))
        }

        _ => None,
    }
}
