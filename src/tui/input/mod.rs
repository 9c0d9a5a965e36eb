mod confirm;
mod edit;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// A user intent decoded from a key event. The app state machine applies
/// these; the key handlers only translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    InsertChar(char),
    DeleteBack,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    FocusUp,
    FocusDown,
    /// Append a new empty row and focus it
    CreateRow,
    /// Complete / undo the focused row
    ToggleComplete,
    /// Ask for confirmation, then delete every row
    RequestClearAll,
    Quit,
}

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    match app.mode {
        Mode::Edit => edit::handle_edit(app, key, now),
        Mode::ConfirmClear => confirm::handle_confirm(app, key),
    }
}
