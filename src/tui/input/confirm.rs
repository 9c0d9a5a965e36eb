use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// y/Enter confirms the pending delete-all; n/Esc cancels. Anything else
/// is ignored so a stray keystroke cannot wipe the list.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_clear_all();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_clear();
        }
        _ => {}
    }
}
