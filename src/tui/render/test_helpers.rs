use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Item};
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles),
/// with trailing blanks trimmed.
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let width = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(width)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over the given rows, pointed at a directory no render test
/// ever writes to.
pub fn app_with_rows(rows: &[(&str, bool)]) -> App {
    let items = rows
        .iter()
        .map(|(text, done)| Item {
            text: (*text).to_string(),
            is_completed: *done,
        })
        .collect();
    App::new(
        PathBuf::from("/nonexistent/fade-render-tests"),
        &Config::default(),
        items,
    )
}
