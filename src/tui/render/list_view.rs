use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Completion control glyphs, one per row
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";

/// Render the item rows, or the empty-list indicator when nothing remains.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.list.is_empty() {
        let empty = Paragraph::new("No items. Press enter to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    if height == 0 {
        return;
    }

    // Keep the focused row on screen
    if app.focus < app.scroll_offset {
        app.scroll_offset = app.focus;
    } else if app.focus >= app.scroll_offset + height {
        app.scroll_offset = app.focus + 1 - height;
    }

    let text_width = (area.width as usize).saturating_sub(CHECKED.len());
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in app
        .list
        .rows()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_focused = i == app.focus;
        let done = row.item.is_completed;

        let marker = if done { CHECKED } else { UNCHECKED };
        let marker_style = if done {
            Style::default().fg(app.theme.done).bg(bg)
        } else if is_focused {
            Style::default().fg(app.theme.accent).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };

        // Completed rows lose prominence while their countdown runs
        let text_style = if done {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_focused {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let shown = unicode::truncate_to_width(&row.item.text, text_width);
        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(shown, text_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    // Terminal cursor inside the focused row's text field
    let visible = app.focus >= app.scroll_offset && app.focus < app.scroll_offset + height;
    if visible && let Some(row) = app.list.rows().get(app.focus) {
        let col = unicode::byte_offset_to_display_col(&row.item.text, app.cursor);
        let max_x = (area.width as usize).saturating_sub(1);
        let x = area.x + (CHECKED.len() + col).min(max_x) as u16;
        let y = area.y + (app.focus - app.scroll_offset) as u16;
        frame.set_cursor_position((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_rows, render_to_string};
    use insta::assert_snapshot;

    #[test]
    fn empty_list_shows_indicator() {
        let mut app = app_with_rows(&[]);
        let output = render_to_string(60, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_snapshot!(output, @"No items. Press enter to add one.");
    }

    #[test]
    fn rows_render_with_completion_markers() {
        let mut app = app_with_rows(&[
            ("buy milk", false),
            ("eggs", true),
            ("call mom", false),
        ]);
        let output = render_to_string(60, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_snapshot!(output, @r"
        [ ] buy milk
        [x] eggs
        [ ] call mom
        ");
    }

    #[test]
    fn indicator_hidden_when_rows_exist() {
        let mut app = app_with_rows(&[("a", false)]);
        let output = render_to_string(60, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(!output.contains("No items"));
    }

    #[test]
    fn scroll_follows_focus_below_viewport() {
        let mut app = app_with_rows(&[
            ("one", false),
            ("two", false),
            ("three", false),
            ("four", false),
            ("five", false),
        ]);
        app.focus_row(4);
        let output = render_to_string(60, 2, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, "[ ] four\n[ ] five");
        assert_eq!(app.scroll_offset, 3);
    }

    #[test]
    fn scroll_follows_focus_above_viewport() {
        let mut app = app_with_rows(&[("one", false), ("two", false), ("three", false)]);
        app.scroll_offset = 2;
        app.focus_row(0);
        let output = render_to_string(60, 2, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, "[ ] one\n[ ] two");
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let mut app = app_with_rows(&[("a very long item text that will not fit", false)]);
        let output = render_to_string(16, 2, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, "[ ] a very long\u{2026}");
    }
}
