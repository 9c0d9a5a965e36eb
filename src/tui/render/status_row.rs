use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const KEY_HINTS: &str = "enter add   ^D done   ^T clear   ^Q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = match app.mode {
        Mode::ConfirmClear => Line::from(Span::styled(
            "delete all items? (y/n)",
            Style::default()
                .fg(app.theme.error)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Mode::Edit => {
            if let Some(msg) = &app.status_message {
                let fg = if app.status_is_error {
                    app.theme.error
                } else {
                    app.theme.text
                };
                Line::from(Span::styled(msg.clone(), Style::default().fg(fg).bg(bg)))
            } else {
                Line::from(Span::styled(
                    KEY_HINTS,
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            }
        }
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
