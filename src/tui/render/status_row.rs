use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, left_style) = match app.mode {
        Mode::Navigate => match &app.status_message {
            Some(msg) => {
                let color = if app.status_is_error {
                    app.theme.red
                } else {
                    app.theme.green
                };
                (format!(" {}", msg), Style::default().fg(color).bg(bg))
            }
            None => (
                " a add  e edit  d delete  f filter  1-4 sort  ? help  q quit".to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        },
        Mode::Filter => (
            " Tab field  Space cycle priority  Enter apply  Esc cancel".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Mode::Form => (
            " Enter save  Tab next field  Esc cancel".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Mode::Confirm => (
            " y confirm  n cancel".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    };

    let right = if app.filter_applied {
        format!("{}/{} tasks ", app.visible.len(), app.store.len())
    } else {
        format!("{} tasks ", app.store.len())
    };

    let mut spans = vec![Span::styled(left, left_style)];
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_width = right.chars().count();
    if content_width + right_width < width {
        let padding = width - content_width - right_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            right,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
