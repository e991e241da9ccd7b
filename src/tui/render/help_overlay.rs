use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const KEYS: [(&str, &str); 12] = [
    ("j / Down", "next row"),
    ("k / Up", "previous row"),
    ("g / G", "first / last row"),
    ("1 2 3 4", "sort by column (again to flip)"),
    ("f", "filter bar"),
    ("a", "add task"),
    ("e / Enter", "update selected task"),
    ("d", "delete selected task"),
    ("Tab", "next field (in forms)"),
    ("Space", "cycle priority (in forms)"),
    ("Esc", "cancel / close"),
    ("q", "quit"),
];

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.cyan).bg(bg);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Keys", header_style)));
    lines.push(Line::from(""));
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", key), key_style),
            Span::styled(action, text_style),
        ]));
    }

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
