pub mod confirm_popup;
pub mod filter_bar;
pub mod form_popup;
pub mod help_overlay;
pub mod status_row;
pub mod table_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use regex::Regex;

use super::app::{App, TextInput};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (1) | filter bar (2) | table | status row (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(2), // filter bar + separator
            Constraint::Min(1),    // table
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    table_view::render_table(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Popups render on top of everything
    if app.form.is_some() {
        form_popup::render_form(frame, app, area);
    }
    if app.confirm.is_some() {
        confirm_popup::render_confirm(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Personal Task Manager",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.store.path().display()),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`. Otherwise splits the
/// text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Push spans for a text input, marking the insertion point with a bar
/// glyph when the input has focus.
pub(super) fn push_input_spans(
    spans: &mut Vec<Span<'static>>,
    input: &TextInput,
    show_cursor: bool,
    base_style: Style,
    cursor_style: Style,
) {
    if !show_cursor {
        spans.push(Span::styled(input.buffer.clone(), base_style));
        return;
    }
    let cursor = input.cursor.min(input.buffer.len());
    spans.push(Span::styled(input.buffer[..cursor].to_string(), base_style));
    spans.push(Span::styled("\u{258C}", cursor_style));
    spans.push(Span::styled(input.buffer[cursor..].to_string(), base_style));
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
