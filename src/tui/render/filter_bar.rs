use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FilterField, Mode};

use super::push_input_spans;

/// Render the filter bar: name, priority, and due-date inputs
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Filter;

    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text).bg(bg);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);
    let focus_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let field_style = |field: FilterField| {
        if editing && app.filter.focus == field {
            focus_style
        } else {
            value_style
        }
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" Name: ", label_style));
    push_input_spans(
        &mut spans,
        &app.filter.name,
        editing && app.filter.focus == FilterField::Name,
        field_style(FilterField::Name),
        cursor_style,
    );

    spans.push(Span::styled("   Priority: ", label_style));
    let priority = if editing && app.filter.focus == FilterField::Priority {
        format!("\u{25C2} {} \u{25B8}", app.filter.priority_label())
    } else {
        app.filter.priority_label().to_string()
    };
    spans.push(Span::styled(priority, field_style(FilterField::Priority)));

    spans.push(Span::styled("   Due: ", label_style));
    push_input_spans(
        &mut spans,
        &app.filter.due_date,
        editing && app.filter.focus == FilterField::DueDate,
        field_style(FilterField::DueDate),
        cursor_style,
    );

    if app.filter_applied {
        spans.push(Span::styled("   [filtered]", Style::default().fg(app.theme.cyan).bg(bg)));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
