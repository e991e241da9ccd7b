use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::store::SortKey;
use crate::tui::app::App;

use super::push_highlighted_spans;

/// Render the four-column task table
pub fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible.is_empty() {
        let msg = if app.filter_applied {
            " No tasks match the filter"
        } else {
            " No tasks yet - press a to add one"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let highlight_re = app.filter_highlight_re();
    let name_style = Style::default().fg(app.theme.text_bright);
    let match_style = Style::default()
        .fg(app.theme.match_fg)
        .bg(app.theme.match_bg);
    let text_style = Style::default().fg(app.theme.text);

    let header = Row::new([
        header_cell(app, SortKey::Name, "Name"),
        header_cell(app, SortKey::Description, "Description"),
        header_cell(app, SortKey::Priority, "Priority"),
        header_cell(app, SortKey::DueDate, "Due Date"),
    ])
    .style(Style::default().bg(bg));

    let mut rows: Vec<Row> = Vec::new();
    for id in &app.visible {
        let task = match app.store.get(*id) {
            Some(task) => task,
            None => continue,
        };

        let mut name_spans = Vec::new();
        push_highlighted_spans(
            &mut name_spans,
            &task.name,
            name_style,
            match_style,
            highlight_re.as_ref(),
        );

        rows.push(Row::new([
            Cell::from(Line::from(name_spans)),
            Cell::from(task.description.clone()).style(text_style),
            Cell::from(task.priority.as_str().to_string())
                .style(Style::default().fg(app.theme.priority_color(&task.priority))),
            Cell::from(task.due_date.to_string()).style(text_style),
        ]));
    }

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(45),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(bg));

    frame.render_stateful_widget(table, area, &mut app.table);
}

/// Column header, with an ascending/descending marker on the active sort key
fn header_cell(app: &App, key: SortKey, label: &str) -> Cell<'static> {
    match app.store.sort_state() {
        Some((active, ascending)) if active == key => {
            let marker = if ascending { "\u{25B2}" } else { "\u{25BC}" };
            Cell::from(format!("{} {}", label, marker)).style(
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
        }
        _ => Cell::from(label.to_string()).style(
            Style::default()
                .fg(app.theme.dim)
                .add_modifier(Modifier::BOLD),
        ),
    }
}
