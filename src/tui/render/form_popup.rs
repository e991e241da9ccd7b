use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField, FormState};

use super::{centered_rect_fixed, push_input_spans};

/// Render the add/update form popup
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = match &app.form {
        Some(form) => form,
        None => return,
    };

    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text).bg(bg);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let focus_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let error_style = Style::default().fg(app.theme.red).bg(bg);
    let hint_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", form.title()),
        header_style,
    )));
    lines.push(Line::from(""));

    lines.push(input_line(
        form,
        FormField::Name,
        "Name:        ",
        label_style,
        value_style,
        focus_style,
        cursor_style,
    ));
    lines.push(input_line(
        form,
        FormField::Description,
        "Description: ",
        label_style,
        value_style,
        focus_style,
        cursor_style,
    ));

    // Priority selector
    let focused = form.focus == FormField::Priority;
    let priority = if focused {
        format!("\u{25C2} {} \u{25B8}", form.priority_label())
    } else {
        form.priority_label().to_string()
    };
    lines.push(Line::from(vec![
        Span::styled("  Priority:    ", label_style),
        Span::styled(priority, if focused { focus_style } else { value_style }),
    ]));

    let mut due = input_line(
        form,
        FormField::DueDate,
        "Due Date:    ",
        label_style,
        value_style,
        focus_style,
        cursor_style,
    );
    due.push_span(Span::styled("  (DD/MM/YYYY)", hint_style));
    lines.push(due);

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        // Modal dialog equivalent: name the offending field
        lines.push(Line::from(Span::styled(
            format!("  {}: {}", error.field(), error),
            error_style,
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  Enter", hint_style),
        Span::styled(" save  ", value_style),
        Span::styled("Tab", hint_style),
        Span::styled(" next field  ", value_style),
        Span::styled("Esc", hint_style),
        Span::styled(" cancel", value_style),
    ]));

    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let border_color = if form.error.is_some() {
        app.theme.red
    } else {
        app.theme.highlight
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn input_line(
    form: &FormState,
    field: FormField,
    label: &str,
    label_style: Style,
    value_style: Style,
    focus_style: Style,
    cursor_style: Style,
) -> Line<'static> {
    let focused = form.focus == field;
    let input = match field {
        FormField::Name => &form.name,
        FormField::Description => &form.description,
        FormField::DueDate => &form.due_date,
        FormField::Priority => unreachable!("priority is a selector, not a text input"),
    };

    let mut spans = vec![Span::styled(format!("  {}", label), label_style)];
    push_input_spans(
        &mut spans,
        input,
        focused,
        if focused { focus_style } else { value_style },
        cursor_style,
    );
    Line::from(spans)
}
