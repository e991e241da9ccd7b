use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::TaskFields;
use crate::tui::app::{App, FormField, Mode};

use super::common::edit_text_input;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let form = match &mut app.form {
        Some(form) => form,
        None => {
            app.mode = Mode::Navigate;
            return;
        }
    };

    match key.code {
        KeyCode::Esc => {
            app.form = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit_form(app),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        _ => match form.focus {
            FormField::Priority => match key.code {
                KeyCode::Char(' ') | KeyCode::Right => form.cycle_priority(true),
                KeyCode::Left => form.cycle_priority(false),
                _ => {}
            },
            _ => {
                if let Some(input) = form.focused_input() {
                    edit_text_input(input, key);
                }
            }
        },
    }
}

/// Validate and apply the form. On a validation failure the field-specific
/// error is shown inside the popup and the form stays open; nothing is
/// mutated.
fn submit_form(app: &mut App) {
    let form = match &mut app.form {
        Some(form) => form,
        None => return,
    };

    let priority = form.priority_label().to_string();
    let fields = match TaskFields::parse(
        &form.name.buffer,
        &form.description.buffer,
        &priority,
        &form.due_date.buffer,
    ) {
        Ok(fields) => fields,
        Err(e) => {
            form.error = Some(e);
            return;
        }
    };
    let target = form.target;

    let message = match target {
        None => {
            let name = fields.name.clone();
            app.store.add(fields);
            format!("added \"{}\"", name)
        }
        Some(id) => {
            let name = fields.name.clone();
            if !app.store.update(id, fields) {
                app.form = None;
                app.mode = Mode::Navigate;
                app.report_error("task no longer exists");
                return;
            }
            format!("updated \"{}\"", name)
        }
    };

    app.form = None;
    app.mode = Mode::Navigate;
    app.save_store();
    if !app.status_is_error {
        app.report(message);
    }
    // Mutations re-render the full collection.
    app.show_all();
}
