use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::SortKey;
use crate::tui::app::{App, ConfirmState, FormState, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Row navigation
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => app.select_next(),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => app.select_prev(),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.select_first(),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => app.select_last(),

        // Column sorting (1-4, matching the header order)
        (_, KeyCode::Char('1')) => sort_by(app, SortKey::Name),
        (_, KeyCode::Char('2')) => sort_by(app, SortKey::Description),
        (_, KeyCode::Char('3')) => sort_by(app, SortKey::Priority),
        (_, KeyCode::Char('4')) => sort_by(app, SortKey::DueDate),

        // Filter bar
        (_, KeyCode::Char('f')) | (_, KeyCode::Char('/')) => app.mode = Mode::Filter,

        // Mutations
        (_, KeyCode::Char('a')) => {
            app.form = Some(FormState::add());
            app.mode = Mode::Form;
        }
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => open_update_form(app),
        (_, KeyCode::Char('d')) => request_delete(app),

        _ => {}
    }
}

/// Sort the full collection by `key`. Sorting always re-renders from the
/// unfiltered collection, dropping any active filter view.
fn sort_by(app: &mut App, key: SortKey) {
    let ascending = app.store.sort(key);
    app.show_all();
    let dir = if ascending { "ascending" } else { "descending" };
    app.report(format!("sorted by {} ({})", key.as_str(), dir));
}

fn open_update_form(app: &mut App) {
    match app.selected_task() {
        Some(task) => {
            app.form = Some(FormState::edit(task));
            app.mode = Mode::Form;
        }
        None => app.report_error("No task selected"),
    }
}

fn request_delete(app: &mut App) {
    match app.selected_task() {
        Some(task) => {
            app.confirm = Some(ConfirmState {
                id: task.id,
                name: task.name.clone(),
            });
            app.mode = Mode::Confirm;
        }
        None => app.report_error("No task selected"),
    }
}
