use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm: y
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let state = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state
                && let Some(task) = app.store.remove(state.id)
            {
                app.save_store();
                if !app.status_is_error {
                    app.report(format!("deleted \"{}\"", task.name));
                }
                app.show_all();
            }
        }
        // Cancel: n or Esc
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
