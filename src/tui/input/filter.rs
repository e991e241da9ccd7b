use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FilterField, Mode};

use super::common::edit_text_input;

pub(super) fn handle_filter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            app.apply_filter();
            app.mode = Mode::Navigate;
            if app.filter_applied {
                app.report(format!(
                    "{} of {} tasks match",
                    app.visible.len(),
                    app.store.len()
                ));
            }
        }
        KeyCode::Tab | KeyCode::Down => app.filter.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.filter.prev_field(),
        _ => match app.filter.focus {
            FilterField::Priority => match key.code {
                KeyCode::Char(' ') | KeyCode::Right => app.filter.cycle_priority(true),
                KeyCode::Left => app.filter.cycle_priority(false),
                _ => {}
            },
            _ => {
                if let Some(input) = app.filter.focused_input() {
                    edit_text_input(input, key);
                }
            }
        },
    }
}
