use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::TextInput;

/// Apply a key event to a single-line text input. Returns true if the
/// event was consumed.
pub(super) fn edit_text_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => input.clear(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert(c),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) => input.left(),
        (_, KeyCode::Right) => input.right(),
        (_, KeyCode::Home) => input.home(),
        (_, KeyCode::End) => input.end(),
        _ => return false,
    }
    true
}
