use ratatui::widgets::TableState;
use regex::Regex;

use crate::model::task::{DueDate, Priority, Task, TaskId, ValidationError};
use crate::store::{TaskFilter, TaskStore};
use crate::util::unicode;

use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Filter,
    Form,
    Confirm,
}

/// A single-line text input with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub buffer: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: &str) -> TextInput {
        TextInput {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Fields of the filter bar, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Name,
    Priority,
    DueDate,
}

/// Filter bar state. The priority selector cycles through (any) and the
/// three known levels, standing in for a dropdown.
#[derive(Debug, Default)]
pub struct FilterBar {
    pub name: TextInput,
    /// 0 = (any), 1..=3 index into `Priority::CHOICES`.
    pub priority_idx: usize,
    pub due_date: TextInput,
    pub focus: FilterField,
}

impl FilterBar {
    pub fn priority_label(&self) -> &'static str {
        match self.priority_idx {
            0 => "(any)",
            i => Priority::CHOICES[i - 1],
        }
    }

    /// The criteria currently entered in the bar.
    pub fn criteria(&self) -> TaskFilter {
        TaskFilter {
            name: self.name.buffer.clone(),
            priority: match self.priority_idx {
                0 => String::new(),
                i => Priority::CHOICES[i - 1].to_string(),
            },
            due_date: self.due_date.buffer.clone(),
        }
    }

    pub fn cycle_priority(&mut self, forward: bool) {
        let n = Priority::CHOICES.len() + 1;
        self.priority_idx = if forward {
            (self.priority_idx + 1) % n
        } else {
            (self.priority_idx + n - 1) % n
        };
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FilterField::Name => FilterField::Priority,
            FilterField::Priority => FilterField::DueDate,
            FilterField::DueDate => FilterField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FilterField::Name => FilterField::DueDate,
            FilterField::Priority => FilterField::Name,
            FilterField::DueDate => FilterField::Priority,
        };
    }

    /// The focused text input, or None when the priority selector has focus.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FilterField::Name => Some(&mut self.name),
            FilterField::Priority => None,
            FilterField::DueDate => Some(&mut self.due_date),
        }
    }
}

/// Fields of the add/update form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Priority,
    DueDate,
}

/// State of the add/update form popup.
#[derive(Debug)]
pub struct FormState {
    /// None = add form, Some = update form for this task.
    pub target: Option<TaskId>,
    pub name: TextInput,
    pub description: TextInput,
    /// Index into `Priority::CHOICES`.
    pub priority_idx: usize,
    /// Unrecognized priority carried in from the data file; shown until
    /// the selector is cycled, and rejected on save.
    pub priority_other: Option<String>,
    pub due_date: TextInput,
    pub focus: FormField,
    pub error: Option<ValidationError>,
}

impl FormState {
    /// A blank add form. The due date is pre-filled with today.
    pub fn add() -> FormState {
        FormState {
            target: None,
            name: TextInput::default(),
            description: TextInput::default(),
            priority_idx: 1, // Medium
            priority_other: None,
            due_date: TextInput::with_text(&DueDate::today().to_string()),
            focus: FormField::Name,
            error: None,
        }
    }

    /// An update form pre-filled with the task's displayed values.
    pub fn edit(task: &Task) -> FormState {
        let (priority_idx, priority_other) = match Priority::CHOICES
            .iter()
            .position(|c| *c == task.priority.as_str())
        {
            Some(i) => (i, None),
            None => (1, Some(task.priority.as_str().to_string())),
        };
        FormState {
            target: Some(task.id),
            name: TextInput::with_text(&task.name),
            description: TextInput::with_text(&task.description),
            priority_idx,
            priority_other,
            due_date: TextInput::with_text(&task.due_date.to_string()),
            focus: FormField::Name,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            None => "Add Task",
            Some(_) => "Update Task",
        }
    }

    pub fn priority_label(&self) -> &str {
        match &self.priority_other {
            Some(s) => s,
            None => Priority::CHOICES[self.priority_idx],
        }
    }

    pub fn cycle_priority(&mut self, forward: bool) {
        self.priority_other = None;
        let n = Priority::CHOICES.len();
        self.priority_idx = if forward {
            (self.priority_idx + 1) % n
        } else {
            (self.priority_idx + n - 1) % n
        };
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::DueDate,
            FormField::DueDate => FormField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::DueDate,
            FormField::Description => FormField::Name,
            FormField::Priority => FormField::Description,
            FormField::DueDate => FormField::Priority,
        };
    }

    /// The focused text input, or None when the priority selector has focus.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Priority => None,
            FormField::DueDate => Some(&mut self.due_date),
        }
    }
}

/// Pending delete confirmation.
#[derive(Debug)]
pub struct ConfirmState {
    pub id: TaskId,
    pub name: String,
}

/// Main application state. Owns the store for the session.
pub struct App {
    pub store: TaskStore,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Ids of the rows currently displayed, in display order.
    pub visible: Vec<TaskId>,
    /// Whether `visible` is a filtered view (sorting clears it).
    pub filter_applied: bool,
    pub filter: FilterBar,
    pub table: TableState,
    pub form: Option<FormState>,
    pub confirm: Option<ConfirmState>,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(store: TaskStore, theme: Theme) -> App {
        let mut app = App {
            store,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            visible: Vec::new(),
            filter_applied: false,
            filter: FilterBar::default(),
            table: TableState::default(),
            form: None,
            confirm: None,
            show_help: false,
            status_message: None,
            status_is_error: false,
        };
        app.show_all();
        app
    }

    /// Replace the displayed rows with the full collection in store order.
    pub fn show_all(&mut self) {
        self.visible = self.store.tasks().iter().map(|t| t.id).collect();
        self.filter_applied = false;
        self.clamp_selection();
    }

    /// Replace the displayed rows with the current filter bar criteria.
    /// Store order is untouched.
    pub fn apply_filter(&mut self) {
        let criteria = self.filter.criteria();
        self.visible = self
            .store
            .filter(&criteria)
            .iter()
            .map(|t| t.id)
            .collect();
        self.filter_applied = !criteria.is_empty();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.visible.is_empty() {
            self.table.select(None);
        } else {
            let sel = self.table.selected().unwrap_or(0).min(self.visible.len() - 1);
            self.table.select(Some(sel));
        }
    }

    /// The task under the cursor, if any row is selected.
    pub fn selected_task(&self) -> Option<&Task> {
        let idx = self.table.selected()?;
        let id = *self.visible.get(idx)?;
        self.store.get(id)
    }

    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.table.selected() {
            Some(i) => (i + 1).min(self.visible.len() - 1),
            None => 0,
        };
        self.table.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = self.table.selected().unwrap_or(0).saturating_sub(1);
        self.table.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.table.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.table.select(Some(self.visible.len() - 1));
        }
    }

    /// Regex for highlighting name-filter matches in the table.
    pub fn filter_highlight_re(&self) -> Option<Regex> {
        let pattern = self.filter.name.buffer.trim();
        if !self.filter_applied || pattern.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(pattern))).ok()
    }

    pub fn report(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_is_error = false;
    }

    pub fn report_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_is_error = true;
    }

    /// Persist after a mutation, reporting a write failure. The in-memory
    /// state is kept either way.
    pub fn save_store(&mut self) {
        if let Err(e) = self.store.save() {
            self.report_error(format!("not saved: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskFields;
    use tempfile::TempDir;

    fn test_app(tmp: &TempDir) -> App {
        let (store, _) = TaskStore::open(tmp.path().join("tasks.json"));
        App::new(store, Theme::default())
    }

    fn fields(name: &str, priority: &str, due: &str) -> TaskFields {
        TaskFields::parse(name, "", priority, due).unwrap()
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::with_text("ab");
        input.insert('c');
        assert_eq!(input.buffer, "abc");
        input.left();
        input.left();
        input.insert('x');
        assert_eq!(input.buffer, "axbc");
        input.backspace();
        assert_eq!(input.buffer, "abc");
        input.delete();
        assert_eq!(input.buffer, "ac");
        input.home();
        assert_eq!(input.cursor, 0);
        input.end();
        assert_eq!(input.cursor, input.buffer.len());
    }

    #[test]
    fn test_apply_filter_and_show_all() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.store.add(fields("Buy milk", "Medium", "01/01/2025"));
        app.store.add(fields("Fix roof", "High", "02/01/2025"));
        app.show_all();
        assert_eq!(app.visible.len(), 2);

        app.filter.name = TextInput::with_text("milk");
        app.apply_filter();
        assert!(app.filter_applied);
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.selected_task().unwrap().name, "Buy milk");

        app.show_all();
        assert!(!app.filter_applied);
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn test_empty_criteria_shows_everything() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.store.add(fields("a", "Low", "01/01/2025"));
        app.show_all();

        app.apply_filter();
        assert!(!app.filter_applied);
        assert_eq!(app.visible.len(), 1);
    }

    #[test]
    fn test_selection_clamps_after_filter() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.store.add(fields("a", "Low", "01/01/2025"));
        app.store.add(fields("b", "Low", "01/01/2025"));
        app.store.add(fields("b2", "Low", "01/01/2025"));
        app.show_all();
        app.select_last();

        app.filter.name = TextInput::with_text("b");
        app.apply_filter();
        assert_eq!(app.visible.len(), 2);
        assert_eq!(app.table.selected(), Some(1));

        app.filter.name = TextInput::with_text("zzz");
        app.apply_filter();
        assert_eq!(app.table.selected(), None);
        assert!(app.selected_task().is_none());
    }

    #[test]
    fn test_filter_highlight_re_only_when_applied() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        app.store.add(fields("Buy milk (2%)", "Low", "01/01/2025"));
        app.show_all();

        app.filter.name = TextInput::with_text("milk (2%)");
        assert!(app.filter_highlight_re().is_none());

        app.apply_filter();
        let re = app.filter_highlight_re().unwrap();
        // The pattern is escaped literal text, matched case-insensitively.
        assert!(re.is_match("got MILK (2%) here"));
    }

    #[test]
    fn test_form_state_prefill() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(&tmp);
        let id = app.store.add(fields("Buy milk", "High", "01/01/2025"));
        app.show_all();

        let form = FormState::edit(app.store.get(id).unwrap());
        assert_eq!(form.target, Some(id));
        assert_eq!(form.name.buffer, "Buy milk");
        assert_eq!(form.priority_label(), "High");
        assert_eq!(form.due_date.buffer, "01/01/2025");

        let add = FormState::add();
        assert_eq!(add.target, None);
        assert_eq!(add.priority_label(), "Medium");
        assert_eq!(add.due_date.buffer, DueDate::today().to_string());
    }

    #[test]
    fn test_filter_bar_priority_cycles_through_any() {
        let mut bar = FilterBar::default();
        assert_eq!(bar.priority_label(), "(any)");
        bar.cycle_priority(true);
        assert_eq!(bar.priority_label(), "Low");
        bar.cycle_priority(true);
        bar.cycle_priority(true);
        assert_eq!(bar.priority_label(), "High");
        bar.cycle_priority(true);
        assert_eq!(bar.priority_label(), "(any)");
        bar.cycle_priority(false);
        assert_eq!(bar.priority_label(), "High");
        assert_eq!(bar.criteria().priority, "High");
    }
}
