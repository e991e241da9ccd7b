//! The authoritative in-memory task collection and its file backing.
//!
//! All reads and writes of persistent state go through [`TaskStore`]. The
//! presentation layers (TUI and CLI) call `save()` after every mutation and
//! report failures; a failed write leaves the in-memory state intact.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::io::store_io::{self, StoreError};
use crate::model::task::{Task, TaskFields, TaskId};

/// Column key used for ordering the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Description,
    Priority,
    DueDate,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "name" => Some(SortKey::Name),
            "description" => Some(SortKey::Description),
            "priority" => Some(SortKey::Priority),
            "due_date" | "due" => Some(SortKey::DueDate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Description => "description",
            SortKey::Priority => "priority",
            SortKey::DueDate => "due_date",
        }
    }
}

/// Filter criteria. Empty fields impose no constraint, so the default
/// value matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Substring of the name, case-insensitive.
    pub name: String,
    /// Exact priority, case-insensitive.
    pub priority: String,
    /// Exact due date text, `DD/MM/YYYY`.
    pub due_date: String,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.priority.trim().is_empty()
            && self.due_date.trim().is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        let name = self.name.trim();
        if !name.is_empty()
            && !task
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
        {
            return false;
        }
        let priority = self.priority.trim();
        if !priority.is_empty() && !task.priority.as_str().eq_ignore_ascii_case(priority) {
            return false;
        }
        let due = self.due_date.trim();
        if !due.is_empty() && task.due_date.to_string() != due {
            return false;
        }
        true
    }
}

/// The single authoritative task collection, backed by one data file.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
    sort_key: Option<SortKey>,
    ascending: bool,
}

impl TaskStore {
    /// Open the store at `path`. A missing file starts empty; malformed
    /// content also starts empty, with the diagnostic returned alongside
    /// the store for the caller to report. The file itself is left
    /// untouched until the next save.
    pub fn open(path: PathBuf) -> (TaskStore, Option<StoreError>) {
        let (tasks, warning) = match store_io::read_tasks(&path) {
            Ok(tasks) => (tasks, None),
            Err(e) => (Vec::new(), Some(e)),
        };

        let mut next_id = 1u64;
        let tasks = tasks
            .into_iter()
            .map(|mut task| {
                task.id = TaskId(next_id);
                next_id += 1;
                task
            })
            .collect();

        let store = TaskStore {
            path,
            tasks,
            next_id,
            sort_key: None,
            ascending: true,
        };
        (store, warning)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full collection in its current order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Persist the full collection, overwriting the data file.
    pub fn save(&self) -> Result<(), StoreError> {
        store_io::write_tasks(&self.path, &self.tasks)
    }

    /// Append a new task and return its identifier.
    pub fn add(&mut self, fields: TaskFields) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, fields));
        id
    }

    /// Replace the fields of the task with `id`. Returns false if the id
    /// is unknown.
    pub fn update(&mut self, id: TaskId, fields: TaskFields) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.apply(fields);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Tasks matching all non-empty criteria, in collection order. Never
    /// reorders or mutates the collection.
    pub fn filter(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Sort the collection in place by `key`. Repeating the previous key
    /// flips the direction; a new key resets to ascending. Ties keep their
    /// previous relative order in both directions. Returns the direction
    /// used (true = ascending).
    pub fn sort(&mut self, key: SortKey) -> bool {
        if self.sort_key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.ascending = true;
        }
        self.sort_key = Some(key);

        fn by_name(a: &Task, b: &Task) -> Ordering {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        }
        fn by_description(a: &Task, b: &Task) -> Ordering {
            a.description.to_lowercase().cmp(&b.description.to_lowercase())
        }
        fn by_priority(a: &Task, b: &Task) -> Ordering {
            a.priority.rank().cmp(&b.priority.rank())
        }
        fn by_due_date(a: &Task, b: &Task) -> Ordering {
            a.due_date.cmp(&b.due_date)
        }

        let cmp: fn(&Task, &Task) -> Ordering = match key {
            SortKey::Name => by_name,
            SortKey::Description => by_description,
            SortKey::Priority => by_priority,
            SortKey::DueDate => by_due_date,
        };

        if self.ascending {
            self.tasks.sort_by(cmp);
        } else {
            self.tasks.sort_by(|a, b| cmp(b, a));
        }
        self.ascending
    }

    /// The active sort column and direction, if any sort has been applied.
    pub fn sort_state(&self) -> Option<(SortKey, bool)> {
        self.sort_key.map(|k| (k, self.ascending))
    }
}
