use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable in-memory task identifier, assigned by the store at creation or
/// load time. Not persisted: the data file format has no id field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaskId(pub(crate) u64);

/// Task priority. `Other` covers unrecognized values from hand-edited data
/// files: they load and display as written, and sort after the three known
/// levels. Form and CLI entry only admit the three canonical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// The values accepted on entry, in selector order.
    pub const CHOICES: [&'static str; 3] = ["Low", "Medium", "High"];

    /// Case-insensitive parse. Unrecognized input is preserved as `Other`.
    pub fn parse(s: &str) -> Priority {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(s.to_string()),
        }
    }

    /// Capitalized display form.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(s) => s,
        }
    }

    /// Sort rank: High before Medium before Low, unrecognized last.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
            Priority::Other(_) => 3,
        }
    }

    /// Whether this is one of the three values accepted on entry.
    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Other(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Priority::parse(&s))
    }
}

/// Date validation errors, one per rule so dialogs can name the violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("due date must use the DD/MM/YYYY format")]
    Format,
    #[error("day must be between 1 and 31")]
    DayRange,
    #[error("month must be between 1 and 12")]
    MonthRange,
    #[error("year must be between 2000 and 2100")]
    YearRange,
}

/// A due date in the fixed `DD/MM/YYYY` text form.
///
/// Field ranges are checked on parse, but the day is NOT validated against
/// the days in its month: 31/02/2024 is accepted as written. Ordering is
/// chronological (year, then month, then day), independent of the text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DueDate {
    year: u16,
    month: u8,
    day: u8,
}

impl DueDate {
    pub fn new(day: u8, month: u8, year: u16) -> Result<DueDate, DateError> {
        if !(1..=31).contains(&day) {
            return Err(DateError::DayRange);
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthRange);
        }
        if !(2000..=2100).contains(&year) {
            return Err(DateError::YearRange);
        }
        Ok(DueDate { year, month, day })
    }

    /// Parse `DD/MM/YYYY`: exactly 10 characters with slashes at positions
    /// 2 and 5, then range checks.
    pub fn parse(s: &str) -> Result<DueDate, DateError> {
        let b = s.as_bytes();
        if !s.is_ascii() || b.len() != 10 || b[2] != b'/' || b[5] != b'/' {
            return Err(DateError::Format);
        }
        let day: u8 = s[0..2].parse().map_err(|_| DateError::Format)?;
        let month: u8 = s[3..5].parse().map_err(|_| DateError::Format)?;
        let year: u16 = s[6..10].parse().map_err(|_| DateError::Format)?;
        DueDate::new(day, month, year)
    }

    /// Today's date in the local timezone.
    pub fn today() -> DueDate {
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        DueDate {
            year: now.year().clamp(2000, 2100) as u16,
            month: now.month() as u8,
            day: now.day() as u8,
        }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DueDate::parse(&s).map_err(D::Error::custom)
    }
}

/// Field-level validation errors for task entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("enter a name")]
    EmptyName,
    #[error("priority must be Low, Medium, or High")]
    InvalidPriority(String),
    #[error(transparent)]
    Date(#[from] DateError),
}

impl ValidationError {
    /// The form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "name",
            ValidationError::InvalidPriority(_) => "priority",
            ValidationError::Date(_) => "due date",
        }
    }
}

/// Validated task field values, produced from raw form or CLI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: DueDate,
}

impl TaskFields {
    /// Validate raw input: non-empty name, one of the three known
    /// priorities (case-normalized), due date per `DueDate::parse`.
    pub fn parse(
        name: &str,
        description: &str,
        priority: &str,
        due_date: &str,
    ) -> Result<TaskFields, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let parsed = Priority::parse(priority);
        if !parsed.is_known() {
            return Err(ValidationError::InvalidPriority(priority.trim().to_string()));
        }
        let due = DueDate::parse(due_date.trim())?;
        Ok(TaskFields {
            name: name.to_string(),
            description: description.to_string(),
            priority: parsed,
            due_date: due,
        })
    }
}

/// A single to-do record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Session-local identity, assigned by the store.
    #[serde(skip)]
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: DueDate,
}

impl Task {
    pub fn new(id: TaskId, fields: TaskFields) -> Task {
        Task {
            id,
            name: fields.name,
            description: fields.description,
            priority: fields.priority,
            due_date: fields.due_date,
        }
    }

    /// Replace all four user-visible fields, keeping the identity.
    pub fn apply(&mut self, fields: TaskFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
    }
}

impl PartialEq for Task {
    // Value equality; ids are session-local and excluded.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.priority == other.priority
            && self.due_date == other.due_date
    }
}

impl Eq for Task {}
