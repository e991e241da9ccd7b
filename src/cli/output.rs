use serde::Serialize;

use crate::model::task::Task;
use crate::util::unicode::display_width;

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub priority: &'a str,
    pub due_date: String,
}

pub fn tasks_to_json(tasks: &[&Task]) -> serde_json::Result<String> {
    let rows: Vec<TaskJson> = tasks
        .iter()
        .map(|t| TaskJson {
            name: &t.name,
            description: &t.description,
            priority: t.priority.as_str(),
            due_date: t.due_date.to_string(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

const HEADERS: [&str; 4] = ["Name", "Description", "Priority", "Due Date"];

/// Format tasks as an aligned four-column table with a numbered margin.
pub fn format_task_table(tasks: &[&Task]) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["no tasks".to_string()];
    }

    let rows: Vec<[String; 4]> = tasks
        .iter()
        .map(|t| {
            [
                t.name.clone(),
                t.description.clone(),
                t.priority.as_str().to_string(),
                t.due_date.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = display_width(header);
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let num_width = rows.len().to_string().len().max(1);
    let mut lines = Vec::new();

    let mut header = format!("{:>width$}", "#", width = num_width);
    for (i, h) in HEADERS.iter().enumerate() {
        header.push_str("  ");
        header.push_str(&pad(h, widths[i]));
    }
    lines.push(header.trim_end().to_string());

    for (n, row) in rows.iter().enumerate() {
        let mut line = format!("{:>width$}", n + 1, width = num_width);
        for (i, cell) in row.iter().enumerate() {
            line.push_str("  ");
            line.push_str(&pad(cell, widths[i]));
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Pad to `width` terminal cells with trailing spaces.
fn pad(s: &str, width: usize) -> String {
    let w = display_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}
