//! Integration tests for the `td` CLI.
//!
//! Each test runs `td` as a subprocess in a temp directory and verifies
//! stdout, stderr, and/or data file contents.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Get the path to the built `td` binary.
fn td_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("td");
    path
}

/// Run `td` with the given args in the given directory, returning
/// (stdout, stderr, success).
fn run_td(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(td_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run td");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn add(dir: &Path, name: &str, priority: &str, due: &str) {
    let (_, stderr, ok) = run_td(dir, &["add", name, "--priority", priority, "--due", due]);
    assert!(ok, "add failed: {}", stderr);
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[test]
fn add_creates_the_data_file() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_td(
        tmp.path(),
        &["add", "Buy milk", "--priority", "Medium", "--due", "01/01/2025"],
    );
    assert!(ok);
    assert!(stdout.contains("added \"Buy milk\""));

    let raw = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(raw.contains("\"Buy milk\""));
    assert!(raw.contains("\"01/01/2025\""));
}

#[test]
fn add_defaults_priority_and_due_date() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_td(tmp.path(), &["add", "Buy milk"]);
    assert!(ok, "add with defaults should succeed");
    assert!(stdout.contains("added"));

    let raw = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(raw.contains("\"Medium\""));
}

#[test]
fn add_normalizes_priority_case() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "high", "01/01/2025");
    let raw = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(raw.contains("\"High\""));
}

#[test]
fn add_rejects_invalid_input() {
    let tmp = TempDir::new().unwrap();

    let (_, stderr, ok) = run_td(tmp.path(), &["add", "", "--due", "01/01/2025"]);
    assert!(!ok);
    assert!(stderr.contains("name"));

    let (_, stderr, ok) = run_td(
        tmp.path(),
        &["add", "x", "--priority", "urgent", "--due", "01/01/2025"],
    );
    assert!(!ok);
    assert!(stderr.contains("priority must be Low, Medium, or High"));

    let (_, stderr, ok) = run_td(tmp.path(), &["add", "x", "--due", "32/01/2024"]);
    assert!(!ok);
    assert!(stderr.contains("day must be between 1 and 31"));

    let (_, stderr, ok) = run_td(tmp.path(), &["add", "x", "--due", "15/13/2024"]);
    assert!(!ok);
    assert!(stderr.contains("month must be between 1 and 12"));

    let (_, stderr, ok) = run_td(tmp.path(), &["add", "x", "--due", "15/06/1999"]);
    assert!(!ok);
    assert!(stderr.contains("year must be between 2000 and 2100"));

    // Nothing was written by any of the rejected adds.
    assert!(!tmp.path().join("tasks.json").exists());
}

#[test]
fn add_accepts_day_month_mismatch() {
    // Days-in-month is not validated: 31/02 passes.
    let tmp = TempDir::new().unwrap();
    let (_, _, ok) = run_td(tmp.path(), &["add", "x", "--due", "31/02/2024"]);
    assert!(ok);
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_tasks() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");
    add(tmp.path(), "Fix roof", "High", "02/01/2025");

    let (stdout, _, ok) = run_td(tmp.path(), &["list"]);
    assert!(ok);
    assert!(stdout.contains("Name"));
    assert!(stdout.contains("Buy milk"));
    assert!(stdout.contains("Fix roof"));
}

#[test]
fn list_empty_store() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_td(tmp.path(), &["list"]);
    assert!(ok);
    assert!(stdout.contains("no tasks"));
}

#[test]
fn list_filters_combine() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");
    add(tmp.path(), "Buy stamps", "Low", "02/01/2025");
    add(tmp.path(), "Fix roof", "High", "01/01/2025");

    let (stdout, _, ok) = run_td(tmp.path(), &["list", "--name", "buy"]);
    assert!(ok);
    assert!(stdout.contains("Buy milk"));
    assert!(stdout.contains("Buy stamps"));
    assert!(!stdout.contains("Fix roof"));

    let (stdout, _, _) = run_td(tmp.path(), &["list", "--name", "buy", "--priority", "low"]);
    assert!(!stdout.contains("Buy milk"));
    assert!(stdout.contains("Buy stamps"));

    let (stdout, _, _) = run_td(tmp.path(), &["list", "--due", "01/01/2025"]);
    assert!(stdout.contains("Buy milk"));
    assert!(stdout.contains("Fix roof"));
    assert!(!stdout.contains("Buy stamps"));
}

#[test]
fn list_sorts_by_priority_rank() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "low task", "Low", "01/01/2025");
    add(tmp.path(), "high task", "High", "01/01/2025");
    add(tmp.path(), "medium task", "Medium", "01/01/2025");

    let (stdout, _, ok) = run_td(tmp.path(), &["list", "--sort", "priority"]);
    assert!(ok);
    let high = stdout.find("high task").unwrap();
    let medium = stdout.find("medium task").unwrap();
    let low = stdout.find("low task").unwrap();
    assert!(high < medium && medium < low);
}

#[test]
fn list_sorts_due_dates_chronologically() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "late", "Low", "20/01/2021");
    add(tmp.path(), "early", "Low", "05/12/2020");

    let (stdout, _, ok) = run_td(tmp.path(), &["list", "--sort", "due_date"]);
    assert!(ok);
    assert!(stdout.find("early").unwrap() < stdout.find("late").unwrap());
}

#[test]
fn list_rejects_unknown_sort_key() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, ok) = run_td(tmp.path(), &["list", "--sort", "urgency"]);
    assert!(!ok);
    assert!(stderr.contains("unknown sort key"));
}

#[test]
fn list_json_output() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");
    add(tmp.path(), "Fix roof", "High", "02/01/2025");

    let (stdout, _, ok) = run_td(tmp.path(), &["list", "--json"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Buy milk");
    assert_eq!(rows[1]["priority"], "High");
    assert_eq!(rows[1]["due_date"], "02/01/2025");
}

#[test]
fn malformed_data_file_warns_and_lists_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks.json"), "{ broken").unwrap();

    let (stdout, stderr, ok) = run_td(tmp.path(), &["list"]);
    assert!(ok);
    assert!(stderr.contains("not a valid task file"));
    assert!(stdout.contains("no tasks"));
    // The broken file was not rewritten by a read-only command.
    assert_eq!(
        fs::read_to_string(tmp.path().join("tasks.json")).unwrap(),
        "{ broken"
    );
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

#[test]
fn rm_force_deletes_by_position() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");
    add(tmp.path(), "Fix roof", "High", "02/01/2025");

    let (stdout, _, ok) = run_td(tmp.path(), &["rm", "1", "--force"]);
    assert!(ok);
    assert!(stdout.contains("deleted \"Buy milk\""));

    let raw = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(!raw.contains("Buy milk"));
    assert!(raw.contains("Fix roof"));
}

#[test]
fn rm_out_of_range_errors() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");

    let (_, stderr, ok) = run_td(tmp.path(), &["rm", "2", "--force"]);
    assert!(!ok);
    assert!(stderr.contains("no task number 2"));

    let (_, _, ok) = run_td(tmp.path(), &["rm", "0", "--force"]);
    assert!(!ok);
}

#[test]
fn rm_prompt_answer_n_cancels() {
    let tmp = TempDir::new().unwrap();
    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");

    let mut child = Command::new(td_bin())
        .args(["rm", "1"])
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"n\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cancelled"));
    let raw = fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(raw.contains("Buy milk"));
}

// ---------------------------------------------------------------------------
// configuration
// ---------------------------------------------------------------------------

#[test]
fn config_selects_the_data_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("taskdeck.toml"),
        "[data]\nfile = \"todo.json\"\n",
    )
    .unwrap();

    add(tmp.path(), "Buy milk", "Medium", "01/01/2025");
    assert!(tmp.path().join("todo.json").exists());
    assert!(!tmp.path().join("tasks.json").exists());
}

#[test]
fn file_flag_beats_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("taskdeck.toml"),
        "[data]\nfile = \"todo.json\"\n",
    )
    .unwrap();

    let (_, _, ok) = run_td(
        tmp.path(),
        &["add", "Buy milk", "--due", "01/01/2025", "--file", "mine.json"],
    );
    assert!(ok);
    assert!(tmp.path().join("mine.json").exists());
    assert!(!tmp.path().join("todo.json").exists());
}

#[test]
fn malformed_config_warns_and_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("taskdeck.toml"), "[data\nbroken").unwrap();

    let (_, stderr, ok) = run_td(
        tmp.path(),
        &["add", "Buy milk", "--due", "01/01/2025"],
    );
    assert!(ok);
    assert!(stderr.contains("taskdeck.toml"));
    assert!(tmp.path().join("tasks.json").exists());
}
