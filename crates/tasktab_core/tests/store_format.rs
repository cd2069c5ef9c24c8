use std::fs;
use std::path::PathBuf;

use tasktab_core::store::{load_tasks, save_tasks};
use tasktab_core::{StoreError, Task};
use tempfile::TempDir;

#[test]
fn load_missing_file_returns_empty_list() {
    let (_dir, path) = temp_store();

    let tasks = load_tasks(&path).unwrap();

    assert!(tasks.is_empty());
    assert!(!path.exists());
}

#[test]
fn save_then_load_round_trips_records() {
    let (_dir, path) = temp_store();
    let mut report = Task::new("Ship the report", "Rana");
    report.mark_done();
    let tasks = vec![report, Task::new("Buy milk", "")];

    save_tasks(&path, &tasks).unwrap();
    let loaded = load_tasks(&path).unwrap();

    assert_eq!(loaded, tasks);
}

#[test]
fn save_writes_current_layout_without_trailing_newline() {
    let (_dir, path) = temp_store();
    let mut first = Task::new("Ship the report", "Rana");
    first.mark_done();
    let tasks = vec![first, Task::new("Buy milk", "")];

    save_tasks(&path, &tasks).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "1\tRana\tShip the report\n0\tUnassigned\tBuy milk");
}

#[test]
fn save_empty_list_writes_empty_file() {
    let (_dir, path) = temp_store();
    save_tasks(&path, &[Task::new("temporary", "")]).unwrap();

    save_tasks(&path, &[]).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(load_tasks(&path).unwrap().is_empty());
}

#[test]
fn mixed_layout_file_loads_line_by_line() {
    let (_dir, path) = temp_store();
    fs::write(
        &path,
        "1\tRana\tShip the report\n0\tWater the plants\nCall the bank",
    )
    .unwrap();

    let tasks = load_tasks(&path).unwrap();

    assert_eq!(tasks.len(), 3);
    assert!(tasks[0].done);
    assert_eq!(tasks[0].owner, "Rana");
    assert_eq!(tasks[0].text, "Ship the report");
    assert!(!tasks[1].done);
    assert_eq!(tasks[1].owner, "Unassigned");
    assert_eq!(tasks[1].text, "Water the plants");
    assert!(!tasks[2].done);
    assert_eq!(tasks[2].owner, "Unassigned");
    assert_eq!(tasks[2].text, "Call the bank");
}

#[test]
fn load_keeps_tabs_inside_task_text() {
    let (_dir, path) = temp_store();
    fs::write(&path, "0\tSam\tcompare\told\tnew").unwrap();

    let tasks = load_tasks(&path).unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "compare\told\tnew");
}

#[test]
fn load_accepts_trailing_newline_from_hand_edited_files() {
    let (_dir, path) = temp_store();
    fs::write(&path, "0\tRana\tBuy milk\n").unwrap();

    let tasks = load_tasks(&path).unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
}

#[test]
fn load_keeps_records_exactly_as_stored() {
    let (_dir, path) = temp_store();
    fs::write(&path, "0\t\tdangling row\n1\t  Sam  \tpadded owner").unwrap();

    let tasks = load_tasks(&path).unwrap();

    assert_eq!(tasks[0].owner, "");
    assert_eq!(tasks[1].owner, "  Sam  ");
}

#[test]
fn load_reports_read_failures() {
    let dir = TempDir::new().unwrap();

    let err = load_tasks(dir.path()).unwrap_err();

    assert!(matches!(err, StoreError::Read { .. }));
    assert!(err.to_string().contains("failed to read task file"));
}

#[test]
fn save_reports_write_failures() {
    let dir = TempDir::new().unwrap();

    let err = save_tasks(dir.path(), &[Task::new("anything", "")]).unwrap_err();

    assert!(matches!(err, StoreError::Write { .. }));
    assert!(err.to_string().contains("failed to write task file"));
}

fn temp_store() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.txt");
    (dir, path)
}
