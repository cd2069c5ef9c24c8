//! Whole-file access and the tab-separated line codec.
//!
//! # Responsibility
//! - Load the complete task list from the backing file.
//! - Rewrite the backing file from an in-memory list.
//! - Parse the three historical line layouts; format the current one.
//!
//! # Invariants
//! - A missing file reads as an empty list; it is not created.
//! - `parse_line` never fails; short lines fall back to legacy rules.
//! - Splitting is capped at three fields so tabs inside task text
//!   survive a round trip.

use super::{StoreError, StoreResult};
use crate::model::task::{Task, UNASSIGNED_OWNER};
use log::{debug, error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

const DONE_STATUS: &str = "1";
const OPEN_STATUS: &str = "0";

/// Loads every task from the backing file, oldest first.
///
/// # Contract
/// - Returns an empty list when the file does not exist.
/// - Keeps records exactly as stored; no normalization on read.
///
/// # Errors
/// - `StoreError::Read` for any I/O failure other than a missing file.
///
/// # Side effects
/// - Emits `store_load` logging events with record count and duration.
pub fn load_tasks(path: impl AsRef<Path>) -> StoreResult<Vec<Task>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    debug!("event=store_load module=store status=start path={}", path.display());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "event=store_load module=store status=ok path={} records=0 missing_file=true",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=store_load module=store status=error path={} duration_ms={} error_code=store_read_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let tasks: Vec<Task> = content.lines().map(parse_line).collect();
    debug!(
        "event=store_load module=store status=ok path={} records={} duration_ms={}",
        path.display(),
        tasks.len(),
        started_at.elapsed().as_millis()
    );
    Ok(tasks)
}

/// Replaces the backing file with the given list.
///
/// # Contract
/// - Every record is written in the current 3-field layout.
/// - Lines are joined with `\n`; there is no trailing newline.
/// - An empty list produces an empty file, not a deleted one.
///
/// # Errors
/// - `StoreError::Write` for any I/O failure.
///
/// # Side effects
/// - Creates the file when it does not exist yet.
/// - Emits `store_save` logging events with record count and duration.
pub fn save_tasks(path: impl AsRef<Path>, tasks: &[Task]) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    debug!(
        "event=store_save module=store status=start path={} records={}",
        path.display(),
        tasks.len()
    );

    let payload = tasks.iter().map(format_line).collect::<Vec<_>>().join("\n");

    match fs::write(path, payload) {
        Ok(()) => {
            info!(
                "event=store_save module=store status=ok path={} records={} duration_ms={}",
                path.display(),
                tasks.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=store status=error path={} duration_ms={} error_code=store_write_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(StoreError::Write {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Parses one stored line into a task record.
///
/// Three layouts have been written over the file format's life:
///
/// - `status\towner\ttext` is the current layout; any further tabs
///   belong to `text`.
/// - `status\ttext` predates owners; the owner reads as `Unassigned`.
/// - bare `text` is the oldest layout; the task is open and unassigned.
///
/// A status field of `1` means done; any other value means open.
pub fn parse_line(line: &str) -> Task {
    let mut fields = line.splitn(3, '\t');
    let first = fields.next().unwrap_or_default();
    match (fields.next(), fields.next()) {
        (Some(owner), Some(text)) => Task {
            done: first == DONE_STATUS,
            owner: owner.to_string(),
            text: text.to_string(),
        },
        (Some(text), None) => Task {
            done: first == DONE_STATUS,
            owner: UNASSIGNED_OWNER.to_string(),
            text: text.to_string(),
        },
        (None, _) => Task {
            done: false,
            owner: UNASSIGNED_OWNER.to_string(),
            text: first.to_string(),
        },
    }
}

/// Formats one task as a current-layout line without a terminator.
pub fn format_line(task: &Task) -> String {
    let status = if task.done { DONE_STATUS } else { OPEN_STATUS };
    format!("{status}\t{}\t{}", task.owner, task.text)
}
