//! Task repository contracts and flat-file implementation.
//!
//! # Responsibility
//! - Provide stable list-position CRUD over the flat-file task store.
//! - Keep file access details inside the store boundary.
//!
//! # Invariants
//! - Every operation reloads the full list from storage; nothing is
//!   cached between calls.
//! - Mutations rewrite the whole list before returning.
//! - Index arguments are 1-based and rejected before any write when
//!   out of range.

use crate::model::task::{normalize_owner, Task};
use crate::store::{self, StoreError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A 1-based index outside `1..=len`.
    InvalidIndex { index: usize, len: usize },
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => {
                write!(f, "invalid task number {index}; the list has {len} tasks")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIndex { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One task paired with its current 1-based list position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub index: usize,
    pub task: Task,
}

/// Per-owner completion counts returned by summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OwnerSummary {
    pub done: usize,
    pub total: usize,
}

/// Outcome of an append: the stored record and the new list size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedTask {
    pub task: Task,
    pub total: usize,
}

/// Repository interface for task list operations.
pub trait TaskRepository {
    /// Loads the full ordered list; empty when no file exists yet.
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Replaces the stored list wholesale.
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
    /// Appends a not-done task, normalizing a blank owner.
    fn add_task(&self, text: &str, owner: &str) -> RepoResult<AddedTask>;
    /// Marks the task at a 1-based index as done; idempotent.
    fn mark_done(&self, index: usize) -> RepoResult<Task>;
    /// Removes and returns the task at a 1-based index.
    fn delete_task(&self, index: usize) -> RepoResult<Task>;
    /// Pairs every task with its 1-based position.
    fn list_tasks(&self) -> RepoResult<Vec<TaskEntry>>;
    /// Filters by owner, case-insensitively, keeping original positions.
    fn list_tasks_for_owner(&self, owner: &str) -> RepoResult<Vec<TaskEntry>>;
    /// Groups done/total counts per owner, sorted by owner label.
    fn summarize_by_owner(&self) -> RepoResult<BTreeMap<String, OwnerSummary>>;
}

/// Flat-file-backed task repository.
///
/// The backing path is injected at construction. The file does not
/// need to exist yet; the first mutation creates it.
pub struct FlatFileTaskRepository {
    path: PathBuf,
}

impl FlatFileTaskRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TaskRepository for FlatFileTaskRepository {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(store::load_tasks(&self.path)?)
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        Ok(store::save_tasks(&self.path, tasks)?)
    }

    fn add_task(&self, text: &str, owner: &str) -> RepoResult<AddedTask> {
        let mut tasks = self.load_tasks()?;
        let task = Task::new(text, owner);
        tasks.push(task.clone());
        self.save_tasks(&tasks)?;

        Ok(AddedTask {
            task,
            total: tasks.len(),
        })
    }

    fn mark_done(&self, index: usize) -> RepoResult<Task> {
        let mut tasks = self.load_tasks()?;
        let slot = checked_slot(index, tasks.len())?;
        tasks[slot].mark_done();
        self.save_tasks(&tasks)?;

        Ok(tasks[slot].clone())
    }

    fn delete_task(&self, index: usize) -> RepoResult<Task> {
        let mut tasks = self.load_tasks()?;
        let slot = checked_slot(index, tasks.len())?;
        let removed = tasks.remove(slot);
        self.save_tasks(&tasks)?;

        Ok(removed)
    }

    fn list_tasks(&self) -> RepoResult<Vec<TaskEntry>> {
        let tasks = self.load_tasks()?;
        Ok(number_tasks(tasks))
    }

    fn list_tasks_for_owner(&self, owner: &str) -> RepoResult<Vec<TaskEntry>> {
        let wanted = owner.to_lowercase();
        let entries = self.list_tasks()?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.task.owner.to_lowercase() == wanted)
            .collect())
    }

    fn summarize_by_owner(&self) -> RepoResult<BTreeMap<String, OwnerSummary>> {
        let tasks = self.load_tasks()?;
        let mut summary: BTreeMap<String, OwnerSummary> = BTreeMap::new();

        for task in &tasks {
            // Legacy rows parsed from hand-edited files may carry an
            // empty owner; summaries fold them into `Unassigned`.
            let owner = normalize_owner(&task.owner);
            let counts = summary.entry(owner).or_default();
            counts.total += 1;
            if task.done {
                counts.done += 1;
            }
        }

        Ok(summary)
    }
}

fn checked_slot(index: usize, len: usize) -> Result<usize, RepoError> {
    if index == 0 || index > len {
        return Err(RepoError::InvalidIndex { index, len });
    }
    Ok(index - 1)
}

fn number_tasks(tasks: Vec<Task>) -> Vec<TaskEntry> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(slot, task)| TaskEntry {
            index: slot + 1,
            task,
        })
        .collect()
}
