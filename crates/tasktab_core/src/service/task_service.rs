//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable task-list entry points for shell and embedding callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository index validation.
//! - Service layer remains storage-agnostic.

use crate::model::task::Task;
use crate::repo::task_repo::{AddedTask, OwnerSummary, RepoResult, TaskEntry, TaskRepository};
use std::collections::BTreeMap;

/// Use-case service wrapper for task list operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a new not-done task.
    ///
    /// # Contract
    /// - A blank `owner` is stored as `Unassigned`.
    /// - Returns the stored record and the new list size.
    pub fn add_task(&self, text: &str, owner: &str) -> RepoResult<AddedTask> {
        self.repo.add_task(text, owner)
    }

    /// Marks the task at a 1-based index as done.
    ///
    /// Completing an already-done task is a no-op that still succeeds.
    pub fn complete_task(&self, index: usize) -> RepoResult<Task> {
        self.repo.mark_done(index)
    }

    /// Removes the task at a 1-based index; later tasks shift down.
    pub fn remove_task(&self, index: usize) -> RepoResult<Task> {
        self.repo.delete_task(index)
    }

    /// Lists every task with its current 1-based position.
    pub fn list_tasks(&self) -> RepoResult<Vec<TaskEntry>> {
        self.repo.list_tasks()
    }

    /// Lists tasks whose owner matches case-insensitively.
    ///
    /// # Contract
    /// - Positions are the original list positions, not renumbered.
    pub fn tasks_for_owner(&self, owner: &str) -> RepoResult<Vec<TaskEntry>> {
        self.repo.list_tasks_for_owner(owner)
    }

    /// Returns done/total counts per owner, sorted by owner label.
    pub fn owner_summary(&self) -> RepoResult<BTreeMap<String, OwnerSummary>> {
        self.repo.summarize_by_owner()
    }
}
