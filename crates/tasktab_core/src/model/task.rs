//! Task record and owner normalization.
//!
//! # Responsibility
//! - Define the in-memory shape of a single task.
//! - Own the `Unassigned` sentinel applied to blank owners.
//!
//! # Invariants
//! - `Task::new` always starts tasks as not done.
//! - Owners produced by `Task::new` are trimmed and never empty.
//! - `text` is free-form and may contain tab characters; the store
//!   layer is responsible for keeping them intact on disk.

use serde::{Deserialize, Serialize};

/// Owner label recorded when a task has no assignee.
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// A single tracked task.
///
/// `text` may carry a caller-composed category prefix such as
/// `[errands] buy milk`; the category is not a separate field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Completion flag.
    pub done: bool,
    /// Assignee label; never empty on records written by this crate.
    pub owner: String,
    /// Free-form description.
    pub text: String,
}

impl Task {
    /// Creates a new not-done task.
    ///
    /// # Contract
    /// - `owner` is normalized: blank input becomes [`UNASSIGNED_OWNER`].
    /// - `text` is stored verbatim.
    pub fn new(text: impl Into<String>, owner: impl AsRef<str>) -> Self {
        Self {
            done: false,
            owner: normalize_owner(owner),
            text: text.into(),
        }
    }

    /// Marks this task as completed. Safe to call repeatedly.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Normalizes an owner label for write paths.
///
/// # Contract
/// - Surrounding whitespace is trimmed.
/// - A blank label becomes [`UNASSIGNED_OWNER`].
/// - Case is preserved; matching rules live in the repo layer.
pub fn normalize_owner(owner: impl AsRef<str>) -> String {
    let trimmed = owner.as_ref().trim();
    if trimmed.is_empty() {
        UNASSIGNED_OWNER.to_string()
    } else {
        trimmed.to_string()
    }
}
