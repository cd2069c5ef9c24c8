//! Core domain logic for tasktab.
//! This crate is the single source of truth for task-list invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_owner, Task, UNASSIGNED_OWNER};
pub use repo::task_repo::{
    AddedTask, FlatFileTaskRepository, OwnerSummary, RepoError, RepoResult, TaskEntry,
    TaskRepository,
};
pub use service::task_service::TaskService;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
