//! Domain model shared by every layer of the crate.
//!
//! # Responsibility
//! - Define the canonical task record used by store, repo and service code.
//! - Keep owner normalization rules in one place.
//!
//! # Invariants
//! - Tasks carry no persisted identity; a task is addressed by its
//!   current 1-based position in the stored list.
//! - Write paths never persist an empty owner label.

pub mod task;
