//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep shell and embedding callers decoupled from storage details.

pub mod task_service;
