//! Repository layer abstractions and the flat-file implementation.
//!
//! # Responsibility
//! - Define position-addressed task operations for service callers.
//! - Isolate file layout details from service/business orchestration.
//!
//! # Invariants
//! - Mutations validate 1-based indices before any write happens.
//! - Repository APIs return semantic errors (`InvalidIndex`) in
//!   addition to store transport errors.

pub mod task_repo;
