//! Flat-file storage boundary for task records.
//!
//! # Responsibility
//! - Own the tab-separated on-disk line format, current and legacy.
//! - Read and rewrite the backing file as a whole.
//!
//! # Invariants
//! - Parsing is total: every stored line maps to exactly one task.
//! - Writes always emit the current 3-field layout.
//! - No file handle outlives a single load or save call.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file;

pub use file::{format_line, load_tasks, parse_line, save_tasks};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level error for the flat-file backend.
#[derive(Debug)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The backing file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read task file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write task file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}
