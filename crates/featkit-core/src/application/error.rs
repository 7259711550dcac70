//! Application layer errors.
//!
//! These errors represent failures while applying a plan, not business
//! rules. Name validation errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A filesystem operation failed.
    #[error("Failed to {operation} at {}: {reason}", path.display())]
    Materialization {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Something of the wrong kind already occupies a planned path.
    #[error("Path collision at {}: expected a {expected}", path.display())]
    PathCollision { path: PathBuf, expected: EntryKind },

    /// Undoing a partially applied plan failed.
    #[error("Rollback failed at {} ({reason}) after: {original}", path.display())]
    RollbackFailed {
        path: PathBuf,
        reason: String,
        original: String,
    },

    /// In-memory adapter state was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    StoreLockError,
}

/// The two kinds of entry a plan creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("directory"),
            Self::File => f.write_str("file"),
        }
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Materialization { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Run again once fixed; entries already created are skipped".into(),
            ],
            Self::PathCollision { path, expected } => vec![
                format!(
                    "'{}' exists but is not a {expected}",
                    path.display()
                ),
                "Move or rename the conflicting entry and run again".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Could not remove: {}", path.display()),
                "Inspect the feature directory and clean up by hand".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Materialization { .. }
            | Self::PathCollision { .. }
            | Self::RollbackFailed { .. } => ErrorCategory::Filesystem,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// The path the failure is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Materialization { path, .. }
            | Self::PathCollision { path, .. }
            | Self::RollbackFailed { path, .. } => Some(path),
            Self::StoreLockError => None,
        }
    }
}
