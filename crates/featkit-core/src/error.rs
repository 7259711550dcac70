//! Unified error handling for featkit core.
//!
//! Wraps domain and application errors behind one type, with categories and
//! user-actionable suggestions for the CLI to display.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for featkit core operations.
#[derive(Debug, Error, Clone)]
pub enum FeatkitError {
    /// Errors from the domain layer (validation, plan integrity).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem work).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl FeatkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this is a rejected feature name.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidName { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type FeatkitResult<T> = Result<T, FeatkitError>;
