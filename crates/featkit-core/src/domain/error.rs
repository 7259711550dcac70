// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid feature name '{name}': {reason}")]
    InvalidName {
        name: String,
        reason: InvalidNameReason,
    },

    // ========================================================================
    // Plan Integrity Errors
    // ========================================================================
    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

/// Why a raw feature name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNameReason {
    /// Nothing was supplied.
    Empty,
    /// The first character is not an ASCII letter.
    InvalidLeadingCharacter(char),
    /// A character after the first is not a letter, digit or dash.
    InvalidCharacter { ch: char, position: usize },
}

impl fmt::Display for InvalidNameReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("name cannot be empty"),
            Self::InvalidLeadingCharacter(ch) => {
                write!(f, "name must start with a letter, found {ch:?}")
            }
            Self::InvalidCharacter { ch, position } => write!(
                f,
                "character {ch:?} at position {position} is not allowed \
                 (only letters, digits and '-')"
            ),
        }
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { reason, .. } => {
                let mut hints = vec![
                    "Feature names start with a letter and contain only letters, digits and '-'"
                        .into(),
                ];
                match reason {
                    InvalidNameReason::Empty => {
                        hints.push("Example: featkit user-profile".into());
                    }
                    InvalidNameReason::InvalidLeadingCharacter(_) => {
                        hints.push("Move leading digits or dashes after the first word".into());
                    }
                    InvalidNameReason::InvalidCharacter { .. } => {
                        hints.push("Replace spaces and underscores with '-'".into());
                    }
                }
                hints.push("Examples: billing, user-profile, userProfile".into());
                hints
            }
            Self::DuplicatePath { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("The generated plan is inconsistent at: {path}"),
                "This is a bug in featkit, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
