//! Core domain layer for featkit.
//!
//! Pure logic only: name normalization, template rendering and plan
//! construction. Nothing in here touches the filesystem; applying a plan is
//! the application layer's job, through the `Filesystem` port.
//!
//! - **No I/O**: every function is deterministic in its inputs
//! - **No async**: the whole tool is synchronous
//! - **Immutable values**: identifiers and plans are never mutated after
//!   construction

pub mod error;
pub mod identifier;
pub mod plan;
pub mod templates;

pub use error::{DomainError, ErrorCategory, InvalidNameReason};
pub use identifier::{FeatureIdentifier, NameNormalizer};
pub use plan::{
    Anchor, DirectoryPlanner, DirectorySpec, FEATURE_SUBDIRECTORIES, FEATURES_DIR, FileSpec,
    SHARED_UI_DIR, ScaffoldPlan,
};
pub use templates::{FileRole, RenderFn, TemplateRegistry};
