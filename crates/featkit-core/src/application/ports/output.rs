//! Driven (output) ports - implemented by infrastructure.
//!
//! The `featkit-adapters` crate provides implementations.

use std::path::Path;

use crate::error::FeatkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `featkit_adapters::filesystem::LocalFilesystem` (production)
/// - `featkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute locations produced by a `ScaffoldPlan`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> FeatkitResult<()>;

    /// Create a file that must not exist yet. Fails instead of overwriting.
    fn write_new_file(&self, path: &Path, content: &str) -> FeatkitResult<()>;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> FeatkitResult<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> FeatkitResult<()>;
}
