//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use featkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FeatkitError, FeatkitResult},
};
use tracing::{trace, warn};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FeatkitResult<()> {
        trace!(path = %path.display(), "mkdir -p");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_new_file(&self, path: &Path, content: &str) -> FeatkitResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write new file");
        // create_new fails with AlreadyExists instead of truncating.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "create file"))?;

        let written = file.write_all(content.as_bytes()).and_then(|()| file.sync_all());
        drop(file);
        discard_on_error(path, written)
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as occupied.
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_file(&self, path: &Path) -> FeatkitResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir(&self, path: &Path) -> FeatkitResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

/// Removes a file whose write or sync failed.
fn discard_on_error(path: &Path, written: io::Result<()>) -> FeatkitResult<()> {
    let Err(e) = written else {
        return Ok(());
    };

    if let Err(remove) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %remove, "could not remove partially written file");
    }
    Err(map_io_error(path, e, "write file"))
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> FeatkitError {
    ApplicationError::Materialization {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
