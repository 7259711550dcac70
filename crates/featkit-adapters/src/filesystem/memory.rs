//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use featkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FeatkitError, FeatkitResult},
};

/// In-memory filesystem for testing.
///
/// Mirrors the semantics of `LocalFilesystem` that the materializer relies
/// on: files need an existing parent, `write_new_file` never overwrites,
/// nothing can be created beneath a file, `remove_dir` only removes empty
/// directories. Paths registered with [`Self::fail_on`] fail every mutating
/// operation, to simulate permission errors.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failures: HashMap<PathBuf, String>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: start with `path` (and its ancestors) as directories.
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dir_chain(path.as_ref());
        }
        self
    }

    /// Builder: start with a file at `path`, creating its parents.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dir_chain(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make every mutating operation on `path` fail with `reason`.
    pub fn fail_on(&self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failures.insert(path.into(), reason.into());
        }
    }

    /// Replace a file's content, the way a developer editing it would.
    pub fn edit_file(&self, path: &Path, content: impl Into<String>) -> bool {
        match self.inner.write() {
            Ok(mut inner) => match inner.files.get_mut(path) {
                Some(existing) => {
                    *existing = content.into();
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> FeatkitResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> FeatkitResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn check_failure(&self, path: &Path, operation: &'static str) -> FeatkitResult<()> {
        match self.failures.get(path) {
            Some(reason) => Err(fs_error(path, operation, reason)),
            None => Ok(()),
        }
    }

    fn is_occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

fn fs_error(path: &Path, operation: &'static str, reason: &str) -> FeatkitError {
    ApplicationError::Materialization {
        path: path.to_path_buf(),
        operation,
        reason: reason.to_owned(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FeatkitResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        let mut to_create = Vec::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(fs_error(path, "create directory", "File exists"));
            }
            if !inner.directories.contains(&current) {
                inner.check_failure(&current, "create directory")?;
                to_create.push(current.clone());
            }
        }

        inner.directories.extend(to_create);
        Ok(())
    }

    fn write_new_file(&self, path: &Path, content: &str) -> FeatkitResult<()> {
        let mut inner = self.write()?;
        inner.check_failure(path, "create file")?;

        if inner.is_occupied(path) {
            return Err(fs_error(path, "create file", "File exists"));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(fs_error(path, "create file", "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().map(|inner| inner.is_occupied(path)).unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> FeatkitResult<()> {
        let mut inner = self.write()?;
        inner.check_failure(path, "remove file")?;

        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(fs_error(path, "remove file", "No such file")),
        }
    }

    fn remove_dir(&self, path: &Path) -> FeatkitResult<()> {
        let mut inner = self.write()?;
        inner.check_failure(path, "remove directory")?;

        if !inner.directories.contains(path) {
            return Err(fs_error(path, "remove directory", "No such directory"));
        }

        let has_children = inner.files.keys().any(|p| p.parent() == Some(path))
            || inner.directories.iter().any(|p| p.parent() == Some(path));
        if has_children {
            return Err(fs_error(path, "remove directory", "Directory not empty"));
        }

        inner.directories.remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();

        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b")));
        assert!(fs.is_dir(Path::new("/a/b/c")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new().with_directory("/a");
        assert!(fs.write_new_file(Path::new("/a/b/f.ts"), "x").is_err());
        fs.write_new_file(Path::new("/a/f.ts"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/f.ts")).as_deref(), Some("x"));
    }

    #[test]
    fn write_never_overwrites() {
        let fs = MemoryFilesystem::new().with_file("/a/f.ts", "original");
        assert!(fs.write_new_file(Path::new("/a/f.ts"), "new").is_err());
        assert_eq!(fs.read_file(Path::new("/a/f.ts")).as_deref(), Some("original"));
    }

    #[test]
    fn cannot_create_directory_beneath_file() {
        let fs = MemoryFilesystem::new().with_file("/a/src", "");
        assert!(fs.create_dir_all(Path::new("/a/src/features")).is_err());
    }

    #[test]
    fn injected_failures_fire() {
        let fs = MemoryFilesystem::new().with_directory("/a");
        fs.fail_on("/a/locked", "Permission denied");

        let err = fs.create_dir_all(Path::new("/a/locked/inner")).unwrap_err();
        assert!(err.to_string().contains("Permission denied"));
        assert!(!fs.exists(Path::new("/a/locked")));
    }

    #[test]
    fn remove_dir_requires_empty() {
        let fs = MemoryFilesystem::new().with_file("/a/b/f.ts", "");
        assert!(fs.remove_dir(Path::new("/a/b")).is_err());
        fs.remove_file(Path::new("/a/b/f.ts")).unwrap();
        fs.remove_dir(Path::new("/a/b")).unwrap();
        assert!(!fs.exists(Path::new("/a/b")));
    }

    #[test]
    fn edit_file_only_touches_existing_files() {
        let fs = MemoryFilesystem::new().with_file("/a/f.ts", "v1");
        assert!(fs.edit_file(Path::new("/a/f.ts"), "v2"));
        assert!(!fs.edit_file(Path::new("/a/g.ts"), "v2"));
        assert_eq!(fs.read_file(Path::new("/a/f.ts")).as_deref(), Some("v2"));
    }
}
