//! Applies a [`ScaffoldPlan`] to a filesystem.
//!
//! Directories first, then files, each in plan order. Anything that already
//! exists is skipped, never overwritten. The first failure aborts the rest of
//! the plan; in [`MaterializeMode::Atomic`] everything this run created is
//! removed again before the error is returned.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, EntryKind, ports::Filesystem},
    domain::{FileRole, ScaffoldPlan},
    error::{FeatkitError, FeatkitResult},
};

/// What to do with already-applied steps when a step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterializeMode {
    /// Leave created entries in place.
    #[default]
    BestEffort,
    /// Remove everything this run created.
    Atomic,
}

/// Whether an entry was written or already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Created,
    Skipped,
}

/// One plan entry and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<FileRole>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaterializationCounts {
    pub directories_created: usize,
    pub directories_skipped: usize,
    pub files_created: usize,
    pub files_skipped: usize,
}

/// Report of a materialization (or a preview of one), in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializationResult {
    pub feature: String,
    pub feature_root: PathBuf,
    pub dry_run: bool,
    pub counts: MaterializationCounts,
    pub entries: Vec<MaterializedEntry>,
}

impl MaterializationResult {
    fn new(plan: &ScaffoldPlan, dry_run: bool) -> Self {
        Self {
            feature: plan.identifier().kebab().to_owned(),
            feature_root: plan.feature_root(),
            dry_run,
            counts: MaterializationCounts::default(),
            entries: Vec::with_capacity(plan.directories().len() + plan.files().len()),
        }
    }

    fn record(&mut self, path: PathBuf, kind: EntryKind, outcome: Outcome, role: Option<FileRole>) {
        let counter = match (kind, outcome) {
            (EntryKind::Directory, Outcome::Created) => &mut self.counts.directories_created,
            (EntryKind::Directory, Outcome::Skipped) => &mut self.counts.directories_skipped,
            (EntryKind::File, Outcome::Created) => &mut self.counts.files_created,
            (EntryKind::File, Outcome::Skipped) => &mut self.counts.files_skipped,
        };
        *counter += 1;

        self.entries.push(MaterializedEntry {
            path,
            kind,
            outcome,
            role,
        });
    }

    /// Entries that were (or would be) created.
    pub fn created(&self) -> impl Iterator<Item = &MaterializedEntry> {
        self.entries.iter().filter(|e| e.outcome == Outcome::Created)
    }

    pub fn created_count(&self) -> usize {
        self.counts.directories_created + self.counts.files_created
    }

    pub fn skipped_count(&self) -> usize {
        self.counts.directories_skipped + self.counts.files_skipped
    }

    /// `true` when nothing needed creating.
    pub fn is_noop(&self) -> bool {
        self.created_count() == 0
    }
}

/// Applies plans through a [`Filesystem`] port.
pub struct FileSystemMaterializer<'a> {
    fs: &'a dyn Filesystem,
    mode: MaterializeMode,
}

impl<'a> FileSystemMaterializer<'a> {
    pub fn new(fs: &'a dyn Filesystem, mode: MaterializeMode) -> Self {
        Self { fs, mode }
    }

    /// Apply `plan`, consuming it.
    #[instrument(skip_all, fields(feature = %plan.identifier(), mode = ?self.mode))]
    pub fn materialize(&self, plan: ScaffoldPlan) -> FeatkitResult<MaterializationResult> {
        let mut result = MaterializationResult::new(&plan, false);
        let mut journal = Vec::new();

        match self.apply(&plan, &mut result, &mut journal) {
            Ok(()) => {
                info!(
                    created = result.created_count(),
                    skipped = result.skipped_count(),
                    "plan materialized"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, applied = journal.len(), "materialization aborted");
                match self.mode {
                    MaterializeMode::BestEffort => Err(err),
                    MaterializeMode::Atomic => Err(self.rollback(&journal, err)),
                }
            }
        }
    }

    /// Report what [`Self::materialize`] would do, without writing.
    #[instrument(skip_all, fields(feature = %plan.identifier()))]
    pub fn preview(&self, plan: &ScaffoldPlan) -> FeatkitResult<MaterializationResult> {
        let mut result = MaterializationResult::new(plan, true);

        for dir in plan.directories() {
            let path = plan.directory_path(dir);
            let outcome = self.inspect(&path, EntryKind::Directory)?;
            result.record(path, EntryKind::Directory, outcome, None);
        }

        for file in plan.files() {
            let path = plan.file_path(file);
            let outcome = self.inspect(&path, EntryKind::File)?;
            result.record(path, EntryKind::File, outcome, Some(file.role));
        }

        Ok(result)
    }

    fn apply(
        &self,
        plan: &ScaffoldPlan,
        result: &mut MaterializationResult,
        journal: &mut Vec<(EntryKind, PathBuf)>,
    ) -> FeatkitResult<()> {
        for dir in plan.directories() {
            let path = plan.directory_path(dir);

            if self.inspect(&path, EntryKind::Directory)? == Outcome::Skipped {
                debug!(path = %path.display(), "directory exists, skipping");
                result.record(path, EntryKind::Directory, Outcome::Skipped, None);
                continue;
            }

            // Journal ancestors before creating so a partial create_dir_all
            // can still be undone.
            journal.extend(
                self.missing_ancestors(&path)
                    .into_iter()
                    .map(|p| (EntryKind::Directory, p)),
            );
            self.fs.create_dir_all(&path)?;

            debug!(path = %path.display(), "created directory");
            result.record(path, EntryKind::Directory, Outcome::Created, None);
        }

        for file in plan.files() {
            let path = plan.file_path(file);

            if self.inspect(&path, EntryKind::File)? == Outcome::Skipped {
                debug!(path = %path.display(), role = %file.role, "file exists, leaving untouched");
                result.record(path, EntryKind::File, Outcome::Skipped, Some(file.role));
                continue;
            }

            // The path was free, so whatever a failed write leaves there is
            // ours to roll back.
            let content = file.render(plan.identifier());
            journal.push((EntryKind::File, path.clone()));
            self.fs.write_new_file(&path, &content)?;

            debug!(path = %path.display(), role = %file.role, bytes = content.len(), "created file");
            result.record(path, EntryKind::File, Outcome::Created, Some(file.role));
        }

        Ok(())
    }

    /// `Created` if the path is free, `Skipped` if the right kind of entry
    /// is already there, an error if the wrong kind is.
    fn inspect(&self, path: &Path, expected: EntryKind) -> FeatkitResult<Outcome> {
        if !self.fs.exists(path) {
            return Ok(Outcome::Created);
        }

        let is_dir = self.fs.is_dir(path);
        let matches = match expected {
            EntryKind::Directory => is_dir,
            EntryKind::File => !is_dir,
        };

        if matches {
            Ok(Outcome::Skipped)
        } else {
            Err(ApplicationError::PathCollision {
                path: path.to_path_buf(),
                expected,
            }
            .into())
        }
    }

    /// `path` and every ancestor that does not exist yet, shallowest first.
    fn missing_ancestors(&self, path: &Path) -> Vec<PathBuf> {
        let mut missing: Vec<PathBuf> = path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .take_while(|p| !self.fs.exists(p))
            .map(Path::to_path_buf)
            .collect();
        missing.reverse();
        missing
    }

    /// Undo journaled entries, newest first. Returns the error to surface.
    fn rollback(&self, journal: &[(EntryKind, PathBuf)], original: FeatkitError) -> FeatkitError {
        let mut removed = 0usize;

        for (kind, path) in journal.iter().rev() {
            if !self.fs.exists(path) {
                continue;
            }

            let outcome = match kind {
                EntryKind::File => self.fs.remove_file(path),
                EntryKind::Directory => self.fs.remove_dir(path),
            };

            if let Err(e) = outcome {
                warn!(error = %e, path = %path.display(), "rollback failed");
                return ApplicationError::RollbackFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                    original: original.to_string(),
                }
                .into();
            }
            removed += 1;
        }

        info!(removed, "rollback successful");
        original
    }
}
