//! The workspace a feature is generated into.

use std::path::{Path, PathBuf};

use crate::{
    application::{
        ports::Filesystem,
        services::materializer::{FileSystemMaterializer, MaterializationResult, MaterializeMode},
    },
    domain::{DirectoryPlanner, FeatureIdentifier, ScaffoldPlan},
    error::FeatkitResult,
};

/// A workspace root plus the filesystem capability used to change it.
///
/// Passed explicitly instead of reading the process working directory, so
/// tests can run against an in-memory filesystem.
pub struct Workspace {
    root: PathBuf,
    filesystem: Box<dyn Filesystem>,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            root: root.into(),
            filesystem,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Build the plan for `identifier` rooted at this workspace.
    pub fn plan(&self, identifier: &FeatureIdentifier) -> FeatkitResult<ScaffoldPlan> {
        Ok(DirectoryPlanner::plan(&self.root, identifier)?)
    }

    /// Apply `plan` to this workspace's filesystem.
    pub fn materialize(
        &self,
        plan: ScaffoldPlan,
        mode: MaterializeMode,
    ) -> FeatkitResult<MaterializationResult> {
        FileSystemMaterializer::new(self.filesystem(), mode).materialize(plan)
    }

    /// Report what `plan` would do without writing anything.
    pub fn preview(&self, plan: &ScaffoldPlan) -> FeatkitResult<MaterializationResult> {
        FileSystemMaterializer::new(self.filesystem(), MaterializeMode::default()).preview(plan)
    }
}
