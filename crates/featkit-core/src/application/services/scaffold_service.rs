//! Scaffold Service - main application orchestrator.
//!
//! Coordinates the whole workflow:
//! 1. Normalize the raw feature name
//! 2. Build the scaffold plan for the workspace
//! 3. Materialize (or preview) it through the filesystem port
//!
//! Validation happens before the filesystem is touched at all, so a bad name
//! never leaves partial state behind.

use tracing::{info, instrument};

use crate::{
    application::{
        services::materializer::{MaterializationResult, MaterializeMode},
        workspace::Workspace,
    },
    domain::{NameNormalizer, ScaffoldPlan},
    error::FeatkitResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    workspace: Workspace,
    mode: MaterializeMode,
}

impl ScaffoldService {
    /// Create a service over `workspace` in best-effort mode.
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            mode: MaterializeMode::default(),
        }
    }

    /// Switch the failure policy.
    pub fn with_mode(mut self, mode: MaterializeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn mode(&self) -> MaterializeMode {
        self.mode
    }

    /// Normalize `raw_name` and build its plan. No filesystem access.
    pub fn plan(&self, raw_name: &str) -> FeatkitResult<ScaffoldPlan> {
        let identifier = NameNormalizer::normalize(raw_name)?;
        self.workspace.plan(&identifier)
    }

    /// Generate the feature named `raw_name`.
    #[instrument(
        skip_all,
        fields(
            feature = %raw_name,
            root = %self.workspace.root().display(),
        )
    )]
    pub fn scaffold(&self, raw_name: &str) -> FeatkitResult<MaterializationResult> {
        let plan = self.plan(raw_name)?;
        info!(
            feature = %plan.identifier(),
            directories = plan.directories().len(),
            files = plan.files().len(),
            "Scaffolding feature"
        );

        let result = self.workspace.materialize(plan, self.mode)?;

        info!(
            created = result.created_count(),
            skipped = result.skipped_count(),
            "Scaffold completed"
        );
        Ok(result)
    }

    /// Report what [`Self::scaffold`] would do without writing anything.
    #[instrument(skip_all, fields(feature = %raw_name))]
    pub fn preview(&self, raw_name: &str) -> FeatkitResult<MaterializationResult> {
        let plan = self.plan(raw_name)?;
        self.workspace.preview(&plan)
    }
}
