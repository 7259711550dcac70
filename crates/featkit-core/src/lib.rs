//! featkit core - hexagonal architecture implementation
//!
//! Domain and application layers of the featkit feature scaffolder. Given a
//! feature name, featkit plans a fixed tree of directories and template
//! files under `src/features/<kebab>/` (plus one shared component under
//! `src/components/ui/`) and creates whatever is missing, never overwriting
//! existing files.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          featkit-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, FileSystemMaterializer)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Filesystem)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     featkit-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameNormalizer, TemplateRegistry,      │
//! │  DirectoryPlanner, ScaffoldPlan)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use featkit_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> FeatkitResult<()> {
//! let workspace = Workspace::new("/path/to/app", filesystem);
//! let service = ScaffoldService::new(workspace);
//! let report = service.scaffold("userProfile")?;
//! println!("created {} entries", report.created_count());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, EntryKind, FileSystemMaterializer, Filesystem, MaterializationResult,
        MaterializeMode, MaterializedEntry, Outcome, ScaffoldService, Workspace,
    };
    pub use crate::domain::{
        DirectoryPlanner, DomainError, FeatureIdentifier, FileRole, NameNormalizer, ScaffoldPlan,
        TemplateRegistry,
    };
    pub use crate::error::{FeatkitError, FeatkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
