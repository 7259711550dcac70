//! Application layer for featkit.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`) and plan
//!   application (`FileSystemMaterializer`)
//! - **Ports**: the `Filesystem` trait adapters implement
//! - **Workspace**: root path plus injected filesystem
//! - **Errors**: failures while applying a plan
//!
//! All naming and layout rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod workspace;

pub use services::{
    FileSystemMaterializer, MaterializationCounts, MaterializationResult, MaterializeMode,
    MaterializedEntry, Outcome, ScaffoldService,
};

pub use ports::Filesystem;
pub use workspace::Workspace;

pub use error::{ApplicationError, EntryKind};
