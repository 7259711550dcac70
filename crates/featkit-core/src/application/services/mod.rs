//! Application services - orchestrate use cases.

pub mod materializer;
pub mod scaffold_service;

pub use materializer::{
    FileSystemMaterializer, MaterializationCounts, MaterializationResult, MaterializeMode,
    MaterializedEntry, Outcome,
};
pub use scaffold_service::ScaffoldService;
