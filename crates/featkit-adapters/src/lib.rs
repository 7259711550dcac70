//! Infrastructure adapters for featkit.
//!
//! This crate implements the ports defined in `featkit-core::application::ports`.
//! It contains all I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
