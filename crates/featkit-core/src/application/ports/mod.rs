//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `featkit-adapters` implement them.

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
