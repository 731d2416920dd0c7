//! Infrastructure layer - external I/O adapters
//!
//! This module contains all code that interacts with external systems.
//! Today that is only the system `git` executable.

pub mod git;

// Re-export commonly used types
pub use git::GitClient;
