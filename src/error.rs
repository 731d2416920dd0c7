//! Centralized error types for helper
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for a deployment run
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Invalid environment: {name:?} (expected one of: {})", .allowed.join(", "))]
    InvalidEnvironment {
        name: String,
        allowed: Vec<String>,
    },

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Publishing failed after the working tree was switched to `branch`.
    #[error("Git error: {source} (working tree left on branch {branch}, base was {base})")]
    Stranded {
        branch: String,
        base: String,
        #[source]
        source: GitError,
    },
}

impl DeployError {
    /// Process exit status for this error
    ///
    /// Invalid input and git failures both exit with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidEnvironment { .. } => 1,
            Self::Git(_) | Self::Stranded { .. } => 1,
        }
    }
}

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found: {0}")]
    NotInstalled(#[source] which::Error),

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git command failed: {command} ({status}){}", fmt_stderr(.stderr))]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Git output of `{command}` is not valid UTF-8")]
    InvalidOutput { command: String },
}

fn fmt_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}
