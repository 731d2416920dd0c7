//! Git operations
//!
//! Shells out to the system `git`. Read-only queries capture their output;
//! commands that change the checkout or talk to the remote inherit stdio so
//! git's own progress and errors reach the terminal.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;
use crate::tools::{self, tools::GIT};

/// The git calls a deployment needs
///
/// `GitClient` is the real implementation; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait GitOperations {
    /// `git config user.name`, trimmed
    async fn user_name(&self) -> Result<String, GitError>;

    /// Raw `git remote show <remote>` output
    async fn remote_description(&self, remote: &str) -> Result<String, GitError>;

    /// `git rev-parse --abbrev-ref HEAD` (`HEAD` when detached)
    async fn current_branch(&self) -> Result<String, GitError>;

    /// `git rev-parse HEAD`
    async fn head_commit(&self) -> Result<String, GitError>;

    /// `git checkout -b <branch>`
    async fn create_branch(&self, branch: &str) -> Result<(), GitError>;

    /// `git push <remote> <refspec>`
    async fn push(&self, remote: &str, refspec: &str) -> Result<(), GitError>;

    /// `git checkout <target>`
    async fn checkout(&self, target: &str) -> Result<(), GitError>;
}

/// Client for git operations
#[derive(Debug, Clone)]
pub struct GitClient {
    /// Resolved git executable
    program: PathBuf,
    /// Working directory for git commands
    working_dir: Option<PathBuf>,
}

impl GitClient {
    /// Locate git (`GIT_BIN` or `PATH`) for the current directory
    pub fn locate() -> Result<Self, GitError> {
        let program = tools::resolve_tool(GIT).map_err(GitError::NotInstalled)?;
        Ok(Self {
            program,
            working_dir: None,
        })
    }

    /// Run git commands in a specific directory
    pub fn in_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        cmd
    }

    /// Run a query and return its trimmed stdout
    async fn capture(&self, args: &[&str]) -> Result<String, GitError> {
        let command = describe(args);
        debug!("Running {}", command);

        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|_| GitError::InvalidOutput { command })?;
        Ok(stdout.trim().to_string())
    }

    /// Run a command with inherited stdout/stderr
    async fn run(&self, args: &[&str]) -> Result<(), GitError> {
        let command = describe(args);
        debug!("Running {}", command);

        let status = self
            .command(args)
            .status()
            .await
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}

impl GitOperations for GitClient {
    async fn user_name(&self) -> Result<String, GitError> {
        self.capture(&["config", "user.name"]).await
    }

    async fn remote_description(&self, remote: &str) -> Result<String, GitError> {
        self.capture(&["remote", "show", remote]).await
    }

    async fn current_branch(&self) -> Result<String, GitError> {
        self.capture(&["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    async fn head_commit(&self) -> Result<String, GitError> {
        self.capture(&["rev-parse", "HEAD"]).await
    }

    async fn create_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run(&["checkout", "-b", branch]).await
    }

    async fn push(&self, remote: &str, refspec: &str) -> Result<(), GitError> {
        self.run(&["push", remote, refspec]).await
    }

    async fn checkout(&self, target: &str) -> Result<(), GitError> {
        self.run(&["checkout", target]).await
    }
}

fn describe(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}
