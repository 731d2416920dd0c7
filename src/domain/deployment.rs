//! Deployment domain types
//!
//! Defines the deploy workflow as an ordered list of steps, plus the
//! outcome values each run produces.

use std::time::Duration;

use super::branch::BranchName;
use super::repository::RepositoryIdentity;

/// Individual steps in a deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    /// Read `git config user.name`
    ReadIdentity,
    /// Read the remote description and derive the repository name
    ResolveRepository,
    /// Create the environment branch, push it, return to the base branch
    PublishBranch,
}

impl DeployStep {
    /// Get human-readable name for the step
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadIdentity => "Read Identity",
            Self::ResolveRepository => "Resolve Repository",
            Self::PublishBranch => "Publish Branch",
        }
    }

    /// Get emoji for the step
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::ReadIdentity => "👤",
            Self::ResolveRepository => "📦",
            Self::PublishBranch => "🚀",
        }
    }
}

/// Final phase of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployPhase {
    /// Completed successfully
    Completed,
    /// Failed at a specific step
    Failed(DeployStep),
}

/// Result of a deploy step execution
#[derive(Debug, Clone)]
pub struct StepResult {
    pub step: DeployStep,
    pub success: bool,
    pub duration: Duration,
    pub message: Option<String>,
}

impl StepResult {
    pub fn success(step: DeployStep, duration: Duration) -> Self {
        Self {
            step,
            success: true,
            duration,
            message: None,
        }
    }

    pub fn failure(step: DeployStep, duration: Duration, message: impl Into<String>) -> Self {
        Self {
            step,
            success: false,
            duration,
            message: Some(message.into()),
        }
    }
}

/// What a branch publish did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Branch that was created and pushed
    pub branch: BranchName,
    /// Ref the working tree was returned to (branch name or commit id)
    pub base: String,
    /// Remote the branch was pushed to
    pub remote: String,
}

/// Summary of a successful deployment
#[derive(Debug, Clone)]
pub struct DeploymentReport {
    pub deployer: String,
    pub repository: RepositoryIdentity,
    pub outcome: PublishOutcome,
    pub steps: Vec<StepResult>,
}

impl DeploymentReport {
    /// Wall time spent across all steps
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }
}
