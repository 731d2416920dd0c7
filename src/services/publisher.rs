//! Branch publishing
//!
//! A publisher takes a freshly named branch and gets it onto the remote.
//! The checkout strategy creates the branch in the current working tree,
//! pushes it, then switches back to whatever was checked out before.

use tracing::{info, warn};

use crate::domain::{BranchName, PublishOutcome};
use crate::error::{DeployError, GitError};
use crate::infrastructure::git::GitOperations;

/// Output of `git rev-parse --abbrev-ref HEAD` on a detached HEAD
const DETACHED_HEAD: &str = "HEAD";

/// Gets a branch onto the remote
#[allow(async_fn_in_trait)]
pub trait BranchPublisher {
    async fn publish(&self, branch: &BranchName) -> Result<PublishOutcome, DeployError>;
}

/// Publishes by switching the working tree to the new branch and back
pub struct CheckoutPublisher<'a, G> {
    git: &'a G,
    remote: &'a str,
}

impl<'a, G: GitOperations> CheckoutPublisher<'a, G> {
    pub fn new(git: &'a G, remote: &'a str) -> Self {
        Self { git, remote }
    }

    /// Ref to return to afterwards: the branch name, or the commit id when
    /// HEAD is detached
    async fn base_ref(&self) -> Result<String, GitError> {
        let branch = self.git.current_branch().await?;
        if branch == DETACHED_HEAD {
            let commit = self.git.head_commit().await?;
            warn!("⚠️  HEAD is detached, will return to commit {}", commit);
            Ok(commit)
        } else {
            Ok(branch)
        }
    }
}

impl<G: GitOperations> BranchPublisher for CheckoutPublisher<'_, G> {
    async fn publish(&self, branch: &BranchName) -> Result<PublishOutcome, DeployError> {
        let base = self.base_ref().await?;
        info!("🌿 Base branch: {}", base);

        info!("🌱 Creating branch: {}", branch);
        self.git.create_branch(branch.as_str()).await?;

        // From here on a failure leaves the working tree on `branch`.
        let stranded = |source: GitError| DeployError::Stranded {
            branch: branch.to_string(),
            base: base.clone(),
            source,
        };

        info!("📤 Pushing branch: {} -> {}", branch, self.remote);
        self.git
            .push(self.remote, &branch.refspec())
            .await
            .map_err(stranded)?;

        info!("↩️  Returning to {}", base);
        self.git.checkout(&base).await.map_err(stranded)?;

        Ok(PublishOutcome {
            branch: branch.clone(),
            base,
            remote: self.remote.to_string(),
        })
    }
}
