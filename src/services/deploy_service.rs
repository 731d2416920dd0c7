//! Deploy service - orchestrates the deployment workflow
//!
//! Reads who is deploying and what repository this is, names the
//! environment branch and hands it to a [`BranchPublisher`].

use chrono::{DateTime, Utc};
use colored::Colorize;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::DeployConfig;
use crate::domain::{
    BranchName, DeployPhase, DeployStep, DeploymentReport, Environment, RepositoryIdentity,
    StepResult,
};
use crate::error::DeployError;
use crate::infrastructure::git::GitOperations;
use crate::services::publisher::{BranchPublisher, CheckoutPublisher};

/// Times each step and keeps the per-step results
#[derive(Default)]
struct StepTracker {
    results: Vec<StepResult>,
}

impl StepTracker {
    /// Run one step, recording its duration and outcome
    async fn run<T>(
        &mut self,
        step: DeployStep,
        work: impl Future<Output = Result<T, DeployError>>,
    ) -> Result<T, DeployError> {
        info!("{} Starting: {}", step.emoji(), step.name());

        let start = Instant::now();
        let result = work.await;
        let duration = start.elapsed();

        match result {
            Ok(value) => {
                info!(
                    "{} {} completed in {}",
                    "✅".green(),
                    step.name(),
                    humantime::format_duration(round_millis(duration))
                );
                self.results.push(StepResult::success(step, duration));
                Ok(value)
            }
            Err(e) => {
                info!("{} {} failed: {}", "❌".red(), step.name(), e);
                self.results
                    .push(StepResult::failure(step, duration, e.to_string()));

                // Stop on first failure
                self.print_summary(DeployPhase::Failed(step));
                Err(e)
            }
        }
    }

    fn print_summary(&self, phase: DeployPhase) {
        println!();
        for result in &self.results {
            let mark = if result.success {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "  {} {:<20} {}",
                mark,
                result.step.name(),
                humantime::format_duration(round_millis(result.duration))
            );
            if let Some(ref message) = result.message {
                println!("      {}", message.dimmed());
            }
        }
        match phase {
            DeployPhase::Completed => println!("  {}", "Deployment completed".green().bold()),
            DeployPhase::Failed(step) => println!(
                "  {}",
                format!("Deployment failed at {}", step.name()).red().bold()
            ),
        }
        println!();
    }
}

/// Service for running deployments
pub struct DeployService<G> {
    git: G,
    config: DeployConfig,
}

impl<G: GitOperations> DeployService<G> {
    /// Create a new deploy service
    pub fn new(git: G, config: DeployConfig) -> Self {
        Self { git, config }
    }

    /// Publish a branch for `environment`, named after the instant `now`
    pub async fn deploy(
        &self,
        environment: &Environment,
        now: DateTime<Utc>,
    ) -> Result<DeploymentReport, DeployError> {
        let branch = BranchName::generate(environment, now);
        info!("🎯 Environment: {}", environment);
        info!("🌿 Branch: {}", branch);

        let mut tracker = StepTracker::default();

        let deployer = tracker
            .run(DeployStep::ReadIdentity, self.read_identity())
            .await?;
        let repository = tracker
            .run(DeployStep::ResolveRepository, self.resolve_repository())
            .await?;

        let publisher = CheckoutPublisher::new(&self.git, self.config.remote);
        let outcome = tracker
            .run(DeployStep::PublishBranch, publisher.publish(&branch))
            .await?;

        tracker.print_summary(DeployPhase::Completed);

        Ok(DeploymentReport {
            deployer,
            repository,
            outcome,
            steps: tracker.results,
        })
    }

    async fn read_identity(&self) -> Result<String, DeployError> {
        let deployer = self.git.user_name().await?;
        info!("Deployer: {}", deployer);
        Ok(deployer)
    }

    async fn resolve_repository(&self) -> Result<RepositoryIdentity, DeployError> {
        let description = self.git.remote_description(self.config.remote).await?;
        let repository = RepositoryIdentity::from_remote_output(&description);
        if repository.is_unknown() {
            warn!(
                "⚠️  No Fetch URL in `git remote show {}` output, repository name is empty",
                self.config.remote
            );
        }
        info!("Repository: {}", repository);
        Ok(repository)
    }
}

fn round_millis(duration: Duration) -> Duration {
    Duration::from_millis(duration.as_millis() as u64)
}
