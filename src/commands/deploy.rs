use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::config::DeployConfig;
use crate::domain::DeploymentReport;
use crate::error::DeployError;
use crate::infrastructure::GitClient;
use crate::services::DeployService;
use crate::ui;

/// Validate `name`, then publish an environment branch from the current checkout
///
/// Validation happens before git is located or run, so an unknown
/// environment never touches the repository.
pub async fn execute(name: Option<String>) -> Result<()> {
    let config = DeployConfig::default();
    let environment = config.validator().validate(name.as_deref().unwrap_or_default())?;

    let workdir = std::env::current_dir().context("Failed to read current directory")?;
    let git = GitClient::locate().map_err(DeployError::from)?.in_dir(workdir);
    debug!("Using git at {}", git.program().display());

    ui::print_header(&format!("Deploy - {}", environment));

    let service = DeployService::new(git, config);
    let report = service.deploy(&environment, Utc::now()).await?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &DeploymentReport) {
    if report.repository.is_unknown() {
        ui::print_warning("Could not determine the repository name from the remote");
    }

    ui::print_success("Deployment completed successfully!");
    println!();
    println!("👤 Deployer:   {}", report.deployer);
    println!("📦 Repository: {}", report.repository);
    println!(
        "🌿 Branch:     {} -> {}",
        report.outcome.branch, report.outcome.remote
    );
    println!("↩️  Restored:   {}", report.outcome.base);
    println!(
        "⏱️  Took:       {}",
        humantime::format_duration(std::time::Duration::from_millis(
            report.total_duration().as_millis() as u64
        ))
    );
    println!();
}
