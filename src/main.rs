use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
mod tools;
mod ui;

use cli::{Cli, Commands};
use commands::deploy;
use error::DeployError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false) // Disable ANSI escape codes for cleaner output
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Deploy { name } => deploy::execute(name).await,
    }
}

/// Present a failed run and pick the exit status
fn report_failure(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<DeployError>() {
        Some(DeployError::InvalidEnvironment { allowed, .. }) => {
            println!("Invalid environment");
            ui::print_hint(&format!("Valid environments: {}", allowed.join(", ")));
            ExitCode::from(1)
        }
        Some(deploy_err) => {
            error!("{}", deploy_err);
            ui::print_error(&deploy_err.to_string());
            if let DeployError::Stranded { branch, base, .. } = deploy_err {
                ui::print_hint(&format!(
                    "Working tree is still on {}; run `git checkout {}` to go back",
                    branch, base
                ));
            }
            ExitCode::from(deploy_err.exit_code())
        }
        None => {
            error!("{:#}", err);
            ui::print_error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
