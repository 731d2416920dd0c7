//! CLI definitions for helper
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "helper",
    version,
    about = "A CLI helper tool",
    long_about = "Publishes the current checkout as a timestamped environment branch.\nThe branch is pushed to origin and the working tree is returned to where it was."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an environment branch from the current checkout and push it to origin
    Deploy {
        /// Deployment environment (staging, deva or devb)
        #[arg(short = 'n', long = "name")]
        name: Option<String>,
    },
}
