//! Domain layer - pure business logic
//!
//! This module contains business logic with no external I/O.
//! Types and functions here can be unit tested without mocking.

pub mod branch;
pub mod deployment;
pub mod environment;
pub mod repository;

// Re-export commonly used types
pub use branch::BranchName;
pub use deployment::{DeployPhase, DeployStep, DeploymentReport, PublishOutcome, StepResult};
pub use environment::{Environment, EnvironmentValidator};
pub use repository::RepositoryIdentity;
