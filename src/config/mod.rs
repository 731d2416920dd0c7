//! # Deployment Configuration
//!
//! The deployer has no configuration file. Everything it needs is a small,
//! immutable [`DeployConfig`] built from the constants below and handed to
//! the pieces that need it.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let config = DeployConfig::default();
//! let environment = config.validator().validate("staging")?;
//! println!("Pushing to {}", config.remote);
//! ```

use crate::domain::EnvironmentValidator;

/// Environments a branch may be published for
pub const ENVIRONMENTS: &[&str] = &["staging", "deva", "devb"];

/// The only remote branches are pushed to
pub const REMOTE: &str = "origin";

/// Immutable settings for one deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployConfig {
    /// Allowed environment names (case-sensitive)
    pub environments: &'static [&'static str],

    /// Remote that receives the published branch
    pub remote: &'static str,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            environments: ENVIRONMENTS,
            remote: REMOTE,
        }
    }
}

impl DeployConfig {
    /// Validator bound to this config's allow-list
    pub fn validator(&self) -> EnvironmentValidator {
        EnvironmentValidator::new(self.environments)
    }
}
