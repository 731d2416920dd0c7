//! Environment domain types
//!
//! An [`Environment`] can only be obtained through [`EnvironmentValidator`],
//! so everything downstream of validation works with a known-good name.

use std::fmt;

use crate::error::DeployError;

/// A validated deployment target (e.g. "staging")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment(String);

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks environment names against a fixed allow-list
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentValidator {
    allowed: &'static [&'static str],
}

impl EnvironmentValidator {
    pub fn new(allowed: &'static [&'static str]) -> Self {
        Self { allowed }
    }

    /// Exact, case-sensitive membership test. No trimming or normalization.
    pub fn is_valid(&self, name: &str) -> bool {
        self.allowed.iter().any(|env| *env == name)
    }

    /// Validate a raw name into an [`Environment`]
    pub fn validate(&self, name: &str) -> Result<Environment, DeployError> {
        if self.is_valid(name) {
            Ok(Environment(name.to_string()))
        } else {
            Err(DeployError::InvalidEnvironment {
                name: name.to_string(),
                allowed: self.allowed.iter().map(|env| env.to_string()).collect(),
            })
        }
    }
}
