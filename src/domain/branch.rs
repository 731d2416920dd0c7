//! Branch naming
//!
//! Branch names are `{environment}-{unix seconds}`. Two runs for the same
//! environment within one second produce the same name; nothing here tries to
//! disambiguate them.

use chrono::{DateTime, Utc};
use std::fmt;

use super::environment::Environment;

/// Name of a branch published for an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    /// Derive the branch name for `environment` at instant `now`
    pub fn generate(environment: &Environment, now: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", environment, now.timestamp()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Refspec pushing the local branch to the same name on the remote
    pub fn refspec(&self) -> String {
        format!("{0}:{0}", self.0)
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
