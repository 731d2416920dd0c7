//! Repository identity
//!
//! The display name of a repository is the last `/`-separated piece of the
//! `Fetch URL:` line that `git remote show <remote>` prints.

use std::fmt;

const FETCH_URL_MARKER: &str = "Fetch URL:";

/// Display name of the repository being deployed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub name: String,
}

impl RepositoryIdentity {
    /// Build from `git remote show` output
    ///
    /// Yields an empty name when the output has no `Fetch URL:` line.
    pub fn from_remote_output(output: &str) -> Self {
        Self {
            name: extract_repo_name(output),
        }
    }

    /// True when the remote output did not name a repository
    pub fn is_unknown(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("<unknown>")
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Extract the repository name from `git remote show` output
///
/// Takes the first line containing `Fetch URL:`, splits it on `/` and returns
/// the trimmed last piece. No suffix such as `.git` is stripped. Returns an
/// empty string when no line matches.
pub fn extract_repo_name(remote_output: &str) -> String {
    remote_output
        .lines()
        .find(|line| line.contains(FETCH_URL_MARKER))
        .and_then(|line| line.split('/').last())
        .map(|segment| segment.trim().to_string())
        .unwrap_or_default()
}
