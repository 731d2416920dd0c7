//! Runtime tool path resolution
//!
//! For each external tool (only `git` today) we:
//! 1. Check for an environment variable `{TOOL}_BIN` (e.g. `GIT_BIN`)
//! 2. Fall back to looking the tool up on `PATH`
//!
//! This lets a wrapper pin an exact git derivation while plain shells keep
//! working unchanged.

use std::env;
use std::path::PathBuf;

/// Common tool names
pub mod tools {
    pub const GIT: &str = "git";
}

/// Environment variable consulted for a tool override, e.g. `GIT_BIN`
pub fn tool_env_var(tool: &str) -> String {
    format!("{}_BIN", tool.to_uppercase().replace('-', "_"))
}

/// Resolve the path to an external tool
///
/// Returns the `{TOOL}_BIN` override verbatim when set and non-empty,
/// otherwise searches `PATH`.
pub fn resolve_tool(tool: &str) -> Result<PathBuf, which::Error> {
    match env::var(tool_env_var(tool)) {
        Ok(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => which::which(tool),
    }
}
