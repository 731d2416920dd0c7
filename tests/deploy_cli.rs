//! End-to-end tests for `helper deploy`
//!
//! Each test builds a scratch working repository on `main` with a bare
//! repository registered as `origin`, then runs the compiled binary in it.
//! Tests that need git return early when it is not installed.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn git_available() -> bool {
    which::which("git").is_ok()
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn setup(root: &Path) -> (PathBuf, PathBuf) {
    let remote = root.join("remote.git");
    let work = root.join("work");
    std::fs::create_dir_all(&remote).unwrap();
    std::fs::create_dir_all(&work).unwrap();

    git(&remote, &["init", "--bare", "--quiet"]);
    git(&work, &["init", "--quiet"]);
    git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(&work, &["config", "user.name", "Test Deployer"]);
    git(&work, &["config", "user.email", "deployer@example.com"]);
    git(&work, &["config", "commit.gpgsign", "false"]);
    std::fs::write(work.join("README.md"), "hello\n").unwrap();
    git(&work, &["add", "README.md"]);
    git(&work, &["commit", "--quiet", "-m", "initial"]);
    git(&work, &["remote", "add", "origin", remote.to_str().unwrap()]);

    (work, remote)
}

fn helper(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_helper"))
        .args(args)
        .current_dir(dir)
        .env_remove("GIT_BIN")
        .env_remove("LOGGING")
        .env_remove("LOG_LEVEL")
        .env("NO_COLOR", "1")
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run helper")
}

fn branches(dir: &Path) -> Vec<String> {
    git(dir, &["for-each-ref", "--format=%(refname:short)", "refs/heads"])
        .lines()
        .map(str::to_string)
        .collect()
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[test]
fn invalid_environment_exits_1_without_touching_git() {
    let tmp = tempfile::tempdir().unwrap();

    // GIT_BIN points nowhere: any git call would fail with a different error.
    let output = Command::new(env!("CARGO_BIN_EXE_helper"))
        .args(["deploy", "-n", "invalidenv"])
        .current_dir(tmp.path())
        .env("GIT_BIN", "/nonexistent/bin/git")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid environment"), "stdout: {}", stdout);
}

#[test]
fn invalid_environment_leaves_repository_unchanged() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let (work, remote) = setup(tmp.path());

    for args in [
        &["deploy", "-n", "invalidenv"][..],
        &["deploy", "--name", "Staging"][..],
        &["deploy"][..],
    ] {
        let output = helper(&work, args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid environment"));
    }

    assert_eq!(branches(&work), vec!["main"]);
    assert!(branches(&remote).is_empty());
    assert_eq!(git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");
}

#[test]
fn deploy_staging_pushes_branch_and_returns_to_main() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let (work, remote) = setup(tmp.path());

    let before = now_secs();
    let output = helper(&work, &["deploy", "-n", "staging"]);
    let after = now_secs();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Deployment completed successfully!"));
    assert!(stdout.contains("remote.git"));

    assert_eq!(git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");

    let pushed = branches(&remote);
    assert_eq!(pushed.len(), 1, "remote branches: {:?}", pushed);
    let branch = &pushed[0];
    let timestamp: u64 = branch
        .strip_prefix("staging-")
        .expect("branch should start with staging-")
        .parse()
        .expect("branch should end with unix seconds");
    assert!((before..=after).contains(&timestamp));

    let mut local = branches(&work);
    local.sort();
    assert_eq!(local, vec!["main".to_string(), branch.clone()]);
    assert_eq!(
        git(&remote, &["rev-parse", branch]),
        git(&work, &["rev-parse", "main"])
    );
}

#[test]
fn unreachable_remote_fails_before_creating_branch() {
    if !git_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let (work, _remote) = setup(tmp.path());
    let missing = tmp.path().join("missing.git");
    git(
        &work,
        &["remote", "set-url", "origin", missing.to_str().unwrap()],
    );

    let output = helper(&work, &["deploy", "-n", "deva"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("remote show origin"));
    assert_eq!(branches(&work), vec!["main"]);
    assert_eq!(git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");
}

#[test]
fn missing_git_binary_is_reported() {
    let tmp = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_helper"))
        .args(["deploy", "-n", "devb"])
        .current_dir(tmp.path())
        .env("GIT_BIN", "/nonexistent/bin/git")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Invalid environment"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("git config user.name"));
}
