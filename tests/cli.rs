//! Command-line behaviour of the `gitlab-cloner` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cloner() -> Command {
    let mut cmd = Command::cargo_bin("gitlab-cloner").unwrap();
    cmd.env_remove("GITLAB_ACCESS_TOKEN").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_flags() {
    cloner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--group"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--access-token"))
        .stdout(predicate::str::contains("--target-directory"))
        .stdout(predicate::str::contains("--fail-on-error"));
}

#[test]
fn test_version() {
    cloner()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_group_is_required() {
    cloner()
        .args(["--access-token", "t"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--group"));
}

#[test]
fn test_access_token_is_required() {
    cloner()
        .args(["--group", "acme"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--access-token"));
}

#[test]
fn test_listing_failure_is_logged_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("mirror");

    cloner()
        .args(["-g", "acme", "-t", "glpat-s3cr3t", "-H", "127.0.0.1:1", "--no-color", "-d"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to list projects"))
        .stdout(predicate::str::contains("glpat-s3cr3t").not());

    assert!(!target.exists());
}

#[test]
fn test_fail_on_error_sets_exit_status() {
    let temp_dir = TempDir::new().unwrap();

    cloner()
        .args(["-g", "acme", "-H", "127.0.0.1:1", "--no-color", "--fail-on-error", "-d"])
        .arg(temp_dir.path())
        .env("GITLAB_ACCESS_TOKEN", "from-env")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mirror run failed"));
}
