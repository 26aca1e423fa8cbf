#![allow(clippy::expect_used, clippy::unwrap_used)]
//! End-to-end tests for the `ocean-setup` binary.
//!
//! Every invocation points `HOME` and `--root` into temp directories and uses
//! `--only` filters so no package manager or network is ever touched.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn setup_cmd(home: &Path, root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ocean-setup").expect("binary builds");
    cmd.env("HOME", home).arg("--root").arg(root);
    cmd
}

fn token_file(home: &Path) -> std::path::PathBuf {
    home.join(".ssh").join("DigitalOceanToken")
}

fn write_artifact(root: &Path) {
    fs::create_dir_all(root.join("src/ocean")).unwrap();
    fs::write(root.join("src/ocean/__main__.py"), b"entry").unwrap();
    fs::write(root.join("src/ocean/api.py"), b"api").unwrap();
}

#[test]
fn rejects_second_positional_argument() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    setup_cmd(home.path(), root.path())
        .args(["token-one", "token-two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    assert!(
        !token_file(home.path()).exists(),
        "invalid usage must not produce side effects"
    );
}

#[test]
fn persists_token_argument_to_credential_file() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    setup_cmd(home.path(), root.path())
        .args(["dop_v1_secret", "--only", "credential"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(token_file(home.path())).unwrap(),
        "dop_v1_secret"
    );
}

#[test]
fn existing_credential_file_is_never_overwritten() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let path = token_file(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "original").unwrap();

    setup_cmd(home.path(), root.path())
        .args(["replacement", "--only", "credential"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "original");
}

#[test]
fn prompts_for_token_when_argument_omitted() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    setup_cmd(home.path(), root.path())
        .args(["--only", "credential"])
        .write_stdin("  spaced token  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Paste your Digital Ocean API token:",
        ));

    assert_eq!(
        fs::read_to_string(token_file(home.path())).unwrap(),
        "  spaced token  ",
        "entered value must be preserved exactly, minus the newline"
    );
}

#[test]
fn copies_artifact_into_bin_dir() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_artifact(root.path());

    setup_cmd(home.path(), root.path())
        .args(["--only", "artifact"])
        .assert()
        .success();

    let installed = home.path().join(".bin/ocean");
    assert_eq!(fs::read(installed.join("__main__.py")).unwrap(), b"entry");
    assert_eq!(fs::read(installed.join("api.py")).unwrap(), b"api");
}

#[test]
fn rerun_replaces_installed_artifact() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_artifact(root.path());

    setup_cmd(home.path(), root.path())
        .args(["--only", "artifact"])
        .assert()
        .success();

    // Simulate a source update plus a file that no longer exists upstream.
    fs::write(root.path().join("src/ocean/__main__.py"), b"updated").unwrap();
    let installed = home.path().join(".bin/ocean");
    fs::write(installed.join("stale.py"), b"old").unwrap();

    setup_cmd(home.path(), root.path())
        .args(["--only", "artifact"])
        .assert()
        .success();

    assert_eq!(fs::read(installed.join("__main__.py")).unwrap(), b"updated");
    assert!(!installed.join("stale.py").exists());
}

#[test]
fn missing_artifact_source_is_reported_not_fatal() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    setup_cmd(home.path(), root.path())
        .args(["--only", "artifact"])
        .assert()
        .success();

    assert!(!home.path().join(".bin").exists());
}

#[test]
fn dry_run_has_no_side_effects() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_artifact(root.path());

    setup_cmd(home.path(), root.path())
        .args(["dop_v1_secret", "--dry-run", "--only", "credential,artifact"])
        .assert()
        .success();

    assert!(!token_file(home.path()).exists());
    assert!(!home.path().join(".bin").exists());
}

#[test]
fn summary_is_printed_after_the_run() {
    let home = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_artifact(root.path());

    setup_cmd(home.path(), root.path())
        .args(["dop_v1_secret", "--only", "credential,artifact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("steps:"));
}
