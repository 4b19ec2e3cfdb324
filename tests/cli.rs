//! End-to-end tests for the `dotenv-report` binary.
//!
//! The env file location is pinned with `DOTENV_PATH` so tests never depend
//! on a `.env` sitting next to the built executable.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REPORTED: [&str; 3] = ["PROJECT_ID", "GOOGLE_APPLICATION_CREDENTIALS", "REGION"];

fn hermetic_cmd(env_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("dotenv-report").unwrap();
    for key in REPORTED {
        cmd.env_remove(key);
    }
    cmd.env_remove("DOTENV_OVERRIDE");
    cmd.env_remove("RUST_LOG");
    cmd.env("DOTENV_PATH", env_path);
    cmd
}

#[test]
fn reports_values_from_env_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "PROJECT_ID=my-project\nREGION=us-central1\n").unwrap();

    hermetic_cmd(&path).assert().success().stdout(
        "Loaded .env: true\n\
         Project ID: my-project\n\
         Credentials Path: (unset)\n\
         Region: us-central1\n",
    );
}

#[test]
fn missing_env_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    hermetic_cmd(&dir.path().join(".env"))
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Loaded .env: false\n"))
        .stdout(predicate::str::contains("Project ID: (unset)"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn existing_variables_take_precedence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "REGION=from-file\n").unwrap();

    hermetic_cmd(&path)
        .env("REGION", "from-parent")
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: from-parent\n"));
}

#[test]
fn override_flag_lets_file_win() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "REGION=from-file\n").unwrap();

    hermetic_cmd(&path)
        .env("REGION", "from-parent")
        .env("DOTENV_OVERRIDE", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: from-file\n"));
}

#[test]
fn malformed_lines_warn_without_leaking_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(
        &path,
        "# credentials\nGOOGLE_APPLICATION_CREDENTIALS='/secrets/key.json'\nsuper-secret-garbage\n",
    )
    .unwrap();

    hermetic_cmd(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Credentials Path: /secrets/key.json\n",
        ))
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("super-secret-garbage").not());
}

#[test]
fn inline_comments_are_not_part_of_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(
        &path,
        "PROJECT_ID=my-project # prod\nREGION=\"us-central1\" # primary\n",
    )
    .unwrap();

    hermetic_cmd(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project ID: my-project\n"))
        .stdout(predicate::str::contains("Region: us-central1\n"))
        .stderr(predicate::str::is_empty());
}
