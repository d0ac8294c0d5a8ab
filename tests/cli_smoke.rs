//! Smoke tests to verify command wiring
//!
//! Help output is parsed before any connection attempt, so these run
//! without a database.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn top_level_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn demo_help() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.arg("demo").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("full walkthrough"));
}

#[test]
fn add_help_shows_name_arguments() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("First name of the new user"));
}

#[test]
fn rename_help_shows_id_argument() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.arg("rename").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Id of the user to rename"));
}

#[test]
fn list_help_shows_connection_flags() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.arg("truncate");

    cmd.assert().failure();
}

#[test]
fn malformed_database_url_fails_before_connecting() {
    let mut cmd = Command::cargo_bin("pgusers").unwrap();
    cmd.env("DATABASE_URL", "postgres://[oops").arg("list");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid connection settings"));
}
