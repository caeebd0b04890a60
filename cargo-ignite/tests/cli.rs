// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

use assert_cmd::Command;

// Invocations mimic cargo's dispatch: the first arg is the subcommand name
// that `cargo` itself passes along.
fn cargo_ignite() -> Command {
    let mut cmd = Command::cargo_bin("cargo-ignite").unwrap();
    cmd.arg("ignite");
    cmd
}

#[test]
fn list_shows_registered_modules() {
    let output = cargo_ignite().arg("list").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("StreakTrackerModule"));
    assert!(stdout.contains("StreakTrackerModule#StreakTracker <- StreakTracker()"));
    assert!(stdout.contains("returns streakTracker"));
}

#[test]
fn status_without_journal_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let journal = dir.path().join("journal.json");

    let output = cargo_ignite()
        .arg("status")
        .arg("StreakTrackerModule")
        .arg("--journal")
        .arg(&journal)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("no journaled deployments for StreakTrackerModule"));
}

#[test]
fn wipe_of_empty_journal_removes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let journal = dir.path().join("journal.json");

    let output = cargo_ignite()
        .arg("wipe")
        .arg("StreakTrackerModule")
        .arg("--journal")
        .arg(&journal)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("wiped 0"));
}

#[test]
fn deploy_rejects_unknown_module() {
    cargo_ignite()
        .arg("deploy")
        .arg("NoSuchModule")
        .arg("--private-key")
        .arg("0x0000000000000000000000000000000000000000000000000000000000000001")
        .assert()
        .failure();
}
