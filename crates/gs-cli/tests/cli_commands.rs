#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gs() -> Command {
    Command::cargo_bin("gs").unwrap()
}

/// Write a config file into a fresh temp directory.
fn config_file(json: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("battle.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

#[test]
fn config_prints_defaults() {
    gs().arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"enemyName\": \"Enemy\""))
        .stdout(predicate::str::contains("Ultimate Strike"));
}

#[test]
fn config_writes_file_that_checks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("default.json");
    gs().args(["config", "--output"])
        .arg(&path)
        .assert()
        .success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"heroMaxHp\": 100"));

    gs().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_accepts_partial_config() {
    let (_dir, path) = config_file(r#"{ "enemyName": "Stone Golem", "enemyHp": 80, "enemyMaxHp": 120 }"#);
    gs().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stone Golem (80/120 HP)"));
}

#[test]
fn check_rejects_overfull_hp() {
    let (_dir, path) = config_file(r#"{ "heroHp": 150, "heroMaxHp": 100 }"#);
    gs().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("heroHp 150 exceeds heroMaxHp 100"));
}

#[test]
fn check_rejects_malformed_json() {
    let (_dir, path) = config_file("{ not json");
    gs().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn check_missing_file_fails() {
    gs().args(["check", "/nonexistent/battle.json"])
        .assert()
        .failure();
}

#[test]
fn auto_wins() {
    gs().args(["auto", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Battle Summary"))
        .stdout(predicate::str::contains("VICTORY"));
}

#[test]
fn auto_verbose_streams_log() {
    gs().args(["auto", "--seed", "3", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Battle Commenced!"))
        .stdout(predicate::str::contains("Dashed & Locked Target!"))
        .stdout(predicate::str::contains(">> ENEMY DEFEATED!"));
}

#[test]
fn auto_uses_config_file() {
    let (_dir, path) = config_file(r#"{ "enemyName": "Slime", "enemyHp": 10, "enemyMaxHp": 10 }"#);
    gs().arg("auto")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Slime"))
        .stdout(predicate::str::contains("VICTORY"));
}

#[test]
fn auto_gives_up_at_turn_limit() {
    gs().args(["auto", "--max-turns", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no victory within 1 turns"));
}

#[test]
fn auto_prints_snapshot_json() {
    gs().args(["auto", "--seed", "5", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"victory\""))
        .stdout(predicate::str::contains("\"logTotal\""));
}
