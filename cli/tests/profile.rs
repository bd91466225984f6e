//! # CSec Profile Integration Tests
//!
//! File: cli/tests/profile.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `csec profile show` and `csec profile reset`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_show_without_profile() {
    let dir = tempdir().unwrap();
    csec_cmd(dir.path())
        .arg("--profile")
        .arg(dir.path().join("profile.json"))
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile stored"));
}

#[test]
fn test_show_accepts_legacy_field_names() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    fs::write(&profile, r#"{ "Name": "Ada", "FavoriteTopic": "vpn" }"#).unwrap();
    csec_cmd(dir.path())
        .arg("--profile")
        .arg(&profile)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:           Ada"))
        .stdout(predicate::str::contains("Favorite topic: vpn"));
}

#[test]
fn test_show_fails_on_corrupt_profile() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    fs::write(&profile, "not json").unwrap();
    csec_cmd(dir.path())
        .arg("--profile")
        .arg(&profile)
        .args(["profile", "show"])
        .assert()
        .failure();
}

#[test]
fn test_reset_removes_profile() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    fs::write(&profile, r#"{ "name": "Ada" }"#).unwrap();
    csec_cmd(dir.path())
        .env("CSEC_PROFILE", &profile)
        .args(["profile", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed profile"));
    assert!(!profile.exists());

    csec_cmd(dir.path())
        .env("CSEC_PROFILE", &profile)
        .args(["profile", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to reset"));
}
