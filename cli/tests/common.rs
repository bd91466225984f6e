//! # CSec CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the real `csec` binary inside its own temporary directory, with `HOME` and
//! `XDG_CONFIG_HOME` pointed there so no user configuration leaks in.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Small catalog used across the tests. Declaration order matters.
pub const SAMPLE_CATALOG: &str = r#"{
  "password, passwords": {
    "responses": ["Use at least 12 characters with a mix of letters, numbers and symbols."],
    "followUps": ["Do you use a password manager?"]
  },
  "phishing": {
    "responses": ["Never click links in unexpected emails."],
    "followUps": []
  },
  "vpn": {
    "responses": ["A VPN encrypts your traffic on public Wi-Fi."],
    "followUps": []
  }
}"#;

/// `csec` binary with an isolated home and working directory.
pub fn csec_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("csec").expect("Failed to find csec binary for testing");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CSEC_KEYWORDS")
        .env_remove("CSEC_PROFILE")
        .env_remove("CSEC_SEED")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `SAMPLE_CATALOG` into `dir` and returns its path.
pub fn write_sample_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("keywords.json");
    fs::write(&path, SAMPLE_CATALOG).expect("Failed to write sample catalog");
    path
}
