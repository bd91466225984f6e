//! # CSec Helper Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! CSec Helper is a terminal cybersecurity-awareness chatbot. It scans each
//! question for configured keyword substrings and answers with a canned reply,
//! an optional follow-up and an optional personalization note, falling back to
//! a generic tip when nothing matches.
//!
//! The library exposes the pieces the `csec` binary is built from, so that
//! integration tests can use them directly:
//!
//! - `engine`: the matching engine (catalog, sentiment, fallbacks, profile,
//!   `MatchEngine::resolve`). Pure, no terminal I/O.
//! - `core`: configuration and error types.
//! - `common`: filesystem and terminal UI helpers.
//! - `commands`: the Clap argument structs and async handlers.
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod engine;
