//! # CSec Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One module per top-level `csec` command. Command groups with subcommands
//! (`keywords`, `profile`) get their own directory with a `mod.rs` router;
//! single commands (`chat`, `ask`) are a single file. `context` holds the
//! global flags and the loaded session shared by all of them.
//!
//! Each module exposes an `...Args` struct for Clap and an async
//! `handle_...` function returning `core::error::Result<()>`.
//!

/// One-shot question (`csec ask`).
pub mod ask;
/// Interactive session (`csec chat`, the default).
pub mod chat;
/// Global flags and per-run loaded state.
pub mod context;
/// Catalog inspection (`csec keywords list|check`).
pub mod keywords;
/// Stored profile management (`csec profile show|reset`).
pub mod profile;
