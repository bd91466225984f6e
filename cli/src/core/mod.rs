//! # CSec Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//!
//! - `config`: layered TOML configuration (defaults, user file, project file,
//!   CLI overrides), path expansion and validation.
//! - `error`: `CsecError`, `CatalogError` and the `Result` alias.
//!
//! ## Usage
//!
//! ```rust
//! use csec::core::config::Config;
//! use csec::core::error::Result;
//!
//! fn exit_word() -> Result<String> {
//!     let cfg = Config::default();
//!     Ok(cfg.chat.exit_word)
//! }
//! # assert_eq!(exit_word().unwrap(), "exit");
//! ```
//!
pub mod config;
pub mod error;
