//! # CSec Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers and the engine's loaders,
//! kept apart from command-specific logic (`commands::`), the matching engine
//! (`engine::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: file I/O with error context (catalog and profile files).
//! - **`ui`**: terminal output and input (banners, reply rendering, the
//!   thinking animation, prompts).
//!
//! ```rust
//! use csec::common::ui::render;
//!
//! let mut out = Vec::new();
//! render::write_header(&mut out, "Chat Session").unwrap();
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Terminal user interface: rendering, animation and prompts.
pub mod ui;
