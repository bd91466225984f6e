//! # CSec UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything the user sees in the terminal. The matching engine returns a
//! `ResolutionResult`; this module turns it (and the surrounding chrome) into
//! colored text.
//!
//! ## Architecture
//!
//! - **`render`**: banner, welcome box, section headers, warnings and the
//!   exhaustive rendering of every `ResolutionResult` variant. All functions
//!   write to any `std::io::Write`, so they can be tested against a buffer.
//! - **`animation`**: the "is thinking..." dots shown before each reply,
//!   paced with `tokio::time::sleep`.
//! - **`prompt`**: async line input from stdin for the chat loop and setup.
//!
//! Colors come from the `console` crate, which turns styling off
//! automatically when output is not a terminal.
//!

/// The "thinking" animation.
pub mod animation;
/// Line input from the terminal.
pub mod prompt;
/// Banners, headers and reply rendering.
pub mod render;
