//! # CSec Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout CSec Helper. Two layers
//! are used, as in most of the crate:
//!
//! - `CsecError`: application errors raised by configuration, profile and
//!   command handling, derived with `thiserror`.
//! - `CatalogError`: the recoverable conditions produced while loading the
//!   keyword catalog (`ConfigMissing`, `ConfigCorrupt`). The chat loop never
//!   treats these as fatal; see `engine::catalog::load_or_empty`.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so handlers can attach
//!   context with `.context(..)` and propagate with `?`.
//!
//! ## Examples
//!
//! ```rust
//! use csec::core::error::{CatalogError, CsecError};
//!
//! let err = CsecError::Config("exit_word must not be empty".into());
//! assert_eq!(err.to_string(), "Configuration error: exit_word must not be empty");
//!
//! let missing = CatalogError::ConfigMissing { path: "keywords.json".into() };
//! assert_eq!(missing.path().to_str(), Some("keywords.json"));
//! ```
//!
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error type for the CSec application.
#[derive(Error, Debug)]
pub enum CsecError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Keyword catalog error: {source}")]
    Catalog {
        #[from]
        source: CatalogError,
    },

    #[error("Invalid fallback pool '{pool}': {reason}")]
    FallbackPool { pool: String, reason: String },
}

/// Conditions raised while loading the keyword catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file does not exist or could not be read.
    #[error("Keywords file not found or unreadable: {}", .path.display())]
    ConfigMissing { path: PathBuf },

    /// The catalog file exists but is not a valid catalog document.
    #[error("Keywords file {} is corrupt: {reason}", .path.display())]
    ConfigCorrupt { path: PathBuf, reason: String },
}

impl CatalogError {
    /// The catalog path the condition refers to.
    pub fn path(&self) -> &Path {
        match self {
            CatalogError::ConfigMissing { path } | CatalogError::ConfigCorrupt { path, .. } => path,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
