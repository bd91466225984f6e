//! # CSec Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Context-carrying file I/O used by the catalog and profile loaders. Import
//! the submodule directly, e.g. `crate::common::fs::io::write_string_to_file`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`, `remove_file_if_exists`).
pub mod io;
