//! # CSec Profile Reset Command
//!
//! File: cli/src/commands/profile/reset.rs
//! Author: Christi Mahu
//!
//! Deletes the stored profile file. Running it with no profile present is
//! not an error.
//!
use crate::commands::context::GlobalOpts;
use crate::common::fs::io as fsio;
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ResetArgs {}

/// Deletes the stored profile if there is one.
pub async fn handle_reset(_args: ResetArgs, opts: &GlobalOpts) -> Result<()> {
    let config = opts.load_config()?;
    let path = config.profile_path();
    if fsio::remove_file_if_exists(&path)? {
        println!("🗑️  Removed profile '{}'.", path.display());
    } else {
        println!("No profile stored at '{}'; nothing to reset.", path.display());
    }
    Ok(())
}
