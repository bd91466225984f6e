//! # CSec Profile Show Command
//!
//! File: cli/src/commands/profile/show.rs
//! Author: Christi Mahu
//!
//! Prints the stored profile. Unlike the chat, a corrupt profile file is
//! reported as an error instead of being silently treated as empty.
//!
use crate::commands::context::GlobalOpts;
use crate::core::error::Result;
use crate::engine::UserProfile;
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
pub struct ShowArgs {}

/// Prints the stored profile, or a note when none exists.
pub async fn handle_show(_args: ShowArgs, opts: &GlobalOpts) -> Result<()> {
    let config = opts.load_config()?;
    let path = config.profile_path();
    let mut out = io::stdout();
    if !path.exists() {
        writeln!(out, "No profile stored at '{}'.", path.display())?;
        return Ok(());
    }
    let profile = UserProfile::read(&path)?;
    write_profile(&mut out, &profile)?;
    Ok(())
}

fn write_profile<W: Write>(out: &mut W, profile: &UserProfile) -> io::Result<()> {
    let unset = "(not set)";
    writeln!(out, "Name:           {}", profile.name.as_deref().unwrap_or(unset))?;
    writeln!(
        out,
        "Favorite topic: {}",
        profile.favorite_topic.as_deref().unwrap_or(unset)
    )
}
