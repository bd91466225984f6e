//! # CSec Profile Command Group
//!
//! File: cli/src/commands/profile/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Routes `csec profile` subcommands for the stored user profile:
//!
//! - `show`: print the stored name and favorite topic.
//! - `reset`: delete the profile so the next chat asks again.
//!
//! The profile is only ever written by the chat's setup phase; these commands
//! never edit it in place.
//!
use crate::commands::context::GlobalOpts;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod reset;
mod show;

/// Top-level arguments for the 'profile' command group.
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Show the stored profile
    Show(show::ShowArgs),
    /// Delete the stored profile
    Reset(reset::ResetArgs),
}

pub async fn handle_profile(args: ProfileArgs, opts: &GlobalOpts) -> Result<()> {
    match args.command {
        ProfileCommand::Show(args) => show::handle_show(args, opts).await,
        ProfileCommand::Reset(args) => reset::handle_reset(args, opts).await,
    }
}
