//! # CSec Keywords Command Group
//!
//! File: cli/src/commands/keywords/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Routes `csec keywords` subcommands, which inspect the keyword catalog
//! without starting a chat:
//!
//! - `list`: triggers in declaration order (which is match precedence).
//! - `check`: strict load; fails on a missing or corrupt catalog and reports
//!   variants that an earlier trigger always wins over.
//!
//! ```bash
//! csec keywords list
//! csec --keywords ./presets/keywords.json keywords check
//! ```
//!
use crate::commands::context::GlobalOpts;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod check;
mod list;

/// Top-level arguments for the 'keywords' command group.
#[derive(Parser, Debug)]
pub struct KeywordsArgs {
    #[command(subcommand)]
    command: KeywordsCommand,
}

#[derive(Subcommand, Debug)]
enum KeywordsCommand {
    /// List triggers in match order
    List(list::ListArgs),
    /// Validate the keyword catalog
    Check(check::CheckArgs),
}

pub async fn handle_keywords(args: KeywordsArgs, opts: &GlobalOpts) -> Result<()> {
    match args.command {
        KeywordsCommand::List(args) => list::handle_list(args, opts).await,
        KeywordsCommand::Check(args) => check::handle_check(args, opts).await,
    }
}
