//! # CSec Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! Implements `csec ask <TEXT>...`: resolves a single question without the
//! interactive chrome (no banner, setup or animation) and prints the reply.
//! Words are joined with single spaces, so quoting is optional.
//!
//! ```bash
//! csec ask how do I spot a phishing email
//! csec --seed 7 ask "password tips"
//! ```
//!
use crate::commands::context::{GlobalOpts, SessionContext};
use crate::common::ui::render;
use crate::core::error::Result;
use crate::engine::resolver::normalize;
use chrono::Local;
use clap::Parser;
use std::io;
use tracing::debug;

/// Arguments for `csec ask`.
#[derive(Parser, Debug, Clone)]
#[command(about = "Ask a single question and print the reply")]
pub struct AskArgs {
    /// The question to resolve.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// Resolves the joined words as one chat turn and prints the reply.
///
/// # Arguments
///
/// * `args` - The question words.
/// * `opts` - Global flags (catalog, profile, seed).
///
/// # Returns
///
/// * `Result<()>` - Errors only on configuration or output failures. A missing
///   catalog is reported on stderr and the question falls back.
pub async fn handle_ask(args: AskArgs, opts: &GlobalOpts) -> Result<()> {
    let mut ctx = SessionContext::load(opts)?;
    if let Some(condition) = &ctx.catalog_condition {
        render::write_warning(&mut io::stderr(), &condition.to_string())?;
    }

    let input = args.text.join(" ");
    let result = ctx
        .engine
        .resolve(&input, &ctx.catalogs, &ctx.profile, &mut ctx.rng);
    debug!("Resolved {:?} to {:?}", input, result);

    let question = normalize(&input);
    let timestamp = Local::now().format("%H:%M").to_string();
    render::write_resolution(
        &mut io::stdout(),
        &result,
        &render::TurnContext {
            question: &question,
            timestamp: &timestamp,
            user_name: ctx.profile.display_name(),
        },
    )?;
    Ok(())
}
