//! # CSec Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `csec chat`, the interactive session (also the default when no
//! subcommand is given).
//!
//! ## Workflow
//!
//! 1. Load the session context (config, catalog, profile, engine).
//! 2. Show the banner, and a warning if the keyword catalog could not be loaded.
//! 3. Profile setup: ask for the name and favorite topic only if unset, then
//!    save the profile once. A blank name greets the user as "Guest" and is
//!    not stored.
//! 4. Show the welcome box.
//! 5. Loop: header, prompt, resolve, thinking animation, render. The exit
//!    word or end of input ends the session.
//!
//! ```bash
//! csec chat
//! csec --keywords ./presets/keywords.json chat --no-animation
//! ```
//!
use crate::commands::context::{GlobalOpts, SessionContext};
use crate::common::ui::{animation, prompt::LineReader, render};
use crate::core::error::Result;
use crate::engine::resolver::normalize;
use crate::engine::{ResolutionResult, UserProfile};
use chrono::Local;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncBufRead;
use tracing::{debug, info, warn};

/// Arguments for `csec chat`.
#[derive(Parser, Debug, Default, Clone)]
#[command(about = "Start an interactive chat session")]
pub struct ChatArgs {
    /// Skip the "thinking" animation and the pause after the welcome box.
    #[arg(long)]
    pub no_animation: bool,
}

/// Runs the interactive session until the exit word or end of input.
///
/// # Arguments
///
/// * `args` - `chat` flags (`--no-animation`).
/// * `opts` - Global flags used to load configuration, catalog and profile.
///
/// # Returns
///
/// * `Result<()>` - `Ok` when the session ends normally. Errors come from
///   configuration loading or terminal I/O; a bad catalog or profile is not one.
pub async fn handle_chat(args: ChatArgs, opts: &GlobalOpts) -> Result<()> {
    let mut ctx = SessionContext::load(opts)?;
    let mut out = io::stdout();
    let delay = if args.no_animation {
        Duration::ZERO
    } else {
        Duration::from_millis(ctx.config.chat.thinking_delay_ms)
    };

    render::write_banner(&mut out)?;
    if let Some(condition) = &ctx.catalog_condition {
        render::write_warning(&mut io::stderr(), &condition.to_string())?;
    }

    let mut reader = LineReader::stdin();
    if ctx.profile.needs_setup() && setup_profile(&mut ctx.profile, &mut reader).await? {
        save_profile(&ctx.profile, &ctx.config.profile_path());
    }
    render::write_welcome(&mut out, ctx.profile.display_name())?;
    if !delay.is_zero() {
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    let SessionContext {
        config,
        catalogs,
        engine,
        profile,
        mut rng,
        ..
    } = ctx;
    let prompt = format!("\nAsk a question ('{}' to end): ", engine.exit_word());
    let mut last_topic: Option<String> = None;

    loop {
        render::write_header(&mut out, "Chat Session")?;
        let Some(line) = reader.ask(&prompt).await? else {
            info!("End of input; closing chat session.");
            render::write_resolution(&mut out, &ResolutionResult::Exit, &turn(&profile, ""))?;
            break;
        };

        let result = engine.resolve(&line, &catalogs, &profile, &mut rng);
        if result == ResolutionResult::Exit {
            render::write_resolution(&mut out, &result, &turn(&profile, ""))?;
            break;
        }

        if let Err(e) = animation::thinking(&config.chat.bot_name, delay).await {
            debug!("Thinking animation failed: {}", e);
        }
        let question = normalize(&line);
        let timestamp = Local::now().format("%H:%M").to_string();
        render::write_resolution(
            &mut out,
            &result,
            &render::TurnContext {
                question: &question,
                timestamp: &timestamp,
                user_name: profile.display_name(),
            },
        )?;

        if let Some(mood) = result.sentiment() {
            debug!("Detected mood word '{}'", mood.mood_word);
        }
        if let Some(key) = result.matched_key() {
            last_topic = Some(key.to_string());
        } else if result.is_fallback() {
            debug!("No trigger matched {:?}", question);
        }
        debug!("Last matched topic: {:?}", last_topic);
    }
    Ok(())
}

fn turn<'a>(profile: &'a UserProfile, question: &'a str) -> render::TurnContext<'a> {
    render::TurnContext {
        question,
        timestamp: "",
        user_name: profile.display_name(),
    }
}

/// Asks for whichever profile fields are unset.
///
/// # Arguments
///
/// * `profile` - Filled in place. Fields already set are never asked for.
/// * `reader` - Line source; end of input leaves the remaining fields unset.
///
/// # Returns
///
/// * `Result<bool>` - Whether anything changed, i.e. whether to save.
pub async fn setup_profile<R: AsyncBufRead + Unpin>(
    profile: &mut UserProfile,
    reader: &mut LineReader<R>,
) -> Result<bool> {
    let mut changed = false;
    if profile.name.is_none() {
        if let Some(name) = reader.ask("\nEnter your name: ").await? {
            changed |= profile.fill_name(&name);
        }
    }
    if profile.favorite_topic.is_none() {
        let question = "What cybersecurity topic interests you most (e.g. password, phishing)? ";
        if let Some(topic) = reader.ask(question).await? {
            changed |= profile.fill_favorite_topic(&topic.to_lowercase());
        }
    }
    Ok(changed)
}

// A profile that cannot be saved only costs personalization next time.
fn save_profile(profile: &UserProfile, path: &Path) {
    match profile.save(path) {
        Ok(()) => info!("Saved user profile to {}", path.display()),
        Err(e) => {
            warn!("Could not save profile: {:#}", e);
            warn_best_effort(&mut io::stderr(), &format!("Could not save profile: {e}"));
        }
    }
}

// Prints a warning whose loss must not end the session.
fn warn_best_effort<W: Write>(out: &mut W, message: &str) {
    if let Err(e) = render::write_warning(out, message) {
        debug!("Could not print warning {:?}: {}", message, e);
    }
}
