//! # CSec Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the `csec` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags / `RUST_LOG`
//! - Routing execution to the command handlers in `csec::commands`
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (same as `csec chat`)
//! csec
//!
//! # One question, reproducible reply, with info logs
//! csec -v --seed 3 ask what is phishing
//!
//! # Validate a catalog
//! csec --keywords presets/keywords.json keywords check
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler (default: `chat`)
//! 4. Print any error and exit with status 1
//!
use clap::{Parser, Subcommand};
use csec::commands::{self, context::GlobalOpts};
use tracing_subscriber::{fmt, EnvFilter};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "csec",
    about = "🔒 CSec Helper: a terminal cybersecurity-awareness chatbot",
    long_about = "Ask about passwords, phishing, malware and more.\n\
                  Replies come from a keyword catalog (keywords.json) with generic tips as fallback.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    global: GlobalOpts,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session (default)
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Ask a single question
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Inspect the keyword catalog
    #[command(alias = "k")]
    Keywords(commands::keywords::KeywordsArgs),
    /// Manage the stored user profile
    #[command(alias = "p")]
    Profile(commands::profile::ProfileArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let global = cli.global;
    let command_result = match cli.command {
        None => commands::chat::handle_chat(Default::default(), &global).await,
        Some(Commands::Chat(args)) => commands::chat::handle_chat(args, &global).await,
        Some(Commands::Ask(args)) => commands::ask::handle_ask(args, &global).await,
        Some(Commands::Keywords(args)) => commands::keywords::handle_keywords(args, &global).await,
        Some(Commands::Profile(args)) => commands::profile::handle_profile(args, &global).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
