//! # CSec Keywords List Command
//!
//! File: cli/src/commands/keywords/list.rs
//! Author: Christi Mahu
//!
//! Prints every trigger in declaration order with its variants and reply
//! counts. A missing or corrupt catalog is listed as empty, with a warning,
//! exactly as the chat would see it.
//!
//! Example output:
//!
//! ```text
//! Triggers in 'keywords.json' (first match wins):
//!
//!   1. password, passwords
//!      variants: password | passwords
//!      replies: 3, follow-ups: 2
//!
//! Found 1 trigger(s).
//! ```
//!
use crate::commands::context::GlobalOpts;
use crate::common::ui::render;
use crate::core::error::Result;
use crate::engine::{catalog, CatalogEntry};
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
pub struct ListArgs {}

/// Prints all triggers in match order. A bad catalog lists as empty.
pub async fn handle_list(_args: ListArgs, opts: &GlobalOpts) -> Result<()> {
    let config = opts.load_config()?;
    let path = config.keywords_path();
    let (catalog, condition) = catalog::load_or_empty(&path);
    if let Some(condition) = condition {
        render::write_warning(&mut io::stderr(), &condition.to_string())?;
    }

    let mut out = io::stdout();
    if catalog.is_empty() {
        writeln!(out, "No triggers defined in '{}'.", path.display())?;
        return Ok(());
    }
    writeln!(out, "Triggers in '{}' (first match wins):\n", path.display())?;
    for (index, entry) in catalog.entries().iter().enumerate() {
        write_entry(&mut out, index + 1, entry)?;
    }
    writeln!(out, "\nFound {} trigger(s).", catalog.len())?;
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, position: usize, entry: &CatalogEntry) -> io::Result<()> {
    writeln!(out, "  {:>2}. {}", position, entry.key)?;
    writeln!(out, "      variants: {}", entry.key.variants().join(" | "))?;
    if let Some(title) = entry.bundle.title() {
        writeln!(out, "      title: {}", title)?;
    }
    writeln!(
        out,
        "      replies: {}, follow-ups: {}",
        entry.bundle.primary_count(),
        entry.bundle.follow_up_count()
    )
}
