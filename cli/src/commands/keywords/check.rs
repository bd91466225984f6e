//! # CSec Keywords Check Command
//!
//! File: cli/src/commands/keywords/check.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `csec keywords check` loads the catalog **strictly**: unlike the chat, a
//! missing or corrupt file is an error here (exit status 1). On success it
//! also reports:
//!
//! - triggers with no usable variant (e.g. `""` or `","`), which never match;
//! - shadowed variants: a variant of a later trigger that contains a variant
//!   of an earlier trigger. Any input containing the later variant also
//!   contains the earlier one, so the earlier trigger always wins.
//!
use crate::commands::context::GlobalOpts;
use crate::core::error::{CsecError, Result};
use crate::engine::ResponseCatalog;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
pub struct CheckArgs {}

/// A later variant that an earlier trigger always pre-empts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub key: String,
    pub variant: String,
    pub by_key: String,
    pub by_variant: String,
}

/// Loads the catalog strictly and prints a summary with warnings.
///
/// # Arguments
///
/// * `_args` - No options yet.
/// * `opts` - Global flags; `--keywords` selects the file.
///
/// # Returns
///
/// * `Result<()>` - `Err(CsecError::Catalog)` when the file is missing or corrupt,
///   so the process exits with status 1.
pub async fn handle_check(_args: CheckArgs, opts: &GlobalOpts) -> Result<()> {
    let config = opts.load_config()?;
    let path = config.keywords_path();
    let catalog = ResponseCatalog::load(&path).map_err(CsecError::from)?;
    info!("Catalog {} parsed successfully", path.display());

    let mut out = io::stdout();
    writeln!(
        out,
        "✅ {} trigger(s) loaded from '{}'.",
        catalog.len(),
        path.display()
    )?;
    for key in dead_triggers(&catalog) {
        writeln!(out, "⚠️  Trigger '{}' has no usable variants and never matches.", key)?;
    }
    for s in shadowed_variants(&catalog) {
        writeln!(
            out,
            "⚠️  Variant '{}' of '{}' is shadowed by '{}' of earlier trigger '{}'.",
            s.variant, s.key, s.by_variant, s.by_key
        )?;
    }
    Ok(())
}

/// Triggers whose key has no usable variant.
fn dead_triggers(catalog: &ResponseCatalog) -> Vec<String> {
    catalog
        .entries()
        .iter()
        .filter(|entry| entry.key.variants().is_empty())
        .map(|entry| entry.key.as_str().to_string())
        .collect()
}

/// Variants that can never win because an earlier trigger matches first.
pub fn shadowed_variants(catalog: &ResponseCatalog) -> Vec<Shadowed> {
    let entries = catalog.entries();
    let mut found = Vec::new();
    for (i, later) in entries.iter().enumerate() {
        for variant in later.key.variants() {
            let earlier_hit = entries[..i].iter().find_map(|earlier| {
                earlier
                    .key
                    .variants()
                    .iter()
                    .find(|v| variant.contains(v.as_str()))
                    .map(|v| (earlier, v))
            });
            if let Some((earlier, by_variant)) = earlier_hit {
                found.push(Shadowed {
                    key: later.key.as_str().to_string(),
                    variant: variant.clone(),
                    by_key: earlier.key.as_str().to_string(),
                    by_variant: by_variant.clone(),
                });
            }
        }
    }
    found
}
