//! # Keyword Response Catalog
//!
//! File: cli/src/engine/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The response catalog maps trigger keys to response bundles. It is loaded
//! once from a JSON document and never mutated afterwards.
//!
//! ## Architecture
//!
//! - `TriggerKey`: the raw key as written in the catalog plus its lowercased,
//!   trimmed, non-empty comma-separated variants.
//! - `ResponseBundle`: either a rich bundle (`responses` + optional
//!   `followUps`) or a simple titled pair (`title` + `response`).
//! - `ResponseCatalog`: an ordered `Vec` of entries. Order is the declaration
//!   order in the JSON document and decides precedence: the first entry with a
//!   matching variant wins.
//!
//! ## Catalog format
//!
//! ```json
//! {
//!   "password, passwords": {
//!     "responses": ["Use at least 12 characters."],
//!     "followUps": ["Do you use a password manager?"]
//!   },
//!   "vpn": { "title": "VPNs", "response": "A VPN encrypts traffic to the VPN provider." }
//! }
//! ```
//!
//! `Responses` and `FollowUps` are accepted as aliases for the rich bundle keys.
//!
use crate::common::fs::io as fsio;
use crate::core::error::CatalogError;
use crate::engine::replies::ReplySet;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// A catalog key, possibly holding several comma-separated synonym variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerKey {
    raw: String,
    variants: Vec<String>,
}

impl TriggerKey {
    /// Splits `raw` on commas into trimmed, lowercased variants.
    ///
    /// # Arguments
    ///
    /// * `raw` - The key as declared, e.g. `"password, passwords"`.
    ///
    /// # Returns
    ///
    /// * `TriggerKey` - Keeps `raw` for display and personalization; empty
    ///   variants (from `",,"` or a trailing comma) are dropped.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let variants = raw
            .split(',')
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        Self { raw, variants }
    }

    /// The key exactly as declared in the catalog.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased, trimmed variants. Empty variants are already dropped.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// True when `normalized_input` contains any variant as a substring.
    pub fn matches(&self, normalized_input: &str) -> bool {
        self.variants
            .iter()
            .any(|variant| normalized_input.contains(variant.as_str()))
    }

    /// Case-insensitive equality against the whole raw key (not its variants).
    pub fn equals_ignore_case(&self, other: &str) -> bool {
        self.raw.trim().to_lowercase() == other.trim().to_lowercase()
    }
}

impl std::fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A simple titled response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePair {
    pub title: String,
    pub response: String,
}

/// Candidate replies associated with one trigger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBundle")]
pub enum ResponseBundle {
    Rich {
        responses: ReplySet,
        follow_ups: Vec<String>,
    },
    Pair(ResponsePair),
}

impl ResponseBundle {
    /// Bundle with several primary replies and optional follow-ups.
    pub fn rich(responses: ReplySet, follow_ups: Vec<String>) -> Self {
        ResponseBundle::Rich {
            responses,
            follow_ups,
        }
    }

    /// Bundle with a single titled reply and no follow-ups.
    pub fn pair(title: impl Into<String>, response: impl Into<String>) -> Self {
        ResponseBundle::Pair(ResponsePair {
            title: title.into(),
            response: response.into(),
        })
    }

    /// Picks exactly one primary reply.
    pub fn pick_primary<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        match self {
            ResponseBundle::Rich { responses, .. } => responses.pick(rng),
            ResponseBundle::Pair(pair) => &pair.response,
        }
    }

    /// Picks at most one follow-up; `None` when the bundle has none.
    pub fn pick_follow_up<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        match self {
            ResponseBundle::Rich { follow_ups, .. } => {
                follow_ups.choose(rng).map(String::as_str)
            }
            ResponseBundle::Pair(_) => None,
        }
    }

    /// Display title for pair bundles.
    pub fn title(&self) -> Option<&str> {
        match self {
            ResponseBundle::Pair(pair) => Some(&pair.title),
            ResponseBundle::Rich { .. } => None,
        }
    }

    /// Number of candidate primary replies.
    pub fn primary_count(&self) -> usize {
        match self {
            ResponseBundle::Rich { responses, .. } => responses.len(),
            ResponseBundle::Pair(_) => 1,
        }
    }

    /// Number of candidate follow-ups.
    pub fn follow_up_count(&self) -> usize {
        match self {
            ResponseBundle::Rich { follow_ups, .. } => follow_ups.len(),
            ResponseBundle::Pair(_) => 0,
        }
    }
}

/// Wire shape of a bundle before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBundle {
    #[serde(default, alias = "Responses")]
    responses: Option<Vec<String>>,
    #[serde(
        default,
        rename = "followUps",
        alias = "FollowUps",
        alias = "follow_ups"
    )]
    follow_ups: Option<Vec<String>>,
    #[serde(default, alias = "Title")]
    title: Option<String>,
    #[serde(default, alias = "Response")]
    response: Option<String>,
}

impl TryFrom<RawBundle> for ResponseBundle {
    type Error = String;

    fn try_from(raw: RawBundle) -> Result<Self, Self::Error> {
        match (raw.responses, raw.title, raw.response) {
            (Some(responses), None, None) => {
                let responses = ReplySet::new(responses).map_err(|e| format!("responses {e}"))?;
                Ok(ResponseBundle::rich(responses, raw.follow_ups.unwrap_or_default()))
            }
            (None, Some(title), Some(response)) => {
                if raw.follow_ups.is_some() {
                    return Err("a title/response pair cannot carry followUps".to_string());
                }
                Ok(ResponseBundle::pair(title, response))
            }
            (None, None, None) => Err("missing `responses`".to_string()),
            _ => Err(
                "expected either `responses` (with optional `followUps`) or both `title` and `response`"
                    .to_string(),
            ),
        }
    }
}

/// One trigger and its bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: TriggerKey,
    pub bundle: ResponseBundle,
}

/// Ordered trigger-to-bundle mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCatalog {
    entries: Vec<CatalogEntry>,
}

impl ResponseCatalog {
    /// Catalog with no triggers; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(key, bundle)` pairs, keeping their order.
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, ResponseBundle)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, bundle)| CatalogEntry {
                    key: TriggerKey::new(key),
                    bundle,
                })
                .collect(),
        }
    }

    /// Parses a JSON catalog document.
    ///
    /// # Arguments
    ///
    /// * `source` - A JSON object mapping trigger keys to bundles.
    ///
    /// # Returns
    ///
    /// * `Ok(ResponseCatalog)` - Entries in the order the keys appear.
    /// * `Err(String)` - The first problem found, naming the offending key.
    pub fn parse(source: &str) -> Result<Self, String> {
        let document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(source).map_err(|e| e.to_string())?;

        let mut entries = Vec::with_capacity(document.len());
        for (raw_key, value) in document {
            let bundle: ResponseBundle = serde_json::from_value(value)
                .map_err(|e| format!("trigger '{raw_key}': {e}"))?;
            let key = TriggerKey::new(raw_key);
            if key.variants().is_empty() {
                warn!(
                    "Trigger '{}' has no non-empty variants and will never match.",
                    key
                );
            }
            entries.push(CatalogEntry { key, bundle });
        }
        Ok(Self { entries })
    }

    /// Loads a catalog from `path`.
    ///
    /// # Errors
    ///
    /// * `CatalogError::ConfigMissing` when the file is absent or unreadable.
    /// * `CatalogError::ConfigCorrupt` when the file is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fsio::read_file_to_string(path).map_err(|e| {
            debug!("Reading keyword catalog failed: {:#}", e);
            CatalogError::ConfigMissing {
                path: path.to_path_buf(),
            }
        })?;
        let catalog = Self::parse(&content).map_err(|reason| CatalogError::ConfigCorrupt {
            path: path.to_path_buf(),
            reason,
        })?;
        info!(
            "Loaded {} trigger(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// First entry, in declaration order, with a variant contained in the input.
    ///
    /// # Arguments
    ///
    /// * `normalized_input` - The user's line, already trimmed and lowercased.
    ///
    /// # Returns
    ///
    /// * `Some(&CatalogEntry)` - The earliest matching entry, even if later ones match too.
    /// * `None` - When no variant occurs in the input.
    pub fn lookup(&self, normalized_input: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.key.matches(normalized_input))
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of triggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads the catalog, degrading to an empty catalog on any load condition.
///
/// Returns the catalog together with the condition, if any, so the caller can
/// show the user a warning.
pub fn load_or_empty(path: &Path) -> (ResponseCatalog, Option<CatalogError>) {
    match ResponseCatalog::load(path) {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            warn!("{}; continuing with an empty keyword catalog.", err);
            (ResponseCatalog::empty(), Some(err))
        }
    }
}
