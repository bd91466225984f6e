//! # User Profile
//!
//! File: cli/src/engine/profile.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The optional on-disk record of the user's display name and favorite topic.
//!
//! ## Lifecycle
//!
//! 1. `UserProfile::load` once at startup. A missing file yields an empty
//!    profile; a corrupt file is logged and also yields an empty profile.
//! 2. During setup each empty field may be filled once (`fill_name`,
//!    `fill_favorite_topic`). Filled fields are never overwritten.
//! 3. `UserProfile::save` once after setup, as pretty-printed JSON.
//! 4. The chat loop only ever borrows the profile immutably.
//!
//! ```json
//! { "name": "Ada", "favoriteTopic": "password" }
//! ```
//!
use crate::common::fs::io as fsio;
use crate::core::error::{CsecError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Persisted user details. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "FavoriteTopic",
        alias = "favorite_topic",
        skip_serializing_if = "Option::is_none"
    )]
    pub favorite_topic: Option<String>,
}

impl UserProfile {
    /// Loads the profile stored at `path`.
    ///
    /// Missing and unparseable files both produce an empty profile. Only
    /// the parse failure is logged as a warning.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No profile at {}; starting with an empty profile.", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(profile) => {
                info!("Loaded user profile from {}", path.display());
                profile
            }
            Err(e) => {
                warn!("Ignoring unreadable profile: {:#}", e);
                Self::default()
            }
        }
    }

    /// Strict read: errors on unreadable or malformed files.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fsio::read_file_to_string(path)?;
        let profile: UserProfile = serde_json::from_str(&content)
            .map_err(|e| CsecError::Profile(format!("{}: {}", path.display(), e)))?;
        Ok(profile.normalized())
    }

    /// Writes the profile as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize profile")?;
        fsio::write_string_to_file(path, &json)
            .with_context(|| format!("Failed to save profile to {}", path.display()))
    }

    /// Sets the name if it is unset and `name` is not blank. Returns whether it changed.
    pub fn fill_name(&mut self, name: &str) -> bool {
        fill(&mut self.name, name)
    }

    /// Sets the favorite topic if it is unset and `topic` is not blank.
    pub fn fill_favorite_topic(&mut self, topic: &str) -> bool {
        fill(&mut self.favorite_topic, topic)
    }

    /// True while either field is unset, i.e. the chat still has questions to ask.
    pub fn needs_setup(&self) -> bool {
        self.name.is_none() || self.favorite_topic.is_none()
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Guest")
    }

    // Blank strings on disk are treated as unset.
    fn normalized(mut self) -> Self {
        self.name = self.name.filter(|n| !n.trim().is_empty());
        self.favorite_topic = self.favorite_topic.filter(|t| !t.trim().is_empty());
        self
    }
}

fn fill(slot: &mut Option<String>, value: &str) -> bool {
    let value = value.trim();
    if slot.is_some() || value.is_empty() {
        return false;
    }
    *slot = Some(value.to_string());
    true
}
