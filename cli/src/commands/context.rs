//! # Session Context
//!
//! File: cli/src/commands/context.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds everything a chat-style command needs from the global CLI flags:
//!
//! 1. Load the layered configuration (`core::config::load_config`).
//! 2. Load the keyword catalog, degrading to an empty catalog (the condition
//!    is kept so the caller can warn the user).
//! 3. Load the user profile (missing or corrupt means empty).
//! 4. Build the fallback pools, the optional sentiment layer and the engine.
//! 5. Seed the random source from `--seed` or from the OS.
//!
use crate::core::config::{self, Config, Overrides};
use crate::core::error::{CatalogError, Result};
use crate::engine::catalog;
use crate::engine::{Catalogs, MatchEngine, UserProfile};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::debug;

/// Flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Keyword catalog (JSON). Overrides `files.keywords`.
    #[arg(long, global = true, env = "CSEC_KEYWORDS", value_name = "PATH")]
    pub keywords: Option<PathBuf>,

    /// User profile (JSON). Overrides `files.profile`.
    #[arg(long, global = true, env = "CSEC_PROFILE", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Seed for reply selection, for reproducible sessions.
    #[arg(long, global = true, env = "CSEC_SEED", value_name = "N")]
    pub seed: Option<u64>,
}

impl GlobalOpts {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            keywords: self.keywords.clone(),
            profile: self.profile.clone(),
        }
    }

    /// Loads the configuration these flags point at.
    pub fn load_config(&self) -> Result<Config> {
        config::load_config(&self.overrides())
    }
}

/// Loaded state for one run.
pub struct SessionContext {
    pub config: Config,
    pub catalogs: Catalogs,
    pub engine: MatchEngine,
    pub profile: UserProfile,
    pub rng: StdRng,
    /// Why the keyword catalog is empty, if loading failed.
    pub catalog_condition: Option<CatalogError>,
}

impl SessionContext {
    pub fn load(opts: &GlobalOpts) -> Result<Self> {
        let config = opts.load_config()?;
        Self::from_config(config, opts.seed)
    }

    pub fn from_config(config: Config, seed: Option<u64>) -> Result<Self> {
        let (responses, catalog_condition) = catalog::load_or_empty(&config.keywords_path());
        let catalogs = Catalogs {
            responses,
            sentiment: config.sentiment_catalog(),
            fallback: config.fallback_pool()?,
        };
        let profile = UserProfile::load(&config.profile_path());
        let rng = match seed {
            Some(seed) => {
                debug!("Using fixed reply seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            engine: config.match_engine(),
            config,
            catalogs,
            profile,
            rng,
            catalog_condition,
        })
    }
}
