//! # CSec Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges, expands and validates the CSec configuration.
//! Configuration controls chat behavior (bot name, exit word, sentiment
//! detection, fallback mode, pacing), where the keyword catalog and the user
//! profile live, and optional overrides of the fallback pools.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence, highest first):
//! 1. Command-line flags / `CSEC_*` environment variables (`Overrides`)
//! 2. Project-specific `.csec.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `<config dir>/csec/config.toml`
//! 4. Default values defined in the code
//!
//! ## Example file
//!
//! ```toml
//! [chat]
//! bot_name = "C-Sec Helper"
//! exit_word = "exit"
//! sentiment = true
//! fallback = "general"
//! thinking_delay_ms = 300
//!
//! [files]
//! keywords = "keywords.json"
//! profile = "~/.config/csec/profile.json"
//!
//! [fallback]
//! general = ["Patch early, patch often."]
//! ```
//!
use crate::core::error::{CsecError, Result};
use crate::engine::resolver::DEFAULT_EXIT_WORD;
use crate::engine::{FallbackMode, FallbackPool, MatchEngine, SentimentCatalog};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Fully resolved configuration: every layer merged and defaults applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub chat: ChatConfig,
    pub files: FilesConfig,
    pub fallback: FallbackOverrides,
}

/// Chat behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Name shown in banners and the "thinking" line.
    pub bot_name: String,
    /// Input that ends the chat (matched after trim + lowercase).
    pub exit_word: String,
    /// Enables the mood-word layer.
    pub sentiment: bool,
    /// Which pool answers unmatched input.
    pub fallback: FallbackMode,
    /// Delay between animation dots. Zero disables the animation.
    pub thinking_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            sentiment: true,
            fallback: FallbackMode::default(),
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}

/// Locations of the keyword catalog and the profile (may use `~`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesConfig {
    pub keywords: String,
    pub profile: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS_PATH.to_string(),
            profile: DEFAULT_PROFILE_PATH.to_string(),
        }
    }
}

/// Optional replacements for the built-in fallback pools.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FallbackOverrides {
    pub general: Option<Vec<String>>,
    pub default: Option<Vec<String>>,
}

/// One configuration file as written: only the keys it actually sets.
///
/// Layers are stacked with [`ConfigLayer::or`] and turned into a
/// [`Config`] by [`ConfigLayer::resolve`], which fills in the defaults.
/// A key set in a higher layer always wins, even when its value happens
/// to equal the built-in default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub chat: ChatLayer,
    pub files: FilesLayer,
    pub fallback: FallbackOverrides,
}

/// `[chat]` keys of a single file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ChatLayer {
    pub bot_name: Option<String>,
    pub exit_word: Option<String>,
    pub sentiment: Option<bool>,
    pub fallback: Option<FallbackMode>,
    pub thinking_delay_ms: Option<u64>,
}

/// `[files]` keys of a single file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FilesLayer {
    pub keywords: Option<String>,
    pub profile: Option<String>,
}

impl ConfigLayer {
    /// Stacks `self` on top of `lower`.
    ///
    /// # Arguments
    ///
    /// * `lower` - The layer with lower precedence (e.g. the user file when
    ///   `self` is the project file).
    ///
    /// # Returns
    ///
    /// A layer where every key set in `self` is kept and every other key
    /// comes from `lower`.
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            chat: ChatLayer {
                bot_name: self.chat.bot_name.or(lower.chat.bot_name),
                exit_word: self.chat.exit_word.or(lower.chat.exit_word),
                sentiment: self.chat.sentiment.or(lower.chat.sentiment),
                fallback: self.chat.fallback.or(lower.chat.fallback),
                thinking_delay_ms: self.chat.thinking_delay_ms.or(lower.chat.thinking_delay_ms),
            },
            files: FilesLayer {
                keywords: self.files.keywords.or(lower.files.keywords),
                profile: self.files.profile.or(lower.files.profile),
            },
            fallback: FallbackOverrides {
                general: self.fallback.general.or(lower.fallback.general),
                default: self.fallback.default.or(lower.fallback.default),
            },
        }
    }

    /// Fills every unset key with its built-in default.
    pub fn resolve(self) -> Config {
        let defaults = Config::default();
        Config {
            chat: ChatConfig {
                bot_name: self.chat.bot_name.unwrap_or(defaults.chat.bot_name),
                exit_word: self.chat.exit_word.unwrap_or(defaults.chat.exit_word),
                sentiment: self.chat.sentiment.unwrap_or(defaults.chat.sentiment),
                fallback: self.chat.fallback.unwrap_or(defaults.chat.fallback),
                thinking_delay_ms: self
                    .chat
                    .thinking_delay_ms
                    .unwrap_or(defaults.chat.thinking_delay_ms),
            },
            files: FilesConfig {
                keywords: self.files.keywords.unwrap_or(defaults.files.keywords),
                profile: self.files.profile.unwrap_or(defaults.files.profile),
            },
            fallback: self.fallback,
        }
    }
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub keywords: Option<PathBuf>,
    pub profile: Option<PathBuf>,
}

const DEFAULT_BOT_NAME: &str = "C-Sec Helper";
const DEFAULT_THINKING_DELAY_MS: u64 = 300;
const DEFAULT_KEYWORDS_PATH: &str = "keywords.json";
const DEFAULT_PROFILE_PATH: &str = "user_profile.json";
const PROJECT_CONFIG_FILENAME: &str = ".csec.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

impl Config {
    /// Keyword catalog path after expansion.
    pub fn keywords_path(&self) -> PathBuf {
        PathBuf::from(&self.files.keywords)
    }

    /// Profile path after expansion.
    pub fn profile_path(&self) -> PathBuf {
        PathBuf::from(&self.files.profile)
    }

    /// Builds the fallback pools described by this configuration.
    pub fn fallback_pool(&self) -> std::result::Result<FallbackPool, CsecError> {
        let mut pool = FallbackPool::builtin(self.chat.fallback)?;
        if let Some(general) = &self.fallback.general {
            pool = pool.with_general(general.clone())?;
        }
        if let Some(default) = &self.fallback.default {
            pool = pool.with_default(default.clone())?;
        }
        Ok(pool)
    }

    /// The sentiment layer, when enabled.
    pub fn sentiment_catalog(&self) -> Option<SentimentCatalog> {
        self.chat.sentiment.then(SentimentCatalog::builtin)
    }

    pub fn match_engine(&self) -> MatchEngine {
        MatchEngine::new(&self.chat.exit_word)
    }
}

/// Standard user config directory (`~/.config/csec` on Linux).
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "CSec", "csec").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the full layered configuration.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged = merge_layers(user_config, project_config).resolve();
    apply_overrides(&mut merged, overrides);
    expand_config_paths(&mut merged).context("Failed to expand paths in configuration")?;
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    let Some(config_dir) = user_config_dir() else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = config_dir.join(USER_CONFIG_FILENAME);
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.csec.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads and parses a single TOML configuration file.
///
/// # Arguments
///
/// * `path` - The TOML file to read.
///
/// # Returns
///
/// * `Result<ConfigLayer>` - Only the keys present in the file; defaults are
///   applied later by [`ConfigLayer::resolve`].
pub fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

// Project keys win over user keys; missing layers contribute nothing.
fn merge_layers(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> ConfigLayer {
    let user = user.unwrap_or_default();
    match project {
        Some(project) => project.or(user),
        None => user,
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(keywords) = &overrides.keywords {
        config.files.keywords = keywords.to_string_lossy().into_owned();
    }
    if let Some(profile) = &overrides.profile {
        config.files.profile = profile.to_string_lossy().into_owned();
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.files.keywords = shellexpand::tilde(&config.files.keywords).into_owned();
    config.files.profile = shellexpand::tilde(&config.files.profile).into_owned();
    debug!(
        "Expanded file paths: keywords={}, profile={}",
        config.files.keywords, config.files.profile
    );
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.chat.exit_word.trim().is_empty() {
        return Err(anyhow!(CsecError::Config(
            "chat.exit_word must not be empty.".to_string()
        )));
    }
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(CsecError::Config(
            "chat.bot_name must not be empty.".to_string()
        )));
    }
    if config.files.keywords.trim().is_empty() || config.files.profile.trim().is_empty() {
        return Err(anyhow!(CsecError::Config(
            "files.keywords and files.profile must not be empty.".to_string()
        )));
    }
    config.fallback_pool()?;
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [chat]
            exit_word = "quit"
            fallback = "default"

            [files]
            keywords = "~/csec/keywords.json"
        "#;

        let layer: ConfigLayer = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(layer.chat.sentiment, None);
        let config = layer.resolve();

        assert_eq!(config.chat.exit_word, "quit");
        assert_eq!(config.chat.fallback, FallbackMode::Default);
        assert!(config.chat.sentiment); // Default
        assert_eq!(config.chat.bot_name, DEFAULT_BOT_NAME);
        assert_eq!(config.files.keywords, "~/csec/keywords.json"); // Not yet expanded
        assert_eq!(config.files.profile, DEFAULT_PROFILE_PATH);
        assert_eq!(config.fallback, FallbackOverrides::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<ConfigLayer>("[chat]\nexit = \"bye\"").is_err());
    }

    #[test]
    fn test_shipped_sample_config_parses() -> Result<()> {
        let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("../presets/config_sample.toml");
        let config = load_config_from_path(&sample)?.resolve();
        assert_eq!(config.chat, ChatConfig::default());
        assert_eq!(config.files.profile, "~/.config/csec/profile.json");
        Ok(())
    }

    fn layer(toml_content: &str) -> ConfigLayer {
        toml::from_str(toml_content).expect("Failed to parse TOML")
    }

    #[test]
    fn test_merge_keeps_user_keys_the_project_does_not_set() {
        let user = layer(
            r#"
            [chat]
            exit_word = "bye"
            sentiment = false
            [fallback]
            general = ["user tip"]
        "#,
        );
        let project = layer(
            r#"
            [chat]
            bot_name = "Team Bot"
            [files]
            keywords = "team/keywords.json"
        "#,
        );

        let merged = merge_layers(Some(user), Some(project)).resolve();
        assert_eq!(merged.chat.bot_name, "Team Bot");
        assert_eq!(merged.chat.exit_word, "bye");
        assert!(!merged.chat.sentiment);
        assert_eq!(merged.files.keywords, "team/keywords.json");
        assert_eq!(merged.files.profile, DEFAULT_PROFILE_PATH);
        assert_eq!(merged.fallback.general, Some(vec!["user tip".to_string()]));
    }

    #[test]
    fn test_project_can_restore_default_values_over_user() {
        let user = layer(
            r#"
            [chat]
            exit_word = "bye"
            sentiment = false
            fallback = "default"
            thinking_delay_ms = 50
        "#,
        );
        let project = layer(
            r#"
            [chat]
            exit_word = "exit"
            sentiment = true
            fallback = "general"
            thinking_delay_ms = 300
        "#,
        );

        let merged = merge_layers(Some(user), Some(project)).resolve();
        assert_eq!(merged.chat, ChatConfig::default());
    }

    #[test]
    fn test_merge_without_files_is_all_defaults() {
        assert_eq!(merge_layers(None, None).resolve(), Config::default());
    }

    #[test]
    fn test_overrides_win_and_paths_expand() {
        let mut config = Config::default();
        apply_overrides(
            &mut config,
            &Overrides {
                keywords: Some(PathBuf::from("~/kw.json")),
                profile: None,
            },
        );
        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(config.files.keywords, home_dir.join("kw.json").to_string_lossy());
        assert_eq!(config.files.profile, DEFAULT_PROFILE_PATH); // No tilde, unchanged
    }

    #[test]
    fn test_validate_config_rejects_empty_exit_word() {
        let mut config = Config::default();
        config.chat.exit_word = "  ".into();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exit_word"));
    }

    #[test]
    fn test_validate_config_rejects_empty_fallback_override() {
        let mut config = Config::default();
        config.fallback.general = Some(Vec::new());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("'general'"));
    }

    #[test]
    fn test_fallback_pool_applies_overrides() {
        let mut config = Config::default();
        config.chat.fallback = FallbackMode::Default;
        config.fallback.default = Some(vec!["custom".into()]);
        let pool = config.fallback_pool().unwrap();
        assert_eq!(pool.mode(), FallbackMode::Default);
        assert!(pool.default_pool().contains("custom"));
        assert_eq!(pool.default_pool().len(), 1);
    }

    #[test]
    fn test_find_project_config_walks_up_to_git_root() {
        let root = tempdir().unwrap();
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(root.path().join("a").join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(root.path().join("a").join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_config_from_path_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[chat\nbroken").unwrap();
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
