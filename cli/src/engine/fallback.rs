//! # Fallback Pools
//!
//! File: cli/src/engine/fallback.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Generic replies used when no keyword matches. There are two pools:
//!
//! - **general**: security tips, used as the fallback by default.
//! - **default**: "I'm not sure" style replies.
//!
//! `FallbackMode` decides which pool answers unmatched input for a given
//! configuration. Both pools are always populated so switching modes never
//! leaves the engine without a reply.
//!
use crate::core::error::CsecError;
use crate::engine::replies::ReplySet;
use rand::Rng;
use serde::Deserialize;

const GENERAL_REPLIES: &[&str] = &[
    "Did you know that strong passwords can significantly reduce the risk of hacking?",
    "Always be cautious when clicking on links in emails.",
    "Cybersecurity is everyone's responsibility!",
    "Regularly updating your software can help protect against vulnerabilities.",
    "Two-factor authentication adds an extra layer of security.",
];

const DEFAULT_REPLIES: &[&str] = &[
    "I'm not sure I understand. Can you try rephrasing?",
    "Hmm, I don't have an answer for that yet. Try asking about passwords, phishing or malware.",
    "I didn't quite catch that. Could you ask in a different way?",
];

/// Which pool answers input that matched nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    #[default]
    General,
    Default,
}

/// The two fallback pools and the active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPool {
    general: ReplySet,
    default: ReplySet,
    mode: FallbackMode,
}

impl FallbackPool {
    /// Built-in pools with the given mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - Which pool answers unmatched input.
    ///
    /// # Returns
    ///
    /// * `Result<FallbackPool, CsecError>` - The pools; the built-in lists are
    ///   never empty, so this only fails if they are edited to be.
    pub fn builtin(mode: FallbackMode) -> Result<Self, CsecError> {
        Ok(Self {
            general: pool("general", GENERAL_REPLIES.iter().map(|r| r.to_string()).collect())?,
            default: pool("default", DEFAULT_REPLIES.iter().map(|r| r.to_string()).collect())?,
            mode,
        })
    }

    /// Replaces the general pool. Fails on an empty list.
    pub fn with_general(mut self, replies: Vec<String>) -> Result<Self, CsecError> {
        self.general = pool("general", replies)?;
        Ok(self)
    }

    /// Replaces the default pool. Fails on an empty list.
    pub fn with_default(mut self, replies: Vec<String>) -> Result<Self, CsecError> {
        self.default = pool("default", replies)?;
        Ok(self)
    }

    /// The pool `MatchEngine::resolve` draws from when nothing matches.
    pub fn mode(&self) -> FallbackMode {
        self.mode
    }

    #[cfg(test)]
    pub fn general(&self) -> &ReplySet {
        &self.general
    }

    #[cfg(test)]
    pub fn default_pool(&self) -> &ReplySet {
        &self.default
    }

    /// Picks a reply from the general pool (security tips).
    ///
    /// # Arguments
    ///
    /// * `rng` - The random source.
    ///
    /// # Returns
    ///
    /// * `&str` - One general reply, uniformly chosen.
    pub fn pick_general<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.general.pick(rng)
    }

    /// Picks a reply from the default pool ("please rephrase" prompts).
    ///
    /// # Arguments
    ///
    /// * `rng` - The random source.
    ///
    /// # Returns
    ///
    /// * `&str` - One default reply, uniformly chosen.
    pub fn pick_default<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.default.pick(rng)
    }
}

fn pool(name: &str, replies: Vec<String>) -> Result<ReplySet, CsecError> {
    ReplySet::new(replies).map_err(|reason| CsecError::FallbackPool {
        pool: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_pools_are_populated() {
        let pool = FallbackPool::builtin(FallbackMode::General).unwrap();
        assert_eq!(pool.general().len(), GENERAL_REPLIES.len());
        assert_eq!(pool.default_pool().len(), DEFAULT_REPLIES.len());
        assert_eq!(pool.mode(), FallbackMode::General);
    }

    #[test]
    fn test_picks_come_from_the_right_pool() {
        let pool = FallbackPool::builtin(FallbackMode::Default).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let general = pool.pick_general(&mut rng);
            assert!(GENERAL_REPLIES.iter().any(|r| *r == general));
            let default = pool.pick_default(&mut rng);
            assert!(DEFAULT_REPLIES.iter().any(|r| *r == default));
        }
    }

    #[test]
    fn test_override_rejects_empty_pool() {
        let err = FallbackPool::builtin(FallbackMode::General)
            .unwrap()
            .with_default(Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("'default'"));
    }

    #[test]
    fn test_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: FallbackMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"default\"").unwrap();
        assert_eq!(parsed.mode, FallbackMode::Default);
        assert!(toml::from_str::<Wrapper>("mode = \"random\"").is_err());
    }
}
