//! # Match Engine
//!
//! File: cli/src/engine/resolver.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `MatchEngine::resolve` turns one raw line of user input into a
//! `ResolutionResult`. It performs no I/O and holds no state between calls:
//! the catalogs, the profile and the random source are all passed in.
//!
//! ## Precedence
//!
//! 1. Normalize (trim + lowercase), once.
//! 2. Exit word: `Exit`, nothing else runs.
//! 3. Sentiment detection (when enabled) produces a side emission.
//! 4. Keyword lookup: first declared matching trigger wins. The sentiment
//!    emission, if any, travels inside the `KeywordMatch`.
//! 5. No keyword: a lone sentiment emission becomes `SentimentMatch`;
//!    otherwise the configured fallback pool answers.
//!
//! Personalization compares the favorite topic with the **whole** matched key
//! (case-insensitive equality). A key such as `"password, passwords"` does not
//! personalize for favorite topic `"password"`.
//!
use crate::engine::catalog::{ResponseBundle, ResponseCatalog};
use crate::engine::fallback::{FallbackMode, FallbackPool};
use crate::engine::profile::UserProfile;
use crate::engine::sentiment::{SentimentCatalog, SentimentReply};
use rand::Rng;
use tracing::trace;

/// Default word that ends a chat session.
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Everything `resolve` matches against.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub responses: ResponseCatalog,
    /// `None` disables sentiment detection.
    pub sentiment: Option<SentimentCatalog>,
    pub fallback: FallbackPool,
}

/// Outcome of resolving one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// A mood word matched but no trigger did.
    SentimentMatch {
        mood_word: String,
        reply: String,
    },
    /// A trigger matched. Carries the picked replies and optional extras.
    KeywordMatch {
        key: String,
        bundle: ResponseBundle,
        primary_reply: String,
        follow_up: Option<String>,
        personalization_note: Option<String>,
        /// Emitted before the keyword reply.
        sentiment: Option<SentimentReply>,
    },
    /// Nothing matched; answered from the general pool.
    GeneralFallback {
        reply: String,
    },
    /// Nothing matched; answered from the default pool.
    DefaultFallback {
        reply: String,
    },
    /// The input was the exit word.
    Exit,
}

impl ResolutionResult {
    /// Sentiment emission of this turn, whether standalone or preceding a keyword reply.
    pub fn sentiment(&self) -> Option<SentimentReply> {
        match self {
            ResolutionResult::SentimentMatch { mood_word, reply } => Some(SentimentReply {
                mood_word: mood_word.clone(),
                reply: reply.clone(),
            }),
            ResolutionResult::KeywordMatch { sentiment, .. } => sentiment.clone(),
            _ => None,
        }
    }

    /// True for either fallback variant.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            ResolutionResult::GeneralFallback { .. } | ResolutionResult::DefaultFallback { .. }
        )
    }

    /// Matched trigger key, if this turn matched one.
    pub fn matched_key(&self) -> Option<&str> {
        match self {
            ResolutionResult::KeywordMatch { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Lowercased, trimmed input.
pub fn normalize(raw_input: &str) -> String {
    raw_input.trim().to_lowercase()
}

/// The sentence attached when the matched trigger is the user's favorite topic.
pub fn personalization_note(topic: &str) -> String {
    format!("Since you're interested in {topic}, here's an extra tip just for you: stay curious and keep learning about it!")
}

/// Stateless resolver; only the exit word is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    exit_word: String,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_WORD)
    }
}

impl MatchEngine {
    /// Creates an engine that ends the session on `exit_word`.
    ///
    /// # Arguments
    ///
    /// * `exit_word` - Compared after trimming and lowercasing, like user input.
    ///
    /// # Returns
    ///
    /// * `MatchEngine` - A stateless engine; reuse it for every turn.
    pub fn new(exit_word: &str) -> Self {
        Self {
            exit_word: normalize(exit_word),
        }
    }

    /// The normalized exit word, for prompts.
    pub fn exit_word(&self) -> &str {
        &self.exit_word
    }

    /// True when `raw_input` is the exit word after normalization. Already
    /// normalized input is accepted as well.
    pub fn is_exit(&self, raw_input: &str) -> bool {
        normalize(raw_input) == self.exit_word
    }

    /// Resolves one line of user input.
    ///
    /// # Arguments
    ///
    /// * `raw_input` - The line as typed; normalized here, once.
    /// * `catalogs` - Keyword catalog, optional sentiment table and fallback pools.
    /// * `profile` - Read-only profile; only the favorite topic is consulted.
    /// * `rng` - Random source for every reply pick in this turn.
    ///
    /// # Returns
    ///
    /// * `ResolutionResult` - Exactly one variant. Callers must handle all of them.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        raw_input: &str,
        catalogs: &Catalogs,
        profile: &UserProfile,
        rng: &mut R,
    ) -> ResolutionResult {
        let input = normalize(raw_input);
        if self.is_exit(&input) {
            return ResolutionResult::Exit;
        }

        let sentiment = catalogs
            .sentiment
            .as_ref()
            .and_then(|catalog| catalog.detect(&input, rng));

        if let Some(entry) = catalogs.responses.lookup(&input) {
            trace!("Input matched trigger '{}'", entry.key);
            let primary_reply = entry.bundle.pick_primary(rng).to_string();
            let follow_up = entry.bundle.pick_follow_up(rng).map(str::to_string);
            let personalization_note = profile
                .favorite_topic
                .as_deref()
                .filter(|topic| entry.key.equals_ignore_case(topic))
                .map(|topic| personalization_note(topic.trim()));

            return ResolutionResult::KeywordMatch {
                key: entry.key.as_str().to_string(),
                bundle: entry.bundle.clone(),
                primary_reply,
                follow_up,
                personalization_note,
                sentiment,
            };
        }

        if let Some(SentimentReply { mood_word, reply }) = sentiment {
            return ResolutionResult::SentimentMatch { mood_word, reply };
        }

        match catalogs.fallback.mode() {
            FallbackMode::Default => ResolutionResult::DefaultFallback {
                reply: catalogs.fallback.pick_default(rng).to_string(),
            },
            FallbackMode::General => ResolutionResult::GeneralFallback {
                reply: catalogs.fallback.pick_general(rng).to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::replies::ReplySet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bundle(replies: &[&'static str], follow_ups: &[&str]) -> ResponseBundle {
        ResponseBundle::rich(
            ReplySet::from_static(replies).unwrap(),
            follow_ups.iter().map(|f| f.to_string()).collect(),
        )
    }

    fn catalogs(responses: ResponseCatalog, sentiment: bool, mode: FallbackMode) -> Catalogs {
        Catalogs {
            responses,
            sentiment: sentiment.then(SentimentCatalog::builtin),
            fallback: FallbackPool::builtin(mode).unwrap(),
        }
    }

    #[test]
    fn test_password_scenario() {
        let cats = catalogs(
            ResponseCatalog::from_entries([("password", bundle(&["Use 12+ chars"], &[]))]),
            false,
            FallbackMode::General,
        );
        let mut rng = StdRng::seed_from_u64(0);
        let result = MatchEngine::default().resolve(
            "i need a password tip",
            &cats,
            &UserProfile::default(),
            &mut rng,
        );
        match result {
            ResolutionResult::KeywordMatch {
                key,
                primary_reply,
                follow_up,
                personalization_note,
                sentiment,
                ..
            } => {
                assert_eq!(key, "password");
                assert_eq!(primary_reply, "Use 12+ chars");
                assert_eq!(follow_up, None);
                assert_eq!(personalization_note, None);
                assert_eq!(sentiment, None);
            }
            other => panic!("expected keyword match, got {other:?}"),
        }
    }

    #[test]
    fn test_exit_ignores_case_and_whitespace() {
        let cats = catalogs(ResponseCatalog::empty(), true, FallbackMode::General);
        let mut rng = StdRng::seed_from_u64(0);
        let engine = MatchEngine::default();
        for input in ["exit", "  EXIT  ", "Exit\n"] {
            assert_eq!(
                engine.resolve(input, &cats, &UserProfile::default(), &mut rng),
                ResolutionResult::Exit
            );
        }
        assert!(engine.is_exit(" eXiT "));
        assert!(!engine.is_exit("exit now"));
    }

    #[test]
    fn test_custom_exit_word() {
        let cats = catalogs(ResponseCatalog::empty(), false, FallbackMode::General);
        let mut rng = StdRng::seed_from_u64(0);
        let engine = MatchEngine::new(" Bye ");
        assert_eq!(engine.exit_word(), "bye");
        assert_eq!(
            engine.resolve("BYE", &cats, &UserProfile::default(), &mut rng),
            ResolutionResult::Exit
        );
        assert!(engine
            .resolve("exit", &cats, &UserProfile::default(), &mut rng)
            .is_fallback());
    }

    #[test]
    fn test_empty_catalog_uses_general_pool() {
        let cats = catalogs(ResponseCatalog::empty(), true, FallbackMode::General);
        let mut rng = StdRng::seed_from_u64(4);
        match MatchEngine::default().resolve("banana", &cats, &UserProfile::default(), &mut rng) {
            ResolutionResult::GeneralFallback { reply } => {
                assert!(cats.fallback.general().contains(&reply))
            }
            other => panic!("expected general fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_default_mode_uses_default_pool() {
        let cats = catalogs(ResponseCatalog::empty(), false, FallbackMode::Default);
        let mut rng = StdRng::seed_from_u64(4);
        match MatchEngine::default().resolve("", &cats, &UserProfile::default(), &mut rng) {
            ResolutionResult::DefaultFallback { reply } => {
                assert!(cats.fallback.default_pool().contains(&reply))
            }
            other => panic!("expected default fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_sentiment_and_keyword_in_same_turn() {
        let cats = catalogs(
            ResponseCatalog::from_entries([("phishing", bundle(&["Check the sender."], &[]))]),
            true,
            FallbackMode::General,
        );
        let mut rng = StdRng::seed_from_u64(2);
        let result = MatchEngine::default().resolve(
            "I'm worried about a phishing email",
            &cats,
            &UserProfile::default(),
            &mut rng,
        );
        assert_eq!(result.matched_key(), Some("phishing"));
        assert_eq!(result.sentiment().map(|s| s.mood_word), Some("worried".to_string()));
    }

    #[test]
    fn test_sentiment_alone_is_not_a_fallback() {
        let cats = catalogs(ResponseCatalog::empty(), true, FallbackMode::General);
        let mut rng = StdRng::seed_from_u64(2);
        let result =
            MatchEngine::default().resolve("i feel frustrated", &cats, &UserProfile::default(), &mut rng);
        assert!(matches!(
            result,
            ResolutionResult::SentimentMatch { ref mood_word, .. } if mood_word == "frustrated"
        ));
    }

    #[test]
    fn test_sentiment_disabled_falls_back() {
        let cats = catalogs(ResponseCatalog::empty(), false, FallbackMode::General);
        let mut rng = StdRng::seed_from_u64(2);
        let result =
            MatchEngine::default().resolve("i feel frustrated", &cats, &UserProfile::default(), &mut rng);
        assert!(result.is_fallback());
        assert_eq!(result.sentiment(), None);
    }

    #[test]
    fn test_personalization_requires_exact_key() {
        let profile = UserProfile {
            name: Some("Ada".into()),
            favorite_topic: Some("Password".into()),
        };
        let mut rng = StdRng::seed_from_u64(8);
        let engine = MatchEngine::default();

        let exact = catalogs(
            ResponseCatalog::from_entries([("PASSWORD", bundle(&["tip"], &[]))]),
            false,
            FallbackMode::General,
        );
        match engine.resolve("password help", &exact, &profile, &mut rng) {
            ResolutionResult::KeywordMatch {
                personalization_note: Some(note),
                ..
            } => assert!(note.contains("Password")),
            other => panic!("expected personalized match, got {other:?}"),
        }

        let variants = catalogs(
            ResponseCatalog::from_entries([("password, passwords", bundle(&["tip"], &[]))]),
            false,
            FallbackMode::General,
        );
        match engine.resolve("password help", &variants, &profile, &mut rng) {
            ResolutionResult::KeywordMatch {
                personalization_note,
                ..
            } => assert_eq!(personalization_note, None),
            other => panic!("expected keyword match, got {other:?}"),
        }
    }

    #[test]
    fn test_follow_up_is_drawn_from_bundle() {
        let cats = catalogs(
            ResponseCatalog::from_entries([("vpn", bundle(&["a", "b"], &["f1", "f2"]))]),
            false,
            FallbackMode::General,
        );
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..10 {
            match MatchEngine::default().resolve("vpn?", &cats, &UserProfile::default(), &mut rng) {
                ResolutionResult::KeywordMatch { follow_up, .. } => {
                    assert!(matches!(follow_up.as_deref(), Some("f1") | Some("f2")))
                }
                other => panic!("expected keyword match, got {other:?}"),
            }
        }
    }
}
