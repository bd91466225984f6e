//! # CSec Matching Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The decision logic of the chatbot. Everything in this module is free of
//! terminal I/O: the shell (`commands::chat`, `commands::ask`) feeds it lines
//! and renders whatever it returns.
//!
//! ## Architecture
//!
//! - `replies`: `ReplySet`, the non-empty reply list every pool is built from.
//! - `catalog`: keyword catalog loading and first-match lookup.
//! - `sentiment`: built-in mood-word table.
//! - `fallback`: general/default fallback pools and the active `FallbackMode`.
//! - `profile`: the persisted `UserProfile`.
//! - `resolver`: `MatchEngine::resolve`, which ties the above together.
//!
//! ## Usage
//!
//! ```rust
//! use csec::engine::{Catalogs, FallbackMode, FallbackPool, MatchEngine, ResolutionResult,
//!                    ResponseCatalog, SentimentCatalog, UserProfile};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let catalogs = Catalogs {
//!     responses: ResponseCatalog::parse(r#"{ "password": { "responses": ["Use 12+ chars"] } }"#)
//!         .expect("valid catalog"),
//!     sentiment: Some(SentimentCatalog::builtin()),
//!     fallback: FallbackPool::builtin(FallbackMode::General).expect("built-in pools"),
//! };
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = MatchEngine::default().resolve("A password tip?", &catalogs, &UserProfile::default(), &mut rng);
//! assert_eq!(result.matched_key(), Some("password"));
//! ```
//!
pub mod catalog;
pub mod fallback;
pub mod profile;
pub mod replies;
pub mod resolver;
pub mod sentiment;

pub use catalog::{CatalogEntry, ResponseBundle, ResponseCatalog, ResponsePair, TriggerKey};
pub use fallback::{FallbackMode, FallbackPool};
pub use profile::UserProfile;
pub use replies::ReplySet;
pub use resolver::{Catalogs, MatchEngine, ResolutionResult};
pub use sentiment::{SentimentCatalog, SentimentReply};
