//! # Sentiment Detection
//!
//! File: cli/src/engine/sentiment.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A small built-in table of mood words and empathetic replies. Detection is a
//! substring test over the normalized input, in table order. A sentiment hit is
//! a side emission: the resolver still runs keyword lookup afterwards.
//!
use crate::engine::replies::ReplySet;
use rand::Rng;

const MOODS: &[(&str, &[&str])] = &[
    (
        "worried",
        &[
            "It's completely understandable to feel worried. Let's take it one step at a time.",
            "Feeling worried is normal. Knowing the basics already puts you ahead of most attackers.",
        ],
    ),
    (
        "scared",
        &[
            "There's no need to be scared. Most threats are stopped by a few simple habits.",
            "Being cautious is good, being scared isn't necessary. I'll help you stay safe.",
        ],
    ),
    (
        "frustrated",
        &[
            "I hear you, security can be frustrating. Let me try to make it simpler.",
            "Frustration is fair. Let's break this down into small, manageable steps.",
        ],
    ),
    (
        "confused",
        &[
            "No worries, this stuff can be confusing. Ask me anything and I'll keep it simple.",
            "Let's clear up the confusion together.",
        ],
    ),
    (
        "curious",
        &[
            "Curiosity is the best defence! Let's explore it.",
            "Great question to be curious about.",
        ],
    ),
    (
        "happy",
        &[
            "Glad to hear it! Staying safe online is worth feeling good about.",
            "That's great! Keep up the good security habits.",
        ],
    ),
];

/// Reply chosen for a detected mood word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentReply {
    pub mood_word: String,
    pub reply: String,
}

/// One mood word and its replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentEntry {
    pub mood_word: String,
    pub replies: ReplySet,
}

/// Ordered mood-word table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCatalog {
    entries: Vec<SentimentEntry>,
}

impl SentimentCatalog {
    /// The built-in mood table.
    pub fn builtin() -> Self {
        let entries = MOODS
            .iter()
            .filter_map(|(word, replies)| {
                ReplySet::from_static(replies).ok().map(|replies| SentimentEntry {
                    mood_word: word.to_string(),
                    replies,
                })
            })
            .collect();
        Self { entries }
    }

    /// Custom table; mood words are lowercased and empty words are dropped.
    #[cfg(test)]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, ReplySet)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, replies)| SentimentEntry {
                    mood_word: word.trim().to_lowercase(),
                    replies,
                })
                .filter(|entry| !entry.mood_word.is_empty())
                .collect(),
        }
    }

    /// Finds the first mood word (in table order) contained in the input.
    ///
    /// # Arguments
    ///
    /// * `normalized_input` - The user's line, already trimmed and lowercased.
    /// * `rng` - The random source used to pick among that mood's replies.
    ///
    /// # Returns
    ///
    /// * `Some(SentimentReply)` - The matched mood word and one of its replies.
    /// * `None` - When no mood word occurs in the input.
    pub fn detect<R: Rng + ?Sized>(
        &self,
        normalized_input: &str,
        rng: &mut R,
    ) -> Option<SentimentReply> {
        self.entries
            .iter()
            .find(|entry| normalized_input.contains(entry.mood_word.as_str()))
            .map(|entry| SentimentReply {
                mood_word: entry.mood_word.clone(),
                reply: entry.replies.pick(rng).to_string(),
            })
    }

    /// The mood table in detection order.
    #[cfg(test)]
    pub fn entries(&self) -> &[SentimentEntry] {
        &self.entries
    }
}
