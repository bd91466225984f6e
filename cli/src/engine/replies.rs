//! # Reply Sets
//!
//! File: cli/src/engine/replies.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `ReplySet` is an ordered, **non-empty** list of reply strings. Every pool
//! the engine draws from (primary keyword replies, sentiment replies, fallback
//! pools) is a `ReplySet`, so a uniform pick can never fail at chat time: the
//! emptiness check happens once, when the set is built or deserialized.
//!
use rand::Rng;
use serde::Deserialize;

/// Non-empty list of candidate replies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct ReplySet(Vec<String>);

impl ReplySet {
    /// Builds a set from owned strings.
    ///
    /// # Arguments
    ///
    /// * `replies` - Candidate replies, in declaration order.
    ///
    /// # Returns
    ///
    /// * `Ok(ReplySet)` - When at least one reply is given.
    /// * `Err(String)` - A short reason when `replies` is empty, suitable for
    ///   embedding in a catalog or configuration error message.
    pub fn new(replies: Vec<String>) -> Result<Self, String> {
        if replies.is_empty() {
            return Err("must contain at least one reply".to_string());
        }
        Ok(Self(replies))
    }

    /// Builds a set from static strings (built-in pools).
    pub fn from_static(replies: &[&'static str]) -> Result<Self, String> {
        Self::new(replies.iter().map(|r| r.to_string()).collect())
    }

    /// Picks one reply uniformly at random.
    ///
    /// # Arguments
    ///
    /// * `rng` - The random source. Pass a seeded `StdRng` for reproducible picks.
    ///
    /// # Returns
    ///
    /// * `&str` - One of the replies, borrowed from the set.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction, so the range is never empty.
        let idx = rng.random_range(0..self.0.len());
        &self.0[idx]
    }

    /// Number of replies (at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `reply` is one of the candidates, compared exactly.
    #[cfg(test)]
    pub fn contains(&self, reply: &str) -> bool {
        self.0.iter().any(|r| r == reply)
    }
}

impl TryFrom<Vec<String>> for ReplySet {
    type Error = String;

    fn try_from(replies: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(ReplySet::new(Vec::new()).is_err());
        let parsed: Result<ReplySet, _> = serde_json::from_str("[]");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_pick_is_always_a_member() {
        let set = ReplySet::from_static(&["a", "b", "c"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(set.contains(set.pick(&mut rng)));
        }
    }

    #[test]
    fn test_single_reply_is_always_picked() {
        let set = ReplySet::new(vec!["only".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(set.pick(&mut rng), "only");
        assert_eq!(set.len(), 1);
    }
}
