//! Sentiment oracle - the pluggable polarity model.
//!
//! Scoring consumes sentiment through a single-method trait rather than a
//! concrete library call, so deployments can swap in whatever model they
//! run (and tests can substitute a deterministic double) without touching
//! the scoring math. Timeout, circuit-breaking, and fallback policy around
//! a slow or flaky model belong in the caller's oracle wrapper, not here.

mod lexicon;

pub use lexicon::LexiconOracle;

use std::collections::HashMap;

use crate::error::OracleError;

/// A model that maps review text to a compound polarity score.
///
/// Contract: the returned score is in [-1, 1] (-1 fully negative, +1 fully
/// positive). The scorer rejects out-of-range values as oracle failures.
/// Implementations used in tests must be deterministic - same text, same
/// score.
pub trait SentimentOracle {
    fn score(&self, text: &str) -> Result<f64, OracleError>;
}

/// Deterministic oracle returning canned scores, for tests and replay.
///
/// Texts are matched exactly. Without a fallback, unknown text is an
/// `OracleError` - which also makes this the standard way to exercise
/// oracle-failure propagation in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedOracle {
    scores: HashMap<String, f64>,
    fallback: Option<f64>,
}

impl FixedOracle {
    /// Oracle with no canned scores and no fallback - every call fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle returning `score` for any text.
    pub fn constant(score: f64) -> Self {
        Self {
            scores: HashMap::new(),
            fallback: Some(score),
        }
    }

    /// Add a canned score for an exact text.
    pub fn with(mut self, text: &str, score: f64) -> Self {
        self.scores.insert(text.to_string(), score);
        self
    }
}

impl SentimentOracle for FixedOracle {
    fn score(&self, text: &str) -> Result<f64, OracleError> {
        self.scores
            .get(text)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| OracleError::Failed(format!("no canned score for text: {:?}", text)))
    }
}
