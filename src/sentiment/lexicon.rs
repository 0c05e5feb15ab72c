//! Word-list sentiment scoring.
//!
//! A small, fully deterministic polarity model in the VADER family: each
//! known word carries a valence in [-4, 4], a preceding negator flips and
//! dampens it, and the summed valence is squashed to a compound score in
//! (-1, 1):
//! ```text
//! compound = sum / sqrt(sum^2 + ALPHA)
//! ```
//! This is a demo-grade stand-in, not a production model. It exists so the
//! crate runs end-to-end out of the box; real deployments inject their own
//! `SentimentOracle`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::OracleError;
use crate::sentiment::SentimentOracle;

/// Normalization constant for the compound squash (VADER's alpha).
const ALPHA: f64 = 15.0;

/// Dampened flip applied to a valence preceded by a negator (VADER's
/// N_SCALAR).
const NEGATION_SCALAR: f64 = -0.74;

/// Valence table. Values roughly follow VADER magnitudes: strong praise and
/// condemnation near +/-3, mild qualifiers near +/-1.
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        // Strong positive
        ("amazing", 2.8),
        ("excellent", 2.7),
        ("perfect", 2.7),
        ("great", 3.1),
        ("love", 3.2),
        ("loved", 2.9),
        ("happy", 2.7),
        ("flawlessly", 2.5),
        ("exceeded", 1.7),
        // Mild positive
        ("good", 1.9),
        ("well", 1.1),
        ("worth", 0.9),
        ("value", 1.1),
        ("fair", 1.1),
        ("okay", 0.9),
        ("recommend", 1.5),
        ("comfortable", 1.5),
        ("durable", 1.3),
        ("stylish", 1.3),
        ("functional", 1.1),
        ("satisfactory", 1.1),
        // Strong negative
        ("terrible", -3.1),
        ("awful", -3.0),
        ("horrible", -2.9),
        ("worst", -3.1),
        // Mild negative
        ("poor", -2.1),
        ("broke", -1.9),
        ("broken", -2.0),
        ("weak", -1.8),
        ("drains", -1.2),
        ("disappointing", -2.1),
        ("disappointed", -2.2),
    ])
});

/// Words that flip the valence of the token right after them.
static NEGATORS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "not", "no", "never", "isn't", "wasn't", "doesn't", "don't", "didn't", "can't", "cannot",
        "won't",
    ]
});

/// Deterministic lexicon-backed sentiment oracle. Infallible - text with no
/// known words scores 0.0 (neutral).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconOracle;

impl LexiconOracle {
    pub fn new() -> Self {
        Self
    }

    /// Sum of (possibly negated) valences over the tokens of `text`.
    fn valence_sum(text: &str) -> f64 {
        let mut sum = 0.0;
        let mut prev_is_negator = false;

        for token in text.split_whitespace() {
            let word = normalize(token);
            if word.is_empty() {
                continue;
            }

            if let Some(&valence) = LEXICON.get(word.as_str()) {
                sum += if prev_is_negator {
                    valence * NEGATION_SCALAR
                } else {
                    valence
                };
            }

            prev_is_negator = NEGATORS.contains(&word.as_str());
        }

        sum
    }
}

impl SentimentOracle for LexiconOracle {
    fn score(&self, text: &str) -> Result<f64, OracleError> {
        let sum = Self::valence_sum(text);
        // sum / sqrt(sum^2 + alpha) is strictly inside (-1, 1)
        Ok(sum / (sum * sum + ALPHA).sqrt())
    }
}

/// Lowercase and strip surrounding punctuation, keeping in-word apostrophes
/// so contractions like "doesn't" survive as negators.
fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}
