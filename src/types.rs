//! Core types for trustrank - trust-weighted review scoring.
//!
//! Everything downstream is built from these records:
//! - `Review` is the immutable input unit, created at ingestion and only
//!   ever read by the core.
//! - `ScoredReview` and `ProductAggregate` are derived per evaluation run
//!   and never persisted.
//! - `ScoringWeights` and `EvalConfig` hold every tunable as a named field
//!   so deployments can adjust the blend without touching the algorithm.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single product review as supplied by ingestion.
///
/// Immutable once constructed. Field invariants (rating in 1..=5, non-empty
/// text, `helpful_votes <= total_votes`, date not after the reference date)
/// are enforced by the scorer's validation pass, not by construction -
/// ingestion sources are untrusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review identifier
    pub id: u64,
    /// Product this review belongs to (many reviews per product)
    pub product_id: u64,
    /// Star rating, 1-5 inclusive
    pub rating: u8,
    /// Review body, fed to the sentiment oracle
    pub text: String,
    /// Votes marking this review as helpful
    pub helpful_votes: u32,
    /// Total helpfulness votes cast (>= helpful_votes)
    pub total_votes: u32,
    /// Calendar date the review was posted
    pub date: NaiveDate,
}

/// A review with its derived trust score. One per input review.
#[derive(Debug, Clone)]
pub struct ScoredReview {
    pub review: Review,
    /// Blended trust score. Not bounded to a closed range: a strongly
    /// negative sentiment can pull it below zero. Callers must not assume
    /// otherwise.
    pub trust_score: f64,
}

/// Per-product score summary - one row per distinct product id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAggregate {
    pub product_id: u64,
    /// Arithmetic mean of star ratings over the product's reviews
    pub avg_rating: f64,
    /// Arithmetic mean of trust scores over the product's reviews
    pub trust_score: f64,
    /// Number of reviews that went into the means
    pub review_count: usize,
}

/// How one product ranks under the two orderings.
///
/// Ranks are average ranks (1.0 = highest score, ties share the mean of
/// their positions), so `rank_diff` sums to zero across the table even when
/// ties occur.
#[derive(Debug, Clone, PartialEq)]
pub struct RankComparison {
    pub product_id: u64,
    /// Rank under the naive average-rating ordering
    pub rank_by_avg: f64,
    /// Rank under the TrustRank ordering
    pub rank_by_trust: f64,
    /// `rank_by_trust - rank_by_avg`; negative means TrustRank promoted
    /// the product relative to its average rating
    pub rank_diff: f64,
}

impl RankComparison {
    /// Magnitude of the disagreement, used for threshold filtering.
    pub fn abs_diff(&self) -> f64 {
        self.rank_diff.abs()
    }
}

/// Weights and scale factors for the per-review trust score.
///
/// The blend is:
/// ```text
/// trust = rating * rating_weight
///       + sentiment * sentiment_scale * sentiment_weight
///       + helpfulness * helpfulness_scale * helpfulness_weight
///       + time_decay * decay_scale * decay_weight
/// ```
/// The four weights sum to 1.0 with each sub-term rescaled to a [0,5]-ish
/// range (rating is native 1-5; the other three signals live in [0,1] or
/// [-1,1] and are multiplied up by their scale). The defaults reproduce the
/// original blend exactly; whether that weighting is tuned or ad hoc is
/// unknowable from the artifact, so we preserve it rather than "fix" it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    // Blend weights - must sum to 1.0 for the score to stay rating-like
    pub rating_weight: f64,
    pub sentiment_weight: f64,
    pub helpfulness_weight: f64,
    pub decay_weight: f64,

    // Scale factors lifting [0,1]/[-1,1] signals onto the rating scale
    pub sentiment_scale: f64,
    pub helpfulness_scale: f64,
    pub decay_scale: f64,

    /// e-folding time of the recency decay, in days.
    /// `time_decay = exp(-age_days / decay_days)`
    pub decay_days: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            // Blend
            rating_weight: 0.4,
            sentiment_weight: 0.2,
            helpfulness_weight: 0.3,
            decay_weight: 0.1,

            // Scales
            sentiment_scale: 5.0,
            helpfulness_scale: 5.0,
            decay_scale: 5.0,

            // Recency: one year to decay to 1/e
            decay_days: 365.0,
        }
    }
}

/// Parameters consumed by the ranking evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// How many products the top-K overlap compares. Must be >= 1 and
    /// <= the product count; violations are an error, not a clamp.
    pub top_k: usize,
    /// Minimum |rank_diff| for a product to appear in the disagreement
    /// view. f64 because average ranks make half-integral diffs possible.
    pub disagreement_threshold: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            disagreement_threshold: 3.0,
        }
    }
}
