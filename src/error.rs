//! Error types for scoring and evaluation.
//!
//! Every failure mode has a named variant. Validation errors carry the
//! offending review id and field so batch failures point at the bad record
//! instead of a nonsensical score.

use thiserror::Error;

/// Failure of a sentiment oracle call.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle violated its contract and returned a compound score
    /// outside [-1, 1].
    #[error("compound score {value} outside [-1, 1]")]
    OutOfRange { value: f64 },

    /// The underlying model/service failed to produce a score at all.
    #[error("{0}")]
    Failed(String),
}

/// Failure while scoring a review or a batch of reviews.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// A review failed validation. Names the field so the caller can find
    /// and fix the record.
    #[error("review {id}: invalid {field}: {reason}")]
    InvalidReview {
        id: u64,
        field: &'static str,
        reason: String,
    },

    /// The sentiment oracle failed for this review.
    #[error("review {id}: sentiment oracle failed")]
    Oracle {
        id: u64,
        #[source]
        source: OracleError,
    },
}

impl ScoreError {
    /// Id of the review that caused the failure.
    pub fn review_id(&self) -> u64 {
        match self {
            ScoreError::InvalidReview { id, .. } => *id,
            ScoreError::Oracle { id, .. } => *id,
        }
    }
}

/// Failure while evaluating rankings.
#[derive(Debug, Error)]
pub enum EvalError {
    /// top_k outside 1..=product_count. We fail rather than clamp: a
    /// silently adjusted K answers a different question than the one asked.
    #[error("top_k must be between 1 and {product_count}, got {top_k}")]
    InvalidTopK { top_k: usize, product_count: usize },
}
