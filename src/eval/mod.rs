//! Ranking evaluation - how far TrustRank diverges from naive averages.
//!
//! The evaluator consumes the per-product aggregate table and produces
//! three diagnostics:
//! - Spearman rank correlation between the two score columns
//! - Top-K set overlap between the two orderings
//! - Per-product rank disagreement, with a threshold-filtered view
//!
//! All three share one ranking routine (stable descending order, average
//! ranks for ties), so tie semantics cannot diverge between computations.

mod disagreement;
mod overlap;
pub mod ranking;
mod spearman;

pub use disagreement::{disagreements, rank_comparisons};
pub use overlap::top_k_overlap;
pub use spearman::spearman;

use crate::error::EvalError;
use crate::types::{EvalConfig, ProductAggregate, RankComparison};

/// Evaluates the TrustRank ordering against the average-rating baseline.
///
/// Stateless beyond holding the aggregate table: every method is a pure
/// read, so the evaluator can be queried repeatedly and in any order.
pub struct RankingEvaluator {
    aggregates: Vec<ProductAggregate>,
}

impl RankingEvaluator {
    pub fn new(aggregates: Vec<ProductAggregate>) -> Self {
        Self { aggregates }
    }

    pub fn aggregates(&self) -> &[ProductAggregate] {
        &self.aggregates
    }

    /// Spearman's rho between `avg_rating` and `trust_score`, `None` when
    /// undefined (fewer than 2 products or a zero-variance column).
    pub fn spearman(&self) -> Option<f64> {
        let avg: Vec<f64> = self.aggregates.iter().map(|a| a.avg_rating).collect();
        let trust: Vec<f64> = self.aggregates.iter().map(|a| a.trust_score).collect();
        spearman(&avg, &trust)
    }

    /// Overlap between the top-K products of the two orderings.
    pub fn top_k_overlap(&self, k: usize) -> Result<usize, EvalError> {
        top_k_overlap(&self.aggregates, k)
    }

    /// Full per-product rank comparison table, in table order.
    pub fn rank_comparisons(&self) -> Vec<RankComparison> {
        rank_comparisons(&self.aggregates)
    }

    /// Products whose ranks disagree by at least `threshold`, largest
    /// disagreement first.
    pub fn disagreements(&self, threshold: f64) -> Vec<RankComparison> {
        disagreements(&self.rank_comparisons(), threshold)
    }

    /// Run the full evaluation under one config.
    pub fn report(&self, config: &EvalConfig) -> Result<EvalReport, EvalError> {
        let comparisons = self.rank_comparisons();
        let flagged = disagreements(&comparisons, config.disagreement_threshold);

        Ok(EvalReport {
            spearman: self.spearman(),
            top_k: config.top_k,
            top_k_overlap: self.top_k_overlap(config.top_k)?,
            comparisons,
            disagreement_threshold: config.disagreement_threshold,
            disagreements: flagged,
        })
    }
}

/// Everything one evaluation run produces, ready for rendering.
#[derive(Debug, Clone)]
pub struct EvalReport {
    /// `None` means "undefined", not zero
    pub spearman: Option<f64>,
    pub top_k: usize,
    pub top_k_overlap: usize,
    pub comparisons: Vec<RankComparison>,
    pub disagreement_threshold: f64,
    pub disagreements: Vec<RankComparison>,
}
