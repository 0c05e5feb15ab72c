//! Rank disagreement between the two orderings.

use std::cmp::Ordering;

use crate::eval::ranking::average_ranks;
use crate::types::{ProductAggregate, RankComparison};

/// Per-product rank comparison, one row per table row, in table order.
///
/// Each product gets an average rank (1.0 = best) independently under
/// `avg_rating` and `trust_score`; `rank_diff` is trust minus avg. Since
/// both rank vectors sum to n(n+1)/2, the diffs always sum to zero.
pub fn rank_comparisons(aggregates: &[ProductAggregate]) -> Vec<RankComparison> {
    let avg_scores: Vec<f64> = aggregates.iter().map(|a| a.avg_rating).collect();
    let trust_scores: Vec<f64> = aggregates.iter().map(|a| a.trust_score).collect();

    let avg_ranks = average_ranks(&avg_scores);
    let trust_ranks = average_ranks(&trust_scores);

    aggregates
        .iter()
        .zip(avg_ranks.iter().zip(&trust_ranks))
        .map(|(agg, (&rank_by_avg, &rank_by_trust))| RankComparison {
            product_id: agg.product_id,
            rank_by_avg,
            rank_by_trust,
            rank_diff: rank_by_trust - rank_by_avg,
        })
        .collect()
}

/// The rows where the two orderings disagree by at least `threshold`
/// positions, sorted by |rank_diff| descending for presentation.
pub fn disagreements(comparisons: &[RankComparison], threshold: f64) -> Vec<RankComparison> {
    let mut filtered: Vec<RankComparison> = comparisons
        .iter()
        .filter(|c| c.abs_diff() >= threshold)
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        b.abs_diff()
            .partial_cmp(&a.abs_diff())
            .unwrap_or(Ordering::Equal)
    });

    filtered
}
