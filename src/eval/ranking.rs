//! Shared ranking primitives.
//!
//! Both the top-K overlap and the disagreement table (and, via average
//! ranks, the Spearman correlation) rank products by a score column. The
//! tie rules live here, in one place, so the three computations can never
//! drift apart:
//! - `descending_order`: stable sort, highest first, ties keep input order
//! - `average_ranks`: rank 1.0 = highest, tied scores share the mean of
//!   their positions (standard Spearman tie convention)

use std::cmp::Ordering;

/// Indices of `scores` sorted by score descending.
///
/// The sort is stable: equal scores stay in input order, which is the tie
/// rule for top-K selection.
pub fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    order
}

/// Average ranks, descending: the highest score gets rank 1.0, and a run
/// of tied scores all receive the mean of the positions they span.
///
/// `average_ranks(&[3.0, 1.0, 3.0])` is `[1.5, 3.0, 1.5]`.
pub fn average_ranks(scores: &[f64]) -> Vec<f64> {
    let order = descending_order(scores);
    let mut ranks = vec![0.0; scores.len()];

    let mut start = 0;
    while start < order.len() {
        // Find the end of the run of equal scores
        let mut end = start;
        while end + 1 < order.len() && scores[order[end + 1]] == scores[order[start]] {
            end += 1;
        }

        // Positions start..=end (0-based) share the mean 1-based rank
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = rank;
        }

        start = end + 1;
    }

    ranks
}
