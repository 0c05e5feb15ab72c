//! Per-product aggregation of scored reviews.

use std::collections::BTreeMap;

use crate::types::{ProductAggregate, ScoredReview};

/// Group scored reviews by product id and take arithmetic means.
///
/// Every product id present in the input appears exactly once in the
/// output; a product with zero reviews cannot appear because aggregation is
/// driven by the reviews themselves. The fold is commutative, so any
/// permutation of the input yields the same table. Output is ordered by
/// product id (BTreeMap grouping), making runs byte-for-byte reproducible.
pub fn aggregate_by_product(scored: &[ScoredReview]) -> Vec<ProductAggregate> {
    let mut groups: BTreeMap<u64, (f64, f64, usize)> = BTreeMap::new();

    for s in scored {
        let entry = groups.entry(s.review.product_id).or_insert((0.0, 0.0, 0));
        entry.0 += f64::from(s.review.rating);
        entry.1 += s.trust_score;
        entry.2 += 1;
    }

    groups
        .into_iter()
        .map(|(product_id, (rating_sum, trust_sum, count))| ProductAggregate {
            product_id,
            avg_rating: rating_sum / count as f64,
            trust_score: trust_sum / count as f64,
            review_count: count,
        })
        .collect()
}
