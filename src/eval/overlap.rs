//! Top-K overlap between the two product orderings.

use std::collections::HashSet;

use crate::error::EvalError;
use crate::eval::ranking::descending_order;
use crate::types::ProductAggregate;

/// Size of the intersection between the K products with the highest
/// average rating and the K with the highest trust score.
///
/// Both selections use the shared stable descending sort, so a tie at the
/// K boundary resolves to the product appearing first in the table. K must
/// satisfy `1 <= k <= product_count`; anything else is an `EvalError`
/// rather than a silent clamp.
///
/// The result is in 0..=K: K when the two orderings agree on the top set
/// (in any internal order), 0 when they are disjoint.
pub fn top_k_overlap(aggregates: &[ProductAggregate], k: usize) -> Result<usize, EvalError> {
    let n = aggregates.len();
    if k < 1 || k > n {
        return Err(EvalError::InvalidTopK {
            top_k: k,
            product_count: n,
        });
    }

    let by_avg = top_set(aggregates, k, |a| a.avg_rating);
    let by_trust = top_set(aggregates, k, |a| a.trust_score);

    Ok(by_avg.intersection(&by_trust).count())
}

/// Product ids of the K highest-scoring rows under `score`.
fn top_set(
    aggregates: &[ProductAggregate],
    k: usize,
    score: impl Fn(&ProductAggregate) -> f64,
) -> HashSet<u64> {
    let scores: Vec<f64> = aggregates.iter().map(score).collect();
    descending_order(&scores)
        .into_iter()
        .take(k)
        .map(|i| aggregates[i].product_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(product_id: u64, avg_rating: f64, trust_score: f64) -> ProductAggregate {
        ProductAggregate {
            product_id,
            avg_rating,
            trust_score,
            review_count: 2,
        }
    }

    #[test]
    fn test_identical_top_sets_in_different_order() {
        // Same top-3 products under both orderings, internal order swapped
        let aggregates = vec![
            aggregate(1, 5.0, 3.0),
            aggregate(2, 4.5, 5.0),
            aggregate(3, 4.0, 4.0),
            aggregate(4, 1.0, 1.0),
            aggregate(5, 0.5, 0.5),
        ];
        assert_eq!(top_k_overlap(&aggregates, 3).unwrap(), 3);
    }

    #[test]
    fn test_disjoint_top_sets() {
        // avg ranks products 1-3 on top, trust ranks 4-6 on top
        let aggregates = vec![
            aggregate(1, 5.0, 0.1),
            aggregate(2, 4.8, 0.2),
            aggregate(3, 4.6, 0.3),
            aggregate(4, 1.0, 5.0),
            aggregate(5, 0.8, 4.8),
            aggregate(6, 0.6, 4.6),
        ];
        assert_eq!(top_k_overlap(&aggregates, 3).unwrap(), 0);
    }

    #[test]
    fn test_partial_overlap() {
        let aggregates = vec![
            aggregate(1, 5.0, 5.0), // top under both
            aggregate(2, 4.0, 0.5),
            aggregate(3, 0.5, 4.0),
            aggregate(4, 1.0, 1.0),
        ];
        assert_eq!(top_k_overlap(&aggregates, 2).unwrap(), 1);
    }

    #[test]
    fn test_overlap_bounds() {
        let aggregates = vec![
            aggregate(1, 3.0, 1.0),
            aggregate(2, 2.0, 2.0),
            aggregate(3, 1.0, 3.0),
        ];
        for k in 1..=3 {
            let overlap = top_k_overlap(&aggregates, k).unwrap();
            assert!(overlap <= k);
        }
        // k == n: both sets are the whole table
        assert_eq!(top_k_overlap(&aggregates, 3).unwrap(), 3);
    }

    #[test]
    fn test_relabeling_invariance() {
        // Permuting table rows (relabeling) must not change the overlap
        let original = vec![
            aggregate(1, 5.0, 1.0),
            aggregate(2, 4.0, 2.0),
            aggregate(3, 3.0, 3.0),
            aggregate(4, 2.0, 4.0),
        ];
        let mut shuffled = original.clone();
        shuffled.swap(0, 3);
        shuffled.swap(1, 2);

        assert_eq!(
            top_k_overlap(&original, 2).unwrap(),
            top_k_overlap(&shuffled, 2).unwrap()
        );
    }

    #[test]
    fn test_tie_at_boundary_prefers_table_order() {
        // Products 2 and 3 tie on avg_rating at the k=1 boundary; the
        // stable sort keeps product 2 (earlier row)
        let aggregates = vec![
            aggregate(1, 1.0, 1.0),
            aggregate(2, 4.0, 4.0),
            aggregate(3, 4.0, 0.5),
        ];
        assert_eq!(top_k_overlap(&aggregates, 1).unwrap(), 1);
    }

    #[test]
    fn test_invalid_k_is_an_error() {
        let aggregates = vec![aggregate(1, 1.0, 1.0), aggregate(2, 2.0, 2.0)];

        assert!(matches!(
            top_k_overlap(&aggregates, 0),
            Err(EvalError::InvalidTopK {
                top_k: 0,
                product_count: 2
            })
        ));
        assert!(matches!(
            top_k_overlap(&aggregates, 3),
            Err(EvalError::InvalidTopK {
                top_k: 3,
                product_count: 2
            })
        ));
    }
}
