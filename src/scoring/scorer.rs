//! The per-review TrustRank scorer.

use chrono::NaiveDate;

use crate::error::{OracleError, ScoreError};
use crate::scoring::validate_review;
use crate::sentiment::SentimentOracle;
use crate::types::{Review, ScoredReview, ScoringWeights};

/// Computes trust scores for reviews against a fixed reference date.
///
/// The scorer is a pure transform: given the same reviews, the same oracle
/// outputs, and the same reference date, it produces identical scores. The
/// reference date is an explicit constructor argument - it never silently
/// defaults to "now", so runs are reproducible.
///
/// The oracle is injected so callers control the model and any
/// timeout/fallback policy wrapped around it.
pub struct TrustScorer<'a> {
    oracle: &'a dyn SentimentOracle,
    reference_date: NaiveDate,
    weights: ScoringWeights,
}

impl<'a> TrustScorer<'a> {
    /// Scorer with the default weight blend.
    pub fn new(oracle: &'a dyn SentimentOracle, reference_date: NaiveDate) -> Self {
        Self::with_weights(oracle, reference_date, ScoringWeights::default())
    }

    /// Scorer with a custom weight blend.
    pub fn with_weights(
        oracle: &'a dyn SentimentOracle,
        reference_date: NaiveDate,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            oracle,
            reference_date,
            weights,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Score one review.
    ///
    /// Validates the record first (fail fast on bad data), then blends the
    /// four signals. The result is deliberately unclamped: strong negative
    /// sentiment can push it below zero.
    pub fn score_review(&self, review: &Review) -> Result<ScoredReview, ScoreError> {
        validate_review(review, self.reference_date)?;

        let sentiment = self.sentiment(review)?;
        let helpfulness = helpfulness(review);
        let time_decay = self.time_decay(self.age_days(review.date));

        let w = &self.weights;
        let trust_score = f64::from(review.rating) * w.rating_weight
            + sentiment * w.sentiment_scale * w.sentiment_weight
            + helpfulness * w.helpfulness_scale * w.helpfulness_weight
            + time_decay * w.decay_scale * w.decay_weight;

        Ok(ScoredReview {
            review: review.clone(),
            trust_score,
        })
    }

    /// Score a whole review set.
    ///
    /// Policy: the batch fails as a whole on the first validation or oracle
    /// error (no skip-and-flag mode). A partial batch would silently shift
    /// the per-product means, so the caller gets either every score or a
    /// precise error naming the offending review.
    pub fn score_batch(&self, reviews: &[Review]) -> Result<Vec<ScoredReview>, ScoreError> {
        reviews.iter().map(|r| self.score_review(r)).collect()
    }

    /// Ask the oracle for a compound score, enforcing its [-1, 1] contract.
    fn sentiment(&self, review: &Review) -> Result<f64, ScoreError> {
        let value = self
            .oracle
            .score(&review.text)
            .map_err(|source| ScoreError::Oracle {
                id: review.id,
                source,
            })?;

        if !(-1.0..=1.0).contains(&value) {
            return Err(ScoreError::Oracle {
                id: review.id,
                source: OracleError::OutOfRange { value },
            });
        }

        Ok(value)
    }

    /// Whole days between the review date and the reference date, floored
    /// at zero. Validation already rejects future dates; the floor keeps
    /// the formula total regardless.
    fn age_days(&self, date: NaiveDate) -> f64 {
        self.reference_date
            .signed_duration_since(date)
            .num_days()
            .max(0) as f64
    }

    /// Exponential recency decay: 1.0 for a review dated today, 1/e at
    /// `decay_days`, approaching 0 for very old reviews.
    fn time_decay(&self, age_days: f64) -> f64 {
        (-age_days / self.weights.decay_days).exp()
    }
}

/// Helpful-vote ratio in [0, 1]. Zero total votes means no helpfulness
/// signal, defined as 0.0 rather than a division error.
fn helpfulness(review: &Review) -> f64 {
    if review.total_votes > 0 {
        f64::from(review.helpful_votes) / f64::from(review.total_votes)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::FixedOracle;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 23).unwrap()
    }

    fn review(id: u64, rating: u8, text: &str, helpful: u32, total: u32, date: NaiveDate) -> Review {
        Review {
            id,
            product_id: 101,
            rating,
            text: text.into(),
            helpful_votes: helpful,
            total_votes: total,
            date,
        }
    }

    #[test]
    fn test_time_decay_bounds_and_monotonicity() {
        let oracle = FixedOracle::constant(0.0);
        let scorer = TrustScorer::new(&oracle, reference());

        let mut previous = f64::INFINITY;
        for age in [0.0, 1.0, 5.0, 30.0, 365.0, 400.0, 4000.0] {
            let decay = scorer.time_decay(age);
            assert!(decay > 0.0 && decay <= 1.0, "decay({age}) = {decay}");
            assert!(decay < previous, "decay must strictly decrease with age");
            previous = decay;
        }
        assert_eq!(scorer.time_decay(0.0), 1.0);
    }

    #[test]
    fn test_helpfulness_edge_cases() {
        let zero_votes = review(1, 3, "text", 0, 0, reference());
        assert_eq!(helpfulness(&zero_votes), 0.0);

        let all_helpful = review(2, 3, "text", 7, 7, reference());
        assert_eq!(helpfulness(&all_helpful), 1.0);

        let half = review(3, 3, "text", 3, 6, reference());
        assert_eq!(helpfulness(&half), 0.5);
    }

    #[test]
    fn test_trusted_review_outscores_untrusted_beyond_rating_gap() {
        // Review A: rating 5, sentiment 0.9, 9/10 helpful, 5 days old.
        // Review B: rating 2, sentiment -0.5, 0/2 helpful, 400 days old.
        // Sentiment, helpfulness, and decay all widen the gap past what the
        // weighted rating difference alone (3 * 0.4 = 1.2) would give.
        let oracle = FixedOracle::new().with("glowing", 0.9).with("sour", -0.5);
        let scorer = TrustScorer::new(&oracle, reference());

        let five_days_ago = reference() - chrono::Duration::days(5);
        let four_hundred_days_ago = reference() - chrono::Duration::days(400);

        let a = scorer
            .score_review(&review(1, 5, "glowing", 9, 10, five_days_ago))
            .unwrap();
        let b = scorer
            .score_review(&review(2, 2, "sour", 0, 2, four_hundred_days_ago))
            .unwrap();

        // Hand-computed: 2.0 + 0.9 + 1.35 + 0.5*exp(-5/365)   = 4.7432
        //                0.8 - 0.5 + 0.0  + 0.5*exp(-400/365) = 0.4671
        assert!((a.trust_score - 4.7432).abs() < 1e-3, "{}", a.trust_score);
        assert!((b.trust_score - 0.4671).abs() < 1e-3, "{}", b.trust_score);
        assert!(a.trust_score - b.trust_score > 1.2);
    }

    #[test]
    fn test_score_can_go_negative() {
        // rating 1, brutal sentiment, no votes, ancient review: the blend
        // has no lower clamp
        let oracle = FixedOracle::constant(-1.0);
        let scorer = TrustScorer::new(&oracle, reference());
        let ancient = reference() - chrono::Duration::days(10_000);

        let scored = scorer
            .score_review(&review(1, 1, "text", 0, 0, ancient))
            .unwrap();
        // 0.4 - 1.0 + 0.0 + ~0.0
        assert!(scored.trust_score < 0.0);
    }

    #[test]
    fn test_oracle_out_of_range_is_rejected() {
        let oracle = FixedOracle::constant(1.5);
        let scorer = TrustScorer::new(&oracle, reference());

        let err = scorer
            .score_review(&review(9, 4, "text", 0, 0, reference()))
            .unwrap_err();
        match err {
            ScoreError::Oracle {
                id,
                source: OracleError::OutOfRange { value },
            } => {
                assert_eq!(id, 9);
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oracle_failure_carries_review_id() {
        // FixedOracle with no fallback fails on any text
        let oracle = FixedOracle::new();
        let scorer = TrustScorer::new(&oracle, reference());

        let err = scorer
            .score_review(&review(13, 4, "text", 0, 0, reference()))
            .unwrap_err();
        assert_eq!(err.review_id(), 13);
        assert!(matches!(err, ScoreError::Oracle { .. }));
    }

    #[test]
    fn test_batch_fails_whole_on_first_bad_review() {
        let oracle = FixedOracle::constant(0.0);
        let scorer = TrustScorer::new(&oracle, reference());

        let reviews = vec![
            review(1, 4, "fine", 1, 2, reference()),
            review(2, 0, "bad rating", 0, 0, reference()),
            review(3, 5, "also fine", 2, 2, reference()),
        ];

        let err = scorer.score_batch(&reviews).unwrap_err();
        assert_eq!(err.review_id(), 2);
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let oracle = FixedOracle::constant(0.0);
        let scorer = TrustScorer::new(&oracle, reference());

        let reviews = vec![
            review(10, 4, "a", 0, 0, reference()),
            review(11, 2, "b", 0, 0, reference()),
            review(12, 5, "c", 0, 0, reference()),
        ];

        let scored = scorer.score_batch(&reviews).unwrap();
        let ids: Vec<u64> = scored.iter().map(|s| s.review.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_custom_weights_change_blend() {
        let oracle = FixedOracle::constant(1.0);
        let rating_only = ScoringWeights {
            rating_weight: 1.0,
            sentiment_weight: 0.0,
            helpfulness_weight: 0.0,
            decay_weight: 0.0,
            ..ScoringWeights::default()
        };
        let scorer = TrustScorer::with_weights(&oracle, reference(), rating_only);

        let scored = scorer
            .score_review(&review(1, 3, "text", 9, 9, reference()))
            .unwrap();
        assert_eq!(scored.trust_score, 3.0);
    }
}
