//! Review validation - fail fast on bad records.
//!
//! The scorer refuses to compute a score from a review that violates the
//! data model. Every rejection names the review id and the offending field.
//! Vote counts are unsigned at the type level, so "negative votes" cannot
//! reach this code; the remaining invariants are checked here.

use chrono::NaiveDate;

use crate::error::ScoreError;
use crate::types::Review;

/// Check a review against the data-model invariants.
///
/// Rejects:
/// - rating outside 1..=5
/// - empty (or whitespace-only) text
/// - `helpful_votes > total_votes`
/// - a date after `reference_date` (a review from the future relative to
///   the evaluation run)
///
/// A zero `total_votes` is valid - it means helpfulness 0, not an error.
pub fn validate_review(review: &Review, reference_date: NaiveDate) -> Result<(), ScoreError> {
    if !(1..=5).contains(&review.rating) {
        return Err(ScoreError::InvalidReview {
            id: review.id,
            field: "rating",
            reason: format!("must be between 1 and 5, got {}", review.rating),
        });
    }

    if review.text.trim().is_empty() {
        return Err(ScoreError::InvalidReview {
            id: review.id,
            field: "text",
            reason: "must be non-empty".into(),
        });
    }

    if review.helpful_votes > review.total_votes {
        return Err(ScoreError::InvalidReview {
            id: review.id,
            field: "helpful_votes",
            reason: format!(
                "exceeds total_votes ({} > {})",
                review.helpful_votes, review.total_votes
            ),
        });
    }

    if review.date > reference_date {
        return Err(ScoreError::InvalidReview {
            id: review.id,
            field: "date",
            reason: format!(
                "{} is after the reference date {}",
                review.date, reference_date
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 23).unwrap()
    }

    fn valid_review() -> Review {
        Review {
            id: 1,
            product_id: 101,
            rating: 4,
            text: "Good value for money.".into(),
            helpful_votes: 5,
            total_votes: 6,
            date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
        }
    }

    #[test]
    fn test_valid_review_passes() {
        assert!(validate_review(&valid_review(), reference()).is_ok());
    }

    #[test]
    fn test_zero_total_votes_is_valid() {
        let review = Review {
            helpful_votes: 0,
            total_votes: 0,
            ..valid_review()
        };
        assert!(validate_review(&review, reference()).is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        for rating in [0u8, 6, 7] {
            let review = Review {
                rating,
                ..valid_review()
            };
            let err = validate_review(&review, reference()).unwrap_err();
            match err {
                ScoreError::InvalidReview { id, field, .. } => {
                    assert_eq!(id, 1);
                    assert_eq!(field, "rating");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_empty_text() {
        let review = Review {
            text: "   ".into(),
            ..valid_review()
        };
        let err = validate_review(&review, reference()).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidReview { field: "text", .. }
        ));
    }

    #[test]
    fn test_helpful_exceeds_total() {
        let review = Review {
            helpful_votes: 7,
            total_votes: 6,
            ..valid_review()
        };
        let err = validate_review(&review, reference()).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidReview {
                field: "helpful_votes",
                ..
            }
        ));
    }

    #[test]
    fn test_future_dated_review() {
        let review = Review {
            date: NaiveDate::from_ymd_opt(2025, 6, 24).unwrap(),
            ..valid_review()
        };
        let err = validate_review(&review, reference()).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidReview { field: "date", .. }
        ));
    }

    #[test]
    fn test_review_dated_on_reference_date_passes() {
        let review = Review {
            date: reference(),
            ..valid_review()
        };
        assert!(validate_review(&review, reference()).is_ok());
    }
}
