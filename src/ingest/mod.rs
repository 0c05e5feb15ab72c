//! Review ingestion - the non-core edge that feeds the scorer.
//!
//! The core consumes `Review` records and does not care where they come
//! from. This module provides the two sources the CLI uses: a JSON file
//! (an array of reviews) and a built-in sample dataset for running the
//! pipeline without any input.

mod sample;

pub use sample::sample_reviews;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Review;

/// Load reviews from a JSON file containing an array of review objects:
///
/// ```json
/// [
///   {
///     "id": 1,
///     "product_id": 101,
///     "rating": 5,
///     "text": "Great product, loved the quality.",
///     "helpful_votes": 9,
///     "total_votes": 10,
///     "date": "2024-06-01"
///   }
/// ]
/// ```
///
/// Parsing is structural only - field invariants are checked later by the
/// scorer's validation pass, which reports the offending review id.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reviews file '{}'", path.display()))?;

    let reviews: Vec<Review> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse reviews from '{}'", path.display()))?;

    Ok(reviews)
}
