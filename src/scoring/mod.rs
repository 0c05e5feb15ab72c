//! TrustRank scoring - from raw reviews to per-product aggregates.
//!
//! The per-review score blends four signals onto a rating-like scale:
//!
//! ```text
//! sentiment   = oracle(text)                                  // [-1, 1]
//! helpfulness = helpful_votes / total_votes (0 if no votes)   // [0, 1]
//! time_decay  = exp(-age_days / 365)                          // (0, 1]
//!
//! trust = rating      * 0.4
//!       + sentiment   * 5 * 0.2
//!       + helpfulness * 5 * 0.3
//!       + time_decay  * 5 * 0.1
//! ```
//!
//! All constants are named fields of `ScoringWeights`. The blend is a pure
//! function of one review plus a fixed reference date: no hidden globals,
//! no cross-review dependency, so batch scoring is order-independent and
//! trivially parallelizable by a caller that needs it.
//!
//! Aggregation groups scored reviews by product id and takes arithmetic
//! means of both the raw rating and the trust score. The reduction is
//! commutative, so review order never changes the output.

mod aggregate;
mod scorer;
mod validate;

pub use aggregate::aggregate_by_product;
pub use scorer::TrustScorer;
pub use validate::validate_review;
