//! trustrank - trust-weighted review scoring and ranking evaluation
//!
//! Computes a composite "TrustRank" score per product review by blending
//! the star rating with sentiment, helpfulness, and recency signals, then
//! measures how the resulting per-product ranking diverges from a naive
//! average-rating ranking.
//!
//! # Architecture
//!
//! ```text
//! Reviews → Validation → Scoring → Aggregation → Evaluation → Rendering
//!    ↓          ↓           ↓           ↓            ↓            ↓
//!  serde    fail-fast   sentiment   per-product   spearman     aligned
//!  json     field+id     oracle       means      / top-K /      ANSI
//!                       (injected)               rank-diff     tables
//! ```
//!
//! The scoring core is pure: one review plus a fixed reference date in,
//! one score out, with the sentiment model injected behind the
//! `SentimentOracle` trait. Evaluation is a stateless read over the
//! aggregate table. Ingestion and rendering are thin non-core edges.

pub mod config;
pub mod error;
pub mod eval;
pub mod ingest;
pub mod rendering;
pub mod scoring;
pub mod sentiment;
pub mod types;

// Re-export core types
pub use types::{
    EvalConfig, ProductAggregate, RankComparison, Review, ScoredReview, ScoringWeights,
};

// Re-export the pipeline surface
pub use error::{EvalError, OracleError, ScoreError};
pub use eval::{EvalReport, RankingEvaluator};
pub use scoring::{aggregate_by_product, TrustScorer};
pub use sentiment::{FixedOracle, LexiconOracle, SentimentOracle};
