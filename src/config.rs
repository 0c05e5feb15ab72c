//! Configuration loading from trustrank.toml.
//!
//! Deployments tune the weight blend and evaluator parameters without
//! recompiling:
//!
//! ```toml
//! [weights]
//! rating-weight = 0.4
//! sentiment-weight = 0.2
//! helpfulness-weight = 0.3
//! decay-weight = 0.1
//! decay-days = 365.0
//!
//! [eval]
//! top-k = 3
//! disagreement-threshold = 3.0
//! ```
//!
//! Fields are individually optional; anything absent falls back to the
//! built-in defaults. CLI flags override file values at the binary edge.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::{EvalConfig, ScoringWeights};

/// Resolved configuration: defaults overlaid with whatever the file set.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    pub weights: ScoringWeights,
    pub eval: EvalConfig,
}

/// Raw config as deserialized from TOML. Every field optional.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    weights: Option<RawWeights>,
    eval: Option<RawEval>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawWeights {
    rating_weight: Option<f64>,
    sentiment_weight: Option<f64>,
    helpfulness_weight: Option<f64>,
    decay_weight: Option<f64>,
    sentiment_scale: Option<f64>,
    helpfulness_scale: Option<f64>,
    decay_scale: Option<f64>,
    decay_days: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawEval {
    top_k: Option<usize>,
    disagreement_threshold: Option<f64>,
}

impl Config {
    /// Load configuration from the given directory.
    ///
    /// Reads `trustrank.toml` if present; otherwise returns defaults.
    /// A present-but-unparseable file also falls back to defaults (the
    /// binary surfaces the path it actually used via `source`).
    pub fn load(directory: &Path) -> Self {
        let path = directory.join("trustrank.toml");
        if path.exists() {
            if let Some(config) = Self::load_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        let defaults = ScoringWeights::default();
        let w = raw.weights.unwrap_or_default();
        let weights = ScoringWeights {
            rating_weight: w.rating_weight.unwrap_or(defaults.rating_weight),
            sentiment_weight: w.sentiment_weight.unwrap_or(defaults.sentiment_weight),
            helpfulness_weight: w.helpfulness_weight.unwrap_or(defaults.helpfulness_weight),
            decay_weight: w.decay_weight.unwrap_or(defaults.decay_weight),
            sentiment_scale: w.sentiment_scale.unwrap_or(defaults.sentiment_scale),
            helpfulness_scale: w.helpfulness_scale.unwrap_or(defaults.helpfulness_scale),
            decay_scale: w.decay_scale.unwrap_or(defaults.decay_scale),
            decay_days: w.decay_days.unwrap_or(defaults.decay_days),
        };

        let eval_defaults = EvalConfig::default();
        let e = raw.eval.unwrap_or_default();
        let eval = EvalConfig {
            top_k: e.top_k.unwrap_or(eval_defaults.top_k),
            disagreement_threshold: e
                .disagreement_threshold
                .unwrap_or(eval_defaults.disagreement_threshold),
        };

        Self {
            source: Some(source),
            weights,
            eval,
        }
    }
}
