//! trustrank CLI - score reviews, rank products, compare orderings.
//!
//! Command-line entry point orchestrating the full pipeline:
//!
//! 1. Ingestion: load reviews from a JSON file (or the built-in sample)
//! 2. Scoring: validate each review and blend rating, sentiment,
//!    helpfulness, and recency into a trust score
//! 3. Aggregation: per-product means of rating and trust score
//! 4. Evaluation: Spearman correlation, top-K overlap, rank disagreement
//! 5. Rendering: aligned terminal tables
//!
//! Design philosophy:
//! - Fail fast with errors naming the offending review
//! - Reproducible runs: --as-of pins the reference date
//! - Make defaults sane (--color=true, sample data when no input given)

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;

use trustrank::config::Config;
use trustrank::ingest;
use trustrank::rendering::ReportRenderer;
use trustrank::{
    aggregate_by_product, EvalConfig, LexiconOracle, RankingEvaluator, TrustScorer,
};

/// Trust-weighted review scoring and ranking evaluation
///
/// trustrank blends each review's star rating with sentiment, helpfulness
/// votes, and recency into a single trust score, aggregates per product,
/// and reports how far the trust-weighted ranking diverges from the naive
/// average-rating ranking.
///
/// Examples:
///   trustrank                              # Run on the built-in sample
///   trustrank reviews.json                 # Score your own review set
///   trustrank --as-of 2025-06-23 --top-k 5 # Reproducible run, wider top-K
#[derive(Parser, Debug)]
#[command(name = "trustrank")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// JSON file with an array of review records
    ///
    /// Each record needs: id, product_id, rating (1-5), text,
    /// helpful_votes, total_votes, date (YYYY-MM-DD).
    /// If omitted, the built-in sample dataset is used.
    #[arg(value_name = "REVIEWS")]
    pub reviews: Option<PathBuf>,

    /// Reference date for the recency decay (YYYY-MM-DD)
    ///
    /// Review age is measured against this date. Defaults to today;
    /// pin it explicitly for reproducible output.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Top-K size for the overlap diagnostic
    ///
    /// Compares the K best products under each ordering. Must be between
    /// 1 and the number of products. Overrides trustrank.toml.
    #[arg(short = 'k', long, value_name = "N")]
    pub top_k: Option<usize>,

    /// Minimum |rank difference| to flag a product as a disagreement
    ///
    /// Products whose rank under TrustRank differs from their rank under
    /// average rating by at least this much appear in the disagreement
    /// table. Overrides trustrank.toml.
    #[arg(long, value_name = "T")]
    pub threshold: Option<f64>,

    /// Directory searched for trustrank.toml
    ///
    /// Weight blend and evaluator defaults can be tuned there.
    /// Defaults to the current directory.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Enable colored output
    ///
    /// Uses ANSI colors for headers and rank movement. Disable with
    /// --no-color when piping to files.
    #[arg(long, default_value = "true")]
    pub color: bool,

    /// Disable colored output
    ///
    /// Equivalent to --color=false.
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    ///
    /// Shows progress on stderr: config source, review counts, product
    /// counts.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = run(&cli)?;
    println!("{}", output);

    Ok(())
}

/// Execute the pipeline and return the rendered report.
fn run(cli: &Cli) -> Result<String> {
    let config = Config::load(&cli.root);

    if cli.verbose {
        match &config.source {
            Some(path) => eprintln!("Config: {}", path.display()),
            None => eprintln!("Config: (defaults)"),
        }
    }

    // Ingest
    let reviews = match &cli.reviews {
        Some(path) => ingest::load_reviews(path)?,
        None => ingest::sample_reviews(),
    };
    if cli.verbose {
        eprintln!("Loaded {} reviews", reviews.len());
    }

    // The library never defaults the reference date; "today" is resolved
    // here at the binary edge only
    let as_of = cli
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    if cli.verbose {
        eprintln!("Reference date: {}", as_of);
    }

    // Score and aggregate
    let oracle = LexiconOracle::new();
    let scorer = TrustScorer::with_weights(&oracle, as_of, config.weights.clone());
    let scored = scorer.score_batch(&reviews)?;

    let aggregates = aggregate_by_product(&scored);
    if cli.verbose {
        eprintln!("Aggregated {} products", aggregates.len());
    }

    // Evaluate
    let eval_config = EvalConfig {
        top_k: cli.top_k.unwrap_or(config.eval.top_k),
        disagreement_threshold: cli.threshold.unwrap_or(config.eval.disagreement_threshold),
    };
    let evaluator = RankingEvaluator::new(aggregates);
    let report = evaluator.report(&eval_config)?;

    // Render
    let use_color = cli.color && !cli.no_color;
    let renderer = ReportRenderer::new(use_color);
    Ok(renderer.render(evaluator.aggregates(), &report))
}
