//! Tabular report rendering.
//!
//! Renders the evaluation as plain aligned text:
//!
//! ```text
//! Product Score Comparison
//!   product  reviews  avg rating  trustrank
//!       101        2        4.50       4.19
//!
//! Spearman rank correlation: 0.8788
//! Top-3 overlap: 2/3 products shared between orderings
//!
//! Rank disagreement (|diff| >= 3):
//!   product  rank by avg  rank by trust   diff
//!       109          3.5            8.0   +4.5
//! ```
//!
//! Colors are optional so output can be piped to files cleanly.

use crate::eval::ranking::descending_order;
use crate::eval::EvalReport;
use crate::rendering::colors::Colorizer;
use crate::types::ProductAggregate;

/// Builds the terminal report for one evaluation run.
pub struct ReportRenderer {
    use_color: bool,
}

impl ReportRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render the full report: score table, summary statistics,
    /// disagreement table, final TrustRank ordering.
    pub fn render(&self, aggregates: &[ProductAggregate], report: &EvalReport) -> String {
        let mut out = String::new();

        self.render_score_table(&mut out, aggregates);
        out.push('\n');
        self.render_summary(&mut out, report);
        out.push('\n');
        self.render_disagreements(&mut out, report);
        out.push('\n');
        self.render_final_ranking(&mut out, aggregates);

        out
    }

    fn render_score_table(&self, out: &mut String, aggregates: &[ProductAggregate]) {
        out.push_str(&self.header("Product Score Comparison"));
        out.push('\n');
        out.push_str("  product  reviews  avg rating  trustrank\n");

        for agg in aggregates {
            // Pad before colorizing: escape codes must not count toward
            // column width
            let id = format!("{:>7}", agg.product_id);
            out.push_str(&format!(
                "  {}  {:>7}  {:>10.2}  {:>9.4}\n",
                self.product_id(&id),
                agg.review_count,
                agg.avg_rating,
                agg.trust_score,
            ));
        }
    }

    fn render_summary(&self, out: &mut String, report: &EvalReport) {
        out.push_str(&self.label("Spearman rank correlation"));
        out.push_str(": ");
        match report.spearman {
            Some(rho) => out.push_str(&format!("{:.4}", rho)),
            None => out.push_str(&self.undefined(
                "undefined (fewer than 2 products or zero variance)",
            )),
        }
        out.push('\n');

        out.push_str(&self.label(&format!("Top-{} overlap", report.top_k)));
        out.push_str(&format!(
            ": {}/{} products shared between orderings\n",
            report.top_k_overlap, report.top_k
        ));
    }

    fn render_disagreements(&self, out: &mut String, report: &EvalReport) {
        out.push_str(&self.header(&format!(
            "Rank disagreement (|diff| >= {})",
            report.disagreement_threshold
        )));
        out.push('\n');

        if report.disagreements.is_empty() {
            out.push_str("  none - the orderings agree within the threshold\n");
            return;
        }

        out.push_str("  product  rank by avg  rank by trust   diff\n");
        for cmp in &report.disagreements {
            let id = format!("{:>7}", cmp.product_id);
            let diff = format!("{:>5}", format!("{:+.1}", cmp.rank_diff));
            out.push_str(&format!(
                "  {}  {:>11.1}  {:>13.1}  {}\n",
                self.product_id(&id),
                cmp.rank_by_avg,
                cmp.rank_by_trust,
                self.rank_diff(&diff, cmp.rank_diff),
            ));
        }
    }

    fn render_final_ranking(&self, out: &mut String, aggregates: &[ProductAggregate]) {
        out.push_str(&self.header("Final Ranking by TrustRank"));
        out.push('\n');

        let trust_scores: Vec<f64> = aggregates.iter().map(|a| a.trust_score).collect();
        for (position, idx) in descending_order(&trust_scores).into_iter().enumerate() {
            let agg = &aggregates[idx];
            let id = format!("{:>7}", agg.product_id);
            out.push_str(&format!(
                "  {:>2}. {}  {:.4}\n",
                position + 1,
                self.product_id(&id),
                agg.trust_score,
            ));
        }
    }

    fn header(&self, s: &str) -> String {
        if self.use_color {
            Colorizer::header(s)
        } else {
            s.to_string()
        }
    }

    fn label(&self, s: &str) -> String {
        if self.use_color {
            Colorizer::label(s)
        } else {
            s.to_string()
        }
    }

    fn undefined(&self, s: &str) -> String {
        if self.use_color {
            Colorizer::undefined(s)
        } else {
            s.to_string()
        }
    }

    fn product_id(&self, s: &str) -> String {
        if self.use_color {
            Colorizer::product_id(s)
        } else {
            s.to_string()
        }
    }

    fn rank_diff(&self, s: &str, diff: f64) -> String {
        if self.use_color {
            Colorizer::rank_diff(s, diff)
        } else {
            s.to_string()
        }
    }
}
