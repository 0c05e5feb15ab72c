//! Spearman rank correlation.

use crate::eval::ranking::average_ranks;

/// Spearman's rho between two score series.
///
/// Computed as the Pearson correlation of the average-rank vectors, which
/// handles ties by the standard convention. Returns `None` - correlation
/// undefined - when:
/// - the series have fewer than 2 points (or mismatched lengths), or
/// - either series is constant (zero variance), where any rho would be an
///   artifact.
///
/// The explicit `None` is deliberate: callers render it as "undefined"
/// instead of a sentinel number, and can still proceed with the rest of
/// their report.
pub fn spearman(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    pearson(&average_ranks(x), &average_ranks(y))
}

/// Pearson correlation, `None` on zero variance in either input.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(cov / (var_x * var_y).sqrt())
}
