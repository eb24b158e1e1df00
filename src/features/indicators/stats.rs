//! Descriptive statistics over indicator columns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Mean, minimum and maximum of one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

pub fn summarize(values: &[f64]) -> Option<Summary> {
    Some(Summary {
        mean: mean(values)?,
        min: min(values)?,
        max: max(values)?,
    })
}

/// Observed value range of a column, used to place values on colour and size scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn of(values: &[f64]) -> Option<Self> {
        Some(Self {
            min: min(values)?,
            max: max(values)?,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A constant column has no usable span
    pub fn is_degenerate(&self) -> bool {
        self.span().abs() <= f64::EPSILON
    }

    /// Position of `value` within the extent, in `[0, 1]`.
    ///
    /// A degenerate extent places every value at the midpoint.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

/// Min-max scale a column onto `[0, scale]`.
///
/// The column's own minimum maps to 0 and its maximum to `scale`. A constant
/// column maps to all zeros.
pub fn normalize_min_max(values: &[f64], scale: f64) -> Vec<f64> {
    match Extent::of(values) {
        Some(extent) if !extent.is_degenerate() => values
            .iter()
            .map(|v| (v - extent.min) / extent.span() * scale)
            .collect(),
        _ => vec![0.0; values.len()],
    }
}

/// Pearson correlation coefficient.
///
/// `None` when fewer than two paired samples exist, the lengths differ, or
/// either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= f64::EPSILON || var_y <= f64::EPSILON {
        return None;
    }

    Some((covariance / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise correlation between named columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major, `labels.len()` square
    pub values: Vec<Vec<f64>>,
    /// Number of observations per column
    pub samples: usize,
    /// True when at least one off-diagonal entry was undefined and set to 0
    pub degenerate: bool,
}

/// Correlate every pair of columns.
///
/// The diagonal is always 1. Pairs whose coefficient is undefined (too few
/// samples, constant column) fall back to 0 and mark the matrix degenerate.
pub fn correlation_matrix(labels: &[&str], columns: &[Vec<f64>]) -> CorrelationMatrix {
    let n = labels.len().min(columns.len());
    let mut values = vec![vec![0.0; n]; n];
    let mut degenerate = false;

    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = match pearson(&columns[i], &columns[j]) {
                Some(r) => r,
                None => {
                    degenerate = true;
                    0.0
                }
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        labels: labels.iter().take(n).map(|l| l.to_string()).collect(),
        values,
        samples: columns.iter().map(Vec::len).min().unwrap_or(0),
        degenerate,
    }
}

/// Relative change from `first` to `last` in percent; `None` when `first` is 0
pub fn percent_change(first: f64, last: f64) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}
