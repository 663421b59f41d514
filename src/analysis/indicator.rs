//! Numeric reductions: arithmetic mean and exponential moving average.

/// Arithmetic mean of a slice.
///
/// Returns `NaN` for an empty slice; callers guard length before computing.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Exponential moving average with smoothing `k = 2 / (period + 1)`.
///
/// Seeded with the first value; returns the full series, one entry per input
/// value. Empty input yields an empty series.
#[must_use]
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len());
    let mut prev = first;
    series.push(prev);

    for &value in &values[1..] {
        prev = value * k + prev * (1.0 - k);
        series.push(prev);
    }

    series
}
