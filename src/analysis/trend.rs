//! Trend classification from closing prices.

use super::indicator::{ema, mean};
use crate::error::AnalysisError;

/// Minimum closes required before [`analyze`] will compute anything.
pub const MIN_ANALYSIS_CLOSES: usize = 10;

/// Minimum closes required for the [`short_trend`] comparison.
pub const MIN_TREND_CLOSES: usize = 2;

/// Window of the simple moving average used by [`analyze`].
const MA_WINDOW: usize = 20;

/// EMA spans compared for the market bias.
const EMA_FAST_SPAN: usize = 50;
const EMA_SLOW_SPAN: usize = 200;

/// Direction of the market relative to a reference price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Longer-horizon bias from the EMA crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketBias {
    Bullish,
    Bearish,
}

/// Derived scalars for one analysis pass. Created per request, discarded
/// after formatting into a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketAnalysis {
    /// Most recent closing price.
    pub latest: f64,
    /// Mean of the last up-to-20 closes.
    pub ma20: f64,
    /// `Up` iff the latest close exceeds the mean.
    pub direction: TrendDirection,
    /// Last value of the 50-span EMA over the full sequence.
    pub ema50: f64,
    /// Last value of the 200-span EMA over the full sequence.
    pub ema200: f64,
    /// `Bullish` iff `ema50 > ema200`.
    pub bias: MarketBias,
}

/// Evaluate the trend of a closing-price sequence, oldest first.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] when fewer than
/// [`MIN_ANALYSIS_CLOSES`] closes are available. The guard runs before any
/// computation.
pub fn analyze(closes: &[f64]) -> Result<MarketAnalysis, AnalysisError> {
    if closes.len() < MIN_ANALYSIS_CLOSES {
        return Err(AnalysisError::InsufficientData {
            have: closes.len(),
            need: MIN_ANALYSIS_CLOSES,
        });
    }

    let latest = closes[closes.len() - 1];
    let window_start = closes.len().saturating_sub(MA_WINDOW);
    let ma20 = mean(&closes[window_start..]);

    let direction = if latest > ma20 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    // Spans may exceed the sequence length; the recursive EMA is defined for
    // any non-empty input and the 10-close guard keeps it meaningful.
    let ema50 = ema(closes, EMA_FAST_SPAN).last().copied().unwrap_or(latest);
    let ema200 = ema(closes, EMA_SLOW_SPAN).last().copied().unwrap_or(latest);

    let bias = if ema50 > ema200 {
        MarketBias::Bullish
    } else {
        MarketBias::Bearish
    };

    Ok(MarketAnalysis {
        latest,
        ma20,
        direction,
        ema50,
        ema200,
        bias,
    })
}

/// Compare the last two closes only, independent of any moving average.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] when fewer than two closes are
/// available.
pub fn short_trend(closes: &[f64]) -> Result<TrendDirection, AnalysisError> {
    if closes.len() < MIN_TREND_CLOSES {
        return Err(AnalysisError::InsufficientData {
            have: closes.len(),
            need: MIN_TREND_CLOSES,
        });
    }

    let last = closes[closes.len() - 1];
    let previous = closes[closes.len() - 2];

    Ok(if last > previous {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    })
}
