//! Pure trend evaluation over closing-price sequences.
//!
//! Every function here is a pure function of its input slice; no state is
//! carried between evaluations.

mod indicator;
mod trend;

pub use indicator::{ema, mean};
pub use trend::{
    analyze, short_trend, MarketAnalysis, MarketBias, TrendDirection, MIN_ANALYSIS_CLOSES,
    MIN_TREND_CLOSES,
};
