//! Candle fetching from the exchange REST API.
//!
//! The exchange kline endpoint returns a JSON array of arrays; [`candle`]
//! extracts closing prices out of that payload leniently, and [`client`]
//! performs the HTTP request. Command handlers depend on the [`CandleSource`]
//! trait rather than the concrete client so they can be tested without
//! network access.

mod candle;
mod client;

pub use candle::{closes, extract_candles, Candle};
pub use client::BinanceClient;

use async_trait::async_trait;

use crate::error::MarketError;

/// Source of recent candle data for a trading symbol.
///
/// Each call performs one fresh fetch; implementations hold no state across
/// invocations.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch up to `limit` recent candles, oldest first.
    async fn recent_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, MarketError>;
}
