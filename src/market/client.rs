//! Binance REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::candle::{extract_candles, Candle};
use super::CandleSource;
use crate::config::MarketConfig;
use crate::error::MarketError;

/// HTTP client for the Binance kline endpoint.
///
/// Stateless: every [`CandleSource::recent_candles`] call is one independent
/// GET with a fixed request timeout.
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    /// Create a client from the market configuration.
    pub fn new(config: &MarketConfig) -> Result<Self, MarketError> {
        Self::with_base_url(&config.api_url, config.request_timeout_secs)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, MarketError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CandleSource for BinanceClient {
    async fn recent_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, MarketError> {
        let url = format!("{}/api/v3/klines", self.base_url);

        debug!(%symbol, %interval, limit, "Fetching candles");

        let payload: Value = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        let candles = extract_candles(&payload)?;
        debug!(count = candles.len(), "Fetched candles");

        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_from_default_config() {
        let client = BinanceClient::new(&MarketConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://api.binance.com");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = BinanceClient::with_base_url("http://localhost:9999/", 1).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
