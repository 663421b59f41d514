//! Settings loading and validation.
//!
//! Provides the main [`Config`] struct aggregating market and logging
//! settings. Every field has a serde default, so `Config::load` on a missing
//! file yields a fully usable default configuration.

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Market data configuration.
///
/// Controls which symbol is analyzed and how candles are requested from the
/// exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Base URL of the exchange REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Trading pair symbol, e.g. `BTCUSDT`.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Candle interval, e.g. `1h`.
    #[serde(default = "default_interval")]
    pub interval: String,
    /// Number of candles to request per command (max 1000 on Binance).
    #[serde(default = "default_candle_limit")]
    pub candle_limit: u32,
    /// Per-request network timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.binance.com".into()
}

fn default_symbol() -> String {
    "BTCUSDT".into()
}

fn default_interval() -> String {
    "1h".into()
}

const fn default_candle_limit() -> u32 {
    200
}

const fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            symbol: default_symbol(),
            interval: default_interval(),
            candle_limit: default_candle_limit(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the bot runs on defaults. A file that
    /// exists but cannot be read or parsed is a startup error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn validate(&self) -> Result<()> {
        if self.market.symbol.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "market.symbol",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if self.market.interval.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "market.interval",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if self.market.candle_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market.candle_limit",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.market.symbol, "BTCUSDT");
        assert_eq!(config.market.interval, "1h");
        assert_eq!(config.market.candle_limit, 200);
        assert_eq!(config.market.request_timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_override() {
        let toml = r#"
            [market]
            symbol = "ETHUSDT"
            candle_limit = 100
        "#;
        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.market.symbol, "ETHUSDT");
        assert_eq!(config.market.candle_limit, 100);
        // Untouched fields keep their defaults.
        assert_eq!(config.market.interval, "1h");
    }

    #[test]
    fn rejects_empty_symbol() {
        let toml = r#"
            [market]
            symbol = ""
        "#;
        assert!(Config::parse_toml(toml).is_err());
    }

    #[test]
    fn rejects_zero_candle_limit() {
        let toml = r#"
            [market]
            candle_limit = 0
        "#;
        assert!(Config::parse_toml(toml).is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(Config::parse_toml("[market").is_err());
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let config = Config::load("definitely-not-a-real-config.toml").unwrap();
        assert_eq!(config.market.symbol, "BTCUSDT");
    }
}
