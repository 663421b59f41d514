//! Marketpulse - a Telegram bot for quick BTC/USDT trend summaries.
//!
//! On command, the bot fetches recent hourly candles from the Binance kline
//! REST endpoint and replies with a short trend summary: latest price against
//! a 20-period mean, plus an EMA50/EMA200 crossover bias.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML with env overrides
//! - [`error`] - Error types for the crate
//! - [`market`] - Candle fetching from the exchange REST API
//! - [`analysis`] - Pure trend evaluation over closing prices
//! - [`bot`] - Telegram command parsing, handling, and reply formatting
//!
//! # Example
//!
//! ```no_run
//! use marketpulse::analysis::analyze;
//!
//! let closes: Vec<f64> = (0..100).map(|i| 50_000.0 + i as f64).collect();
//! let report = analyze(&closes).unwrap();
//! assert!(report.ema50 > report.ema200);
//! ```

pub mod analysis;
pub mod bot;
pub mod config;
pub mod error;
pub mod market;

pub use error::{Error, Result};
