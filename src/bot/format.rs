//! Reply formatting for Telegram `MarkdownV2`.
//!
//! Every function here returns a complete, valid `MarkdownV2` message.
//! Numeric values go into code spans, which need no escaping; free text goes
//! through [`escape_markdown`].

use chrono::{DateTime, Utc};

use super::command::command_help;
use crate::analysis::{MarketAnalysis, MarketBias, TrendDirection};

/// Reply when `/analysis` has no usable data.
pub const NOT_ENOUGH_DATA: &str = "⚠️ Not enough market data to analyze\\.";

/// Reply when `/trend` has no usable data.
pub const NO_DATA: &str = "⚠️ No data available\\.";

/// Format the `/analysis` reply.
#[must_use]
pub fn analysis_message(symbol: &str, as_of: DateTime<Utc>, report: &MarketAnalysis) -> String {
    let (trend_emoji, trend_label) = direction_label(report.direction);
    let (bias_emoji, bias_label) = match report.bias {
        MarketBias::Bullish => ("🐂", "BULLISH"),
        MarketBias::Bearish => ("🐻", "BEARISH"),
    };

    format!(
        "📊 *Market Analysis*\n\
        \n\
        📋 Symbol: `{}`\n\
        🕐 As of: `{}`\n\
        💵 Price: `{:.2}`\n\
        📏 MA20: `{:.2}`\n\
        {} Trend: *{}*\n\
        \n\
        ⚖️ EMA50: `{:.2}`\n\
        ⚖️ EMA200: `{:.2}`\n\
        {} Bias: *{}*",
        escape_markdown(symbol),
        as_of.format("%Y-%m-%d %H:%M UTC"),
        report.latest,
        report.ma20,
        trend_emoji,
        trend_label,
        report.ema50,
        report.ema200,
        bias_emoji,
        bias_label,
    )
}

/// Format the `/trend` reply.
#[must_use]
pub fn trend_message(direction: TrendDirection) -> String {
    let (emoji, label) = direction_label(direction);
    format!("Current Trend: *{label}* {emoji}")
}

/// Format the `/version` reply.
#[must_use]
pub fn version_message() -> String {
    format!("🔖 marketpulse `{}`", env!("CARGO_PKG_VERSION"))
}

/// Reply for a message that looks like a command but is not recognized.
#[must_use]
pub fn unknown_command_reply() -> String {
    format!("⚠️ Unknown command\\.\n\n{}", command_help())
}

const fn direction_label(direction: TrendDirection) -> (&'static str, &'static str) {
    match direction {
        TrendDirection::Up => ("📈", "UP"),
        TrendDirection::Down => ("📉", "DOWN"),
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn sample_report() -> MarketAnalysis {
        let closes: Vec<f64> = (0..100).map(|i| 50_000.0 + f64::from(i)).collect();
        analyze(&closes).unwrap()
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("BTC_USDT"), "BTC\\_USDT");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("test.com"), "test\\.com");
    }

    #[test]
    fn analysis_message_contains_all_fields() {
        let report = sample_report();
        let as_of = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let message = analysis_message("BTCUSDT", as_of, &report);

        assert!(message.contains("Market Analysis"));
        assert!(message.contains("`BTCUSDT`"));
        assert!(message.contains("Price: `50099.00`"));
        assert!(message.contains("MA20:"));
        assert!(message.contains("EMA50:"));
        assert!(message.contains("EMA200:"));
        assert!(message.contains("*UP*"));
        assert!(message.contains("*BULLISH*"));
        assert!(message.contains("2023-11-14"));
    }

    #[test]
    fn trend_message_labels() {
        assert_eq!(trend_message(TrendDirection::Up), "Current Trend: *UP* 📈");
        assert_eq!(
            trend_message(TrendDirection::Down),
            "Current Trend: *DOWN* 📉"
        );
    }

    #[test]
    fn version_message_contains_crate_version() {
        assert!(version_message().contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_command_reply_includes_help() {
        let reply = unknown_command_reply();
        assert!(reply.contains("Unknown command"));
        assert!(reply.contains("/analysis"));
    }
}
