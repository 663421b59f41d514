//! Kline payload extraction.
//!
//! Binance returns klines as a JSON array of arrays, where index 0 of each
//! row is the open time in milliseconds and index 4 is the closing price as a
//! string. On error the endpoint returns an object such as
//! `{"code": -1121, "msg": "Invalid symbol."}` instead of an array.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::MarketError;

/// A single price bar. Only the open time and closing price are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Bar open time.
    pub open_time: DateTime<Utc>,
    /// Closing price.
    pub close: f64,
}

/// Extract candles from a kline response payload.
///
/// Individual malformed rows (wrong shape, too short, unparseable timestamp
/// or close) are skipped rather than failing the whole batch. Rows are
/// returned in payload order, which the exchange guarantees is oldest first.
///
/// # Errors
///
/// - [`MarketError::Exchange`] when the payload is not an array (the
///   exchange's error-object response).
/// - [`MarketError::EmptyResponse`] when the array is empty.
/// - [`MarketError::NoValidCandles`] when every row was malformed.
pub fn extract_candles(payload: &Value) -> Result<Vec<Candle>, MarketError> {
    let rows = payload
        .as_array()
        .ok_or_else(|| MarketError::Exchange(payload.to_string()))?;

    if rows.is_empty() {
        return Err(MarketError::EmptyResponse);
    }

    let candles: Vec<Candle> = rows.iter().filter_map(extract_row).collect();

    if candles.is_empty() {
        return Err(MarketError::NoValidCandles);
    }

    Ok(candles)
}

/// Extract a single kline row, or `None` if it is malformed.
fn extract_row(row: &Value) -> Option<Candle> {
    let fields = row.as_array()?;
    if fields.len() <= 4 {
        return None;
    }

    let open_time = DateTime::from_timestamp_millis(fields[0].as_i64()?)?;
    let close = number_field(&fields[4])?;

    Some(Candle { open_time, close })
}

/// Read a numeric field that the exchange may encode as a string or a number.
fn number_field(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Closing prices of a candle slice, in the same order.
#[must_use]
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(open_time_ms: i64, close: &str) -> Value {
        // Full kline row shape: open time, O, H, L, C, volume, ...
        json!([open_time_ms, "100.0", "110.0", "90.0", close, "1234.5"])
    }

    #[test]
    fn extracts_well_formed_rows() {
        let payload = json!([row(1_700_000_000_000, "50000.5"), row(1_700_003_600_000, "50100.0")]);

        let candles = extract_candles(&payload).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].close, 50000.5);
        assert_eq!(candles[1].close, 50100.0);
        assert!(candles[0].open_time < candles[1].open_time);
    }

    #[test]
    fn accepts_numeric_close() {
        let payload = json!([[1_700_000_000_000i64, "1", "2", "3", 42.5, "0"]]);

        let candles = extract_candles(&payload).unwrap();
        assert_eq!(candles[0].close, 42.5);
    }

    #[test]
    fn error_object_is_exchange_error() {
        let payload = json!({"code": -1121, "msg": "Invalid symbol."});

        let err = extract_candles(&payload).unwrap_err();
        assert!(matches!(err, MarketError::Exchange(msg) if msg.contains("-1121")));
    }

    #[test]
    fn empty_array_is_empty_response() {
        let payload = json!([]);

        assert!(matches!(
            extract_candles(&payload),
            Err(MarketError::EmptyResponse)
        ));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let payload = json!([
            row(1_700_000_000_000, "50000.0"),
            "not a row",
            [1_700_003_600_000i64, "1", "2"],
            [1_700_007_200_000i64, "1", "2", "3", "not-a-price", "0"],
            ["bad-timestamp", "1", "2", "3", "50300.0", "0"],
            row(1_700_010_800_000, "50400.0"),
        ]);

        let candles = extract_candles(&payload).unwrap();
        assert_eq!(closes(&candles), vec![50000.0, 50400.0]);
    }

    #[test]
    fn all_rows_malformed_is_no_valid_candles() {
        let payload = json!(["junk", [1, 2], {"close": 5}]);

        assert!(matches!(
            extract_candles(&payload),
            Err(MarketError::NoValidCandles)
        ));
    }

    #[test]
    fn closes_preserves_order() {
        let candles = vec![
            Candle {
                open_time: DateTime::from_timestamp_millis(0).unwrap(),
                close: 1.0,
            },
            Candle {
                open_time: DateTime::from_timestamp_millis(3_600_000).unwrap(),
                close: 2.0,
            },
        ];

        assert_eq!(closes(&candles), vec![1.0, 2.0]);
    }
}
