/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::primitives::CandlestickGranularity;
use crate::presentation::serialization::exact_decimal_opt;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Open, high, low and close of one candle side
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CandlestickData {
    /// Open
    #[serde(default, with = "exact_decimal_opt")]
    pub o: Option<Decimal>,
    /// High
    #[serde(default, with = "exact_decimal_opt")]
    pub h: Option<Decimal>,
    /// Low
    #[serde(default, with = "exact_decimal_opt")]
    pub l: Option<Decimal>,
    /// Close
    #[serde(default, with = "exact_decimal_opt")]
    pub c: Option<Decimal>,
}

impl CandlestickData {
    /// High minus low
    #[must_use]
    pub fn range(&self) -> Option<Decimal> {
        Some(self.h? - self.l?)
    }
}

/// One candle
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Candlestick {
    /// Start time
    pub time: Option<String>,
    /// Bid candle
    pub bid: Option<CandlestickData>,
    /// Ask candle
    pub ask: Option<CandlestickData>,
    /// Mid candle
    pub mid: Option<CandlestickData>,
    /// Number of prices seen
    pub volume: Option<i64>,
    /// Whether the candle is closed
    pub complete: Option<bool>,
}

/// Candles for one instrument and granularity
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct InstrumentCandles {
    /// Instrument
    pub instrument: Option<String>,
    /// Granularity
    pub granularity: Option<CandlestickGranularity>,
    /// Candles, oldest first
    pub candles: Option<Vec<Candlestick>>,
}

/// Share of orders around one price level
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookBucket {
    /// Lowest price of the bucket
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Percentage of long orders
    #[serde(default, with = "exact_decimal_opt")]
    pub long_count_percent: Option<Decimal>,
    /// Percentage of short orders
    #[serde(default, with = "exact_decimal_opt")]
    pub short_count_percent: Option<Decimal>,
}

/// Snapshot of the order book
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// Instrument
    pub instrument: Option<String>,
    /// Snapshot time
    pub time: Option<String>,
    /// Price when the snapshot was taken
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Width of each bucket
    #[serde(default, with = "exact_decimal_opt")]
    pub bucket_width: Option<Decimal>,
    /// Buckets, lowest price first
    pub buckets: Option<Vec<OrderBookBucket>>,
}

/// Share of positions around one price level
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionBookBucket {
    /// Lowest price of the bucket
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Percentage of long positions
    #[serde(default, with = "exact_decimal_opt")]
    pub long_count_percent: Option<Decimal>,
    /// Percentage of short positions
    #[serde(default, with = "exact_decimal_opt")]
    pub short_count_percent: Option<Decimal>,
}

/// Snapshot of the position book
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionBook {
    /// Instrument
    pub instrument: Option<String>,
    /// Snapshot time
    pub time: Option<String>,
    /// Price when the snapshot was taken
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Width of each bucket
    #[serde(default, with = "exact_decimal_opt")]
    pub bucket_width: Option<Decimal>,
    /// Buckets, lowest price first
    pub buckets: Option<Vec<PositionBookBucket>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn candles_decode_only_requested_sides() {
        let candles: InstrumentCandles = serde_json::from_value(json!({
            "instrument": "EUR_USD",
            "granularity": "M5",
            "candles": [{
                "time": "2024-01-15T10:30:00.000000000Z",
                "volume": 42,
                "complete": true,
                "mid": {"o": "1.08500", "h": "1.08560", "l": "1.08480", "c": "1.08520"}
            }]
        }))
        .unwrap();
        assert_eq!(candles.granularity, Some(CandlestickGranularity::M5));
        let candle = &candles.candles.unwrap()[0];
        assert!(candle.bid.is_none());
        assert_eq!(candle.mid.as_ref().unwrap().range().unwrap().to_string(), "0.00080");
    }
}
