/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::serialization::exact_decimal_opt;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One level of available liquidity
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PriceBucket {
    /// Price of the level
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Units available at that price
    pub liquidity: Option<i64>,
}

/// Factors converting quote currency amounts into the account home currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteHomeConversionFactors {
    /// Factor for positive amounts
    #[serde(default, with = "exact_decimal_opt")]
    pub positive_units: Option<Decimal>,
    /// Factor for negative amounts
    #[serde(default, with = "exact_decimal_opt")]
    pub negative_units: Option<Decimal>,
}

/// Units that can be traded right now
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UnitsAvailableDetails {
    /// Units for a long order
    #[serde(default, with = "exact_decimal_opt")]
    pub long: Option<Decimal>,
    /// Units for a short order
    #[serde(default, with = "exact_decimal_opt")]
    pub short: Option<Decimal>,
}

/// Units available per position fill mode
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitsAvailable {
    /// With the account default fill mode
    pub default: Option<UnitsAvailableDetails>,
    /// With `REDUCE_FIRST`
    pub reduce_first: Option<UnitsAvailableDetails>,
    /// With `REDUCE_ONLY`
    pub reduce_only: Option<UnitsAvailableDetails>,
    /// With `OPEN_ONLY`
    pub open_only: Option<UnitsAvailableDetails>,
}

/// Bid/ask quote for one instrument as seen by the account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientPrice {
    /// Always `PRICE` on the stream
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Instrument
    pub instrument: Option<String>,
    /// Quote time
    pub time: Option<String>,
    /// Deprecated tradeable status
    pub status: Option<String>,
    /// Whether the instrument can be traded
    pub tradeable: Option<bool>,
    /// Bid ladder, best first
    pub bids: Option<Vec<PriceBucket>>,
    /// Ask ladder, best first
    pub asks: Option<Vec<PriceBucket>>,
    /// Bid used for closeouts
    #[serde(default, with = "exact_decimal_opt")]
    pub closeout_bid: Option<Decimal>,
    /// Ask used for closeouts
    #[serde(default, with = "exact_decimal_opt")]
    pub closeout_ask: Option<Decimal>,
    /// Deprecated quote-to-home factors
    pub quote_home_conversion_factors: Option<QuoteHomeConversionFactors>,
    /// Deprecated units available
    pub units_available: Option<UnitsAvailable>,
}

impl ClientPrice {
    /// Best bid, if any
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.as_ref()?.first()?.price
    }

    /// Best ask, if any
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.as_ref()?.first()?.price
    }

    /// Best ask minus best bid
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Conversion rates from one currency into the account home currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeConversions {
    /// Currency being converted
    pub currency: Option<String>,
    /// Factor for gains
    #[serde(default, with = "exact_decimal_opt")]
    pub account_gain: Option<Decimal>,
    /// Factor for losses
    #[serde(default, with = "exact_decimal_opt")]
    pub account_loss: Option<Decimal>,
    /// Factor for position values
    #[serde(default, with = "exact_decimal_opt")]
    pub position_value: Option<Decimal>,
}

/// Keep-alive record on the pricing stream
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PricingHeartbeat {
    /// Always `HEARTBEAT`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Server time
    pub time: Option<String>,
}
