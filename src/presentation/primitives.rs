/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Value types shared by several resources
//!
//! The `*Details` structs and [`ClientExtensions`] travel in both directions, so
//! unset fields are skipped when serializing a request body.

use crate::presentation::serialization::exact_decimal_opt;
use crate::utils::id::client_id;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How long an order remains valid
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeInForce {
    /// Good until cancelled
    #[default]
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Good until the date given in `gtdTime`
    #[serde(rename = "GTD")]
    GoodTillDate,
    /// Good for the trading day
    #[serde(rename = "GFD")]
    GoodForDay,
    /// Filled entirely or cancelled
    #[serde(rename = "FOK")]
    FillOrKill,
    /// Filled as far as possible, remainder cancelled
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// A time in force this client does not know
    #[serde(other)]
    Unknown,
}

/// How a fill is applied to existing positions
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPositionFill {
    /// Only open new positions
    OpenOnly,
    /// Reduce existing positions first, open with the remainder
    ReduceFirst,
    /// Only reduce existing positions
    ReduceOnly,
    /// Account default behaviour
    #[default]
    Default,
    /// A fill mode this client does not know
    #[serde(other)]
    Unknown,
}

/// Which price side triggers a price-dependent order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderTriggerCondition {
    /// Ask for long orders, bid for short ones
    #[default]
    Default,
    /// Bid for long orders, ask for short ones
    Inverse,
    /// Always the bid
    Bid,
    /// Always the ask
    Ask,
    /// Always the mid
    Mid,
    /// A trigger condition this client does not know
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    /// Waiting to be triggered
    Pending,
    /// Filled
    Filled,
    /// Triggered
    Triggered,
    /// Cancelled
    Cancelled,
    /// A state this client does not know
    #[serde(other)]
    Unknown,
}

/// Order state filter for order listings
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStateFilter {
    /// Pending orders
    Pending,
    /// Filled orders
    Filled,
    /// Triggered orders
    Triggered,
    /// Cancelled orders
    Cancelled,
    /// Orders in any state
    All,
}

/// Lifecycle state of a trade
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeState {
    /// Open
    Open,
    /// Fully closed
    Closed,
    /// Will close as soon as the market is tradeable
    CloseWhenTradeable,
    /// A state this client does not know
    #[serde(other)]
    Unknown,
}

/// Trade state filter for trade listings
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStateFilter {
    /// Open trades
    Open,
    /// Closed trades
    Closed,
    /// Trades closing once the market is tradeable
    CloseWhenTradeable,
    /// Trades in any state
    All,
}

/// Kind of tradeable instrument
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentType {
    /// Currency pair
    Currency,
    /// Contract for difference
    Cfd,
    /// Metal
    Metal,
    /// A type this client does not know
    #[serde(other)]
    Unknown,
}

/// Whether guaranteed stop loss orders are available
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GuaranteedStopLossOrderMode {
    /// Not available
    Disabled,
    /// Optional
    Allowed,
    /// Mandatory on every trade
    Required,
    /// A mode this client does not know
    #[serde(other)]
    Unknown,
}

/// Candlestick period
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CandlestickGranularity {
    /// 5 seconds
    S5,
    /// 10 seconds
    S10,
    /// 15 seconds
    S15,
    /// 30 seconds
    S30,
    /// 1 minute
    M1,
    /// 2 minutes
    M2,
    /// 4 minutes
    M4,
    /// 5 minutes
    M5,
    /// 10 minutes
    M10,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 1 hour
    H1,
    /// 2 hours
    H2,
    /// 3 hours
    H3,
    /// 4 hours
    H4,
    /// 6 hours
    H6,
    /// 8 hours
    H8,
    /// 12 hours
    H12,
    /// 1 day
    D,
    /// 1 week
    W,
    /// 1 month
    M,
    /// A granularity this client does not know
    #[serde(other)]
    Unknown,
}

impl CandlestickGranularity {
    /// Wire spelling, used for query parameters
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S5 => "S5",
            Self::S10 => "S10",
            Self::S15 => "S15",
            Self::S30 => "S30",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M4 => "M4",
            Self::M5 => "M5",
            Self::M10 => "M10",
            Self::M15 => "M15",
            Self::M30 => "M30",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H6 => "H6",
            Self::H8 => "H8",
            Self::H12 => "H12",
            Self::D => "D",
            Self::W => "W",
            Self::M => "M",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Price sides to include in candlesticks, sent as e.g. `"BA"` or `"MBA"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingComponent {
    /// Include mid candles
    pub mid: bool,
    /// Include bid candles
    pub bid: bool,
    /// Include ask candles
    pub ask: bool,
}

impl PricingComponent {
    /// Mid candles only
    pub const MID: Self = Self {
        mid: true,
        bid: false,
        ask: false,
    };

    /// Bid, ask and mid candles
    pub const ALL: Self = Self {
        mid: true,
        bid: true,
        ask: true,
    };

    /// Wire spelling; empty when nothing is selected
    #[must_use]
    pub fn as_param(&self) -> String {
        let mut out = String::with_capacity(3);
        if self.mid {
            out.push('M');
        }
        if self.bid {
            out.push('B');
        }
        if self.ask {
            out.push('A');
        }
        out
    }
}

impl Serialize for PricingComponent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_param())
    }
}

/// Client-supplied tags attached to an order or trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientExtensions {
    /// Client identifier, usable as `@id` specifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ClientExtensions {
    /// Extensions carrying a freshly generated client id
    #[must_use]
    pub fn generated() -> Self {
        Self {
            id: Some(client_id()),
            ..Default::default()
        }
    }

    /// Sets the tag
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Sets the comment
    #[must_use]
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

/// Take profit order to create when a trade opens
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitDetails {
    /// Trigger price
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Time in force; GTC, GTD or GFD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<String>,
    /// Extensions for the created order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl TakeProfitDetails {
    /// Take profit at `price`, good until cancelled
    #[must_use]
    pub fn at(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }
}

/// Stop loss order to create when a trade opens
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StopLossDetails {
    /// Trigger price; mutually exclusive with `distance`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Distance from the fill price
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Time in force; GTC, GTD or GFD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<String>,
    /// Extensions for the created order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Deprecated flag for guaranteed stops
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
}

impl StopLossDetails {
    /// Stop loss at `price`
    #[must_use]
    pub fn at(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Stop loss `distance` away from the fill price
    #[must_use]
    pub fn distance(distance: Decimal) -> Self {
        Self {
            distance: Some(distance),
            ..Default::default()
        }
    }
}

/// Guaranteed stop loss order to create when a trade opens
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossDetails {
    /// Trigger price; mutually exclusive with `distance`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Distance from the fill price
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Time in force; GTC, GTD or GFD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<String>,
    /// Extensions for the created order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Trailing stop loss order to create when a trade opens
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrailingStopLossDetails {
    /// Trailing distance
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Time in force; GTC, GTD or GFD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<String>,
    /// Extensions for the created order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Multiplicative conversion factor
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ConversionFactor {
    /// The factor
    #[serde(default, with = "exact_decimal_opt")]
    pub factor: Option<Decimal>,
}

/// Factors converting instrument amounts into the account home currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeConversionFactors {
    /// Quote currency to home, for gains
    pub gain_quote_home: Option<ConversionFactor>,
    /// Quote currency to home, for losses
    pub loss_quote_home: Option<ConversionFactor>,
    /// Base currency to home, for gains
    pub gain_base_home: Option<ConversionFactor>,
    /// Base currency to home, for losses
    pub loss_base_home: Option<ConversionFactor>,
}

/// Commission charged for trading an instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentCommission {
    /// Commission per `unitsTraded` units
    #[serde(default, with = "exact_decimal_opt")]
    pub commission: Option<Decimal>,
    /// Units the commission applies to
    #[serde(default, with = "exact_decimal_opt")]
    pub units_traded: Option<Decimal>,
    /// Minimum commission per trade
    #[serde(default, with = "exact_decimal_opt")]
    pub minimum_commission: Option<Decimal>,
}

/// Limits on guaranteed stop loss placement
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossOrderLevelRestriction {
    /// Total units that can be protected within `priceRange`
    #[serde(default, with = "exact_decimal_opt")]
    pub volume: Option<Decimal>,
    /// Price range the volume applies to
    #[serde(default, with = "exact_decimal_opt")]
    pub price_range: Option<Decimal>,
}

/// Financing charged on one weekday
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancingDayOfWeek {
    /// Day name, e.g. `WEDNESDAY`
    pub day_of_week: Option<String>,
    /// Number of days charged
    pub days_charged: Option<i32>,
}

/// Financing rates for an instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentFinancing {
    /// Annual rate for long positions
    #[serde(default, with = "exact_decimal_opt")]
    pub long_rate: Option<Decimal>,
    /// Annual rate for short positions
    #[serde(default, with = "exact_decimal_opt")]
    pub short_rate: Option<Decimal>,
    /// Days on which financing is charged
    pub financing_days_of_week: Option<Vec<FinancingDayOfWeek>>,
}

/// Tag attached to an instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Tag type
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Tag name
    pub name: Option<String>,
}

/// Full specification of a tradeable instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Name, e.g. `EUR_USD`
    pub name: Option<String>,
    /// Instrument type
    #[serde(rename = "type")]
    pub kind: Option<InstrumentType>,
    /// Display name
    pub display_name: Option<String>,
    /// Location of the pip; `-4` means the fourth decimal place
    pub pip_location: Option<i32>,
    /// Decimal places used to display prices
    pub display_precision: Option<i32>,
    /// Decimal places allowed in units
    pub trade_units_precision: Option<i32>,
    /// Smallest tradeable units
    #[serde(default, with = "exact_decimal_opt")]
    pub minimum_trade_size: Option<Decimal>,
    /// Largest trailing stop distance
    #[serde(default, with = "exact_decimal_opt")]
    pub maximum_trailing_stop_distance: Option<Decimal>,
    /// Smallest guaranteed stop distance
    #[serde(default, with = "exact_decimal_opt")]
    pub minimum_guaranteed_stop_loss_distance: Option<Decimal>,
    /// Smallest trailing stop distance
    #[serde(default, with = "exact_decimal_opt")]
    pub minimum_trailing_stop_distance: Option<Decimal>,
    /// Largest position size
    #[serde(default, with = "exact_decimal_opt")]
    pub maximum_position_size: Option<Decimal>,
    /// Largest order size
    #[serde(default, with = "exact_decimal_opt")]
    pub maximum_order_units: Option<Decimal>,
    /// Margin rate
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_rate: Option<Decimal>,
    /// Commission schedule
    pub commission: Option<InstrumentCommission>,
    /// Guaranteed stop availability
    pub guaranteed_stop_loss_order_mode: Option<GuaranteedStopLossOrderMode>,
    /// Premium charged on guaranteed stop execution
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_stop_loss_order_execution_premium: Option<Decimal>,
    /// Guaranteed stop placement limits
    pub guaranteed_stop_loss_order_level_restriction:
        Option<GuaranteedStopLossOrderLevelRestriction>,
    /// Financing rates
    pub financing: Option<InstrumentFinancing>,
    /// Instrument tags
    pub tags: Option<Vec<Tag>>,
}
