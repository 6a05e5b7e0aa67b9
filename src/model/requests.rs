/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Query parameters and request bodies
//!
//! Every field is optional unless the API requires it. Unset fields are left out of
//! the query string and of the JSON body.

use crate::presentation::order::OnFillDetails;
use crate::presentation::primitives::{
    CandlestickGranularity, ClientExtensions, GuaranteedStopLossDetails, OrderPositionFill,
    OrderStateFilter, OrderTriggerCondition, PricingComponent, StopLossDetails, TakeProfitDetails,
    TimeInForce, TradeStateFilter, TrailingStopLossDetails,
};
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT
// ============================================================================

/// Body of an account configuration change
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfiguration {
    /// New alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// New margin rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<Decimal>,
}

impl AccountConfiguration {
    /// Changes the alias
    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Changes the margin rate
    #[must_use]
    pub fn with_margin_rate(mut self, margin_rate: Decimal) -> Self {
        self.margin_rate = Some(margin_rate);
        self
    }
}

// ============================================================================
// INSTRUMENT
// ============================================================================

/// Query of a candles request
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandlesParams {
    /// Price sides to include; the server defaults to mid
    pub price: Option<PricingComponent>,
    /// Candle period; the server defaults to S5
    pub granularity: Option<CandlestickGranularity>,
    /// Number of candles; not combinable with both `from` and `to`
    pub count: Option<u32>,
    /// Start of the range
    pub from: Option<String>,
    /// End of the range
    pub to: Option<String>,
    /// Use the previous close as open
    pub smooth: Option<bool>,
    /// Include the candle covering `from`
    pub include_first: Option<bool>,
    /// Hour of day used for daily alignment
    pub daily_alignment: Option<u8>,
    /// Timezone used for daily alignment
    pub alignment_timezone: Option<String>,
    /// Day of week used for weekly alignment
    pub weekly_alignment: Option<String>,
}

impl CandlesParams {
    /// Sets the price sides
    #[must_use]
    pub fn with_price(mut self, price: PricingComponent) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the granularity
    #[must_use]
    pub fn with_granularity(mut self, granularity: CandlestickGranularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Sets the number of candles
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the start of the range
    #[must_use]
    pub fn with_from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    /// Sets the end of the range
    #[must_use]
    pub fn with_to(mut self, to: &str) -> Self {
        self.to = Some(to.to_string());
        self
    }

    /// Enables or disables smoothing
    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    /// Includes or excludes the first candle
    #[must_use]
    pub fn with_include_first(mut self, include_first: bool) -> Self {
        self.include_first = Some(include_first);
        self
    }

    /// Sets the daily alignment hour and timezone
    #[must_use]
    pub fn with_daily_alignment(mut self, hour: u8, timezone: &str) -> Self {
        self.daily_alignment = Some(hour);
        self.alignment_timezone = Some(timezone.to_string());
        self
    }

    /// Sets the weekly alignment day, e.g. `Friday`
    #[must_use]
    pub fn with_weekly_alignment(mut self, day: &str) -> Self {
        self.weekly_alignment = Some(day.to_string());
        self
    }
}

// ============================================================================
// ORDER
// ============================================================================

/// Query of an order listing
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    /// Only these order ids
    pub ids: Option<Vec<String>>,
    /// Only orders in this state
    pub state: Option<OrderStateFilter>,
    /// Only orders for this instrument
    pub instrument: Option<String>,
    /// Maximum number of orders
    pub count: Option<u32>,
    /// Only orders with an id lower than this
    #[serde(rename = "beforeID")]
    pub before_id: Option<String>,
}

impl OrderListParams {
    /// Restricts to the given ids
    #[must_use]
    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.ids = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Restricts to one state
    #[must_use]
    pub fn with_state(mut self, state: OrderStateFilter) -> Self {
        self.state = Some(state);
        self
    }

    /// Restricts to one instrument
    #[must_use]
    pub fn with_instrument(mut self, instrument: &str) -> Self {
        self.instrument = Some(instrument.to_string());
        self
    }

    /// Limits the number of orders
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Pages backwards from an id
    #[must_use]
    pub fn with_before_id(mut self, before_id: &str) -> Self {
        self.before_id = Some(before_id.to_string());
        self
    }
}

/// Market order to submit
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    /// Instrument
    pub instrument: String,
    /// Signed units; negative sells
    pub units: Decimal,
    /// FOK or IOC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Worst acceptable price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<Decimal>,
    /// Position fill behaviour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    /// Extensions for the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
}

/// Limit, stop or market-if-touched order to submit
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryOrderRequest {
    /// Instrument
    pub instrument: String,
    /// Signed units; negative sells
    pub units: Decimal,
    /// Trigger price
    pub price: Decimal,
    /// Worst acceptable fill price; not used by limit orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<Decimal>,
    /// Time in force; the server defaults to GTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<String>,
    /// Position fill behaviour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_fill: Option<OrderPositionFill>,
    /// Price side used for triggering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// Extensions for the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
}

/// Take profit, stop loss, guaranteed or trailing stop to attach to an open trade
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExitOrderRequest {
    /// Trade the order closes
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    /// Client id of that trade
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<String>,
    /// Trigger price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Distance from the current price, instead of `price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Decimal>,
    /// Time in force; the server defaults to GTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<String>,
    /// Price side used for triggering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<OrderTriggerCondition>,
    /// Extensions for the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Order specification accepted by create and replace
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderRequest {
    /// Filled immediately
    Market(MarketOrderRequest),
    /// Filled at the price or better
    Limit(EntryOrderRequest),
    /// Filled once the price crosses the level
    Stop(EntryOrderRequest),
    /// Filled once the price touches the level
    MarketIfTouched(EntryOrderRequest),
    /// Closes a trade at a profit target
    TakeProfit(ExitOrderRequest),
    /// Closes a trade at a loss limit
    StopLoss(ExitOrderRequest),
    /// Closes a trade at a guaranteed loss limit
    GuaranteedStopLoss(ExitOrderRequest),
    /// Closes a trade once the price retraces by `distance`
    TrailingStopLoss(ExitOrderRequest),
}

impl OrderRequest {
    /// Market order for `units` of `instrument`
    #[must_use]
    pub fn market(instrument: &str, units: Decimal) -> Self {
        OrderRequest::Market(MarketOrderRequest {
            instrument: instrument.to_string(),
            units,
            ..Default::default()
        })
    }

    /// Limit order at `price`
    #[must_use]
    pub fn limit(instrument: &str, units: Decimal, price: Decimal) -> Self {
        OrderRequest::Limit(EntryOrderRequest::new(instrument, units, price))
    }

    /// Stop order at `price`
    #[must_use]
    pub fn stop(instrument: &str, units: Decimal, price: Decimal) -> Self {
        OrderRequest::Stop(EntryOrderRequest::new(instrument, units, price))
    }

    /// Market-if-touched order at `price`
    #[must_use]
    pub fn market_if_touched(instrument: &str, units: Decimal, price: Decimal) -> Self {
        OrderRequest::MarketIfTouched(EntryOrderRequest::new(instrument, units, price))
    }

    /// Take profit for `trade_id` at `price`
    #[must_use]
    pub fn take_profit(trade_id: &str, price: Decimal) -> Self {
        OrderRequest::TakeProfit(ExitOrderRequest::at(trade_id, price))
    }

    /// Stop loss for `trade_id` at `price`
    #[must_use]
    pub fn stop_loss(trade_id: &str, price: Decimal) -> Self {
        OrderRequest::StopLoss(ExitOrderRequest::at(trade_id, price))
    }

    /// Guaranteed stop loss for `trade_id` at `price`
    #[must_use]
    pub fn guaranteed_stop_loss(trade_id: &str, price: Decimal) -> Self {
        OrderRequest::GuaranteedStopLoss(ExitOrderRequest::at(trade_id, price))
    }

    /// Trailing stop loss for `trade_id` trailing by `distance`
    #[must_use]
    pub fn trailing_stop_loss(trade_id: &str, distance: Decimal) -> Self {
        OrderRequest::TrailingStopLoss(ExitOrderRequest {
            trade_id: trade_id.to_string(),
            distance: Some(distance),
            ..Default::default()
        })
    }

    /// Sets the time in force
    #[must_use]
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        match &mut self {
            OrderRequest::Market(o) => o.time_in_force = Some(tif),
            OrderRequest::Limit(o) | OrderRequest::Stop(o) | OrderRequest::MarketIfTouched(o) => {
                o.time_in_force = Some(tif)
            }
            OrderRequest::TakeProfit(o)
            | OrderRequest::StopLoss(o)
            | OrderRequest::GuaranteedStopLoss(o)
            | OrderRequest::TrailingStopLoss(o) => o.time_in_force = Some(tif),
        }
        self
    }

    /// Sets the order's client extensions
    #[must_use]
    pub fn with_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        match &mut self {
            OrderRequest::Market(o) => o.client_extensions = Some(extensions),
            OrderRequest::Limit(o) | OrderRequest::Stop(o) | OrderRequest::MarketIfTouched(o) => {
                o.client_extensions = Some(extensions)
            }
            OrderRequest::TakeProfit(o)
            | OrderRequest::StopLoss(o)
            | OrderRequest::GuaranteedStopLoss(o)
            | OrderRequest::TrailingStopLoss(o) => o.client_extensions = Some(extensions),
        }
        self
    }

    /// Attaches a take profit to the trade the order opens; no-op for exit orders
    #[must_use]
    pub fn with_take_profit_on_fill(mut self, details: TakeProfitDetails) -> Self {
        if let Some(on_fill) = self.on_fill_mut() {
            on_fill.take_profit_on_fill = Some(details);
        }
        self
    }

    /// Attaches a stop loss to the trade the order opens; no-op for exit orders
    #[must_use]
    pub fn with_stop_loss_on_fill(mut self, details: StopLossDetails) -> Self {
        if let Some(on_fill) = self.on_fill_mut() {
            on_fill.stop_loss_on_fill = Some(details);
        }
        self
    }

    /// Attaches a guaranteed stop loss to the trade the order opens; no-op for exit orders
    #[must_use]
    pub fn with_guaranteed_stop_loss_on_fill(mut self, details: GuaranteedStopLossDetails) -> Self {
        if let Some(on_fill) = self.on_fill_mut() {
            on_fill.guaranteed_stop_loss_on_fill = Some(details);
        }
        self
    }

    /// Attaches a trailing stop loss to the trade the order opens; no-op for exit orders
    #[must_use]
    pub fn with_trailing_stop_loss_on_fill(mut self, details: TrailingStopLossDetails) -> Self {
        if let Some(on_fill) = self.on_fill_mut() {
            on_fill.trailing_stop_loss_on_fill = Some(details);
        }
        self
    }

    fn on_fill_mut(&mut self) -> Option<&mut OnFillDetails> {
        match self {
            OrderRequest::Market(o) => Some(&mut o.on_fill),
            OrderRequest::Limit(o) | OrderRequest::Stop(o) | OrderRequest::MarketIfTouched(o) => {
                Some(&mut o.on_fill)
            }
            _ => None,
        }
    }
}

impl EntryOrderRequest {
    /// Entry order for `units` of `instrument` at `price`
    #[must_use]
    pub fn new(instrument: &str, units: Decimal, price: Decimal) -> Self {
        Self {
            instrument: instrument.to_string(),
            units,
            price,
            ..Default::default()
        }
    }
}

impl ExitOrderRequest {
    /// Exit order for `trade_id` triggering at `price`
    #[must_use]
    pub fn at(trade_id: &str, price: Decimal) -> Self {
        Self {
            trade_id: trade_id.to_string(),
            price: Some(price),
            ..Default::default()
        }
    }
}

/// Body of order create and replace
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderBody {
    /// The order
    pub order: OrderRequest,
}

/// Body of an order client extensions change
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsBody {
    /// New order extensions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// New extensions for the trade the order will open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

// ============================================================================
// TRADE
// ============================================================================

/// Query of a trade listing
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeListParams {
    /// Only these trade ids
    pub ids: Option<Vec<String>>,
    /// Only trades in this state
    pub state: Option<TradeStateFilter>,
    /// Only trades for this instrument
    pub instrument: Option<String>,
    /// Maximum number of trades
    pub count: Option<u32>,
    /// Only trades with an id lower than this
    #[serde(rename = "beforeID")]
    pub before_id: Option<String>,
}

impl TradeListParams {
    /// Restricts to the given ids
    #[must_use]
    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.ids = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Restricts to one state
    #[must_use]
    pub fn with_state(mut self, state: TradeStateFilter) -> Self {
        self.state = Some(state);
        self
    }

    /// Restricts to one instrument
    #[must_use]
    pub fn with_instrument(mut self, instrument: &str) -> Self {
        self.instrument = Some(instrument.to_string());
        self
    }

    /// Limits the number of trades
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Pages backwards from an id
    #[must_use]
    pub fn with_before_id(mut self, before_id: &str) -> Self {
        self.before_id = Some(before_id.to_string());
        self
    }
}

/// Body of a trade close
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CloseTradeBody {
    /// Units to close, or `ALL`; the server closes everything when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl CloseTradeBody {
    /// Closes the whole trade
    #[must_use]
    pub fn all() -> Self {
        Self {
            units: Some("ALL".to_string()),
        }
    }

    /// Closes part of the trade
    #[must_use]
    pub fn units(units: Decimal) -> Self {
        Self {
            units: Some(units.to_string()),
        }
    }
}

/// Body of a trade client extensions change
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsBody {
    /// New trade extensions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Body replacing the dependent orders of a trade
///
/// Only the set orders are created or replaced; the others are left untouched.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DependentOrdersBody {
    /// Take profit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<TakeProfitDetails>,
    /// Stop loss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<StopLossDetails>,
    /// Trailing stop loss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss: Option<TrailingStopLossDetails>,
    /// Guaranteed stop loss
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss: Option<GuaranteedStopLossDetails>,
}

impl DependentOrdersBody {
    /// Sets the take profit
    #[must_use]
    pub fn with_take_profit(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit = Some(details);
        self
    }

    /// Sets the stop loss
    #[must_use]
    pub fn with_stop_loss(mut self, details: StopLossDetails) -> Self {
        self.stop_loss = Some(details);
        self
    }

    /// Sets the trailing stop loss
    #[must_use]
    pub fn with_trailing_stop_loss(mut self, details: TrailingStopLossDetails) -> Self {
        self.trailing_stop_loss = Some(details);
        self
    }

    /// Sets the guaranteed stop loss
    #[must_use]
    pub fn with_guaranteed_stop_loss(mut self, details: GuaranteedStopLossDetails) -> Self {
        self.guaranteed_stop_loss = Some(details);
        self
    }
}

// ============================================================================
// POSITION
// ============================================================================

/// Body of a position close
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosePositionBody {
    /// Long units to close: `ALL`, `NONE` or a number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_units: Option<String>,
    /// Extensions for the long close order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_client_extensions: Option<ClientExtensions>,
    /// Short units to close: `ALL`, `NONE` or a number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_units: Option<String>,
    /// Extensions for the short close order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_client_extensions: Option<ClientExtensions>,
}

impl ClosePositionBody {
    /// Closes the whole long side
    #[must_use]
    pub fn long_all() -> Self {
        Self {
            long_units: Some("ALL".to_string()),
            ..Default::default()
        }
    }

    /// Closes the whole short side
    #[must_use]
    pub fn short_all() -> Self {
        Self {
            short_units: Some("ALL".to_string()),
            ..Default::default()
        }
    }

    /// Attaches extensions to the long close order
    #[must_use]
    pub fn with_long_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        self.long_client_extensions = Some(extensions);
        self
    }

    /// Attaches extensions to the short close order
    #[must_use]
    pub fn with_short_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        self.short_client_extensions = Some(extensions);
        self
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// Query of a transaction page listing
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListParams {
    /// Start time
    pub from: Option<String>,
    /// End time
    pub to: Option<String>,
    /// Transactions per page
    pub page_size: Option<u32>,
    /// Transaction kinds or kind filters
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
}

impl TransactionListParams {
    /// Sets the time range
    #[must_use]
    pub fn with_range(mut self, from: &str, to: &str) -> Self {
        self.from = Some(from.to_string());
        self.to = Some(to.to_string());
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Filters by kind
    #[must_use]
    pub fn with_kinds(mut self, kinds: &[&str]) -> Self {
        self.kind = Some(kinds.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// Query of a transaction id range
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TransactionRangeParams {
    /// First id, inclusive
    pub from: String,
    /// Last id, inclusive
    pub to: String,
    /// Transaction kinds or kind filters
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
}

impl TransactionRangeParams {
    /// Ids from `from` to `to`, inclusive
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            kind: None,
        }
    }

    /// Filters by kind
    #[must_use]
    pub fn with_kinds(mut self, kinds: &[&str]) -> Self {
        self.kind = Some(kinds.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// Query of transactions after an id
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TransactionsSinceParams {
    /// Id after which to start, exclusive
    pub id: String,
    /// Transaction kinds or kind filters
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
}

impl TransactionsSinceParams {
    /// Transactions after `id`
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: None,
        }
    }

    /// Filters by kind
    #[must_use]
    pub fn with_kinds(mut self, kinds: &[&str]) -> Self {
        self.kind = Some(kinds.iter().map(|s| s.to_string()).collect());
        self
    }
}

// ============================================================================
// PRICING
// ============================================================================

/// Query of a pricing snapshot
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingParams {
    /// Instruments to price
    pub instruments: Vec<String>,
    /// Only prices that changed after this time
    pub since: Option<String>,
    /// Deprecated units available block
    pub include_units_available: Option<bool>,
    /// Include home conversion rates
    pub include_home_conversions: Option<bool>,
}

impl PricingParams {
    /// Prices for `instruments`
    #[must_use]
    pub fn new(instruments: &[&str]) -> Self {
        Self {
            instruments: instruments.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Only prices newer than `since`
    #[must_use]
    pub fn with_since(mut self, since: &str) -> Self {
        self.since = Some(since.to_string());
        self
    }

    /// Requests home conversion rates
    #[must_use]
    pub fn with_home_conversions(mut self, include: bool) -> Self {
        self.include_home_conversions = Some(include);
        self
    }

    /// Requests the deprecated units available block
    #[must_use]
    pub fn with_units_available(mut self, include: bool) -> Self {
        self.include_units_available = Some(include);
        self
    }
}

/// Query of a pricing stream
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PricingStreamParams {
    /// Instruments to stream
    pub instruments: Vec<String>,
    /// Send the current price first; the server defaults to true
    pub snapshot: Option<bool>,
}

impl PricingStreamParams {
    /// Stream prices for `instruments`
    #[must_use]
    pub fn new(instruments: &[&str]) -> Self {
        Self {
            instruments: instruments.iter().map(|s| s.to_string()).collect(),
            snapshot: None,
        }
    }

    /// Enables or disables the initial snapshot
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: bool) -> Self {
        self.snapshot = Some(snapshot);
        self
    }
}
