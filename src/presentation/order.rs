/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::primitives::{
    ClientExtensions, GuaranteedStopLossDetails, OrderPositionFill, OrderState,
    OrderTriggerCondition, StopLossDetails, TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
};
use crate::presentation::tagged::tagged_union;
use crate::presentation::serialization::exact_decimal_opt;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields shared by every order kind
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderHeader {
    /// Order id
    pub id: Option<String>,
    /// Creation time
    pub create_time: Option<String>,
    /// Current state
    pub state: Option<OrderState>,
    /// Client extensions
    pub client_extensions: Option<ClientExtensions>,
    /// Order kind discriminator
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Orders created for the trade a fill opens
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OnFillDetails {
    /// Take profit to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    /// Stop loss to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    /// Guaranteed stop loss to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed_stop_loss_on_fill: Option<GuaranteedStopLossDetails>,
    /// Trailing stop loss to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    /// Client extensions for the opened trade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

/// Fill, cancel and replacement bookkeeping of an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderLifecycle {
    /// Transaction that filled the order
    #[serde(rename = "fillingTransactionID")]
    pub filling_transaction_id: Option<String>,
    /// Fill time
    pub filled_time: Option<String>,
    /// Trade opened by the fill
    #[serde(rename = "tradeOpenedID")]
    pub trade_opened_id: Option<String>,
    /// Trade reduced by the fill
    #[serde(rename = "tradeReducedID")]
    pub trade_reduced_id: Option<String>,
    /// Trades closed by the fill
    #[serde(rename = "tradeClosedIDs")]
    pub trade_closed_ids: Option<Vec<String>>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID")]
    pub cancelling_transaction_id: Option<String>,
    /// Cancel time
    pub cancelled_time: Option<String>,
    /// Order this one replaced
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: Option<String>,
    /// Order that replaced this one
    #[serde(rename = "replacedByOrderID")]
    pub replaced_by_order_id: Option<String>,
}

/// Trade to close with a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderTradeClose {
    /// Trade id
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Client trade id
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<String>,
    /// Units to close, or `ALL`
    pub units: Option<String>,
}

/// Position side to close with a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderPositionCloseout {
    /// Instrument
    pub instrument: Option<String>,
    /// Units to close, `ALL` or `NONE`
    pub units: Option<String>,
}

/// Margin closeout carried out by a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderMarginCloseout {
    /// Why the closeout happened
    pub reason: Option<String>,
}

/// Delayed trade close carried out by a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderDelayedTradeClose {
    /// Trade id
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Client trade id
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<String>,
    /// Transaction that requested the close
    #[serde(rename = "sourceTransactionID")]
    pub source_transaction_id: Option<String>,
}

/// Order filled immediately at the current price
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Instrument
    pub instrument: Option<String>,
    /// Signed units; negative sells
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Time in force; FOK or IOC
    pub time_in_force: Option<TimeInForce>,
    /// Worst acceptable price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Position fill behaviour
    pub position_fill: Option<OrderPositionFill>,
    /// Trade close details, when created to close a trade
    pub trade_close: Option<MarketOrderTradeClose>,
    /// Long position closeout details
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Short position closeout details
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Margin closeout details
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    /// Delayed trade close details
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Order filled at a fixed, server-assigned price
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedPriceOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Instrument
    pub instrument: Option<String>,
    /// Signed units
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Position fill behaviour
    pub position_fill: Option<OrderPositionFill>,
    /// State of the resulting trade
    pub trade_state: Option<String>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Fields shared by limit, stop and market-if-touched orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PendingEntry {
    /// Instrument
    pub instrument: Option<String>,
    /// Signed units
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    pub gtd_time: Option<String>,
    /// Position fill behaviour
    pub position_fill: Option<OrderPositionFill>,
    /// Price side used for triggering
    pub trigger_condition: Option<OrderTriggerCondition>,
}

/// Order filled at the given price or better
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LimitOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Order filled once the price crosses the given level
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Worst acceptable fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Order filled once the price touches the given level from either side
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Worst acceptable fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Market price when the order was created
    #[serde(default, with = "exact_decimal_opt")]
    pub initial_market_price: Option<Decimal>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Fields shared by orders attached to an open trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DependentExit {
    /// Trade the order closes
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Client id of that trade
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<String>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Expiry for GTD
    pub gtd_time: Option<String>,
    /// Price side used for triggering
    pub trigger_condition: Option<OrderTriggerCondition>,
}

/// Closes a trade at a profit target
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TakeProfitOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Closes a trade at a loss limit
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StopLossOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Distance from the trade price
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Deprecated guaranteed flag
    pub guaranteed: Option<bool>,
    /// Deprecated guaranteed execution premium
    #[serde(rename = "guaranteedExecutionPremium")]
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_premium: Option<Decimal>,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Closes a trade at a guaranteed loss limit
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GuaranteedStopLossOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Distance from the trade price
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Premium charged on execution
    #[serde(rename = "guaranteedExecutionPremium")]
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_premium: Option<Decimal>,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

/// Closes a trade once the price retraces by a trailing distance
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TrailingStopLossOrder {
    /// Common fields
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trailing distance
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Current trigger price
    #[serde(rename = "trailingStopValue")]
    #[serde(default, with = "exact_decimal_opt")]
    pub trailing_stop_value: Option<Decimal>,
    /// Fill and cancel bookkeeping
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

tagged_union! {
    /// An order of any kind
    pub enum Order: OrderHeader {
        "MARKET" => Market(MarketOrder),
        "FIXED_PRICE" => FixedPrice(FixedPriceOrder),
        "LIMIT" => Limit(LimitOrder),
        "STOP" => Stop(StopOrder),
        "MARKET_IF_TOUCHED" => MarketIfTouched(MarketIfTouchedOrder),
        "TAKE_PROFIT" => TakeProfit(TakeProfitOrder),
        "STOP_LOSS" => StopLoss(StopLossOrder),
        "GUARANTEED_STOP_LOSS" => GuaranteedStopLoss(GuaranteedStopLossOrder),
        "TRAILING_STOP_LOSS" => TrailingStopLoss(TrailingStopLossOrder),
    }
}

impl Order {
    /// Order id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.header().id.as_deref()
    }

    /// Trade this order is attached to, for take profit and stop orders
    #[must_use]
    pub fn trade_id(&self) -> Option<&str> {
        match self {
            Order::TakeProfit(o) => o.exit.trade_id.as_deref(),
            Order::StopLoss(o) => o.exit.trade_id.as_deref(),
            Order::GuaranteedStopLoss(o) => o.exit.trade_id.as_deref(),
            Order::TrailingStopLoss(o) => o.exit.trade_id.as_deref(),
            _ => None,
        }
    }
}

/// Price-dependent state of a pending order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DynamicOrderState {
    /// Order id
    pub id: Option<String>,
    /// Current trigger price of a trailing stop
    #[serde(default, with = "exact_decimal_opt")]
    pub trailing_stop_value: Option<Decimal>,
    /// Distance to the trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub trigger_distance: Option<Decimal>,
    /// Whether `triggerDistance` is exact or approximate
    pub is_trigger_distance_exact: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_orders_decode_nested_details() {
        let order: Order = serde_json::from_value(json!({
            "id": "7",
            "createTime": "2024-01-15T10:30:00.000000000Z",
            "state": "PENDING",
            "type": "LIMIT",
            "instrument": "EUR_USD",
            "units": "1000",
            "price": "1.08500",
            "timeInForce": "GTC",
            "takeProfitOnFill": {"price": "1.09000", "timeInForce": "GTC"}
        }))
        .unwrap();

        let Order::Limit(limit) = &order else {
            panic!("expected a limit order, got {order:?}");
        };
        assert_eq!(limit.entry.price.unwrap().to_string(), "1.08500");
        assert_eq!(
            limit.on_fill.take_profit_on_fill.as_ref().unwrap().price.unwrap().to_string(),
            "1.09000"
        );
        assert!(limit.on_fill.stop_loss_on_fill.is_none());
        assert_eq!(order.id(), Some("7"));
    }

    #[test]
    fn unknown_order_kinds_keep_the_header() {
        let order = Order::from_value(json!({"id": "9", "type": "ICEBERG", "state": "PENDING"}))
            .unwrap();
        assert!(order.is_unknown());
        assert_eq!(order.kind(), Some("ICEBERG"));
        assert_eq!(order.header().state, Some(OrderState::Pending));
    }

    #[test]
    fn dependent_orders_expose_their_trade() {
        let order = Order::from_value(json!({
            "id": "11",
            "type": "STOP_LOSS",
            "tradeID": "10",
            "price": "1.07000"
        }))
        .unwrap();
        assert_eq!(order.trade_id(), Some("10"));
    }

    #[test]
    fn new_enum_values_keep_the_known_kind() {
        let order = Order::from_value(json!({
            "id": "12",
            "type": "LIMIT",
            "price": "1.08500",
            "timeInForce": "GTX",
            "positionFill": "NEW_MODE"
        }))
        .unwrap();
        let Order::Limit(limit) = &order else {
            panic!("expected a limit order, got {order:?}");
        };
        assert_eq!(limit.entry.time_in_force, Some(TimeInForce::Unknown));
        assert_eq!(limit.entry.position_fill, Some(OrderPositionFill::Unknown));

        let order = Order::from_value(json!({
            "id": "13",
            "type": "STOP_LOSS",
            "tradeID": "10",
            "triggerCondition": "LAST"
        }))
        .unwrap();
        let Order::StopLoss(stop) = &order else {
            panic!("expected a stop loss order, got {order:?}");
        };
        assert_eq!(stop.exit.trigger_condition, Some(OrderTriggerCondition::Unknown));
    }
}
