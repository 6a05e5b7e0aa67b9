/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::order::{
    GuaranteedStopLossOrder, StopLossOrder, TakeProfitOrder, TrailingStopLossOrder,
};
use crate::presentation::primitives::{ClientExtensions, TradeState};
use crate::presentation::serialization::exact_decimal_opt;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields shared by [`Trade`] and [`TradeSummary`]
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeCore {
    /// Trade id
    pub id: Option<String>,
    /// Instrument
    pub instrument: Option<String>,
    /// Open price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Open time
    pub open_time: Option<String>,
    /// Current state
    pub state: Option<TradeState>,
    /// Units at open
    #[serde(default, with = "exact_decimal_opt")]
    pub initial_units: Option<Decimal>,
    /// Margin required at open
    #[serde(default, with = "exact_decimal_opt")]
    pub initial_margin_required: Option<Decimal>,
    /// Units still open
    #[serde(default, with = "exact_decimal_opt")]
    pub current_units: Option<Decimal>,
    /// Profit/loss realized by partial closes
    #[serde(rename = "realizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub realized_pl: Option<Decimal>,
    /// Unrealized profit/loss
    #[serde(rename = "unrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub unrealized_pl: Option<Decimal>,
    /// Margin currently used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_used: Option<Decimal>,
    /// Average close price of closed units
    #[serde(default, with = "exact_decimal_opt")]
    pub average_close_price: Option<Decimal>,
    /// Transactions that closed part of the trade
    #[serde(rename = "closingTransactionIDs")]
    pub closing_transaction_ids: Option<Vec<String>>,
    /// Financing paid or collected
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Dividend adjustments paid or collected
    #[serde(default, with = "exact_decimal_opt")]
    pub dividend_adjustment: Option<Decimal>,
    /// Close time, once fully closed
    pub close_time: Option<String>,
    /// Client extensions
    pub client_extensions: Option<ClientExtensions>,
}

/// A trade with its dependent orders in full
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade fields
    #[serde(flatten)]
    pub core: TradeCore,
    /// Take profit order
    pub take_profit_order: Option<TakeProfitOrder>,
    /// Stop loss order
    pub stop_loss_order: Option<StopLossOrder>,
    /// Guaranteed stop loss order
    pub guaranteed_stop_loss_order: Option<GuaranteedStopLossOrder>,
    /// Trailing stop loss order
    pub trailing_stop_loss_order: Option<TrailingStopLossOrder>,
}

/// A trade with only the ids of its dependent orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TradeSummary {
    /// Trade fields
    #[serde(flatten)]
    pub core: TradeCore,
    /// Take profit order id
    #[serde(rename = "takeProfitOrderID")]
    pub take_profit_order_id: Option<String>,
    /// Stop loss order id
    #[serde(rename = "stopLossOrderID")]
    pub stop_loss_order_id: Option<String>,
    /// Guaranteed stop loss order id
    #[serde(rename = "guaranteedStopLossOrderID")]
    pub guaranteed_stop_loss_order_id: Option<String>,
    /// Trailing stop loss order id
    #[serde(rename = "trailingStopLossOrderID")]
    pub trailing_stop_loss_order_id: Option<String>,
}

/// Price-dependent state of an open trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedTradeState {
    /// Trade id
    pub id: Option<String>,
    /// Unrealized profit/loss
    #[serde(rename = "unrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub unrealized_pl: Option<Decimal>,
    /// Margin currently used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_used: Option<Decimal>,
}
