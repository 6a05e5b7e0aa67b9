/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Account transactions
//!
//! Every change to an account is recorded as a [`Transaction`]. The `type` field
//! selects one of the kinds below; kinds introduced after this client was built decode
//! as [`Transaction::Unknown`] with only the [`TransactionHeader`] filled in.

use crate::presentation::order::{
    DependentExit, MarketOrderDelayedTradeClose, MarketOrderMarginCloseout,
    MarketOrderPositionCloseout, MarketOrderTradeClose, OnFillDetails, PendingEntry,
};
use crate::presentation::pricing::ClientPrice;
use crate::presentation::primitives::{
    ClientExtensions, HomeConversionFactors, OrderPositionFill, TimeInForce,
};
use crate::presentation::serialization::{exact_decimal_opt, id_list_opt};
use crate::presentation::tagged::tagged_union;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields present on every transaction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionHeader {
    /// Transaction id
    pub id: Option<String>,
    /// Time of the transaction
    pub time: Option<String>,
    /// User that initiated the transaction
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    /// Account the transaction belongs to
    #[serde(rename = "accountID")]
    pub account_id: Option<String>,
    /// Id of the first transaction in the same batch
    #[serde(rename = "batchID")]
    pub batch_id: Option<String>,
    /// Request that generated the transaction
    #[serde(rename = "requestID")]
    pub request_id: Option<String>,
    /// Kind discriminator
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Trade opened by an order fill
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeOpen {
    /// New trade id
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Units opened
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Average open price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Guaranteed execution fee in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_fee: Option<Decimal>,
    /// Guaranteed execution fee in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_guaranteed_execution_fee: Option<Decimal>,
    /// Client extensions of the trade
    pub client_extensions: Option<ClientExtensions>,
    /// Half spread cost in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub half_spread_cost: Option<Decimal>,
    /// Margin required when the trade opened
    #[serde(default, with = "exact_decimal_opt")]
    pub initial_margin_required: Option<Decimal>,
}

/// Trade reduced or closed by an order fill
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeReduce {
    /// Trade id
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Units closed
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Average close price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Realized profit/loss
    #[serde(rename = "realizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub realized_pl: Option<Decimal>,
    /// Financing paid or collected
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Financing in base currency
    #[serde(default, with = "exact_decimal_opt")]
    pub base_financing: Option<Decimal>,
    /// Financing in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_financing: Option<Decimal>,
    /// Financing rate applied
    #[serde(default, with = "exact_decimal_opt")]
    pub financing_rate: Option<Decimal>,
    /// Guaranteed execution fee in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_fee: Option<Decimal>,
    /// Guaranteed execution fee in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_guaranteed_execution_fee: Option<Decimal>,
    /// Half spread cost in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub half_spread_cost: Option<Decimal>,
}

/// Financing charged on one open trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenTradeFinancing {
    /// Trade id
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Financing in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Financing in base currency
    #[serde(default, with = "exact_decimal_opt")]
    pub base_financing: Option<Decimal>,
    /// Financing in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_financing: Option<Decimal>,
    /// Rate applied
    #[serde(default, with = "exact_decimal_opt")]
    pub financing_rate: Option<Decimal>,
}

/// Financing charged on one position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionFinancing {
    /// Instrument
    pub instrument: Option<String>,
    /// Financing in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Financing in base currency
    #[serde(default, with = "exact_decimal_opt")]
    pub base_financing: Option<Decimal>,
    /// Financing in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_financing: Option<Decimal>,
    /// Conversion factors used
    pub home_conversion_factors: Option<HomeConversionFactors>,
    /// Per-trade breakdown
    pub open_trade_financings: Option<Vec<OpenTradeFinancing>>,
    /// Financing mode of the account
    pub account_financing_mode: Option<String>,
}

/// Dividend adjustment applied to one open trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenTradeDividendAdjustment {
    /// Trade id
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Adjustment in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub dividend_adjustment: Option<Decimal>,
    /// Adjustment in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_dividend_adjustment: Option<Decimal>,
}

/// Keep-alive record on the transaction stream
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionHeartbeat {
    /// Always `HEARTBEAT`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Most recent transaction id of the account
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// Server time
    pub time: Option<String>,
}

/// Account creation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Division the account belongs to
    #[serde(rename = "divisionID")]
    pub division_id: Option<i64>,
    /// Site the account belongs to
    #[serde(rename = "siteID")]
    pub site_id: Option<i64>,
    /// User that owns the account
    #[serde(rename = "accountUserID")]
    pub account_user_id: Option<i64>,
    /// Account number for the user
    pub account_number: Option<i64>,
    /// Home currency
    pub home_currency: Option<String>,
}

/// Account closure
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CloseTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
}

/// Account reopening
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReopenTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
}

/// Account configuration change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigureTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// New alias
    pub alias: Option<String>,
    /// New margin rate
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_rate: Option<Decimal>,
}

/// Rejected account configuration change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigureRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Requested alias
    pub alias: Option<String>,
    /// Requested margin rate
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_rate: Option<Decimal>,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Funds deposited or withdrawn
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferFundsTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Signed amount; negative withdraws
    #[serde(default, with = "exact_decimal_opt")]
    pub amount: Option<Decimal>,
    /// Why the funds moved
    pub funding_reason: Option<String>,
    /// Free-form comment
    pub comment: Option<String>,
    /// Balance after the transfer
    #[serde(default, with = "exact_decimal_opt")]
    pub account_balance: Option<Decimal>,
}

/// Rejected funds transfer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferFundsRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Requested amount
    #[serde(default, with = "exact_decimal_opt")]
    pub amount: Option<Decimal>,
    /// Why the funds were to move
    pub funding_reason: Option<String>,
    /// Free-form comment
    pub comment: Option<String>,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Market order parameters shared by the created and rejected forms
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderParameters {
    /// Instrument
    pub instrument: Option<String>,
    /// Signed units
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Worst acceptable price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Position fill behaviour
    pub position_fill: Option<OrderPositionFill>,
    /// Trade close details
    pub trade_close: Option<MarketOrderTradeClose>,
    /// Long position closeout details
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Short position closeout details
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Margin closeout details
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    /// Delayed trade close details
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    /// Why the order was created
    pub reason: Option<String>,
    /// Client extensions of the order
    pub client_extensions: Option<ClientExtensions>,
}

/// Market order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order parameters
    #[serde(flatten)]
    pub order: MarketOrderParameters,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
}

/// Market order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order parameters
    #[serde(flatten)]
    pub order: MarketOrderParameters,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Fixed price order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedPriceOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
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
    /// Why the order was created
    pub reason: Option<String>,
    /// Client extensions of the order
    pub client_extensions: Option<ClientExtensions>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
}

/// Bookkeeping of a created pending order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrderOrigin {
    /// Why the order was created
    pub reason: Option<String>,
    /// Client extensions of the order
    pub client_extensions: Option<ClientExtensions>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: Option<String>,
    /// Transaction that cancelled the replaced order
    #[serde(rename = "cancellingTransactionID")]
    pub cancelling_transaction_id: Option<String>,
}

/// Bookkeeping of a rejected pending order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrderRejection {
    /// Why the order was to be created
    pub reason: Option<String>,
    /// Client extensions of the order
    pub client_extensions: Option<ClientExtensions>,
    /// Order the rejected one was meant to replace
    #[serde(rename = "intendedReplacesOrderID")]
    pub intended_replaces_order_id: Option<String>,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Limit order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LimitOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: PendingOrderOrigin,
}

/// Limit order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LimitOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Rejection details
    #[serde(flatten)]
    pub rejection: PendingOrderRejection,
}

/// Stop order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Worst acceptable fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: PendingOrderOrigin,
}

/// Stop order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Worst acceptable fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Rejection details
    #[serde(flatten)]
    pub rejection: PendingOrderRejection,
}

/// Market-if-touched order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Worst acceptable fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: PendingOrderOrigin,
}

/// Market-if-touched order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketIfTouchedOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry parameters
    #[serde(flatten)]
    pub entry: PendingEntry,
    /// Worst acceptable fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price_bound: Option<Decimal>,
    /// Dependent orders for the opened trade
    #[serde(flatten)]
    pub on_fill: OnFillDetails,
    /// Rejection details
    #[serde(flatten)]
    pub rejection: PendingOrderRejection,
}

/// Bookkeeping of a created dependent order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DependentOrderOrigin {
    /// Why the order was created
    pub reason: Option<String>,
    /// Client extensions of the order
    pub client_extensions: Option<ClientExtensions>,
    /// Fill that opened the trade, when created on fill
    #[serde(rename = "orderFillTransactionID")]
    pub order_fill_transaction_id: Option<String>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID")]
    pub replaces_order_id: Option<String>,
    /// Transaction that cancelled the replaced order
    #[serde(rename = "cancellingTransactionID")]
    pub cancelling_transaction_id: Option<String>,
}

/// Bookkeeping of a rejected dependent order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DependentOrderRejection {
    /// Why the order was to be created
    pub reason: Option<String>,
    /// Client extensions of the order
    pub client_extensions: Option<ClientExtensions>,
    /// Fill that opened the trade, when created on fill
    #[serde(rename = "orderFillTransactionID")]
    pub order_fill_transaction_id: Option<String>,
    /// Order the rejected one was meant to replace
    #[serde(rename = "intendedReplacesOrderID")]
    pub intended_replaces_order_id: Option<String>,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Take profit order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TakeProfitOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: DependentOrderOrigin,
}

/// Take profit order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TakeProfitOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Rejection details
    #[serde(flatten)]
    pub rejection: DependentOrderRejection,
}

/// Stop loss order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopLossOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
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
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_premium: Option<Decimal>,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: DependentOrderOrigin,
}

/// Stop loss order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StopLossOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
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
    /// Rejection details
    #[serde(flatten)]
    pub rejection: DependentOrderRejection,
}

/// Guaranteed stop loss order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedStopLossOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
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
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_premium: Option<Decimal>,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: DependentOrderOrigin,
}

/// Guaranteed stop loss order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GuaranteedStopLossOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trigger price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Distance from the trade price
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Rejection details
    #[serde(flatten)]
    pub rejection: DependentOrderRejection,
}

/// Trailing stop loss order created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TrailingStopLossOrderTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trailing distance
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Origin and replacement
    #[serde(flatten)]
    pub origin: DependentOrderOrigin,
}

/// Trailing stop loss order rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TrailingStopLossOrderRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Target trade and timing
    #[serde(flatten)]
    pub exit: DependentExit,
    /// Trailing distance
    #[serde(default, with = "exact_decimal_opt")]
    pub distance: Option<Decimal>,
    /// Rejection details
    #[serde(flatten)]
    pub rejection: DependentOrderRejection,
}

/// Order filled
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderFillTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Filled order
    #[serde(rename = "orderID")]
    pub order_id: Option<String>,
    /// Client id of the filled order
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<String>,
    /// Instrument
    pub instrument: Option<String>,
    /// Signed units filled
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Deprecated quote-to-home factor for gains
    #[serde(default, with = "exact_decimal_opt")]
    pub gain_quote_home_conversion_factor: Option<Decimal>,
    /// Deprecated quote-to-home factor for losses
    #[serde(default, with = "exact_decimal_opt")]
    pub loss_quote_home_conversion_factor: Option<Decimal>,
    /// Conversion factors used by the fill
    pub home_conversion_factors: Option<HomeConversionFactors>,
    /// Deprecated average fill price
    #[serde(default, with = "exact_decimal_opt")]
    pub price: Option<Decimal>,
    /// Volume weighted average fill price
    #[serde(rename = "fullVWAP")]
    #[serde(default, with = "exact_decimal_opt")]
    pub full_vwap: Option<Decimal>,
    /// Price at the time of the fill
    pub full_price: Option<ClientPrice>,
    /// Why the order was filled
    pub reason: Option<String>,
    /// Realized profit/loss
    #[serde(default, with = "exact_decimal_opt")]
    pub pl: Option<Decimal>,
    /// Realized profit/loss in quote currency
    #[serde(rename = "quotePL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_pl: Option<Decimal>,
    /// Financing paid or collected
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Financing in base currency
    #[serde(default, with = "exact_decimal_opt")]
    pub base_financing: Option<Decimal>,
    /// Financing in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_financing: Option<Decimal>,
    /// Commission charged
    #[serde(default, with = "exact_decimal_opt")]
    pub commission: Option<Decimal>,
    /// Guaranteed execution fee in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_fee: Option<Decimal>,
    /// Guaranteed execution fee in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_guaranteed_execution_fee: Option<Decimal>,
    /// Balance after the fill
    #[serde(default, with = "exact_decimal_opt")]
    pub account_balance: Option<Decimal>,
    /// Trade opened by the fill
    pub trade_opened: Option<TradeOpen>,
    /// Trades closed by the fill
    pub trades_closed: Option<Vec<TradeReduce>>,
    /// Trade reduced by the fill
    pub trade_reduced: Option<TradeReduce>,
    /// Half spread cost in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub half_spread_cost: Option<Decimal>,
}

/// Order cancelled
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderCancelTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Cancelled order
    #[serde(rename = "orderID")]
    pub order_id: Option<String>,
    /// Client id of the cancelled order
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<String>,
    /// Why the order was cancelled
    pub reason: Option<String>,
    /// Replacement order, when cancelled by a replace
    #[serde(rename = "replacedByOrderID")]
    pub replaced_by_order_id: Option<String>,
}

/// Order cancellation rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderCancelRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order that was to be cancelled
    #[serde(rename = "orderID")]
    pub order_id: Option<String>,
    /// Client id of that order
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<String>,
    /// Why it was rejected
    #[serde(rename = "rejectReason")]
    pub reject_reason: Option<String>,
}

/// Order client extensions changed
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsModifyTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Modified order
    #[serde(rename = "orderID")]
    pub order_id: Option<String>,
    /// Client id of the order
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<String>,
    /// New order extensions
    pub client_extensions_modify: Option<ClientExtensions>,
    /// New extensions for the trade the order will open
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

/// Order client extensions change rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsModifyRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order that was to be modified
    #[serde(rename = "orderID")]
    pub order_id: Option<String>,
    /// Client id of the order
    #[serde(rename = "clientOrderID")]
    pub client_order_id: Option<String>,
    /// Requested order extensions
    pub client_extensions_modify: Option<ClientExtensions>,
    /// Requested trade extensions
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Trade client extensions changed
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsModifyTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Modified trade
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Client id of the trade
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<String>,
    /// New trade extensions
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

/// Trade client extensions change rejected
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsModifyRejectTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade that was to be modified
    #[serde(rename = "tradeID")]
    pub trade_id: Option<String>,
    /// Client id of the trade
    #[serde(rename = "clientTradeID")]
    pub client_trade_id: Option<String>,
    /// Requested trade extensions
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    /// Why it was rejected
    pub reject_reason: Option<String>,
}

/// Account entered margin call state
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarginCallEnterTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
}

/// Margin call state extended
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarginCallExtendTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Number of the extension, starting at 1
    #[serde(rename = "extensionNumber")]
    pub extension_number: Option<i32>,
}

/// Account left margin call state
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarginCallExitTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
}

/// Trades scheduled to close once their markets are tradeable
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct DelayedTradeClosureTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Why the trades will close
    pub reason: Option<String>,
    /// Trades that will close
    #[serde(rename = "tradeIDs", default, with = "id_list_opt")]
    pub trade_ids: Option<Vec<String>>,
}

/// Daily financing charged or paid
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyFinancingTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Total financing in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Balance after financing
    #[serde(default, with = "exact_decimal_opt")]
    pub account_balance: Option<Decimal>,
    /// Financing mode of the account
    pub account_financing_mode: Option<String>,
    /// Per-position breakdown
    pub position_financings: Option<Vec<PositionFinancing>>,
}

/// Dividend adjustment applied to open trades
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendAdjustmentTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Instrument
    pub instrument: Option<String>,
    /// Total adjustment in home currency
    #[serde(default, with = "exact_decimal_opt")]
    pub dividend_adjustment: Option<Decimal>,
    /// Total adjustment in quote currency
    #[serde(default, with = "exact_decimal_opt")]
    pub quote_dividend_adjustment: Option<Decimal>,
    /// Conversion factors used
    pub home_conversion_factors: Option<HomeConversionFactors>,
    /// Balance after the adjustment
    #[serde(default, with = "exact_decimal_opt")]
    pub account_balance: Option<Decimal>,
    /// Per-trade breakdown
    pub open_trade_dividend_adjustments: Option<Vec<OpenTradeDividendAdjustment>>,
}

/// Resettable profit/loss reset to zero
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ResetResettablePLTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
}

tagged_union! {
    /// A transaction of any kind
    pub enum Transaction: TransactionHeader {
        "CREATE" => Create(CreateTransaction),
        "CLOSE" => Close(CloseTransaction),
        "REOPEN" => Reopen(ReopenTransaction),
        "CLIENT_CONFIGURE" => ClientConfigure(ClientConfigureTransaction),
        "CLIENT_CONFIGURE_REJECT" => ClientConfigureReject(ClientConfigureRejectTransaction),
        "TRANSFER_FUNDS" => TransferFunds(TransferFundsTransaction),
        "TRANSFER_FUNDS_REJECT" => TransferFundsReject(TransferFundsRejectTransaction),
        "MARKET_ORDER" => MarketOrder(MarketOrderTransaction),
        "MARKET_ORDER_REJECT" => MarketOrderReject(MarketOrderRejectTransaction),
        "FIXED_PRICE_ORDER" => FixedPriceOrder(FixedPriceOrderTransaction),
        "LIMIT_ORDER" => LimitOrder(LimitOrderTransaction),
        "LIMIT_ORDER_REJECT" => LimitOrderReject(LimitOrderRejectTransaction),
        "STOP_ORDER" => StopOrder(StopOrderTransaction),
        "STOP_ORDER_REJECT" => StopOrderReject(StopOrderRejectTransaction),
        "MARKET_IF_TOUCHED_ORDER" => MarketIfTouchedOrder(MarketIfTouchedOrderTransaction),
        "MARKET_IF_TOUCHED_ORDER_REJECT" => MarketIfTouchedOrderReject(MarketIfTouchedOrderRejectTransaction),
        "TAKE_PROFIT_ORDER" => TakeProfitOrder(TakeProfitOrderTransaction),
        "TAKE_PROFIT_ORDER_REJECT" => TakeProfitOrderReject(TakeProfitOrderRejectTransaction),
        "STOP_LOSS_ORDER" => StopLossOrder(StopLossOrderTransaction),
        "STOP_LOSS_ORDER_REJECT" => StopLossOrderReject(StopLossOrderRejectTransaction),
        "GUARANTEED_STOP_LOSS_ORDER" => GuaranteedStopLossOrder(GuaranteedStopLossOrderTransaction),
        "GUARANTEED_STOP_LOSS_ORDER_REJECT" => GuaranteedStopLossOrderReject(GuaranteedStopLossOrderRejectTransaction),
        "TRAILING_STOP_LOSS_ORDER" => TrailingStopLossOrder(TrailingStopLossOrderTransaction),
        "TRAILING_STOP_LOSS_ORDER_REJECT" => TrailingStopLossOrderReject(TrailingStopLossOrderRejectTransaction),
        "ORDER_FILL" => OrderFill(OrderFillTransaction),
        "ORDER_CANCEL" => OrderCancel(OrderCancelTransaction),
        "ORDER_CANCEL_REJECT" => OrderCancelReject(OrderCancelRejectTransaction),
        "ORDER_CLIENT_EXTENSIONS_MODIFY" => OrderClientExtensionsModify(OrderClientExtensionsModifyTransaction),
        "ORDER_CLIENT_EXTENSIONS_MODIFY_REJECT" => OrderClientExtensionsModifyReject(OrderClientExtensionsModifyRejectTransaction),
        "TRADE_CLIENT_EXTENSIONS_MODIFY" => TradeClientExtensionsModify(TradeClientExtensionsModifyTransaction),
        "TRADE_CLIENT_EXTENSIONS_MODIFY_REJECT" => TradeClientExtensionsModifyReject(TradeClientExtensionsModifyRejectTransaction),
        "MARGIN_CALL_ENTER" => MarginCallEnter(MarginCallEnterTransaction),
        "MARGIN_CALL_EXTEND" => MarginCallExtend(MarginCallExtendTransaction),
        "MARGIN_CALL_EXIT" => MarginCallExit(MarginCallExitTransaction),
        "DELAYED_TRADE_CLOSURE" => DelayedTradeClosure(DelayedTradeClosureTransaction),
        "DAILY_FINANCING" => DailyFinancing(DailyFinancingTransaction),
        "DIVIDEND_ADJUSTMENT" => DividendAdjustment(DividendAdjustmentTransaction),
        "RESET_RESETTABLE_PL" => ResetResettablePL(ResetResettablePLTransaction),
    }
}

impl Transaction {
    /// Transaction id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.header().id.as_deref()
    }

    /// Reject reason, for the `*_REJECT` kinds
    #[must_use]
    pub fn reject_reason(&self) -> Option<&str> {
        let reason = match self {
            Transaction::ClientConfigureReject(t) => &t.reject_reason,
            Transaction::TransferFundsReject(t) => &t.reject_reason,
            Transaction::MarketOrderReject(t) => &t.reject_reason,
            Transaction::LimitOrderReject(t) => &t.rejection.reject_reason,
            Transaction::StopOrderReject(t) => &t.rejection.reject_reason,
            Transaction::MarketIfTouchedOrderReject(t) => &t.rejection.reject_reason,
            Transaction::TakeProfitOrderReject(t) => &t.rejection.reject_reason,
            Transaction::StopLossOrderReject(t) => &t.rejection.reject_reason,
            Transaction::GuaranteedStopLossOrderReject(t) => &t.rejection.reject_reason,
            Transaction::TrailingStopLossOrderReject(t) => &t.rejection.reject_reason,
            Transaction::OrderCancelReject(t) => &t.reject_reason,
            Transaction::OrderClientExtensionsModifyReject(t) => &t.reject_reason,
            Transaction::TradeClientExtensionsModifyReject(t) => &t.reject_reason,
            _ => return None,
        };
        reason.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base(kind: &str) -> serde_json::Value {
        json!({
            "id": "6410",
            "time": "2024-01-15T10:30:00.000000000Z",
            "userID": 1234567,
            "accountID": "101-004-1234567-001",
            "batchID": "6409",
            "requestID": "24910176234851937",
            "type": kind
        })
    }

    #[test]
    fn every_known_kind_selects_its_variant() {
        for kind in Transaction::KINDS {
            let tx = Transaction::from_value(base(kind)).unwrap();
            assert!(!tx.is_unknown(), "{kind} fell back to the header-only shape");
            assert_eq!(tx.kind(), Some(*kind));
            assert_eq!(tx.header().user_id, Some(1234567));
        }
        assert_eq!(Transaction::KINDS.len(), 38);
    }

    #[test]
    fn order_fill_decodes_nested_trades() {
        let mut raw = base("ORDER_FILL");
        raw["orderID"] = json!("6409");
        raw["units"] = json!("-1000");
        raw["pl"] = json!("12.3450");
        raw["tradesClosed"] = json!([{"tradeID": "6400", "units": "-1000", "realizedPL": "12.3450"}]);
        raw["fullPrice"] = json!({"type": "PRICE", "bids": [{"price": "1.08501", "liquidity": 10}]});

        let Transaction::OrderFill(fill) = Transaction::from_value(raw).unwrap() else {
            panic!("expected an order fill");
        };
        assert_eq!(fill.pl.unwrap().to_string(), "12.3450");
        let closed = fill.trades_closed.unwrap();
        assert_eq!(closed[0].realized_pl.unwrap().to_string(), "12.3450");
        assert!(fill.trade_opened.is_none());
        assert_eq!(fill.full_price.unwrap().best_bid().unwrap().to_string(), "1.08501");
    }

    #[test]
    fn rejects_expose_their_reason() {
        let mut raw = base("LIMIT_ORDER_REJECT");
        raw["rejectReason"] = json!("INSUFFICIENT_MARGIN");
        let tx = Transaction::from_value(raw).unwrap();
        assert_eq!(tx.reject_reason(), Some("INSUFFICIENT_MARGIN"));
    }

    #[test]
    fn unknown_kind_keeps_common_fields() {
        let mut raw = base("FUTURE_TRANSACTION_KIND");
        raw["somethingNew"] = json!({"nested": true});
        let tx = Transaction::from_value(raw).unwrap();
        let Transaction::Unknown(header) = &tx else {
            panic!("expected the fallback variant");
        };
        assert_eq!(header.id.as_deref(), Some("6410"));
        assert_eq!(header.batch_id.as_deref(), Some("6409"));
        assert_eq!(tx.kind(), Some("FUTURE_TRANSACTION_KIND"));
    }

    #[test]
    fn non_objects_are_errors() {
        assert!(Transaction::from_value(json!(["ORDER_FILL"])).is_err());
        assert!(Transaction::from_value(json!("ORDER_FILL")).is_err());
    }

    #[test]
    fn ill_typed_known_kinds_are_errors() {
        let mut raw = base("ORDER_FILL");
        raw["tradesClosed"] = json!("not a list");
        assert!(Transaction::from_value(raw).is_err());
    }

    #[test]
    fn delayed_closure_accepts_comma_separated_ids() {
        let mut raw = base("DELAYED_TRADE_CLOSURE");
        raw["tradeIDs"] = json!("1,2,3");
        let Transaction::DelayedTradeClosure(t) = Transaction::from_value(raw).unwrap() else {
            panic!("expected a delayed trade closure");
        };
        assert_eq!(t.trade_ids.unwrap(), vec!["1", "2", "3"]);
    }
}
