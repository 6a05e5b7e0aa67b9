/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Response shapes of every operation, keyed by HTTP status
//!
//! Fields are optional throughout: a shape only states which top-level keys the
//! server may send for that status and how each one is decoded.

use crate::model::response::{ApiError, status_response};
use crate::presentation::account::{
    Account, AccountChanges, AccountChangesState, AccountProperties, AccountSummary,
};
use crate::presentation::instrument::{InstrumentCandles, OrderBook, PositionBook};
use crate::presentation::order::Order;
use crate::presentation::position::Position;
use crate::presentation::pricing::{ClientPrice, HomeConversions};
use crate::presentation::primitives::Instrument;
use crate::presentation::trade::Trade;
use crate::presentation::transaction::{
    ClientConfigureRejectTransaction, ClientConfigureTransaction, MarketOrderRejectTransaction,
    MarketOrderTransaction, OrderCancelRejectTransaction, OrderCancelTransaction,
    OrderClientExtensionsModifyRejectTransaction, OrderClientExtensionsModifyTransaction,
    OrderFillTransaction, TradeClientExtensionsModifyRejectTransaction,
    TradeClientExtensionsModifyTransaction, Transaction,
};
use crate::presentation::user::{UserInfo, UserInfoExternal};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT
// ============================================================================

/// Accounts the token can access
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountsBody {
    /// Account ids and tags
    pub accounts: Option<Vec<AccountProperties>>,
}

/// Full account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountBody {
    /// The account
    pub account: Option<Account>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Account summary
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountSummaryBody {
    /// The summary
    pub account: Option<AccountSummary>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Instruments tradeable by an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountInstrumentsBody {
    /// Instruments
    pub instruments: Option<Vec<Instrument>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Accepted configuration change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureAccountOk {
    /// Resulting transaction
    pub client_configure_transaction: Option<ClientConfigureTransaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Rejected configuration change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureAccountRejected {
    /// Rejection transaction
    pub client_configure_reject_transaction: Option<ClientConfigureRejectTransaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Account changes and current state
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountChangesBody {
    /// Changes since the requested transaction
    pub changes: Option<AccountChanges>,
    /// Current price-dependent state
    pub state: Option<AccountChangesState>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

status_response! {
    /// `GET /v3/accounts`
    pub enum ListAccountsResponse {
        200 => Ok(AccountsBody),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}`
    pub enum GetAccountResponse {
        200 => Ok(AccountBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/summary`
    pub enum GetAccountSummaryResponse {
        200 => Ok(AccountSummaryBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/instruments`
    pub enum GetAccountInstrumentsResponse {
        200 => Ok(AccountInstrumentsBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PATCH /v3/accounts/{accountID}/configuration`
    pub enum ConfigureAccountResponse {
        200 => Ok(ConfigureAccountOk),
        400 => BadRequest(ConfigureAccountRejected),
        403 => Forbidden(ConfigureAccountRejected),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/changes`
    pub enum GetAccountChangesResponse {
        200 => Ok(AccountChangesBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
        416 => RangeNotSatisfiable(ApiError),
    }
}

// ============================================================================
// INSTRUMENT
// ============================================================================

/// Order book snapshot
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookBody {
    /// The snapshot
    pub order_book: Option<OrderBook>,
}

/// Position book snapshot
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionBookBody {
    /// The snapshot
    pub position_book: Option<PositionBook>,
}

status_response! {
    /// `GET /v3/instruments/{instrument}/candles`
    pub enum GetCandlesResponse {
        200 => Ok(InstrumentCandles),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/instruments/{instrument}/orderBook`
    pub enum GetOrderBookResponse {
        200 => Ok(OrderBookBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/instruments/{instrument}/positionBook`
    pub enum GetPositionBookResponse {
        200 => Ok(PositionBookBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

// ============================================================================
// ORDER
// ============================================================================

/// Accepted order creation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderOk {
    /// Order created
    pub order_create_transaction: Option<Transaction>,
    /// Fill, when the order filled immediately
    pub order_fill_transaction: Option<OrderFillTransaction>,
    /// Cancellation, when the order was cancelled immediately
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    /// Reissue of a partially filled order
    pub order_reissue_transaction: Option<Transaction>,
    /// Rejected reissue
    pub order_reissue_reject_transaction: Option<Transaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Rejected order creation or replacement
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRejected {
    /// Rejection transaction
    pub order_reject_transaction: Option<Transaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Orders of an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrdersBody {
    /// Orders
    pub orders: Option<Vec<Order>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// One order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderBody {
    /// The order
    pub order: Option<Order>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Accepted order replacement
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrderOk {
    /// Cancellation of the replaced order
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    /// Replacement order created
    pub order_create_transaction: Option<Transaction>,
    /// Fill, when the replacement filled immediately
    pub order_fill_transaction: Option<OrderFillTransaction>,
    /// Reissue of a partially filled replacement
    pub order_reissue_transaction: Option<Transaction>,
    /// Rejected reissue
    pub order_reissue_reject_transaction: Option<Transaction>,
    /// Cancellation of the replacement, when it was cancelled immediately
    pub replacing_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Cancellation rejected, e.g. unknown order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelRejected {
    /// Rejection transaction
    pub order_cancel_reject_transaction: Option<OrderCancelRejectTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Accepted order cancellation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderOk {
    /// Cancellation transaction
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Accepted order client extensions change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsOk {
    /// Modification transaction
    pub order_client_extensions_modify_transaction: Option<OrderClientExtensionsModifyTransaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
}

/// Rejected order client extensions change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderClientExtensionsRejected {
    /// Rejection transaction
    pub order_client_extensions_modify_reject_transaction:
        Option<OrderClientExtensionsModifyRejectTransaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

status_response! {
    /// `POST /v3/accounts/{accountID}/orders`
    pub enum CreateOrderResponse {
        201 => Created(CreateOrderOk),
        400 => BadRequest(OrderRejected),
        404 => NotFound(OrderRejected),
        401 => Unauthorized(ApiError),
        403 => Forbidden(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/orders`
    pub enum ListOrdersResponse {
        200 => Ok(OrdersBody),
        400 => BadRequest(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/pendingOrders`
    pub enum ListPendingOrdersResponse {
        200 => Ok(OrdersBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/orders/{orderSpecifier}`
    pub enum GetOrderResponse {
        200 => Ok(OrderBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}`
    pub enum ReplaceOrderResponse {
        201 => Created(ReplaceOrderOk),
        400 => BadRequest(OrderRejected),
        404 => NotFound(OrderCancelRejected),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/cancel`
    pub enum CancelOrderResponse {
        200 => Ok(CancelOrderOk),
        404 => NotFound(OrderCancelRejected),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions`
    pub enum SetOrderClientExtensionsResponse {
        200 => Ok(OrderClientExtensionsOk),
        400 => BadRequest(OrderClientExtensionsRejected),
        404 => NotFound(OrderClientExtensionsRejected),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

// ============================================================================
// TRADE
// ============================================================================

/// Trades of an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TradesBody {
    /// Trades
    pub trades: Option<Vec<Trade>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// One trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TradeBody {
    /// The trade
    pub trade: Option<Trade>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Accepted trade close
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloseTradeOk {
    /// Market order created to close the trade
    pub order_create_transaction: Option<MarketOrderTransaction>,
    /// Fill of that order
    pub order_fill_transaction: Option<OrderFillTransaction>,
    /// Cancellation of that order
    pub order_cancel_transaction: Option<OrderCancelTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Trade close rejected as invalid
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloseTradeRejected {
    /// Rejected market order
    pub order_reject_transaction: Option<MarketOrderRejectTransaction>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Trade close rejected because the trade or account does not exist
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloseTradeNotFound {
    /// Rejected market order
    pub order_reject_transaction: Option<MarketOrderRejectTransaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Accepted trade client extensions change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsOk {
    /// Modification transaction
    pub trade_client_extensions_modify_transaction: Option<TradeClientExtensionsModifyTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Rejected trade client extensions change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeClientExtensionsRejected {
    /// Rejection transaction
    pub trade_client_extensions_modify_reject_transaction:
        Option<TradeClientExtensionsModifyRejectTransaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Accepted change of a trade's dependent orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetDependentOrdersOk {
    /// Cancellation of the previous take profit
    pub take_profit_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// New take profit
    pub take_profit_order_transaction: Option<Transaction>,
    /// Immediate fill of the new take profit
    pub take_profit_order_fill_transaction: Option<OrderFillTransaction>,
    /// Immediate cancellation of the new take profit
    pub take_profit_order_created_cancel_transaction: Option<OrderCancelTransaction>,
    /// Cancellation of the previous stop loss
    pub stop_loss_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// New stop loss
    pub stop_loss_order_transaction: Option<Transaction>,
    /// Immediate fill of the new stop loss
    pub stop_loss_order_fill_transaction: Option<OrderFillTransaction>,
    /// Immediate cancellation of the new stop loss
    pub stop_loss_order_created_cancel_transaction: Option<OrderCancelTransaction>,
    /// Cancellation of the previous trailing stop loss
    pub trailing_stop_loss_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// New trailing stop loss
    pub trailing_stop_loss_order_transaction: Option<Transaction>,
    /// Cancellation of the previous guaranteed stop loss
    pub guaranteed_stop_loss_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// New guaranteed stop loss
    pub guaranteed_stop_loss_order_transaction: Option<Transaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Rejected change of a trade's dependent orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetDependentOrdersRejected {
    /// Rejected cancellation of the take profit
    pub take_profit_order_cancel_reject_transaction: Option<OrderCancelRejectTransaction>,
    /// Rejected take profit
    pub take_profit_order_reject_transaction: Option<Transaction>,
    /// Rejected cancellation of the stop loss
    pub stop_loss_order_cancel_reject_transaction: Option<OrderCancelRejectTransaction>,
    /// Rejected stop loss
    pub stop_loss_order_reject_transaction: Option<Transaction>,
    /// Rejected cancellation of the trailing stop loss
    pub trailing_stop_loss_order_cancel_reject_transaction: Option<OrderCancelRejectTransaction>,
    /// Rejected trailing stop loss
    pub trailing_stop_loss_order_reject_transaction: Option<Transaction>,
    /// Rejected cancellation of the guaranteed stop loss
    pub guaranteed_stop_loss_order_cancel_reject_transaction: Option<OrderCancelRejectTransaction>,
    /// Rejected guaranteed stop loss
    pub guaranteed_stop_loss_order_reject_transaction: Option<Transaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

status_response! {
    /// `GET /v3/accounts/{accountID}/trades`
    pub enum ListTradesResponse {
        200 => Ok(TradesBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/openTrades`
    pub enum ListOpenTradesResponse {
        200 => Ok(TradesBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/trades/{tradeSpecifier}`
    pub enum GetTradeResponse {
        200 => Ok(TradeBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/close`
    pub enum CloseTradeResponse {
        200 => Ok(CloseTradeOk),
        400 => BadRequest(CloseTradeRejected),
        404 => NotFound(CloseTradeNotFound),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions`
    pub enum SetTradeClientExtensionsResponse {
        200 => Ok(TradeClientExtensionsOk),
        400 => BadRequest(TradeClientExtensionsRejected),
        404 => NotFound(TradeClientExtensionsRejected),
        401 => Unauthorized(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/orders`
    pub enum SetDependentOrdersResponse {
        200 => Ok(SetDependentOrdersOk),
        400 => BadRequest(SetDependentOrdersRejected),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

// ============================================================================
// POSITION
// ============================================================================

/// Positions of an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PositionsBody {
    /// Positions
    pub positions: Option<Vec<Position>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// One position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PositionBody {
    /// The position
    pub position: Option<Position>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Accepted position close
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosePositionOk {
    /// Market order closing the long side
    pub long_order_create_transaction: Option<MarketOrderTransaction>,
    /// Fill of the long close
    pub long_order_fill_transaction: Option<OrderFillTransaction>,
    /// Cancellation of the long close
    pub long_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// Market order closing the short side
    pub short_order_create_transaction: Option<MarketOrderTransaction>,
    /// Fill of the short close
    pub short_order_fill_transaction: Option<OrderFillTransaction>,
    /// Cancellation of the short close
    pub short_order_cancel_transaction: Option<OrderCancelTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Rejected position close
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosePositionRejected {
    /// Rejected long close
    pub long_order_reject_transaction: Option<MarketOrderRejectTransaction>,
    /// Rejected short close
    pub short_order_reject_transaction: Option<MarketOrderRejectTransaction>,
    /// All transactions generated
    #[serde(rename = "relatedTransactionIDs")]
    pub related_transaction_ids: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

status_response! {
    /// `GET /v3/accounts/{accountID}/positions`
    pub enum ListPositionsResponse {
        200 => Ok(PositionsBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/openPositions`
    pub enum ListOpenPositionsResponse {
        200 => Ok(PositionsBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/positions/{instrument}`
    pub enum GetPositionResponse {
        200 => Ok(PositionBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `PUT /v3/accounts/{accountID}/positions/{instrument}/close`
    pub enum ClosePositionResponse {
        200 => Ok(ClosePositionOk),
        400 => BadRequest(ClosePositionRejected),
        401 => Unauthorized(ApiError),
        404 => NotFound(ClosePositionRejected),
        405 => MethodNotAllowed(ApiError),
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// Pages of transaction ids matching a query
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPagesBody {
    /// Start of the queried range
    pub from: Option<String>,
    /// End of the queried range
    pub to: Option<String>,
    /// Transactions per page
    pub page_size: Option<i32>,
    /// Kinds the query was filtered by
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
    /// Number of matching transactions
    pub count: Option<i64>,
    /// URLs of the pages
    pub pages: Option<Vec<String>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// One transaction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionBody {
    /// The transaction
    pub transaction: Option<Transaction>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

/// Several transactions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionsBody {
    /// Transactions, oldest first
    pub transactions: Option<Vec<Transaction>>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
}

status_response! {
    /// `GET /v3/accounts/{accountID}/transactions`
    pub enum ListTransactionsResponse {
        200 => Ok(TransactionPagesBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        403 => Forbidden(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
        416 => RangeNotSatisfiable(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/transactions/{transactionID}`
    pub enum GetTransactionResponse {
        200 => Ok(TransactionBody),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/transactions/idrange`
    pub enum GetTransactionRangeResponse {
        200 => Ok(TransactionsBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
        416 => RangeNotSatisfiable(ApiError),
    }
}

status_response! {
    /// `GET /v3/accounts/{accountID}/transactions/sinceid`
    pub enum GetTransactionsSinceResponse {
        200 => Ok(TransactionsBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
        416 => RangeNotSatisfiable(ApiError),
    }
}

// ============================================================================
// PRICING
// ============================================================================

/// Current prices
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingBody {
    /// One price per requested instrument
    pub prices: Option<Vec<ClientPrice>>,
    /// Home conversion rates, when requested
    pub home_conversions: Option<Vec<HomeConversions>>,
    /// Server time of the snapshot
    pub time: Option<String>,
}

status_response! {
    /// `GET /v3/accounts/{accountID}/pricing`
    pub enum GetPricingResponse {
        200 => Ok(PricingBody),
        400 => BadRequest(ApiError),
        401 => Unauthorized(ApiError),
        404 => NotFound(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

// ============================================================================
// USER
// ============================================================================

/// Private user details
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoBody {
    /// The details
    pub user_info: Option<UserInfo>,
}

/// Shareable user details
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoExternalBody {
    /// The details
    pub user_info: Option<UserInfoExternal>,
}

status_response! {
    /// `GET /v3/users/{userSpecifier}`
    pub enum GetUserInfoResponse {
        200 => Ok(UserInfoBody),
        401 => Unauthorized(ApiError),
        403 => Forbidden(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

status_response! {
    /// `GET /v3/users/{userSpecifier}/externalInfo`
    pub enum GetUserExternalInfoResponse {
        200 => Ok(UserInfoExternalBody),
        401 => Unauthorized(ApiError),
        403 => Forbidden(ApiError),
        405 => MethodNotAllowed(ApiError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::response::DecodePlan;
    use serde_json::json;

    #[test]
    fn close_trade_shapes_differ_by_status() {
        let ok = CloseTradeResponse::decode(
            200,
            json!({
                "orderCreateTransaction": {"id": "6410", "type": "MARKET_ORDER", "units": "-1000"},
                "orderFillTransaction": {"id": "6411", "type": "ORDER_FILL", "pl": "12.3450"},
                "relatedTransactionIDs": ["6410", "6411"],
                "lastTransactionID": "6411"
            }),
        )
        .unwrap();
        let CloseTradeResponse::Ok(ok) = ok else {
            panic!("expected the 200 shape");
        };
        assert_eq!(ok.order_fill_transaction.unwrap().pl.unwrap().to_string(), "12.3450");

        let rejected = CloseTradeResponse::decode(
            400,
            json!({
                "orderRejectTransaction": {"type": "MARKET_ORDER_REJECT", "rejectReason": "TRADE_DOESNT_EXIST"},
                "errorCode": "TRADE_DOESNT_EXIST",
                "errorMessage": "The Trade specified does not exist"
            }),
        )
        .unwrap();
        let CloseTradeResponse::BadRequest(rejected) = rejected else {
            panic!("expected the 400 shape");
        };
        assert_eq!(rejected.error_code.as_deref(), Some("TRADE_DOESNT_EXIST"));
        assert_eq!(
            rejected.order_reject_transaction.unwrap().reject_reason.as_deref(),
            Some("TRADE_DOESNT_EXIST")
        );
    }

    #[test]
    fn unregistered_statuses_are_reported() {
        assert!(CloseTradeResponse::registered(404));
        assert!(!CloseTradeResponse::registered(500));
        assert!(CloseTradeResponse::decode(500, json!({})).is_err());
    }
}
