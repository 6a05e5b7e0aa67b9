/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # v20 Client Prelude
//!
//! Imports the types and traits needed for most interactions with the API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use v20_client::prelude::*;
//!
//! # fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the client
pub use crate::application::config::{Config, RateLimiterConfig};

/// Client implementing every service
pub use crate::application::client::Client;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, V20Result};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::instrument::InstrumentService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::interfaces::position::PositionService;
pub use crate::application::interfaces::pricing::PricingService;
pub use crate::application::interfaces::trade::TradeService;
pub use crate::application::interfaces::transaction::TransactionService;
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Parameters and bodies
pub use crate::model::requests::{
    AccountConfiguration, CandlesParams, ClosePositionBody, CloseTradeBody, DependentOrdersBody,
    OrderClientExtensionsBody, OrderListParams, OrderRequest, PricingParams, PricingStreamParams,
    TradeClientExtensionsBody, TradeListParams, TransactionListParams, TransactionRangeParams,
    TransactionsSinceParams,
};

/// Response envelope
pub use crate::model::response::{ApiError, Response, ResponseBody};

/// Per-operation status enums
pub use crate::model::responses::{
    CancelOrderResponse, ClosePositionResponse, CloseTradeResponse, ConfigureAccountResponse,
    CreateOrderResponse, GetAccountChangesResponse, GetAccountInstrumentsResponse,
    GetAccountResponse, GetAccountSummaryResponse, GetCandlesResponse, GetOrderBookResponse,
    GetOrderResponse, GetPositionBookResponse, GetPositionResponse, GetPricingResponse,
    GetTradeResponse, GetTransactionRangeResponse, GetTransactionResponse,
    GetTransactionsSinceResponse, GetUserExternalInfoResponse, GetUserInfoResponse,
    ListAccountsResponse, ListOpenPositionsResponse, ListOpenTradesResponse, ListOrdersResponse,
    ListPendingOrdersResponse, ListPositionsResponse, ListTradesResponse,
    ListTransactionsResponse, ReplaceOrderResponse, SetDependentOrdersResponse,
    SetOrderClientExtensionsResponse, SetTradeClientExtensionsResponse,
};

/// Streaming records
pub use crate::model::stream::{
    PricingStreamItem, RecordStream, StreamRecord, TransactionStreamItem,
};

// ============================================================================
// ENTITIES
// ============================================================================

pub use crate::presentation::account::{
    Account, AccountChanges, AccountChangesState, AccountProperties, AccountSummary,
};
pub use crate::presentation::instrument::{Candlestick, CandlestickData, OrderBook, PositionBook};
pub use crate::presentation::order::Order;
pub use crate::presentation::position::{Position, PositionSide};
pub use crate::presentation::pricing::{ClientPrice, PriceBucket};
pub use crate::presentation::primitives::{
    CandlestickGranularity, ClientExtensions, Instrument, OrderState, OrderStateFilter,
    PricingComponent, StopLossDetails, TakeProfitDetails, TimeInForce, TradeState,
    TradeStateFilter, TrailingStopLossDetails,
};
pub use crate::presentation::trade::{Trade, TradeSummary};
pub use crate::presentation::transaction::{Transaction, TransactionHeader};
pub use crate::presentation::user::{UserInfo, UserInfoExternal};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Date-time helpers
pub use crate::utils::time::{DateTimeFormat, parse_datetime};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use futures_util::StreamExt;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
