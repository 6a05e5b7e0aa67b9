/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request builders, one per operation
//!
//! Each function only describes the call; nothing is sent until the request is
//! handed to [`crate::model::http::HttpClient`].

use crate::error::V20Result;
use crate::model::request::Request;
use crate::model::requests::{
    AccountConfiguration, CandlesParams, ClosePositionBody, CloseTradeBody, DependentOrdersBody,
    OrderBody, OrderClientExtensionsBody, OrderListParams, OrderRequest, PricingParams,
    PricingStreamParams, TradeClientExtensionsBody, TradeListParams, TransactionListParams,
    TransactionRangeParams, TransactionsSinceParams,
};

const ACCOUNT_ID: &str = "accountID";

/// Account operations
pub mod account {
    use super::*;

    /// `GET /v3/accounts`
    #[must_use]
    pub fn list() -> Request {
        Request::get("/v3/accounts")
    }

    /// `GET /v3/accounts/{accountID}`
    #[must_use]
    pub fn get(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}").path_param(ACCOUNT_ID, account_id)
    }

    /// `GET /v3/accounts/{accountID}/summary`
    #[must_use]
    pub fn summary(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/summary").path_param(ACCOUNT_ID, account_id)
    }

    /// `GET /v3/accounts/{accountID}/instruments`
    #[must_use]
    pub fn instruments(account_id: &str, instruments: Option<&[&str]>) -> Request {
        Request::get("/v3/accounts/{accountID}/instruments")
            .path_param(ACCOUNT_ID, account_id)
            .query_param("instruments", instruments.map(|i| i.join(",")))
    }

    /// `PATCH /v3/accounts/{accountID}/configuration`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn configure(account_id: &str, configuration: &AccountConfiguration) -> V20Result<Request> {
        Request::patch("/v3/accounts/{accountID}/configuration")
            .path_param(ACCOUNT_ID, account_id)
            .body(configuration)
    }

    /// `GET /v3/accounts/{accountID}/changes`
    #[must_use]
    pub fn changes(account_id: &str, since_transaction_id: Option<&str>) -> Request {
        Request::get("/v3/accounts/{accountID}/changes")
            .path_param(ACCOUNT_ID, account_id)
            .query_param("sinceTransactionID", since_transaction_id)
    }
}

/// Instrument operations
pub mod instrument {
    use super::*;

    /// `GET /v3/instruments/{instrument}/candles`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn candles(instrument: &str, params: &CandlesParams) -> V20Result<Request> {
        Request::get("/v3/instruments/{instrument}/candles")
            .path_param("instrument", instrument)
            .query_from(params)
    }

    /// `GET /v3/instruments/{instrument}/orderBook`
    #[must_use]
    pub fn order_book(instrument: &str, time: Option<&str>) -> Request {
        Request::get("/v3/instruments/{instrument}/orderBook")
            .path_param("instrument", instrument)
            .query_param("time", time)
    }

    /// `GET /v3/instruments/{instrument}/positionBook`
    #[must_use]
    pub fn position_book(instrument: &str, time: Option<&str>) -> Request {
        Request::get("/v3/instruments/{instrument}/positionBook")
            .path_param("instrument", instrument)
            .query_param("time", time)
    }
}

/// Order operations
pub mod order {
    use super::*;

    const ORDER_SPECIFIER: &str = "orderSpecifier";

    /// `POST /v3/accounts/{accountID}/orders`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn create(account_id: &str, order: &OrderRequest) -> V20Result<Request> {
        Request::post("/v3/accounts/{accountID}/orders")
            .path_param(ACCOUNT_ID, account_id)
            .body(&OrderBody {
                order: order.clone(),
            })
    }

    /// `GET /v3/accounts/{accountID}/orders`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn list(account_id: &str, params: &OrderListParams) -> V20Result<Request> {
        Request::get("/v3/accounts/{accountID}/orders")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)
    }

    /// `GET /v3/accounts/{accountID}/pendingOrders`
    #[must_use]
    pub fn list_pending(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/pendingOrders").path_param(ACCOUNT_ID, account_id)
    }

    /// `GET /v3/accounts/{accountID}/orders/{orderSpecifier}`
    #[must_use]
    pub fn get(account_id: &str, order_specifier: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/orders/{orderSpecifier}")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(ORDER_SPECIFIER, order_specifier)
    }

    /// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn replace(
        account_id: &str,
        order_specifier: &str,
        order: &OrderRequest,
    ) -> V20Result<Request> {
        Request::put("/v3/accounts/{accountID}/orders/{orderSpecifier}")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(ORDER_SPECIFIER, order_specifier)
            .body(&OrderBody {
                order: order.clone(),
            })
    }

    /// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/cancel`
    #[must_use]
    pub fn cancel(account_id: &str, order_specifier: &str) -> Request {
        Request::put("/v3/accounts/{accountID}/orders/{orderSpecifier}/cancel")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(ORDER_SPECIFIER, order_specifier)
    }

    /// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn set_client_extensions(
        account_id: &str,
        order_specifier: &str,
        body: &OrderClientExtensionsBody,
    ) -> V20Result<Request> {
        Request::put("/v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(ORDER_SPECIFIER, order_specifier)
            .body(body)
    }
}

/// Trade operations
pub mod trade {
    use super::*;

    const TRADE_SPECIFIER: &str = "tradeSpecifier";

    /// `GET /v3/accounts/{accountID}/trades`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn list(account_id: &str, params: &TradeListParams) -> V20Result<Request> {
        Request::get("/v3/accounts/{accountID}/trades")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)
    }

    /// `GET /v3/accounts/{accountID}/openTrades`
    #[must_use]
    pub fn list_open(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/openTrades").path_param(ACCOUNT_ID, account_id)
    }

    /// `GET /v3/accounts/{accountID}/trades/{tradeSpecifier}`
    #[must_use]
    pub fn get(account_id: &str, trade_specifier: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/trades/{tradeSpecifier}")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(TRADE_SPECIFIER, trade_specifier)
    }

    /// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/close`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn close(
        account_id: &str,
        trade_specifier: &str,
        body: &CloseTradeBody,
    ) -> V20Result<Request> {
        Request::put("/v3/accounts/{accountID}/trades/{tradeSpecifier}/close")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(TRADE_SPECIFIER, trade_specifier)
            .body(body)
    }

    /// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn set_client_extensions(
        account_id: &str,
        trade_specifier: &str,
        body: &TradeClientExtensionsBody,
    ) -> V20Result<Request> {
        Request::put("/v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(TRADE_SPECIFIER, trade_specifier)
            .body(body)
    }

    /// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/orders`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn set_dependent_orders(
        account_id: &str,
        trade_specifier: &str,
        body: &DependentOrdersBody,
    ) -> V20Result<Request> {
        Request::put("/v3/accounts/{accountID}/trades/{tradeSpecifier}/orders")
            .path_param(ACCOUNT_ID, account_id)
            .path_param(TRADE_SPECIFIER, trade_specifier)
            .body(body)
    }
}

/// Position operations
pub mod position {
    use super::*;

    /// `GET /v3/accounts/{accountID}/positions`
    #[must_use]
    pub fn list(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/positions").path_param(ACCOUNT_ID, account_id)
    }

    /// `GET /v3/accounts/{accountID}/openPositions`
    #[must_use]
    pub fn list_open(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/openPositions").path_param(ACCOUNT_ID, account_id)
    }

    /// `GET /v3/accounts/{accountID}/positions/{instrument}`
    #[must_use]
    pub fn get(account_id: &str, instrument: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/positions/{instrument}")
            .path_param(ACCOUNT_ID, account_id)
            .path_param("instrument", instrument)
    }

    /// `PUT /v3/accounts/{accountID}/positions/{instrument}/close`
    ///
    /// # Errors
    /// Fails if the body cannot be serialized.
    pub fn close(account_id: &str, instrument: &str, body: &ClosePositionBody) -> V20Result<Request> {
        Request::put("/v3/accounts/{accountID}/positions/{instrument}/close")
            .path_param(ACCOUNT_ID, account_id)
            .path_param("instrument", instrument)
            .body(body)
    }
}

/// Transaction operations
pub mod transaction {
    use super::*;

    /// `GET /v3/accounts/{accountID}/transactions`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn list(account_id: &str, params: &TransactionListParams) -> V20Result<Request> {
        Request::get("/v3/accounts/{accountID}/transactions")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)
    }

    /// `GET /v3/accounts/{accountID}/transactions/{transactionID}`
    #[must_use]
    pub fn get(account_id: &str, transaction_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/transactions/{transactionID}")
            .path_param(ACCOUNT_ID, account_id)
            .path_param("transactionID", transaction_id)
    }

    /// `GET /v3/accounts/{accountID}/transactions/idrange`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn range(account_id: &str, params: &TransactionRangeParams) -> V20Result<Request> {
        Request::get("/v3/accounts/{accountID}/transactions/idrange")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)
    }

    /// `GET /v3/accounts/{accountID}/transactions/sinceid`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn since(account_id: &str, params: &TransactionsSinceParams) -> V20Result<Request> {
        Request::get("/v3/accounts/{accountID}/transactions/sinceid")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)
    }

    /// `GET /v3/accounts/{accountID}/transactions/stream` on the streaming host
    #[must_use]
    pub fn stream(account_id: &str) -> Request {
        Request::get("/v3/accounts/{accountID}/transactions/stream")
            .path_param(ACCOUNT_ID, account_id)
            .streaming()
    }
}

/// Pricing operations
pub mod pricing {
    use super::*;

    /// `GET /v3/accounts/{accountID}/pricing`
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn get(account_id: &str, params: &PricingParams) -> V20Result<Request> {
        Request::get("/v3/accounts/{accountID}/pricing")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)
    }

    /// `GET /v3/accounts/{accountID}/pricing/stream` on the streaming host
    ///
    /// # Errors
    /// Fails if the parameters cannot be turned into a query string.
    pub fn stream(account_id: &str, params: &PricingStreamParams) -> V20Result<Request> {
        Ok(Request::get("/v3/accounts/{accountID}/pricing/stream")
            .path_param(ACCOUNT_ID, account_id)
            .query_from(params)?
            .streaming())
    }
}

/// User operations
pub mod user {
    use super::*;

    /// `GET /v3/users/{userSpecifier}`
    #[must_use]
    pub fn info(user_specifier: &str) -> Request {
        Request::get("/v3/users/{userSpecifier}").path_param("userSpecifier", user_specifier)
    }

    /// `GET /v3/users/{userSpecifier}/externalInfo`
    #[must_use]
    pub fn external_info(user_specifier: &str) -> Request {
        Request::get("/v3/users/{userSpecifier}/externalInfo")
            .path_param("userSpecifier", user_specifier)
    }
}
