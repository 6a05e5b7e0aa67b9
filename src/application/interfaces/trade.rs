use crate::error::V20Result;
use crate::model::requests::{
    CloseTradeBody, DependentOrdersBody, TradeClientExtensionsBody, TradeListParams,
};
use crate::model::response::Response;
use crate::model::responses::{
    CloseTradeResponse, GetTradeResponse, ListOpenTradesResponse, ListTradesResponse,
    SetDependentOrdersResponse, SetTradeClientExtensionsResponse,
};
use async_trait::async_trait;

/// Interface for the trade service
///
/// A trade specifier is either a trade ID or `@` followed by a client trade ID.
#[async_trait]
pub trait TradeService: Send + Sync {
    /// Lists trades matching `params`
    async fn list_trades(
        &self,
        account_id: &str,
        params: &TradeListParams,
    ) -> V20Result<Response<ListTradesResponse>>;

    /// Lists every open trade
    async fn list_open_trades(&self, account_id: &str)
    -> V20Result<Response<ListOpenTradesResponse>>;

    /// Gets one trade
    async fn get_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
    ) -> V20Result<Response<GetTradeResponse>>;

    /// Closes a trade fully or partially
    ///
    /// A rejected close is not an error: the 400 and 404 bodies carry the reject
    /// transaction and decode into their own variants.
    async fn close_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
        body: &CloseTradeBody,
    ) -> V20Result<Response<CloseTradeResponse>>;

    /// Updates the client extensions of a trade
    async fn set_trade_client_extensions(
        &self,
        account_id: &str,
        trade_specifier: &str,
        body: &TradeClientExtensionsBody,
    ) -> V20Result<Response<SetTradeClientExtensionsResponse>>;

    /// Creates or replaces the take profit, stop loss and trailing stop loss orders of
    /// a trade
    async fn set_trade_dependent_orders(
        &self,
        account_id: &str,
        trade_specifier: &str,
        body: &DependentOrdersBody,
    ) -> V20Result<Response<SetDependentOrdersResponse>>;
}
