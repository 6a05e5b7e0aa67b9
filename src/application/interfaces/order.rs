use crate::error::V20Result;
use crate::model::requests::{OrderClientExtensionsBody, OrderListParams, OrderRequest};
use crate::model::response::Response;
use crate::model::responses::{
    CancelOrderResponse, CreateOrderResponse, GetOrderResponse, ListOrdersResponse,
    ListPendingOrdersResponse, ReplaceOrderResponse, SetOrderClientExtensionsResponse,
};
use async_trait::async_trait;

/// Interface for the order service
///
/// An order specifier is either an order ID or `@` followed by a client order ID.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Submits an order
    async fn create_order(
        &self,
        account_id: &str,
        order: &OrderRequest,
    ) -> V20Result<Response<CreateOrderResponse>>;

    /// Lists orders matching `params`
    async fn list_orders(
        &self,
        account_id: &str,
        params: &OrderListParams,
    ) -> V20Result<Response<ListOrdersResponse>>;

    /// Lists every pending order
    async fn list_pending_orders(
        &self,
        account_id: &str,
    ) -> V20Result<Response<ListPendingOrdersResponse>>;

    /// Gets one order
    async fn get_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> V20Result<Response<GetOrderResponse>>;

    /// Cancels an order and creates `order` in its place
    async fn replace_order(
        &self,
        account_id: &str,
        order_specifier: &str,
        order: &OrderRequest,
    ) -> V20Result<Response<ReplaceOrderResponse>>;

    /// Cancels a pending order
    async fn cancel_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> V20Result<Response<CancelOrderResponse>>;

    /// Updates the client extensions of an order and of the trade it will open
    async fn set_order_client_extensions(
        &self,
        account_id: &str,
        order_specifier: &str,
        body: &OrderClientExtensionsBody,
    ) -> V20Result<Response<SetOrderClientExtensionsResponse>>;
}
