use crate::application::client::Client;
use crate::application::interfaces::order::OrderService;
use crate::error::V20Result;
use crate::model::endpoints::order;
use crate::model::requests::{OrderClientExtensionsBody, OrderListParams, OrderRequest};
use crate::model::response::Response;
use crate::model::responses::{
    CancelOrderResponse, CreateOrderResponse, GetOrderResponse, ListOrdersResponse,
    ListPendingOrdersResponse, ReplaceOrderResponse, SetOrderClientExtensionsResponse,
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl OrderService for Client {
    async fn create_order(
        &self,
        account_id: &str,
        order: &OrderRequest,
    ) -> V20Result<Response<CreateOrderResponse>> {
        info!("Creating order: {}", order);
        let request = order::create(account_id, order)?;
        let response = self.execute::<CreateOrderResponse>(&request).await?;

        match response.decoded() {
            Some(CreateOrderResponse::Created(created)) => {
                debug!(
                    "Order created, last transaction: {:?}",
                    created.last_transaction_id
                );
            }
            Some(CreateOrderResponse::BadRequest(rejected))
            | Some(CreateOrderResponse::NotFound(rejected)) => {
                warn!(
                    "Order rejected: {:?} {:?}",
                    rejected.error_code, rejected.error_message
                );
            }
            _ => {}
        }
        Ok(response)
    }

    async fn list_orders(
        &self,
        account_id: &str,
        params: &OrderListParams,
    ) -> V20Result<Response<ListOrdersResponse>> {
        debug!("Listing orders of account: {}", account_id);
        let request = order::list(account_id, params)?;
        self.execute(&request).await
    }

    async fn list_pending_orders(
        &self,
        account_id: &str,
    ) -> V20Result<Response<ListPendingOrdersResponse>> {
        debug!("Listing pending orders of account: {}", account_id);
        let response = self
            .execute::<ListPendingOrdersResponse>(&order::list_pending(account_id))
            .await?;

        if let Some(ListPendingOrdersResponse::Ok(body)) = response.decoded() {
            debug!(
                "Pending orders obtained: {}",
                body.orders.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn get_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> V20Result<Response<GetOrderResponse>> {
        debug!("Getting order: {}", order_specifier);
        self.execute(&order::get(account_id, order_specifier)).await
    }

    async fn replace_order(
        &self,
        account_id: &str,
        order_specifier: &str,
        order: &OrderRequest,
    ) -> V20Result<Response<ReplaceOrderResponse>> {
        info!("Replacing order {}: {}", order_specifier, order);
        let request = order::replace(account_id, order_specifier, order)?;
        self.execute(&request).await
    }

    async fn cancel_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> V20Result<Response<CancelOrderResponse>> {
        info!("Cancelling order: {}", order_specifier);
        self.execute(&order::cancel(account_id, order_specifier))
            .await
    }

    async fn set_order_client_extensions(
        &self,
        account_id: &str,
        order_specifier: &str,
        body: &OrderClientExtensionsBody,
    ) -> V20Result<Response<SetOrderClientExtensionsResponse>> {
        info!("Updating client extensions of order: {}", order_specifier);
        let request = order::set_client_extensions(account_id, order_specifier, body)?;
        self.execute(&request).await
    }
}
