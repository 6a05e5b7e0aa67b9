use crate::application::client::Client;
use crate::application::interfaces::trade::TradeService;
use crate::error::V20Result;
use crate::model::endpoints::trade;
use crate::model::requests::{
    CloseTradeBody, DependentOrdersBody, TradeClientExtensionsBody, TradeListParams,
};
use crate::model::response::Response;
use crate::model::responses::{
    CloseTradeResponse, GetTradeResponse, ListOpenTradesResponse, ListTradesResponse,
    SetDependentOrdersResponse, SetTradeClientExtensionsResponse,
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl TradeService for Client {
    async fn list_trades(
        &self,
        account_id: &str,
        params: &TradeListParams,
    ) -> V20Result<Response<ListTradesResponse>> {
        debug!("Listing trades of account: {}", account_id);
        let request = trade::list(account_id, params)?;
        self.execute(&request).await
    }

    async fn list_open_trades(
        &self,
        account_id: &str,
    ) -> V20Result<Response<ListOpenTradesResponse>> {
        debug!("Listing open trades of account: {}", account_id);
        let response = self
            .execute::<ListOpenTradesResponse>(&trade::list_open(account_id))
            .await?;

        if let Some(ListOpenTradesResponse::Ok(body)) = response.decoded() {
            debug!(
                "Open trades obtained: {}",
                body.trades.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn get_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
    ) -> V20Result<Response<GetTradeResponse>> {
        debug!("Getting trade: {}", trade_specifier);
        self.execute(&trade::get(account_id, trade_specifier)).await
    }

    async fn close_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
        body: &CloseTradeBody,
    ) -> V20Result<Response<CloseTradeResponse>> {
        info!("Closing trade {}: {}", trade_specifier, body);
        let request = trade::close(account_id, trade_specifier, body)?;
        let response = self.execute::<CloseTradeResponse>(&request).await?;

        match response.decoded() {
            Some(CloseTradeResponse::Ok(closed)) => {
                debug!(
                    "Trade {} closed, last transaction: {:?}",
                    trade_specifier, closed.last_transaction_id
                );
            }
            Some(CloseTradeResponse::BadRequest(rejected)) => {
                warn!("Trade close rejected: {:?}", rejected.error_message);
            }
            Some(CloseTradeResponse::NotFound(rejected)) => {
                warn!("Trade to close not found: {:?}", rejected.error_message);
            }
            _ => {}
        }
        Ok(response)
    }

    async fn set_trade_client_extensions(
        &self,
        account_id: &str,
        trade_specifier: &str,
        body: &TradeClientExtensionsBody,
    ) -> V20Result<Response<SetTradeClientExtensionsResponse>> {
        info!("Updating client extensions of trade: {}", trade_specifier);
        let request = trade::set_client_extensions(account_id, trade_specifier, body)?;
        self.execute(&request).await
    }

    async fn set_trade_dependent_orders(
        &self,
        account_id: &str,
        trade_specifier: &str,
        body: &DependentOrdersBody,
    ) -> V20Result<Response<SetDependentOrdersResponse>> {
        info!("Setting dependent orders of trade {}: {}", trade_specifier, body);
        let request = trade::set_dependent_orders(account_id, trade_specifier, body)?;
        self.execute(&request).await
    }
}
