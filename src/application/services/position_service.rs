use crate::application::client::Client;
use crate::application::interfaces::position::PositionService;
use crate::error::V20Result;
use crate::model::endpoints::position;
use crate::model::requests::ClosePositionBody;
use crate::model::response::Response;
use crate::model::responses::{
    ClosePositionResponse, GetPositionResponse, ListOpenPositionsResponse, ListPositionsResponse,
};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl PositionService for Client {
    async fn list_positions(&self, account_id: &str) -> V20Result<Response<ListPositionsResponse>> {
        debug!("Listing positions of account: {}", account_id);
        self.execute(&position::list(account_id)).await
    }

    async fn list_open_positions(
        &self,
        account_id: &str,
    ) -> V20Result<Response<ListOpenPositionsResponse>> {
        debug!("Listing open positions of account: {}", account_id);
        let response = self
            .execute::<ListOpenPositionsResponse>(&position::list_open(account_id))
            .await?;

        if let Some(ListOpenPositionsResponse::Ok(body)) = response.decoded() {
            debug!(
                "Open positions obtained: {}",
                body.positions.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn get_position(
        &self,
        account_id: &str,
        instrument: &str,
    ) -> V20Result<Response<GetPositionResponse>> {
        debug!("Getting position: {}", instrument);
        self.execute(&position::get(account_id, instrument)).await
    }

    async fn close_position(
        &self,
        account_id: &str,
        instrument: &str,
        body: &ClosePositionBody,
    ) -> V20Result<Response<ClosePositionResponse>> {
        info!("Closing position {}: {}", instrument, body);
        let request = position::close(account_id, instrument, body)?;
        self.execute(&request).await
    }
}
