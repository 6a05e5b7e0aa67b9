use crate::application::client::Client;
use crate::application::interfaces::pricing::PricingService;
use crate::error::V20Result;
use crate::model::endpoints::pricing;
use crate::model::requests::{PricingParams, PricingStreamParams};
use crate::model::response::Response;
use crate::model::responses::GetPricingResponse;
use crate::model::stream::{PricingStreamItem, RecordStream};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl PricingService for Client {
    async fn get_pricing(
        &self,
        account_id: &str,
        params: &PricingParams,
    ) -> V20Result<Response<GetPricingResponse>> {
        debug!("Getting prices: {:?}", params);
        let request = pricing::get(account_id, params)?;
        let response = self.execute::<GetPricingResponse>(&request).await?;

        if let Some(GetPricingResponse::Ok(body)) = response.decoded() {
            debug!(
                "Prices obtained: {}",
                body.prices.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn stream_pricing(
        &self,
        account_id: &str,
        params: &PricingStreamParams,
    ) -> V20Result<RecordStream<PricingStreamItem>> {
        info!("Opening price stream: {:?}", params);
        let request = pricing::stream(account_id, params)?;
        self.open_stream(&request).await
    }
}
