use crate::application::client::Client;
use crate::application::interfaces::instrument::InstrumentService;
use crate::error::V20Result;
use crate::model::endpoints::instrument;
use crate::model::requests::CandlesParams;
use crate::model::response::Response;
use crate::model::responses::{GetCandlesResponse, GetOrderBookResponse, GetPositionBookResponse};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl InstrumentService for Client {
    async fn get_candles(
        &self,
        instrument: &str,
        params: &CandlesParams,
    ) -> V20Result<Response<GetCandlesResponse>> {
        info!("Getting candles for: {}", instrument);
        let request = instrument::candles(instrument, params)?;
        let response = self.execute::<GetCandlesResponse>(&request).await?;

        if let Some(GetCandlesResponse::Ok(candles)) = response.decoded() {
            debug!(
                "Candles obtained for {}: {}",
                instrument,
                candles.candles.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn get_order_book(
        &self,
        instrument: &str,
        time: Option<&str>,
    ) -> V20Result<Response<GetOrderBookResponse>> {
        debug!("Getting order book for: {}", instrument);
        self.execute(&instrument::order_book(instrument, time)).await
    }

    async fn get_position_book(
        &self,
        instrument: &str,
        time: Option<&str>,
    ) -> V20Result<Response<GetPositionBookResponse>> {
        debug!("Getting position book for: {}", instrument);
        self.execute(&instrument::position_book(instrument, time))
            .await
    }
}
