use crate::error::V20Result;
use crate::model::requests::{PricingParams, PricingStreamParams};
use crate::model::response::Response;
use crate::model::responses::GetPricingResponse;
use crate::model::stream::{PricingStreamItem, RecordStream};
use async_trait::async_trait;

/// Interface for the pricing service
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Gets current prices
    async fn get_pricing(
        &self,
        account_id: &str,
        params: &PricingParams,
    ) -> V20Result<Response<GetPricingResponse>>;

    /// Opens a price stream for the instruments in `params`
    ///
    /// # Errors
    /// Returns [`crate::error::AppError::Unexpected`] when the server refuses the
    /// stream.
    async fn stream_pricing(
        &self,
        account_id: &str,
        params: &PricingStreamParams,
    ) -> V20Result<RecordStream<PricingStreamItem>>;
}
