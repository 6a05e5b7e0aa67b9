use crate::error::V20Result;
use crate::model::requests::ClosePositionBody;
use crate::model::response::Response;
use crate::model::responses::{
    ClosePositionResponse, GetPositionResponse, ListOpenPositionsResponse, ListPositionsResponse,
};
use async_trait::async_trait;

/// Interface for the position service
#[async_trait]
pub trait PositionService: Send + Sync {
    /// Lists a position for every instrument the account has ever traded
    async fn list_positions(&self, account_id: &str) -> V20Result<Response<ListPositionsResponse>>;

    /// Lists positions with open trades
    async fn list_open_positions(
        &self,
        account_id: &str,
    ) -> V20Result<Response<ListOpenPositionsResponse>>;

    /// Gets the position of one instrument
    async fn get_position(
        &self,
        account_id: &str,
        instrument: &str,
    ) -> V20Result<Response<GetPositionResponse>>;

    /// Closes the long and/or short side of a position
    async fn close_position(
        &self,
        account_id: &str,
        instrument: &str,
        body: &ClosePositionBody,
    ) -> V20Result<Response<ClosePositionResponse>>;
}
