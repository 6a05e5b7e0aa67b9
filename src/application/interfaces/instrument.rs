use crate::error::V20Result;
use crate::model::requests::CandlesParams;
use crate::model::response::Response;
use crate::model::responses::{GetCandlesResponse, GetOrderBookResponse, GetPositionBookResponse};
use async_trait::async_trait;

/// Interface for the instrument service
#[async_trait]
pub trait InstrumentService: Send + Sync {
    /// Gets candlesticks for an instrument
    async fn get_candles(
        &self,
        instrument: &str,
        params: &CandlesParams,
    ) -> V20Result<Response<GetCandlesResponse>>;

    /// Gets the order book snapshot at `time`, or the latest one
    async fn get_order_book(
        &self,
        instrument: &str,
        time: Option<&str>,
    ) -> V20Result<Response<GetOrderBookResponse>>;

    /// Gets the position book snapshot at `time`, or the latest one
    async fn get_position_book(
        &self,
        instrument: &str,
        time: Option<&str>,
    ) -> V20Result<Response<GetPositionBookResponse>>;
}
