use crate::error::V20Result;
use crate::model::requests::{
    TransactionListParams, TransactionRangeParams, TransactionsSinceParams,
};
use crate::model::response::Response;
use crate::model::responses::{
    GetTransactionRangeResponse, GetTransactionResponse, GetTransactionsSinceResponse,
    ListTransactionsResponse,
};
use crate::model::stream::{RecordStream, TransactionStreamItem};
use async_trait::async_trait;

/// Interface for the transaction service
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Lists transaction pages for a time range
    ///
    /// The answer holds page URLs, not transactions; fetch those with
    /// [`TransactionService::get_transaction_range`].
    async fn list_transactions(
        &self,
        account_id: &str,
        params: &TransactionListParams,
    ) -> V20Result<Response<ListTransactionsResponse>>;

    /// Gets one transaction
    async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> V20Result<Response<GetTransactionResponse>>;

    /// Gets the transactions in an inclusive ID range
    async fn get_transaction_range(
        &self,
        account_id: &str,
        params: &TransactionRangeParams,
    ) -> V20Result<Response<GetTransactionRangeResponse>>;

    /// Gets the transactions after an ID
    async fn get_transactions_since(
        &self,
        account_id: &str,
        params: &TransactionsSinceParams,
    ) -> V20Result<Response<GetTransactionsSinceResponse>>;

    /// Opens the transaction stream of an account
    ///
    /// # Errors
    /// Returns [`crate::error::AppError::Unexpected`] when the server refuses the
    /// stream. Once open, decode failures are yielded as items.
    async fn stream_transactions(
        &self,
        account_id: &str,
    ) -> V20Result<RecordStream<TransactionStreamItem>>;
}
