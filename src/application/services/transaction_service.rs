use crate::application::client::Client;
use crate::application::interfaces::transaction::TransactionService;
use crate::error::V20Result;
use crate::model::endpoints::transaction;
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
use tracing::{debug, info};

#[async_trait]
impl TransactionService for Client {
    async fn list_transactions(
        &self,
        account_id: &str,
        params: &TransactionListParams,
    ) -> V20Result<Response<ListTransactionsResponse>> {
        debug!("Listing transaction pages of account: {}", account_id);
        let request = transaction::list(account_id, params)?;
        self.execute(&request).await
    }

    async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> V20Result<Response<GetTransactionResponse>> {
        debug!("Getting transaction: {}", transaction_id);
        self.execute(&transaction::get(account_id, transaction_id))
            .await
    }

    async fn get_transaction_range(
        &self,
        account_id: &str,
        params: &TransactionRangeParams,
    ) -> V20Result<Response<GetTransactionRangeResponse>> {
        debug!("Getting transaction range: {:?}", params);
        let request = transaction::range(account_id, params)?;
        let response = self.execute::<GetTransactionRangeResponse>(&request).await?;

        if let Some(GetTransactionRangeResponse::Ok(body)) = response.decoded() {
            debug!(
                "Transactions obtained: {}",
                body.transactions.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn get_transactions_since(
        &self,
        account_id: &str,
        params: &TransactionsSinceParams,
    ) -> V20Result<Response<GetTransactionsSinceResponse>> {
        debug!("Getting transactions since: {:?}", params);
        let request = transaction::since(account_id, params)?;
        self.execute(&request).await
    }

    async fn stream_transactions(
        &self,
        account_id: &str,
    ) -> V20Result<RecordStream<TransactionStreamItem>> {
        info!("Opening transaction stream for account: {}", account_id);
        self.open_stream(&transaction::stream(account_id)).await
    }
}
