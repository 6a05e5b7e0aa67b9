use crate::error::V20Result;
use crate::model::requests::AccountConfiguration;
use crate::model::response::Response;
use crate::model::responses::{
    ConfigureAccountResponse, GetAccountChangesResponse, GetAccountInstrumentsResponse,
    GetAccountResponse, GetAccountSummaryResponse, ListAccountsResponse,
};
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Lists the accounts the token is authorized for
    async fn list_accounts(&self) -> V20Result<Response<ListAccountsResponse>>;

    /// Gets the full details of an account, including its open trades, positions and
    /// pending orders
    async fn get_account(&self, account_id: &str) -> V20Result<Response<GetAccountResponse>>;

    /// Gets the account summary, without the collections
    async fn get_account_summary(
        &self,
        account_id: &str,
    ) -> V20Result<Response<GetAccountSummaryResponse>>;

    /// Gets the tradeable instruments of an account
    ///
    /// # Arguments
    /// * `account_id` - Account identifier
    /// * `instruments` - Restrict the answer to these instruments; `None` lists all
    async fn get_account_instruments(
        &self,
        account_id: &str,
        instruments: Option<&[&str]>,
    ) -> V20Result<Response<GetAccountInstrumentsResponse>>;

    /// Sets the client-configurable parts of an account
    async fn configure_account(
        &self,
        account_id: &str,
        configuration: &AccountConfiguration,
    ) -> V20Result<Response<ConfigureAccountResponse>>;

    /// Polls the account for changes since a transaction
    async fn get_account_changes(
        &self,
        account_id: &str,
        since_transaction_id: Option<&str>,
    ) -> V20Result<Response<GetAccountChangesResponse>>;
}
