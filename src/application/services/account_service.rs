use crate::application::client::Client;
use crate::application::interfaces::account::AccountService;
use crate::error::V20Result;
use crate::model::endpoints::account;
use crate::model::requests::AccountConfiguration;
use crate::model::response::Response;
use crate::model::responses::{
    ConfigureAccountResponse, GetAccountChangesResponse, GetAccountInstrumentsResponse,
    GetAccountResponse, GetAccountSummaryResponse, ListAccountsResponse,
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl AccountService for Client {
    async fn list_accounts(&self) -> V20Result<Response<ListAccountsResponse>> {
        info!("Listing accounts");
        let response = self
            .execute::<ListAccountsResponse>(&account::list())
            .await?;

        if let Some(ListAccountsResponse::Ok(body)) = response.decoded() {
            debug!(
                "Accounts obtained: {}",
                body.accounts.as_ref().map_or(0, Vec::len)
            );
        }
        Ok(response)
    }

    async fn get_account(&self, account_id: &str) -> V20Result<Response<GetAccountResponse>> {
        info!("Getting account: {}", account_id);
        self.execute(&account::get(account_id)).await
    }

    async fn get_account_summary(
        &self,
        account_id: &str,
    ) -> V20Result<Response<GetAccountSummaryResponse>> {
        debug!("Getting account summary: {}", account_id);
        self.execute(&account::summary(account_id)).await
    }

    async fn get_account_instruments(
        &self,
        account_id: &str,
        instruments: Option<&[&str]>,
    ) -> V20Result<Response<GetAccountInstrumentsResponse>> {
        debug!("Getting instruments of account: {}", account_id);
        self.execute(&account::instruments(account_id, instruments))
            .await
    }

    async fn configure_account(
        &self,
        account_id: &str,
        configuration: &AccountConfiguration,
    ) -> V20Result<Response<ConfigureAccountResponse>> {
        info!("Configuring account {}: {}", account_id, configuration);
        let request = account::configure(account_id, configuration)?;
        let response = self.execute::<ConfigureAccountResponse>(&request).await?;

        if let Some(ConfigureAccountResponse::BadRequest(rejected)) = response.decoded() {
            warn!(
                "Configuration rejected: {:?}",
                rejected.error_message.as_deref()
            );
        }
        Ok(response)
    }

    async fn get_account_changes(
        &self,
        account_id: &str,
        since_transaction_id: Option<&str>,
    ) -> V20Result<Response<GetAccountChangesResponse>> {
        debug!(
            "Polling account {} for changes since {:?}",
            account_id, since_transaction_id
        );
        self.execute(&account::changes(account_id, since_transaction_id))
            .await
    }
}
