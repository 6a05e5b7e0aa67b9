use crate::application::client::Client;
use crate::application::interfaces::user::UserService;
use crate::error::V20Result;
use crate::model::endpoints::user;
use crate::model::response::Response;
use crate::model::responses::{GetUserExternalInfoResponse, GetUserInfoResponse};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl UserService for Client {
    async fn get_user_info(&self, user_specifier: &str) -> V20Result<Response<GetUserInfoResponse>> {
        debug!("Getting user info: {}", user_specifier);
        self.execute(&user::info(user_specifier)).await
    }

    async fn get_user_external_info(
        &self,
        user_specifier: &str,
    ) -> V20Result<Response<GetUserExternalInfoResponse>> {
        debug!("Getting external user info: {}", user_specifier);
        self.execute(&user::external_info(user_specifier)).await
    }
}
