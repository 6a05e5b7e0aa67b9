use crate::error::V20Result;
use crate::model::response::Response;
use crate::model::responses::{GetUserExternalInfoResponse, GetUserInfoResponse};
use async_trait::async_trait;

/// Interface for the user service
///
/// A user specifier is a user ID or `@` for the owner of the token.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets information about a user
    async fn get_user_info(&self, user_specifier: &str) -> V20Result<Response<GetUserInfoResponse>>;

    /// Gets the publicly shareable information about a user
    async fn get_user_external_info(
        &self,
        user_specifier: &str,
    ) -> V20Result<Response<GetUserExternalInfoResponse>>;
}
