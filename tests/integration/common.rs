// Common utilities for integration tests

use mockito::{Mock, ServerGuard};
use v20_client::prelude::*;

pub const TOKEN: &str = "test-token";
pub const ACCOUNT_ID: &str = "101-004-1234567-001";

/// Creates a client pointed at the mock server
pub fn create_test_client(server: &ServerGuard) -> Client {
    let config = Config::for_base_url(&server.url(), TOKEN).with_account_id(ACCOUNT_ID);
    Client::new(config).expect("Failed to create client")
}

/// Mock answering `method path` with a JSON body
pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
