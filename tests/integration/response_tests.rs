// Integration tests for status-keyed response interpretation

use crate::common::{self, ACCOUNT_ID, TOKEN};
use v20_client::prelude::*;

#[tokio::test]
async fn test_non_json_body_is_passed_through_raw() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", format!("/v3/accounts/{ACCOUNT_ID}/summary").as_str())
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let response = client
        .get_account_summary(ACCOUNT_ID)
        .await
        .expect("a non-JSON body is not an error");

    assert_eq!(response.status.as_u16(), 502);
    assert_eq!(response.body, ResponseBody::Raw);
    assert_eq!(response.raw_body, "<html>Bad Gateway</html>");
    assert_eq!(response.content_type.as_deref(), Some("text/html"));
    assert_eq!(response.reason.as_deref(), Some("Bad Gateway"));
}

#[tokio::test]
async fn test_json_body_without_content_type_stays_raw() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v3/accounts")
        .with_status(200)
        .with_body(r#"{"accounts": []}"#)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let response = client.list_accounts().await.expect("request failed");

    assert!(response.decoded().is_none());
    assert_eq!(response.body, ResponseBody::Raw);
    assert_eq!(response.raw_body, r#"{"accounts": []}"#);
}

#[tokio::test]
async fn test_unregistered_status_passes_json_through() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        &format!("/v3/accounts/{ACCOUNT_ID}/summary"),
        503,
        r#"{"errorMessage": "Service unavailable", "retryAfter": 5}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let response = client
        .get_account_summary(ACCOUNT_ID)
        .await
        .expect("an unregistered status is not an error");

    assert!(response.decoded().is_none());
    let json = response.json().expect("expected passthrough JSON");
    assert_eq!(json["retryAfter"], 5);
    assert_eq!(json["errorMessage"], "Service unavailable");
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(&mut server, "GET", "/v3/accounts", 200, "{\"accounts\": [").await;
    let client = common::create_test_client(&server);

    let err = client.list_accounts().await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn test_registered_status_with_wrong_shape_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/v3/accounts",
        200,
        r#"{"accounts": "not-a-list"}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let err = client.list_accounts().await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn test_requests_carry_auth_and_datetime_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/users/@")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("accept-datetime-format", "RFC3339")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"userInfo": {"username": "trader", "userID": 1234, "country": "US"}}"#)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let response = client.get_user_info("@").await.expect("request failed");
    mock.assert_async().await;

    let Some(GetUserInfoResponse::Ok(body)) = response.decoded() else {
        panic!("expected the 200 shape");
    };
    let user = body.user_info.as_ref().expect("userInfo missing");
    assert_eq!(user.user_id, Some(1234));
}
