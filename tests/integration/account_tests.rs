// Integration tests for account endpoints

use crate::common::{self, ACCOUNT_ID};
use mockito::Matcher;
use rust_decimal_macros::dec;
use v20_client::prelude::*;

const ACCOUNT_BODY: &str = r#"{
    "account": {
        "id": "101-004-1234567-001",
        "currency": "USD",
        "balance": "100000.0000",
        "NAV": "100012.5000",
        "openTradeCount": 1,
        "trades": [{
            "id": "6397",
            "instrument": "EUR_USD",
            "price": "1.08950",
            "currentUnits": "1000",
            "state": "OPEN",
            "unrealizedPL": "12.5000",
            "takeProfitOrderID": "6398"
        }],
        "positions": [{
            "instrument": "EUR_USD",
            "long": {"units": "1000", "averagePrice": "1.08950", "tradeIDs": ["6397"]},
            "short": {"units": "0"}
        }],
        "orders": [{
            "id": "6398",
            "type": "TAKE_PROFIT",
            "state": "PENDING",
            "tradeID": "6397",
            "price": "1.10000",
            "timeInForce": "GTC"
        }]
    },
    "lastTransactionID": "6398"
}"#;

#[tokio::test]
async fn test_get_account_decodes_nested_collections() {
    let mut server = mockito::Server::new_async().await;
    let mock = common::mock_json(
        &mut server,
        "GET",
        &format!("/v3/accounts/{ACCOUNT_ID}"),
        200,
        ACCOUNT_BODY,
    )
    .await;
    let client = common::create_test_client(&server);

    let response = client.get_account(ACCOUNT_ID).await.expect("request failed");
    mock.assert_async().await;

    assert!(response.is_success());
    let Some(GetAccountResponse::Ok(body)) = response.decoded() else {
        panic!("expected a decoded 200 body, got {:?}", response.body);
    };
    let account = body.account.as_ref().expect("account missing");
    assert_eq!(account.core.balance, Some(dec!(100000.0000)));
    assert_eq!(account.core.balance.map(|b| b.to_string()).as_deref(), Some("100000.0000"));
    assert_eq!(account.core.open_trade_count, Some(1));

    let trades = account.trades.as_ref().expect("trades missing");
    assert_eq!(trades[0].core.instrument.as_deref(), Some("EUR_USD"));
    assert_eq!(trades[0].take_profit_order_id.as_deref(), Some("6398"));

    let positions = account.positions.as_ref().expect("positions missing");
    assert_eq!(positions[0].net_units(), Some(dec!(1000)));

    let orders = account.orders.as_ref().expect("orders missing");
    assert!(matches!(orders[0], Order::TakeProfit(_)));
    assert_eq!(orders[0].id(), Some("6398"));
}

#[tokio::test]
async fn test_get_account_not_found_decodes_error_shape() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/v3/accounts/000-000-0000000-000",
        404,
        r#"{"errorMessage":"The Account specified does not exist"}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let response = client
        .get_account("000-000-0000000-000")
        .await
        .expect("request failed");

    assert!(!response.is_success());
    let Some(GetAccountResponse::NotFound(error)) = response.decoded() else {
        panic!("expected a decoded 404 body");
    };
    assert_eq!(
        error.error_message.as_deref(),
        Some("The Account specified does not exist")
    );
}

#[tokio::test]
async fn test_get_account_instruments_sends_comma_joined_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v3/accounts/{ACCOUNT_ID}/instruments").as_str())
        .match_query(Matcher::UrlEncoded(
            "instruments".into(),
            "EUR_USD,USD_JPY".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"instruments":[{"name":"EUR_USD","type":"CURRENCY","pipLocation":-4}]}"#)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let response = client
        .get_account_instruments(ACCOUNT_ID, Some(&["EUR_USD", "USD_JPY"]))
        .await
        .expect("request failed");
    mock.assert_async().await;

    let Some(GetAccountInstrumentsResponse::Ok(body)) = response.decoded() else {
        panic!("expected a decoded 200 body");
    };
    let instruments = body.instruments.as_ref().expect("instruments missing");
    assert_eq!(instruments[0].name.as_deref(), Some("EUR_USD"));
}

#[tokio::test]
async fn test_configure_account_sends_patch_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", format!("/v3/accounts/{ACCOUNT_ID}/configuration").as_str())
        .match_body(Matcher::Json(serde_json::json!({"alias": "Main"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"clientConfigureTransaction":{"id":"6400","type":"CLIENT_CONFIGURE","alias":"Main"},"lastTransactionID":"6400"}"#,
        )
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let configuration = AccountConfiguration::default().with_alias("Main");
    let response = client
        .configure_account(ACCOUNT_ID, &configuration)
        .await
        .expect("request failed");
    mock.assert_async().await;

    let Some(ConfigureAccountResponse::Ok(body)) = response.decoded() else {
        panic!("expected a decoded 200 body");
    };
    assert_eq!(body.last_transaction_id.as_deref(), Some("6400"));
}
