// Integration tests for order endpoints

use crate::common::{self, ACCOUNT_ID};
use mockito::Matcher;
use rust_decimal_macros::dec;
use v20_client::prelude::*;

#[tokio::test]
async fn test_create_market_order_posts_typed_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/v3/accounts/{ACCOUNT_ID}/orders").as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "order": {"type": "MARKET", "instrument": "EUR_USD", "units": "100"}
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "orderCreateTransaction": {"id": "7001", "type": "MARKET_ORDER", "instrument": "EUR_USD", "units": "100"},
                "orderFillTransaction": {"id": "7002", "type": "ORDER_FILL", "orderID": "7001", "price": "1.08960",
                    "tradeOpened": {"tradeID": "7002", "units": "100", "price": "1.08960"}},
                "lastTransactionID": "7002"
            }"#,
        )
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let order = OrderRequest::market("EUR_USD", dec!(100));
    let response = client
        .create_order(ACCOUNT_ID, &order)
        .await
        .expect("request failed");
    mock.assert_async().await;

    let Some(CreateOrderResponse::Created(created)) = response.decoded() else {
        panic!("expected the 201 shape, got {:?}", response.body);
    };
    let create = created
        .order_create_transaction
        .as_ref()
        .expect("create transaction missing");
    assert!(matches!(create, Transaction::MarketOrder(_)));
    let opened = created
        .order_fill_transaction
        .as_ref()
        .and_then(|fill| fill.trade_opened.as_ref())
        .expect("tradeOpened missing");
    assert_eq!(opened.price, Some(dec!(1.08960)));
}

#[tokio::test]
async fn test_cancel_order_uses_client_order_specifier() {
    let mut server = mockito::Server::new_async().await;
    let mock = common::mock_json(
        &mut server,
        "PUT",
        &format!("/v3/accounts/{ACCOUNT_ID}/orders/@my-order/cancel"),
        200,
        r#"{"orderCancelTransaction": {"id": "7003", "type": "ORDER_CANCEL", "orderID": "6398", "reason": "CLIENT_REQUEST"}, "lastTransactionID": "7003"}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let response = client
        .cancel_order(ACCOUNT_ID, "@my-order")
        .await
        .expect("request failed");
    mock.assert_async().await;

    let Some(CancelOrderResponse::Ok(body)) = response.decoded() else {
        panic!("expected the 200 shape");
    };
    let cancel = body
        .order_cancel_transaction
        .as_ref()
        .expect("cancel transaction missing");
    assert_eq!(cancel.order_id.as_deref(), Some("6398"));
}
