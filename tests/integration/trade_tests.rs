// Integration tests for trade endpoints

use crate::common::{self, ACCOUNT_ID};
use mockito::Matcher;
use rust_decimal_macros::dec;
use v20_client::prelude::*;

fn close_path(trade: &str) -> String {
    format!("/v3/accounts/{ACCOUNT_ID}/trades/{trade}/close")
}

#[tokio::test]
async fn test_close_trade_success_decodes_fill() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", close_path("6397").as_str())
        .match_body(Matcher::Json(serde_json::json!({"units": "ALL"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "orderCreateTransaction": {"id": "6399", "type": "MARKET_ORDER", "instrument": "EUR_USD", "units": "-1000", "reason": "TRADE_CLOSE"},
                "orderFillTransaction": {
                    "id": "6400",
                    "type": "ORDER_FILL",
                    "orderID": "6399",
                    "instrument": "EUR_USD",
                    "units": "-1000",
                    "price": "1.09100",
                    "pl": "1.5000",
                    "tradesClosed": [{"tradeID": "6397", "units": "-1000", "realizedPL": "1.5000"}]
                },
                "relatedTransactionIDs": ["6399", "6400"],
                "lastTransactionID": "6400"
            }"#,
        )
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let response = client
        .close_trade(ACCOUNT_ID, "6397", &CloseTradeBody::all())
        .await
        .expect("request failed");
    mock.assert_async().await;

    assert_eq!(response.status.as_u16(), 200);
    let Some(CloseTradeResponse::Ok(closed)) = response.decoded() else {
        panic!("expected the 200 shape, got {:?}", response.body);
    };
    let fill = closed
        .order_fill_transaction
        .as_ref()
        .expect("fill missing");
    assert_eq!(fill.pl, Some(dec!(1.5)));
    let reduced = fill.trades_closed.as_ref().expect("tradesClosed missing");
    assert_eq!(reduced[0].trade_id.as_deref(), Some("6397"));
    assert_eq!(
        closed.related_transaction_ids.as_deref(),
        Some(&["6399".to_string(), "6400".to_string()][..])
    );
}

#[tokio::test]
async fn test_close_trade_rejection_selects_bad_request_shape() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "PUT",
        &close_path("6397"),
        400,
        r#"{
            "orderRejectTransaction": {"id": "6401", "type": "MARKET_ORDER_REJECT", "rejectReason": "CLOSE_TRADE_UNITS_EXCEED_TRADE_SIZE"},
            "errorCode": "CLOSE_TRADE_UNITS_EXCEED_TRADE_SIZE",
            "errorMessage": "The units specified exceed the trade size"
        }"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let response = client
        .close_trade(ACCOUNT_ID, "6397", &CloseTradeBody::units(dec!(5000)))
        .await
        .expect("a rejected close is not a transport error");

    assert!(!response.is_success());
    let Some(CloseTradeResponse::BadRequest(rejected)) = response.decoded() else {
        panic!("expected the 400 shape");
    };
    assert_eq!(
        rejected.error_code.as_deref(),
        Some("CLOSE_TRADE_UNITS_EXCEED_TRADE_SIZE")
    );
    let reject = rejected
        .order_reject_transaction
        .as_ref()
        .expect("reject transaction missing");
    assert_eq!(
        reject.reject_reason.as_deref(),
        Some("CLOSE_TRADE_UNITS_EXCEED_TRADE_SIZE")
    );
}

#[tokio::test]
async fn test_close_trade_not_found_selects_its_own_shape() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "PUT",
        &close_path("@missing"),
        404,
        r#"{"lastTransactionID": "6401", "errorCode": "NO_SUCH_TRADE", "errorMessage": "The Trade specified does not exist"}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let response = client
        .close_trade(ACCOUNT_ID, "@missing", &CloseTradeBody::all())
        .await
        .expect("request failed");

    let Some(CloseTradeResponse::NotFound(missing)) = response.decoded() else {
        panic!("expected the 404 shape");
    };
    assert_eq!(missing.last_transaction_id.as_deref(), Some("6401"));
    assert!(missing.order_reject_transaction.is_none());
}

#[tokio::test]
async fn test_list_trades_sends_filters_as_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v3/accounts/{ACCOUNT_ID}/trades").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("instrument".into(), "EUR_USD".into()),
            Matcher::UrlEncoded("count".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"trades": [], "lastTransactionID": "6401"}"#)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let params = TradeListParams::default()
        .with_instrument("EUR_USD")
        .with_count(2);
    let response = client
        .list_trades(ACCOUNT_ID, &params)
        .await
        .expect("request failed");
    mock.assert_async().await;

    let Some(ListTradesResponse::Ok(body)) = response.decoded() else {
        panic!("expected the 200 shape");
    };
    assert_eq!(body.trades.as_ref().map(Vec::len), Some(0));
}
