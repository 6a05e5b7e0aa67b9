// Integration tests for the transaction and pricing streams

use crate::common::{self, ACCOUNT_ID};
use mockito::Matcher;
use rust_decimal_macros::dec;
use v20_client::prelude::*;

fn transaction_stream_path() -> String {
    format!("/v3/accounts/{ACCOUNT_ID}/transactions/stream")
}

#[tokio::test]
async fn test_transaction_stream_yields_records_in_order() {
    let body = [
        r#"{"type":"HEARTBEAT","lastTransactionID":"6400","time":"2024-01-15T10:30:00.000000000Z"}"#,
        r#"{"id":"6401","type":"ORDER_FILL","orderID":"6399","instrument":"EUR_USD","units":"100","price":"1.09000"}"#,
        r#"{"type":"HEARTBEAT","lastTransactionID":"6401","time":"2024-01-15T10:30:05.000000000Z"}"#,
        r#"{"id":"6402","type":"DAILY_FINANCING","financing":"-0.0123"}"#,
        r#"{"id":"6403","type":"SOME_FUTURE_KIND","time":"2024-01-15T10:30:06.000000000Z"}"#,
    ]
    .join("\n");

    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(&mut server, "GET", &transaction_stream_path(), 200, &body).await;
    let client = common::create_test_client(&server);

    let stream = client
        .stream_transactions(ACCOUNT_ID)
        .await
        .expect("stream open failed");
    let records: Vec<TransactionStreamItem> = stream
        .map(|record| record.expect("record failed to decode"))
        .collect()
        .await;

    let kinds: Vec<&str> = records.iter().map(StreamRecord::kind).collect();
    assert_eq!(
        kinds,
        vec!["heartbeat", "transaction", "heartbeat", "transaction", "transaction"]
    );

    let TransactionStreamItem::Transaction(Transaction::OrderFill(fill)) = &records[1] else {
        panic!("expected an order fill");
    };
    assert_eq!(fill.price, Some(dec!(1.09000)));
    assert_eq!(fill.price.map(|p| p.to_string()).as_deref(), Some("1.09000"));

    let TransactionStreamItem::Transaction(financing) = &records[3] else {
        panic!("expected a transaction");
    };
    assert_eq!(financing.kind(), Some("DAILY_FINANCING"));

    let TransactionStreamItem::Transaction(unknown) = &records[4] else {
        panic!("expected a transaction");
    };
    assert!(unknown.is_unknown());
    assert_eq!(unknown.id(), Some("6403"));
}

#[tokio::test]
async fn test_malformed_line_is_yielded_as_error_and_stream_continues() {
    let body = "{\"type\":\"HEARTBEAT\",\"time\":\"1\"}\n[1,2,3]\n{\"id\":\"7\",\"type\":\"CLOSE\"}\n";

    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(&mut server, "GET", &transaction_stream_path(), 200, body).await;
    let client = common::create_test_client(&server);

    let records: Vec<V20Result<TransactionStreamItem>> = client
        .stream_transactions(ACCOUNT_ID)
        .await
        .expect("stream open failed")
        .collect()
        .await;

    assert_eq!(records.len(), 3);
    assert!(records[0].is_ok());
    assert!(matches!(records[1], Err(AppError::Deserialization(_))));
    assert!(matches!(
        records[2],
        Ok(TransactionStreamItem::Transaction(Transaction::Close(_)))
    ));
}

#[tokio::test]
async fn test_refused_stream_is_unexpected_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        &transaction_stream_path(),
        401,
        r#"{"errorMessage":"Insufficient authorization to perform request."}"#,
    )
    .await;
    let client = common::create_test_client(&server);

    let result = client.stream_transactions(ACCOUNT_ID).await;

    match result {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 401),
        Err(other) => panic!("expected an unexpected-status error, got {other}"),
        Ok(_) => panic!("expected the stream open to fail"),
    }
}

#[tokio::test]
async fn test_pricing_stream_sends_instruments_and_decodes_prices() {
    let body = [
        r#"{"type":"PRICE","instrument":"EUR_USD","time":"2024-01-15T10:30:00.000000000Z","bids":[{"price":"1.08950","liquidity":10000000}],"asks":[{"price":"1.08960","liquidity":10000000}],"tradeable":true}"#,
        r#"{"type":"HEARTBEAT","time":"2024-01-15T10:30:05.000000000Z"}"#,
    ]
    .join("\n");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v3/accounts/{ACCOUNT_ID}/pricing/stream").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("instruments".into(), "EUR_USD,USD_JPY".into()),
            Matcher::UrlEncoded("snapshot".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(body)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let params = PricingStreamParams::new(&["EUR_USD", "USD_JPY"]).with_snapshot(false);
    let records: Vec<PricingStreamItem> = client
        .stream_pricing(ACCOUNT_ID, &params)
        .await
        .expect("stream open failed")
        .map(|record| record.expect("record failed to decode"))
        .collect()
        .await;
    mock.assert_async().await;

    assert_eq!(records.len(), 2);
    let PricingStreamItem::Price(price) = &records[0] else {
        panic!("expected a price");
    };
    assert_eq!(price.best_bid(), Some(dec!(1.08950)));
    assert_eq!(price.spread(), Some(dec!(0.00010)));
    assert!(matches!(records[1], PricingStreamItem::Heartbeat(_)));
}
