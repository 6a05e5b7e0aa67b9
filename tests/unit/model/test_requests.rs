use assert_json_diff::assert_json_eq;
use rust_decimal_macros::dec;
use serde_json::json;
use v20_client::model::requests::{
    AccountConfiguration, DependentOrdersBody, OrderBody, OrderRequest, TransactionListParams,
};
use v20_client::presentation::primitives::{
    ClientExtensions, StopLossDetails, TakeProfitDetails, TimeInForce, TrailingStopLossDetails,
};

#[test]
fn test_limit_order_with_dependent_orders_on_fill() {
    let order = OrderRequest::limit("EUR_USD", dec!(1000), dec!(1.08500))
        .with_time_in_force(TimeInForce::GoodTillCancelled)
        .with_take_profit_on_fill(TakeProfitDetails::at(dec!(1.09500)))
        .with_stop_loss_on_fill(StopLossDetails::distance(dec!(0.0050)));

    assert_json_eq!(
        serde_json::to_value(OrderBody { order }).unwrap(),
        json!({
            "order": {
                "type": "LIMIT",
                "instrument": "EUR_USD",
                "units": "1000",
                "price": "1.08500",
                "timeInForce": "GTC",
                "takeProfitOnFill": {"price": "1.09500"},
                "stopLossOnFill": {"distance": "0.0050"}
            }
        })
    );
}

#[test]
fn test_trailing_stop_loss_order_uses_distance() {
    let order = OrderRequest::trailing_stop_loss("6397", dec!(0.0025))
        .with_client_extensions(ClientExtensions::default().with_tag("strategy-a"));

    assert_json_eq!(
        serde_json::to_value(&order).unwrap(),
        json!({
            "type": "TRAILING_STOP_LOSS",
            "tradeID": "6397",
            "distance": "0.0025",
            "clientExtensions": {"tag": "strategy-a"}
        })
    );
}

#[test]
fn test_dependent_orders_body_only_sends_set_orders() {
    let body = DependentOrdersBody::default()
        .with_take_profit(TakeProfitDetails::at(dec!(1.10)))
        .with_trailing_stop_loss(TrailingStopLossDetails {
            distance: Some(dec!(0.0030)),
            ..Default::default()
        });

    assert_json_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "takeProfit": {"price": "1.10"},
            "trailingStopLoss": {"distance": "0.0030"}
        })
    );
}

#[test]
fn test_account_configuration_margin_rate_keeps_scale() {
    let config = AccountConfiguration::default().with_margin_rate(dec!(0.050));
    assert_json_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({"marginRate": "0.050"})
    );
}

#[test]
fn test_transaction_list_params() {
    let params = TransactionListParams::default()
        .with_range("2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z")
        .with_page_size(500)
        .with_kinds(&["ORDER", "FUNDING"]);
    let value = serde_json::to_value(&params).unwrap();

    assert_eq!(value["from"], "2024-01-01T00:00:00Z");
    assert_eq!(value["pageSize"], 500);
    assert_eq!(value["type"], json!(["ORDER", "FUNDING"]));
}

#[test]
fn test_generated_client_extensions_have_distinct_ids() {
    let first = ClientExtensions::generated();
    let second = ClientExtensions::generated();
    assert!(first.id.is_some());
    assert_ne!(first.id, second.id);
}
