use rust_decimal_macros::dec;
use serde_json::json;
use v20_client::presentation::account::{Account, AccountChanges, AccountSummary};
use v20_client::presentation::order::Order;
use v20_client::presentation::transaction::Transaction;

#[test]
fn test_account_nested_collections_are_typed() {
    let account: Account = serde_json::from_value(json!({
        "id": "101-004-1234567-001",
        "balance": "99999.5000",
        "NAV": "100010.0000",
        "unrealizedPL": "10.5000",
        "marginUsed": "21.7900",
        "trades": [
            {"id": "1", "instrument": "USD_JPY", "currentUnits": "-200", "stopLossOrderID": "2"}
        ],
        "positions": [
            {"instrument": "USD_JPY", "short": {"units": "-200", "tradeIDs": ["1"]}}
        ],
        "orders": [
            {"id": "2", "type": "STOP_LOSS", "tradeID": "1", "price": "152.000"},
            {"id": "3", "type": "LIMIT", "instrument": "EUR_USD", "units": "10", "price": "1.05"}
        ]
    }))
    .unwrap();

    assert_eq!(account.core.id.as_deref(), Some("101-004-1234567-001"));
    assert_eq!(account.core.calculated.nav, Some(dec!(100010)));
    assert_eq!(account.core.calculated.margin_used, Some(dec!(21.79)));

    let trades = account.trades.unwrap();
    assert_eq!(trades[0].core.current_units, Some(dec!(-200)));
    assert_eq!(trades[0].stop_loss_order_id.as_deref(), Some("2"));

    let positions = account.positions.unwrap();
    assert_eq!(positions[0].net_units(), Some(dec!(-200)));

    let orders = account.orders.unwrap();
    assert!(matches!(orders[0], Order::StopLoss(_)));
    assert!(matches!(orders[1], Order::Limit(_)));
}

#[test]
fn test_account_summary_without_collections() {
    let summary: AccountSummary = serde_json::from_value(json!({
        "id": "101-004-1234567-001",
        "currency": "EUR",
        "hedgingEnabled": false
    }))
    .unwrap();

    assert_eq!(summary.core.currency.as_deref(), Some("EUR"));
    assert_eq!(summary.core.hedging_enabled, Some(false));
    assert!(summary.core.balance.is_none());
}

#[test]
fn test_account_changes_carry_transactions() {
    let changes: AccountChanges = serde_json::from_value(json!({
        "transactions": [
            {"id": "10", "type": "ORDER_CANCEL", "orderID": "3", "reason": "CLIENT_REQUEST"},
            {"id": "11", "type": "BRAND_NEW_KIND"}
        ]
    }))
    .unwrap();

    let transactions = changes.transactions.unwrap();
    assert!(matches!(transactions[0], Transaction::OrderCancel(_)));
    assert!(transactions[1].is_unknown());
    assert_eq!(transactions[1].kind(), Some("BRAND_NEW_KIND"));
}
