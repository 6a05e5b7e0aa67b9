use rust_decimal_macros::dec;
use serde_json::json;
use v20_client::presentation::transaction::Transaction;

#[test]
fn test_every_kind_is_registered_once() {
    let mut kinds = Transaction::KINDS.to_vec();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), Transaction::KINDS.len());
    assert!(kinds.contains(&"RESET_RESETTABLE_PL"));
}

#[test]
fn test_transfer_funds_decodes_amount() {
    let transaction = Transaction::from_value(json!({
        "id": "5",
        "type": "TRANSFER_FUNDS",
        "amount": "2500.00",
        "fundingReason": "CLIENT_FUNDING"
    }))
    .unwrap();

    let Transaction::TransferFunds(funds) = &transaction else {
        panic!("expected a transfer");
    };
    assert_eq!(funds.amount, Some(dec!(2500.00)));
    assert_eq!(transaction.id(), Some("5"));
}

#[test]
fn test_amount_beyond_decimal_precision_is_an_error() {
    let result = Transaction::from_value(json!({
        "id": "6",
        "type": "TRANSFER_FUNDS",
        "amount": "0.12345678901234567890123456789"
    }));
    assert!(result.is_err());
}

#[test]
fn test_unknown_kind_keeps_header() {
    let transaction = Transaction::from_value(json!({
        "id": "99",
        "type": "NOT_YET_INVENTED",
        "accountID": "101-004-1234567-001",
        "time": "2024-01-15T10:30:00.000000000Z"
    }))
    .unwrap();

    assert!(transaction.is_unknown());
    assert_eq!(
        transaction.header().account_id.as_deref(),
        Some("101-004-1234567-001")
    );
}

#[test]
fn test_missing_type_is_unknown() {
    let transaction = Transaction::from_value(json!({"id": "100"})).unwrap();
    assert!(transaction.is_unknown());
    assert_eq!(transaction.kind(), None);
}

#[test]
fn test_non_object_is_an_error() {
    assert!(Transaction::from_value(json!("ORDER_FILL")).is_err());
    assert!(Transaction::from_value(json!(null)).is_err());
}

#[test]
fn test_known_kind_with_wrong_field_type_is_an_error() {
    let result = Transaction::from_value(json!({"id": "1", "type": "ORDER_FILL", "units": [1]}));
    assert!(result.is_err());
}

#[test]
fn test_transaction_serializes_back_with_its_type() {
    let transaction = Transaction::from_value(json!({
        "id": "7",
        "type": "MARGIN_CALL_ENTER"
    }))
    .unwrap();
    let value = serde_json::to_value(&transaction).unwrap();
    assert_eq!(value["type"], "MARGIN_CALL_ENTER");
    assert_eq!(value["id"], "7");
}
