use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use v20_client::presentation::pricing::PriceBucket;
use v20_client::presentation::trade::TradeCore;

#[test]
fn test_decimal_strings_keep_their_scale() {
    for text in ["1.23450", "-7", "0.00001", "100000.0000"] {
        let core: TradeCore = serde_json::from_value(json!({ "price": text })).unwrap();
        let price = core.price.expect("price missing");
        assert_eq!(price.to_string(), text);
        assert_eq!(serde_json::to_value(&core).unwrap()["price"], text);
    }
}

#[test]
fn test_decimal_values_are_exact() {
    let core: TradeCore = serde_json::from_value(json!({ "price": "0.1", "financing": "0.2" })).unwrap();
    let sum = core.price.unwrap() + core.financing.unwrap();
    assert_eq!(sum, dec!(0.3));
    assert_eq!(sum.to_string(), "0.3");
}

#[test]
fn test_absent_decimal_stays_none() {
    let core: TradeCore = serde_json::from_value(json!({ "id": "1" })).unwrap();
    assert!(core.price.is_none());
    assert!(core.unrealized_pl.is_none());
}

#[test]
fn test_invalid_decimal_is_an_error() {
    let result = serde_json::from_value::<TradeCore>(json!({ "price": "not-a-number" }));
    assert!(result.is_err());
}

#[test]
fn test_price_bucket_liquidity_is_integer() {
    let bucket: PriceBucket =
        serde_json::from_value(json!({ "price": "151.250", "liquidity": 250000 })).unwrap();
    assert_eq!(bucket.price, Some(Decimal::new(151250, 3)));
    assert_eq!(bucket.liquidity, Some(250000));
}
