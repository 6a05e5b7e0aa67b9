use reqwest::Method;
use rust_decimal_macros::dec;
use v20_client::model::endpoints::{account, instrument, order, position, pricing, trade, transaction, user};
use v20_client::model::requests::{
    CandlesParams, ClosePositionBody, CloseTradeBody, OrderListParams, OrderRequest,
    PricingStreamParams, TransactionRangeParams, TransactionsSinceParams,
};
use v20_client::presentation::primitives::{CandlestickGranularity, PricingComponent};

const ACCOUNT: &str = "101-004-1234567-001";

fn query_value<'a>(query: &'a [(String, String)], name: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_account_paths() {
    assert_eq!(account::list().path().unwrap(), "/v3/accounts");
    assert_eq!(
        account::summary(ACCOUNT).path().unwrap(),
        format!("/v3/accounts/{ACCOUNT}/summary")
    );

    let changes = account::changes(ACCOUNT, Some("6400"));
    assert_eq!(changes.method(), &Method::GET);
    assert_eq!(query_value(changes.query(), "sinceTransactionID"), Some("6400"));

    let no_filter = account::instruments(ACCOUNT, None);
    assert!(no_filter.query().is_empty());
}

#[test]
fn test_candles_query_omits_unset_parameters() {
    let params = CandlesParams::default()
        .with_price(PricingComponent::ALL)
        .with_granularity(CandlestickGranularity::H1)
        .with_count(10);
    let request = instrument::candles("EUR_USD", &params).unwrap();

    assert_eq!(request.path().unwrap(), "/v3/instruments/EUR_USD/candles");
    assert_eq!(query_value(request.query(), "price"), Some("MBA"));
    assert_eq!(query_value(request.query(), "granularity"), Some("H1"));
    assert_eq!(query_value(request.query(), "count"), Some("10"));
    assert_eq!(query_value(request.query(), "from"), None);
    assert_eq!(query_value(request.query(), "smooth"), None);
}

#[test]
fn test_order_create_has_body_and_post() {
    let request = order::create(ACCOUNT, &OrderRequest::limit("USD_JPY", dec!(-500), dec!(151.250)))
        .unwrap();
    assert_eq!(request.method(), &Method::POST);
    let body = request.json_body().expect("body missing");
    assert_eq!(body["order"]["type"], "LIMIT");
    assert_eq!(body["order"]["units"], "-500");
    assert_eq!(body["order"]["price"], "151.250");
    assert!(body["order"].get("timeInForce").is_none());
}

#[test]
fn test_order_list_joins_ids() {
    let params = OrderListParams::default().with_ids(&["1", "2", "3"]);
    let request = order::list(ACCOUNT, &params).unwrap();
    assert_eq!(query_value(request.query(), "ids"), Some("1,2,3"));
}

#[test]
fn test_specifiers_are_substituted() {
    assert_eq!(
        order::cancel(ACCOUNT, "@client-1").path().unwrap(),
        format!("/v3/accounts/{ACCOUNT}/orders/@client-1/cancel")
    );
    let close = trade::close(ACCOUNT, "42", &CloseTradeBody::all()).unwrap();
    assert_eq!(close.method(), &Method::PUT);
    assert_eq!(
        close.path().unwrap(),
        format!("/v3/accounts/{ACCOUNT}/trades/42/close")
    );
    assert_eq!(close.json_body().unwrap()["units"], "ALL");

    let position = position::close(ACCOUNT, "EUR_USD", &ClosePositionBody::long_all()).unwrap();
    assert_eq!(position.json_body().unwrap()["longUnits"], "ALL");
    assert!(position.json_body().unwrap().get("shortUnits").is_none());
}

#[test]
fn test_transaction_queries() {
    let range = transaction::range(ACCOUNT, &TransactionRangeParams::new("1", "50")).unwrap();
    assert_eq!(query_value(range.query(), "from"), Some("1"));
    assert_eq!(query_value(range.query(), "to"), Some("50"));

    let since = transaction::since(
        ACCOUNT,
        &TransactionsSinceParams::new("6400").with_kinds(&["ORDER_FILL", "ORDER_CANCEL"]),
    )
    .unwrap();
    assert_eq!(query_value(since.query(), "id"), Some("6400"));
    assert_eq!(query_value(since.query(), "type"), Some("ORDER_FILL,ORDER_CANCEL"));
}

#[test]
fn test_stream_operations_use_stream_host() {
    let transactions = transaction::stream(ACCOUNT);
    assert!(transactions.is_stream());
    assert!(!transaction::get(ACCOUNT, "1").is_stream());

    let prices = pricing::stream(ACCOUNT, &PricingStreamParams::new(&["EUR_USD"])).unwrap();
    assert!(prices.is_stream());
    assert_eq!(query_value(prices.query(), "instruments"), Some("EUR_USD"));
    assert_eq!(query_value(prices.query(), "snapshot"), None);
}

#[test]
fn test_user_paths() {
    assert_eq!(user::info("@").path().unwrap(), "/v3/users/@");
    assert_eq!(
        user::external_info("1234").path().unwrap(),
        "/v3/users/1234/externalInfo"
    );
}
