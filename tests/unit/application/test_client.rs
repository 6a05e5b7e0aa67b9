use v20_client::application::client::Client;
use v20_client::application::config::Config;

#[test]
fn test_client_keeps_its_config() {
    let config = Config::for_base_url("http://localhost:9000", "token")
        .with_account_id("101-004-1234567-001");
    let client = Client::new(config).expect("client should build");

    assert_eq!(client.config().account_id, "101-004-1234567-001");
    assert_eq!(client.config().rest_url(), "http://localhost:9000");
}

#[test]
fn test_client_clones_share_configuration() {
    let client = Client::new(Config::for_base_url("http://localhost:9000", "token"))
        .expect("client should build");
    let clone = client.clone();
    assert_eq!(clone.config().rest_url(), client.config().rest_url());
}

#[test]
fn test_client_debug_does_not_leak_token() {
    let client = Client::new(Config::for_base_url("http://localhost:9000", "secret-token"))
        .expect("client should build");
    assert!(!format!("{client:?}").contains("secret-token"));
}
