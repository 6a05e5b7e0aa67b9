use v20_client::application::config::Config;
use v20_client::utils::time::DateTimeFormat;

#[test]
fn test_for_base_url_uses_same_host_for_rest_and_stream() {
    let config = Config::for_base_url("http://127.0.0.1:8080", "token");
    assert_eq!(config.rest_url(), "http://127.0.0.1:8080");
    assert_eq!(config.stream_url(), "http://127.0.0.1:8080");
    assert_eq!(config.token, "token");
}

#[test]
fn test_builders_override_fields() {
    let config = Config::for_base_url("https://api.example.com", "token")
        .with_token("other")
        .with_account_id("101-004-1234567-001")
        .with_datetime_format(DateTimeFormat::Unix);

    assert_eq!(config.token, "other");
    assert_eq!(config.account_id, "101-004-1234567-001");
    assert_eq!(config.datetime_format.as_header(), "UNIX");
}

#[test]
fn test_default_rate_limiter_is_positive() {
    let config = Config::for_base_url("https://api.example.com", "token");
    assert!(config.rate_limiter.max_requests > 0);
    assert!(config.rate_limiter.burst_size > 0);
    assert!(config.rate_limiter.period_seconds > 0);
}
