use std::env;
use v20_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("V20_TEST_VAR_STRING", "stream.example.com");
        let result: String = get_env_or_default("V20_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "stream.example.com");
        env::remove_var("V20_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_unparsable_value() {
    unsafe {
        env::set_var("V20_TEST_VAR_PORT", "not-a-port");
        let result: u16 = get_env_or_default("V20_TEST_VAR_PORT", 443);
        assert_eq!(result, 443);
        env::remove_var("V20_TEST_VAR_PORT");
    }
}

#[test]
fn test_get_env_or_none_trims_whitespace() {
    unsafe {
        env::set_var("V20_TEST_VAR_TIMEOUT", " 15 ");
        let result: Option<u64> = get_env_or_none("V20_TEST_VAR_TIMEOUT");
        assert_eq!(result, Some(15));
        env::remove_var("V20_TEST_VAR_TIMEOUT");
    }
}

#[test]
fn test_get_env_flag() {
    unsafe {
        env::set_var("V20_TEST_VAR_SSL", "No");
        assert!(!get_env_flag("V20_TEST_VAR_SSL", true));
        env::set_var("V20_TEST_VAR_SSL", "garbage");
        assert!(get_env_flag("V20_TEST_VAR_SSL", true));
        env::remove_var("V20_TEST_VAR_SSL");
    }
}
