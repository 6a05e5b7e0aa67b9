use chrono::{Datelike, Timelike};
use v20_client::utils::time::{DateTimeFormat, format_datetime, parse_datetime};

#[test]
fn test_parse_rfc3339_with_nanoseconds() {
    let dt = parse_datetime("2024-01-15T10:30:00.123456789Z").unwrap();
    assert_eq!(dt.year(), 2024);
    assert_eq!(dt.hour(), 10);
    assert_eq!(dt.nanosecond(), 123_456_789);
}

#[test]
fn test_parse_unix_seconds_without_fraction() {
    let dt = parse_datetime("1705314600").unwrap();
    assert_eq!(dt.timestamp(), 1_705_314_600);
    assert_eq!(dt.nanosecond(), 0);
}

#[test]
fn test_format_unix_pads_nanoseconds() {
    let dt = parse_datetime("1705314600.5").unwrap();
    assert_eq!(format_datetime(&dt, DateTimeFormat::Unix), "1705314600.500000000");
}

#[test]
fn test_datetime_format_from_str() {
    assert_eq!("UNIX".parse::<DateTimeFormat>().unwrap(), DateTimeFormat::Unix);
    assert!("ISO".parse::<DateTimeFormat>().is_err());
}
