use chrono::{DateTime, TimeZone, Utc};

/// Wire format requested for date-time fields
///
/// Sent to the server in the `Accept-Datetime-Format` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateTimeFormat {
    /// `2024-01-15T10:30:00.000000000Z`
    #[default]
    Rfc3339,
    /// `1705314600.000000000`
    Unix,
}

impl DateTimeFormat {
    /// Header value for this format
    #[must_use]
    pub fn as_header(&self) -> &'static str {
        match self {
            DateTimeFormat::Rfc3339 => "RFC3339",
            DateTimeFormat::Unix => "UNIX",
        }
    }
}

impl std::str::FromStr for DateTimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RFC3339" => Ok(DateTimeFormat::Rfc3339),
            "UNIX" => Ok(DateTimeFormat::Unix),
            other => Err(format!("unknown datetime format: {other}")),
        }
    }
}

/// Parses a wire date-time in either RFC3339 or UNIX `seconds.fraction` form
///
/// Date-times stay strings on the entities because their format depends on the
/// request header; this converts one when a caller needs to compute with it.
#[must_use]
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let (secs, frac) = value.split_once('.').unwrap_or((value, ""));
    let secs: i64 = secs.parse().ok()?;
    if !frac.chars().all(|c| c.is_ascii_digit()) || frac.len() > 9 {
        return None;
    }
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<9}").parse().ok()?
    };
    Utc.timestamp_opt(secs, nanos).single()
}

/// Formats a date-time for a query parameter in the requested wire format
#[must_use]
pub fn format_datetime(value: &DateTime<Utc>, format: DateTimeFormat) -> String {
    match format {
        DateTimeFormat::Rfc3339 => value.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true),
        DateTimeFormat::Unix => format!("{}.{:09}", value.timestamp(), value.timestamp_subsec_nanos()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_wire_formats_to_the_same_instant() {
        let rfc = parse_datetime("2024-01-15T10:30:00.250000000Z").unwrap();
        let unix = parse_datetime("1705314600.250000000").unwrap();
        assert_eq!(rfc, unix);
    }

    #[test]
    fn short_fractions_are_scaled() {
        let dt = parse_datetime("1705314600.5").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_datetime("yesterday").is_none());
        assert!(parse_datetime("17053.1x").is_none());
    }

    #[test]
    fn formats_round_trip() {
        let dt = parse_datetime("1705314600.000000001").unwrap();
        for format in [DateTimeFormat::Rfc3339, DateTimeFormat::Unix] {
            assert_eq!(parse_datetime(&format_datetime(&dt, format)), Some(dt));
        }
    }
}
