//! Timestamp parsing for command-line input and recorded sample streams.
//!
//! Sensor samples carry Unix milliseconds. People type RFC 3339. Both are
//! accepted and normalized to Unix milliseconds.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{TimeError, TimeResult};

const MAX_TIMESTAMP_LENGTH: usize = 40;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses `text` into Unix milliseconds.
///
/// Accepted forms:
/// - an integer, taken as Unix milliseconds (`1735700400000`)
/// - RFC 3339 with an offset (`2025-01-01T03:00:00Z`, `2025-01-01T12:00:00+09:00`)
/// - a naive date-time, taken as UTC (`2025-01-01T03:00:00`, `2025-01-01 03:00:00.5`)
///
/// ```
/// use celestial_time::parse_timestamp;
///
/// assert_eq!(parse_timestamp("0").unwrap(), 0);
/// assert_eq!(parse_timestamp("1970-01-01T00:00:01Z").unwrap(), 1000);
/// assert!(parse_timestamp("yesterday").is_err());
/// ```
pub fn parse_timestamp(text: &str) -> TimeResult<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimeError::ParseError("empty timestamp".to_string()));
    }
    if text.len() > MAX_TIMESTAMP_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    if let Ok(millis) = text.parse::<i64>() {
        return Ok(millis);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
        .ok_or_else(|| {
            TimeError::ParseError(format!(
                "Invalid timestamp '{}'. Expected Unix milliseconds or YYYY-MM-DDTHH:MM:SS[Z]",
                text
            ))
        })
}

/// Current wall-clock time as Unix milliseconds.
pub fn unix_millis_now() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_millis() {
        assert_eq!(parse_timestamp("1735700400000").unwrap(), 1_735_700_400_000);
        assert_eq!(parse_timestamp("  -5 ").unwrap(), -5);
    }

    #[test]
    fn test_rfc3339_with_offsets() {
        let utc = parse_timestamp("2000-01-01T12:00:00Z").unwrap();
        assert_eq!(utc, 946_728_000_000);
        let tokyo = parse_timestamp("2000-01-01T21:00:00+09:00").unwrap();
        assert_eq!(tokyo, utc);
    }

    #[test]
    fn test_naive_is_utc() {
        assert_eq!(
            parse_timestamp("2000-01-01T12:00:00").unwrap(),
            946_728_000_000
        );
        assert_eq!(
            parse_timestamp("2000-01-01 12:00:00.250").unwrap(),
            946_728_000_250
        );
        assert_eq!(parse_timestamp("2000-01-01T12:00").unwrap(), 946_728_000_000);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("not a time"),
            Err(TimeError::ParseError(_))
        ));
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp(&"9".repeat(64)).is_err());
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(unix_millis_now() > 1_577_836_800_000);
    }
}
