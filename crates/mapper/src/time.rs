//! Timestamp formatting
//!
//! Epoch-millisecond values format as local-timezone RFC 3339 strings.
//! A missing or zero input falls back to the current instant at call
//! time; the fallback is never cached, so two calls within one mapping
//! invocation may differ by microseconds.

use chrono::{Local, TimeZone};

/// Format an optional epoch-millisecond timestamp as local-time RFC 3339
///
/// Present and non-zero values convert from epoch milliseconds; absent or
/// zero values yield the current instant.
pub fn format_epoch_ms(epoch_ms: Option<i64>) -> String {
    epoch_ms
        .filter(|ms| *ms != 0)
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| Local::now().to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_present_value_formats_to_valid_rfc3339() {
        let formatted = format_epoch_ms(Some(1_700_000_000_000));
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_absent_value_falls_back_to_now() {
        let before = Local::now();
        let formatted = format_epoch_ms(None);
        let after = Local::now();

        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        assert!(parsed.timestamp_millis() >= before.timestamp_millis());
        assert!(parsed.timestamp_millis() <= after.timestamp_millis());
    }

    #[test]
    fn test_zero_treated_as_absent() {
        let formatted = format_epoch_ms(Some(0));
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        // A zero input must not produce the epoch itself
        assert!(parsed.timestamp_millis() > 0);
    }

    #[test]
    fn test_millisecond_precision_is_preserved() {
        let formatted = format_epoch_ms(Some(1_700_000_000_123));
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_700_000_000_123);
    }
}
