//! Timestamp utilities
//!
//! All record timestamps are local date-times without a zone, written in
//! ISO-8601 local form (`2023-03-09T11:30:00`).

use chrono::{Duration, Local, NaiveDateTime};

/// Display/serialization layout for record timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted input layouts, tried in order
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Get current local timestamp
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse an ISO-8601 local date-time, with or without seconds
pub fn parse_local_date_time(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Render a timestamp in the canonical layout
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// The instant `days` days before `now`; anything updated before it is stale
///
/// Saturates at the earliest representable date-time.
pub fn stale_cutoff(now: NaiveDateTime, days: i64) -> NaiveDateTime {
    Duration::try_days(days)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_now_returns_recent_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp > at(2000, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_with_seconds() {
        assert_eq!(
            parse_local_date_time("2023-03-09T11:30:00"),
            Some(at(2023, 3, 9, 11, 30, 0))
        );
    }

    #[test]
    fn test_parse_without_seconds() {
        assert_eq!(
            parse_local_date_time("2023-03-09T11:30"),
            Some(at(2023, 3, 9, 11, 30, 0))
        );
    }

    #[test]
    fn test_parse_with_fraction_and_padding() {
        let parsed = parse_local_date_time("  2023-03-09T11:30:05.250 ").unwrap();
        assert_eq!(format_timestamp(&parsed), "2023-03-09T11:30:05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_local_date_time(""), None);
        assert_eq!(parse_local_date_time("yesterday"), None);
        assert_eq!(parse_local_date_time("2023-13-01T00:00:00"), None);
        assert_eq!(parse_local_date_time("2023-03-09"), None);
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let ts = at(1999, 12, 31, 23, 59, 59);
        assert_eq!(parse_local_date_time(&format_timestamp(&ts)), Some(ts));
    }

    #[test]
    fn test_stale_cutoff_subtracts_days() {
        let base = at(2024, 3, 10, 12, 0, 0);
        assert_eq!(stale_cutoff(base, 0), base);
        assert_eq!(stale_cutoff(base, 10), at(2024, 2, 29, 12, 0, 0));
    }

    #[test]
    fn test_stale_cutoff_saturates() {
        let base = at(2024, 3, 10, 12, 0, 0);
        assert_eq!(stale_cutoff(base, i32::MAX as i64), NaiveDateTime::MIN);
    }
}
