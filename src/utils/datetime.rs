//! Date and time utility functions
//!
//! Record timestamps arrive as ISO-8601 strings in several shapes. Everything
//! here resolves them against the system-local timezone so that day
//! comparisons agree with what the user sees on the device clock.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Standard date format used for record dates and bucket labels
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive datetime shapes accepted in addition to RFC 3339, tried in order
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a record timestamp into local time.
///
/// Accepted inputs:
/// * RFC 3339 with an offset (`2025-06-29T08:15:00Z`), converted to local time
/// * naive date-times (`2025-06-29T08:15`, `2025-06-29 08:15:00`), read as local time
/// * bare dates (`2025-06-29`), read as local start of day
///
/// Returns `None` when the string matches none of these shapes.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(from_local(&naive));
        }
    }

    parse_date(value).ok().and_then(start_of_day)
}

/// Local calendar day a timestamp string falls on
pub fn local_day(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value).map(|dt| dt.date_naive())
}

/// First instant of `day` in local time.
///
/// Days that begin inside a DST gap fall back to the earliest valid instant.
pub fn start_of_day(day: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    match Local.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) => Some(dt),
        chrono::LocalResult::Ambiguous(earliest, _) => Some(earliest),
        chrono::LocalResult::None => (1..=3)
            .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
            .find_map(|dt| Local.from_local_datetime(&dt).earliest()),
    }
}

fn from_local(naive: &NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(naive))
}

/// Whole calendar days from `day` to `reference` (positive when `day` is earlier)
pub fn days_before(day: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - day).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_minute_precision_timestamp() {
        let dt = parse_timestamp("2025-06-28T23:59").unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday-ish").is_none());
        assert!(parse_timestamp("2025-13-40").is_none());
    }
}
