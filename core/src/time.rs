//! Time related utils.

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format time into unix timestamp in seconds: "1327274290"
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Parse unix timestamp in seconds into datetime.
pub fn parse_unix_timestamp(s: &str) -> crate::Result<DateTime> {
    let secs = s
        .parse::<i64>()
        .map_err(|e| crate::Error::request_invalid(format!("invalid timestamp {s}")).with_source(e))?;

    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| crate::Error::request_invalid(format!("timestamp {s} is out of range")))
}
