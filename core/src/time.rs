//! Time related utils.

use chrono::Utc;

/// DateTime in UTC, the only timezone we use while signing.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime as whole seconds since the Unix epoch.
///
/// This is the format `oauth_timestamp` carries on the wire.
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_unix_timestamp() {
        let t = Utc.with_ymd_and_hms(2011, 9, 6, 12, 2, 38).unwrap();
        assert_eq!(format_unix_timestamp(t), "1315310558");
    }
}
