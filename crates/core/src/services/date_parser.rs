use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Server timestamps: `2025-03-05T10:15:00.000Z`
const ISO_MILLIS_UTC: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Manually entered or legacy records: `2025-03-05`
const PLAIN_DATE: &str = "%Y-%m-%d";

/// Parse a raw transaction timestamp into a UTC date-time.
///
/// Tries the ISO-with-millis form first, then any RFC 3339 timestamp
/// (converted to UTC), then a plain date at midnight. Returns `None`
/// when nothing matches; callers treat that as "belongs to no month".
pub fn parse_transaction_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, ISO_MILLIS_UTC) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    NaiveDate::parse_from_str(raw, PLAIN_DATE)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar date of a raw transaction timestamp, see [`parse_transaction_timestamp`].
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    parse_transaction_timestamp(raw).map(|dt| dt.date())
}
