use crate::types::{RawEntry, StructuredTime};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// Structured form is preferred over the textual form within each key.
const DATE_KEYS: &[&str] = &["published", "updated", "created"];

/// Sentinel for absent or unparseable dates. Records carrying it sort last
/// under the recency-descending order instead of breaking comparisons.
pub fn sentinel() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// Parse a textual date in any of the representations feeds actually emit.
/// Input with an explicit offset is converted to UTC; zone-less input is
/// taken as already being UTC rather than silently shifted.
pub fn normalize_text_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%a, %d %b %Y %H:%M:%S",
        "%d %b %Y %H:%M:%S",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

/// Convert a structured time breakdown to UTC. Out-of-range components
/// (month 13, hour 25, ...) yield `None` so callers fall through to the
/// textual form or the sentinel.
pub fn normalize_structured(time: &StructuredTime) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(time.year, time.month, time.day)?
        .and_hms_opt(time.hour, time.minute, time.second)
        .map(|dt| dt.and_utc())
}

/// Resolve the single timestamp for an entry: published, then updated, then
/// created. Never fails; anything unusable maps to the sentinel.
pub fn entry_timestamp(entry: &RawEntry) -> DateTime<Utc> {
    for key in DATE_KEYS {
        if let Some(time) = entry.structured_time(key) {
            if let Some(ts) = normalize_structured(time) {
                return ts;
            }
        }
        if let Some(raw) = entry.field(key) {
            if let Some(ts) = normalize_text_date(raw) {
                return ts;
            }
        }
    }
    sentinel()
}
