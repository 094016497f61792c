use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// `created_at` as it arrives over the wire.
///
/// Numbers are epoch milliseconds. Strings may be RFC 3339, RFC 2822 (the HTTP-date
/// form Flask emits), or a bare SQL `YYYY-MM-DD HH:MM:SS` taken as UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(f64),
    Text(String),
}

impl Timestamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Millis(ms) if ms.is_finite() => {
                DateTime::from_timestamp_millis(ms.trunc() as i64)
            }
            Timestamp::Millis(_) => None,
            Timestamp::Text(text) => parse_text(text.trim()),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::Text(value.to_rfc3339())
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a history timestamp the way an `en-US` short-month date reads: `Jan 5, 2024`.
pub fn format_history_date(created_at: Option<&Timestamp>) -> String {
    match created_at.and_then(Timestamp::to_datetime) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
