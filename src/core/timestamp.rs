//! Timestamp formatting for rendered records

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How a record timestamp is rendered.
///
/// # Examples
///
/// ```
/// use category_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Unix.format(&ts), "1736332245");
/// assert_eq!(TimestampFormat::Custom("%Y-%m-%d".into()).format(&ts), "2025-01-08");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Local time with milliseconds: `2025-01-08 10:30:45.123`
    #[default]
    Local,

    /// ISO 8601 UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Seconds since the epoch
    Unix,

    /// Milliseconds since the epoch
    UnixMillis,

    /// Any strftime-compatible format, rendered in UTC
    Custom(String),
}

impl TimestampFormat {
    pub fn format(&self, ts: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Local => ts
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string(),
            TimestampFormat::Iso8601 => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339 => ts.to_rfc3339_opts(SecondsFormat::Secs, false),
            TimestampFormat::Unix => ts.timestamp().to_string(),
            TimestampFormat::UnixMillis => ts.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                // chrono reports a bad pattern as a fmt error instead of at parse time
                let mut out = String::new();
                match write!(out, "{}", ts.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Iso8601.format(ts),
                }
            }
        }
    }

    /// JSON value for this format; the epoch variants stay numeric
    pub fn to_json_value(&self, ts: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => serde_json::Value::from(ts.timestamp()),
            TimestampFormat::UnixMillis => serde_json::Value::from(ts.timestamp_millis()),
            _ => serde_json::Value::String(self.format(ts)),
        }
    }
}
