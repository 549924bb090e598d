use chrono::{Datelike, NaiveDateTime};

/// Timestamp layout of the weather input, e.g. `2003-01-15 13:30`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Calendar components derived once per row so the engine never parses timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    /// Four-digit year, `"2003"`.
    pub year: String,
    /// English month name, `"January"`.
    pub month: String,
    /// ISO date, `"2003-01-15"`.
    pub date: String,
}

impl CalendarFields {
    pub fn from_timestamp(timestamp: &str) -> Result<Self, chrono::ParseError> {
        let parsed = NaiveDateTime::parse_from_str(timestamp.trim(), TIMESTAMP_FORMAT)?;
        let date = parsed.date();
        Ok(Self {
            year: date.year().to_string(),
            month: date.format("%B").to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        })
    }
}

/// All month names in calendar order, matching [`CalendarFields::month`].
pub fn month_names() -> Vec<String> {
    (1..=12u32)
        .filter_map(|m| chrono::NaiveDate::from_ymd_opt(2000, m, 1))
        .map(|d| d.format("%B").to_string())
        .collect()
}
