//! Month key representation
//!
//! A month key identifies one budgeting period and is written `YYYY-MM`
//! (four-digit year, dash, two-digit month). Keys order chronologically.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifies a calendar month, e.g. `2025-03`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number and year range
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(MonthParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// Get the month containing today's date (local time)
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Get the month containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the next month
    ///
    /// Fails past `9999-12`, the last key that fits the `YYYY-MM` form.
    pub fn next(&self) -> Result<Self, MonthParseError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Get the previous month
    ///
    /// Fails before `0000-01`.
    pub fn prev(&self) -> Result<Self, MonthParseError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // month is validated at construction, so day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Abbreviated month name ("Mar"), used on yearly chart axes
    pub fn short_label(&self) -> String {
        self.first_day().format("%b").to_string()
    }

    /// Month and year ("March 2025"), used in headings
    pub fn long_label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Parse a strict `YYYY-MM` key
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = s[..4]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = s[5..]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format '{}', expected YYYY-MM", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month number: {}", m),
            MonthParseError::InvalidYear(y) => write!(f, "Year out of range: {}", y),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let k = key("2025-03");
        assert_eq!(k.year(), 2025);
        assert_eq!(k.month(), 3);
        assert_eq!(k.to_string(), "2025-03");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(MonthKey::parse("2025-3").is_err());
        assert!(MonthKey::parse("25-03").is_err());
        assert!(MonthKey::parse("2025/03").is_err());
        assert!(MonthKey::parse("2025-03-01").is_err());
        assert!(MonthKey::parse("+025-03").is_err());
        assert_eq!(
            MonthKey::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert_eq!(
            MonthKey::parse("2025-00"),
            Err(MonthParseError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_navigation() {
        assert_eq!(key("2025-01").prev(), Ok(key("2024-12")));
        assert_eq!(key("2024-12").next(), Ok(key("2025-01")));
        assert_eq!(key("2025-06").next(), Ok(key("2025-07")));
        assert_eq!(key("2025-06").prev(), Ok(key("2025-05")));
    }

    #[test]
    fn test_navigation_stays_in_range() {
        assert_eq!(key("9999-11").next(), Ok(key("9999-12")));
        assert_eq!(
            key("9999-12").next(),
            Err(MonthParseError::InvalidYear(10000))
        );
        assert_eq!(key("0000-02").prev(), Ok(key("0000-01")));
        assert_eq!(key("0000-01").prev(), Err(MonthParseError::InvalidYear(-1)));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![key("2025-10"), key("2024-12"), key("2025-02")];
        keys.sort();
        assert_eq!(keys, vec![key("2024-12"), key("2025-02"), key("2025-10")]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(key("2025-03").short_label(), "Mar");
        assert_eq!(key("2025-03").long_label(), "March 2025");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&key("2025-03")).unwrap();
        assert_eq!(json, "\"2025-03\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2025-03"));
        assert!(serde_json::from_str::<MonthKey>("\"2025-13\"").is_err());
    }
}
