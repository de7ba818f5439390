//! Month reference parsing
//!
//! Turns what a user types after `--month` into a [`MonthKey`], relative to
//! a fixed "current" month.

use crate::error::{BuddyError, BuddyResult};
use crate::models::MonthKey;

const MONTH_NAMES: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Resolves month references against a current month
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    current: MonthKey,
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodService {
    /// Resolve relative to today's month
    pub fn new() -> Self {
        Self::at(MonthKey::current())
    }

    /// Resolve relative to a given month
    pub fn at(current: MonthKey) -> Self {
        Self { current }
    }

    pub fn current_month(&self) -> MonthKey {
        self.current
    }

    /// Parse a reference, or fall back to the current month
    pub fn parse_or_current(&self, s: Option<&str>) -> BuddyResult<MonthKey> {
        match s {
            Some(s) => self.parse(s),
            None => Ok(self.current),
        }
    }

    /// Parse a month reference
    ///
    /// Accepts `YYYY-MM`, `current`/`now`/`this`, `last`/`prev`/`previous`,
    /// `next`, and month names (`March`, `mar`, `March 2024`). A bare month
    /// name means that month of the current year.
    pub fn parse(&self, s: &str) -> BuddyResult<MonthKey> {
        let s_lower = s.trim().to_lowercase();

        let relative = match s_lower.as_str() {
            "current" | "now" | "this" => Some(Ok(self.current)),
            "last" | "prev" | "previous" => Some(self.current.prev()),
            "next" => Some(self.current.next()),
            _ => None,
        };
        if let Some(key) = relative {
            return key.map_err(|e| {
                BuddyError::Validation(format!(
                    "'{}' from {} is out of range: {}",
                    s.trim(),
                    self.current,
                    e
                ))
            });
        }

        if let Some(key) = self.parse_month_name(&s_lower) {
            return Ok(key);
        }

        MonthKey::parse(s.trim())
            .map_err(|e| BuddyError::Validation(format!("Invalid month '{}': {}", s.trim(), e)))
    }

    fn parse_month_name(&self, s: &str) -> Option<MonthKey> {
        let (word, rest) = match s.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (s, ""),
        };

        let month = MONTH_NAMES
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, month)| *month)?;

        let year = if rest.is_empty() {
            self.current.year()
        } else {
            rest.parse().ok()?
        };

        MonthKey::new(year, month).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    fn service() -> PeriodService {
        PeriodService::at(key("2025-03"))
    }

    #[test]
    fn test_relative_references() {
        let service = service();
        assert_eq!(service.parse("current").unwrap(), key("2025-03"));
        assert_eq!(service.parse("NOW").unwrap(), key("2025-03"));
        assert_eq!(service.parse("this").unwrap(), key("2025-03"));
        assert_eq!(service.parse("last").unwrap(), key("2025-02"));
        assert_eq!(service.parse("prev").unwrap(), key("2025-02"));
        assert_eq!(service.parse("previous").unwrap(), key("2025-02"));
        assert_eq!(service.parse(" next ").unwrap(), key("2025-04"));
    }

    #[test]
    fn test_relative_references_cross_years() {
        assert_eq!(
            PeriodService::at(key("2025-01")).parse("last").unwrap(),
            key("2024-12")
        );
        assert_eq!(
            PeriodService::at(key("2024-12")).parse("next").unwrap(),
            key("2025-01")
        );
    }

    #[test]
    fn test_relative_references_at_key_range_edges() {
        let err = PeriodService::at(key("9999-12")).parse("next").unwrap_err();
        assert!(err.is_validation());

        let err = PeriodService::at(key("0000-01")).parse("last").unwrap_err();
        assert!(err.is_validation());

        assert_eq!(
            PeriodService::at(key("9999-12")).parse("prev").unwrap(),
            key("9999-11")
        );
    }

    #[test]
    fn test_month_names() {
        let service = service();
        assert_eq!(service.parse("March").unwrap(), key("2025-03"));
        assert_eq!(service.parse("dec").unwrap(), key("2025-12"));
        assert_eq!(service.parse("Sept").unwrap(), key("2025-09"));
        assert_eq!(service.parse("January 2024").unwrap(), key("2024-01"));
        assert_eq!(service.parse("feb 2026").unwrap(), key("2026-02"));
    }

    #[test]
    fn test_month_keys() {
        assert_eq!(service().parse("2024-11").unwrap(), key("2024-11"));
    }

    #[test]
    fn test_invalid_references() {
        let service = service();
        for input in ["", "2025-13", "2025-3", "marchy", "jan twenty", "yesterday"] {
            let err = service.parse(input).unwrap_err();
            assert!(err.is_validation(), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn test_parse_or_current() {
        let service = service();
        assert_eq!(service.parse_or_current(None).unwrap(), key("2025-03"));
        assert_eq!(service.parse_or_current(Some("last")).unwrap(), key("2025-02"));
    }
}
