//! Year-month value object for payment periods
//!
//! Payments are keyed by a `YYYY-MM` string, matching the `month`
//! column in the payments table.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar month in `YYYY-MM` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a YearMonth, validating the month range
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::MonthOutOfRange(month));
        }
        if !(2000..=9999).contains(&year) {
            return Err(YearMonthParseError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// The current month in UTC
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// Parse from a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, YearMonthParseError> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| YearMonthParseError::InvalidFormat(s.to_string()))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(YearMonthParseError::InvalidFormat(s.to_string()));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| YearMonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| YearMonthParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

/// Error when parsing a YearMonth
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YearMonthParseError {
    #[error("invalid year-month format: {0} (expected YYYY-MM)")]
    InvalidFormat(String),

    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),

    #[error("year out of range: {0}")]
    YearOutOfRange(i32),
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearMonth::parse(s)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        YearMonth::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let ym = YearMonth::parse("2024-06").unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 6);
        assert_eq!(ym.to_string(), "2024-06");
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        assert!(YearMonth::parse("2024/06").is_err());
        assert!(YearMonth::parse("2024-6").is_err());
        assert!(YearMonth::parse("24-06").is_err());
        assert!(YearMonth::parse("garbage").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            YearMonth::parse("2024-13"),
            Err(YearMonthParseError::MonthOutOfRange(13))
        ));
        assert!(YearMonth::parse("2024-00").is_err());
        assert!(YearMonth::parse("1024-01").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let ym = YearMonth::parse("2024-06").unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"2024-06\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);
    }

    #[test]
    fn test_ordering() {
        let a = YearMonth::parse("2024-05").unwrap();
        let b = YearMonth::parse("2024-06").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_current_is_valid() {
        let ym = YearMonth::current();
        assert!((1..=12).contains(&ym.month()));
    }
}
