use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// How much of a [`FuzzyDate`] is actually known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateAccuracy {
    Year,
    Month,
    Day,
}

/// A calendar date known only to a given precision.
///
/// The stored `date` is padded with the first month/day when the accuracy is
/// coarser than a day; only the formatted string is meaningful for
/// comparison, so that `1990` and `1990-01-01` are different values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuzzyDate {
    pub date: NaiveDate,
    pub accuracy: DateAccuracy,
}

impl FuzzyDate {
    pub fn new(date: NaiveDate, accuracy: DateAccuracy) -> Self {
        Self { date, accuracy }
    }

    /// A date known to the day.
    pub fn day(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|d| Self::new(d, DateAccuracy::Day))
    }

    /// A date known to the month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|d| Self::new(d, DateAccuracy::Month))
    }

    /// A date known to the year.
    pub fn year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(|d| Self::new(d, DateAccuracy::Year))
    }

    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, inferring the accuracy from
    /// the number of components.
    pub fn parse(text: &str) -> TypeResult<Self> {
        let trimmed = text.trim();
        let invalid = || TypeError::InvalidFuzzyDate(text.to_string());

        let parts: Vec<&str> = trimmed.split('-').collect();
        let numbers = parts
            .iter()
            .map(|p| {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    None
                } else {
                    p.parse::<u32>().ok()
                }
            })
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(invalid)?;

        if parts[0].len() != 4 || parts.iter().skip(1).any(|p| p.len() != 2) {
            return Err(invalid());
        }

        let year = numbers[0] as i32;
        let parsed = match numbers.as_slice() {
            [_] => Self::year(year),
            [_, month] => Self::month(year, *month),
            [_, month, day] => Self::day(year, *month, *day),
            _ => None,
        };
        parsed.ok_or_else(invalid)
    }

    /// Format at the stored accuracy.
    pub fn format(&self) -> String {
        match self.accuracy {
            DateAccuracy::Year => format!("{:04}", self.date.year()),
            DateAccuracy::Month => format!("{:04}-{:02}", self.date.year(), self.date.month()),
            DateAccuracy::Day => self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for FuzzyDate {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Format an optional fuzzy date, mapping absence to `None`.
pub fn format_fuzzy_date(date: Option<&FuzzyDate>) -> Option<String> {
    date.map(FuzzyDate::format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_at_accuracy() {
        assert_eq!(FuzzyDate::year(1990).unwrap().format(), "1990");
        assert_eq!(FuzzyDate::month(1990, 5).unwrap().format(), "1990-05");
        assert_eq!(FuzzyDate::day(1990, 5, 17).unwrap().format(), "1990-05-17");
    }

    #[test]
    fn parse_infers_accuracy() {
        assert_eq!(FuzzyDate::parse("1990").unwrap().accuracy, DateAccuracy::Year);
        assert_eq!(FuzzyDate::parse("1990-05").unwrap().accuracy, DateAccuracy::Month);
        assert_eq!(FuzzyDate::parse(" 1990-05-17 ").unwrap().accuracy, DateAccuracy::Day);
    }

    #[test]
    fn precision_change_is_visible_in_formatted_form() {
        let year = FuzzyDate::year(1990).unwrap();
        let day = FuzzyDate::day(1990, 1, 1).unwrap();
        assert_eq!(year.date, day.date);
        assert_ne!(year.format(), day.format());
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in ["", "90", "1990-5", "1990-13", "1990-02-30", "abcd", "1990-05-17-01", "1990--05"] {
            assert!(FuzzyDate::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn format_optional() {
        assert_eq!(format_fuzzy_date(None), None);
        let d = FuzzyDate::month(2001, 12).unwrap();
        assert_eq!(format_fuzzy_date(Some(&d)).as_deref(), Some("2001-12"));
    }

    #[test]
    fn serde_roundtrip() {
        let d = FuzzyDate::month(2001, 12).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"MONTH\""));
        let back: FuzzyDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
