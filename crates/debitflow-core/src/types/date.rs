//! Date type for debit scheduling.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DebitError, DebitResult};

/// A calendar date for debit scheduling.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// the schedule-specific operations and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use debitflow_core::types::Date;
///
/// let date = Date::from_ymd(2023, 1, 31).unwrap();
/// let future = date.add_months(1).unwrap();
/// assert_eq!(future.month(), 2);
/// assert_eq!(future.day(), 28); // truncated to the shorter month
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `DebitError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DebitResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| DebitError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `DebitError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> DebitResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| DebitError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => unreachable!(),
        }
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `DebitError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> DebitResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months / 12;
        let new_month = (total_months % 12 + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is a weekday (Monday through Friday).
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Returns the next weekday (skipping weekends).
    ///
    /// If the date is already a weekday, returns itself.
    #[must_use]
    pub fn next_weekday(&self) -> Self {
        let mut date = *self;
        while date.is_weekend() {
            date = date.add_days(1);
        }
        date
    }

    /// Checks if two dates fall in the same calendar month of the same year.
    #[must_use]
    pub fn same_month(&self, other: &Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Helper function to get days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Helper function to check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2023, 1, 2).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 2);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2023, 2, 30).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2023-01-02").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 2);

        assert!(Date::parse("01/02/2023").is_err());
        assert!(Date::parse("not a date").is_err());
    }

    #[test]
    fn test_add_months_truncation() {
        let date = Date::from_ymd(2023, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 28); // Rolled back to last valid day

        // Leap year February keeps the 29th
        let date = Date::from_ymd(2024, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.day(), 29);
    }

    #[test]
    fn test_add_months_year_rollover() {
        let date = Date::from_ymd(2023, 12, 15).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.year(), 2024);
        assert_eq!(result.month(), 1);
        assert_eq!(result.day(), 15);
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2023, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_weekday_detection() {
        // Monday
        let monday = Date::from_ymd(2023, 1, 2).unwrap();
        assert!(monday.is_weekday());
        assert!(!monday.is_weekend());
        assert_eq!(monday.weekday(), Weekday::Mon);

        // Saturday
        let saturday = Date::from_ymd(2023, 1, 7).unwrap();
        assert!(!saturday.is_weekday());
        assert!(saturday.is_weekend());

        // Sunday
        let sunday = Date::from_ymd(2023, 1, 8).unwrap();
        assert!(sunday.is_weekend());
    }

    #[test]
    fn test_next_weekday() {
        // Friday -> Friday (no change)
        let friday = Date::from_ymd(2023, 1, 6).unwrap();
        assert_eq!(friday.next_weekday(), friday);

        // Saturday -> Monday
        let saturday = Date::from_ymd(2023, 1, 7).unwrap();
        let monday = Date::from_ymd(2023, 1, 9).unwrap();
        assert_eq!(saturday.next_weekday(), monday);

        // Sunday -> Monday
        let sunday = Date::from_ymd(2023, 1, 8).unwrap();
        assert_eq!(sunday.next_weekday(), monday);
    }

    #[test]
    fn test_same_month() {
        let a = Date::from_ymd(2023, 1, 2).unwrap();
        let b = Date::from_ymd(2023, 1, 30).unwrap();
        let c = Date::from_ymd(2023, 2, 2).unwrap();
        let d = Date::from_ymd(2024, 1, 2).unwrap();

        assert!(a.same_month(&b));
        assert!(!a.same_month(&c));
        // Same month number, different year
        assert!(!a.same_month(&d));
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2023, 6, 5).unwrap();
        assert_eq!(format!("{}", date), "2023-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2023, 1, 2).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2023-01-02\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
