//! Candidate debit date generation.
//!
//! This module produces the ordered set of dates a debit could land on:
//! every occurrence of the loan's weekday, month by month, from the debit
//! start date through one month past the target date.

use crate::error::DebitResult;
use crate::types::{Date, DayOfWeek};

/// An ordered range of candidate debit dates.
///
/// All dates share the requested weekday, are on or after the start date,
/// and are strictly increasing. Generation walks a month cursor from the
/// start date through one calendar month past the target date, so the
/// range always extends past the target and a future candidate exists.
#[derive(Debug, Clone)]
pub struct DateRange {
    dates: Vec<Date>,
}

impl DateRange {
    /// Generates the candidate dates for one weekday.
    ///
    /// Enumerates every day of each month in the window, keeping dates
    /// that are on or after `start_date` and fall on `day_of_week`. The
    /// month cursor advances with the same truncation semantics as
    /// [`Date::add_months`], and the window is inclusive of
    /// `target_date + 1 month`. Month windows are disjoint, so the result
    /// needs no deduplication.
    ///
    /// Callers must pass `start_date <= target_date`; the calculator's
    /// clamp step guarantees it, and it ensures the loop covers at least
    /// the start month plus one look-ahead month.
    ///
    /// # Errors
    ///
    /// Returns `DebitError::InvalidDate` if month arithmetic leaves the
    /// supported date range.
    pub fn generate(
        start_date: Date,
        target_date: Date,
        day_of_week: DayOfWeek,
    ) -> DebitResult<Self> {
        let weekday = day_of_week.to_weekday();
        let limit = target_date.add_months(1)?;

        let mut dates = Vec::new();
        let mut cursor = start_date;

        while cursor <= limit {
            for day in 1..=cursor.days_in_month() {
                let date = Date::from_ymd(cursor.year(), cursor.month(), day)?;
                if date >= start_date && date.weekday() == weekday {
                    dates.push(date);
                }
            }
            cursor = cursor.add_months(1)?;
        }

        Ok(Self { dates })
    }

    /// Returns the candidate dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns every second candidate, starting at the first.
    ///
    /// This is the biweekly cadence: the 1st, 3rd, 5th... occurrences of
    /// the weekday counted from the start date, not literal 14-day steps.
    #[must_use]
    pub fn alternating(&self) -> Vec<Date> {
        self.dates.iter().copied().step_by(2).collect()
    }

    /// Returns the number of candidate dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no candidate dates were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
