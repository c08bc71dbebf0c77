//! Injectable source of the current date.
//!
//! The scheduler is a pure function of (loan, current date); the clock is
//! the single source of non-determinism, held behind a trait so tests can
//! pin it.

use chrono::Utc;

use crate::types::Date;

/// Source of "today" for schedule calculations.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> Date;
}

/// Clock reading the current UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Utc::now().date_naive().into()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = Date::from_ymd(2023, 1, 10).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date); // stable across reads
    }

    #[test]
    fn test_system_clock_is_a_real_date() {
        let today = SystemClock.today();
        assert!(today.year() >= 2024);
    }
}
