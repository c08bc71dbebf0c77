//! Debit scheduling.
//!
//! This module holds the two halves of the scheduling algorithm:
//!
//! - [`DateRange`]: candidate debit dates for a weekday, month by month
//! - [`DebitCalculator`]: target-date derivation and the monthly/biweekly
//!   selection and amount policies

mod calculator;
mod date_range;

pub use calculator::DebitCalculator;
pub use date_range::DateRange;
