//! Domain types for debit scheduling.
//!
//! This module provides type-safe representations of the scheduling
//! concepts:
//!
//! - [`Date`]: Calendar date for schedule calculations
//! - [`DayOfWeek`]: Debit weekday with canonical lowercase names
//! - [`ScheduleType`]: Monthly or biweekly cadence
//! - [`Loan`]: Input record describing the loan
//! - [`Debit`]: Output record, a dated amount to draw

mod date;
mod day_of_week;
mod debit;
mod loan;
mod schedule_type;

pub use date::Date;
pub use day_of_week::DayOfWeek;
pub use debit::Debit;
pub use loan::Loan;
pub use schedule_type::ScheduleType;
