//! # Debitflow Core
//!
//! Core types and the scheduling algorithm for the Debitflow loan debit
//! service.
//!
//! This crate provides the building blocks the HTTP surface is a thin
//! wrapper around:
//!
//! - **Types**: `Date`, `DayOfWeek`, `ScheduleType`, `Loan`, `Debit`
//! - **Schedule**: candidate date generation and the next-debit calculation
//! - **Clock**: injectable current-date source for deterministic tests
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes and enums prevent mixing incompatible values
//! - **Explicit Over Implicit**: unknown weekday or schedule names are
//!   rejected, never defaulted
//! - **Determinism**: the current date is the only non-deterministic input
//!   and is injected via the [`clock::Clock`] trait
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use debitflow_core::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let loan = Loan {
//!     debit_start_date: Date::from_ymd(2023, 1, 2).unwrap(),
//!     debit_day_of_week: DayOfWeek::Monday,
//!     schedule_type: ScheduleType::Monthly,
//!     monthly_payment_amount: Decimal::from(1000),
//!     payment_due_day: 2,
//! };
//!
//! let calculator = DebitCalculator::with_clock(Arc::new(FixedClock(
//!     Date::from_ymd(2023, 1, 10).unwrap(),
//! )));
//! let debit = calculator.next_debit(&loan).unwrap();
//! assert_eq!(debit.date.to_string(), "2023-01-16");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod clock;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{DebitError, DebitResult};
    pub use crate::schedule::{DateRange, DebitCalculator};
    pub use crate::types::{Date, DayOfWeek, Debit, Loan, ScheduleType};
}

// Re-export commonly used types at crate root
pub use error::{DebitError, DebitResult};
pub use schedule::DebitCalculator;
pub use types::{Date, Debit, Loan};
