//! Error types for the Debitflow library.
//!
//! This module defines the error types used throughout Debitflow,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Debitflow operations.
pub type DebitResult<T> = Result<T, DebitError>;

/// The main error type for Debitflow operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebitError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Weekday name not in the canonical lowercase table.
    #[error("Unknown day of week: {name}")]
    UnknownDayOfWeek {
        /// The unrecognized weekday name.
        name: String,
    },

    /// Schedule type not in the supported set.
    #[error("Unknown schedule type: {name}")]
    UnknownScheduleType {
        /// The unrecognized schedule type.
        name: String,
    },

    /// Payment amount is not positive.
    #[error("Invalid payment amount: {amount} - {reason}")]
    InvalidAmount {
        /// The invalid amount.
        amount: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Payment due day outside the valid day-of-month range.
    #[error("Invalid payment due day: {day} (expected 1-31)")]
    InvalidDueDay {
        /// The invalid day-of-month.
        day: u32,
    },

    /// No candidate date satisfied the schedule filters.
    #[error("No candidate debit date on or after {target_date}")]
    NoCandidateDate {
        /// The target date the candidates were filtered against.
        target_date: String,
    },
}

impl DebitError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown day-of-week error.
    #[must_use]
    pub fn unknown_day_of_week(name: impl Into<String>) -> Self {
        Self::UnknownDayOfWeek { name: name.into() }
    }

    /// Creates an unknown schedule type error.
    #[must_use]
    pub fn unknown_schedule_type(name: impl Into<String>) -> Self {
        Self::UnknownScheduleType { name: name.into() }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(amount: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            amount,
            reason: reason.into(),
        }
    }

    /// Creates a no-candidate-date error.
    #[must_use]
    pub fn no_candidate_date(target_date: impl Into<String>) -> Self {
        Self::NoCandidateDate {
            target_date: target_date.into(),
        }
    }

    /// Returns true if the error is caused by invalid caller input.
    ///
    /// Input errors map to a 4xx response at the HTTP surface; everything
    /// else is a server-side failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::NoCandidateDate { .. })
    }
}
