//! Next-debit calculation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{DebitError, DebitResult};
use crate::schedule::DateRange;
use crate::types::{Date, Debit, Loan, ScheduleType};

/// Computes the next scheduled debit for a loan.
///
/// The calculation is a pure function of the loan and the injected
/// clock's current date, so a calculator can be shared freely across
/// threads and requests.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use debitflow_core::clock::FixedClock;
/// use debitflow_core::schedule::DebitCalculator;
/// use debitflow_core::types::Date;
///
/// let today = Date::from_ymd(2023, 1, 10).unwrap();
/// let calculator = DebitCalculator::with_clock(Arc::new(FixedClock(today)));
/// ```
pub struct DebitCalculator {
    clock: Arc<dyn Clock>,
}

impl DebitCalculator {
    /// Creates a calculator reading the system UTC date.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a calculator with an injected clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Computes the next debit date and amount for a loan.
    ///
    /// The target date is tomorrow, pushed past weekends and clamped
    /// forward to the loan's debit start date. The debit lands on the
    /// first candidate occurrence of the loan's weekday on or after the
    /// target, subject to the schedule policy:
    ///
    /// - **Monthly**: candidates on the payment due day are skipped; the
    ///   amount is the monthly payment unchanged.
    /// - **Biweekly**: only every second weekday occurrence (counted from
    ///   the start date) is eligible; the monthly payment is split across
    ///   the eligible occurrences in the debit's month, rounded up to a
    ///   whole amount.
    ///
    /// # Errors
    ///
    /// Returns an input validation error for a non-positive amount or an
    /// out-of-range due day, and `DebitError::NoCandidateDate` if the
    /// filters leave no eligible date.
    pub fn next_debit(&self, loan: &Loan) -> DebitResult<Debit> {
        loan.validate()?;

        let target_date = self.target_date(loan);
        debug!(
            "Computing next debit: start {}, target {}, {} on {}",
            loan.debit_start_date, target_date, loan.schedule_type, loan.debit_day_of_week
        );

        let range = DateRange::generate(loan.debit_start_date, target_date, loan.debit_day_of_week)?;

        match loan.schedule_type {
            ScheduleType::Biweekly => {
                let cadence = range.alternating();
                let date = cadence
                    .iter()
                    .copied()
                    .find(|d| *d >= target_date)
                    .ok_or_else(|| DebitError::no_candidate_date(target_date.to_string()))?;

                // Split the monthly payment across this month's eligible
                // occurrences, rounding up to a whole amount.
                let occurrences = cadence.iter().filter(|d| d.same_month(&date)).count();
                let amount =
                    (loan.monthly_payment_amount / Decimal::from(occurrences as u64)).ceil();

                Ok(Debit { date, amount })
            }
            ScheduleType::Monthly => {
                let date = range
                    .dates()
                    .iter()
                    .copied()
                    .find(|d| *d >= target_date && d.day() != loan.payment_due_day)
                    .ok_or_else(|| DebitError::no_candidate_date(target_date.to_string()))?;

                Ok(Debit {
                    date,
                    amount: loan.monthly_payment_amount,
                })
            }
        }
    }

    /// Derives the earliest date eligible for the next debit.
    ///
    /// Tomorrow, moved to the following Monday if it lands on a weekend,
    /// then clamped forward to the loan's debit start date.
    fn target_date(&self, loan: &Loan) -> Date {
        let mut target = self.clock.today().add_days(1);
        if target.is_weekend() {
            target = target.next_weekday();
        }
        if loan.debit_start_date > target {
            target = loan.debit_start_date;
        }
        target
    }
}

impl Default for DebitCalculator {
    fn default() -> Self {
        Self::new()
    }
}
