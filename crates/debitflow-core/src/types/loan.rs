//! Loan input record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DebitError, DebitResult};
use crate::types::{Date, DayOfWeek, ScheduleType};

/// A loan, as submitted by the caller.
///
/// Only the fields the debit scheduler needs; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Earliest date from which debit scheduling may begin.
    pub debit_start_date: Date,
    /// Preferred day of week for debits.
    pub debit_day_of_week: DayOfWeek,
    /// Debit cadence.
    pub schedule_type: ScheduleType,
    /// Monthly payment amount; must be positive.
    pub monthly_payment_amount: Decimal,
    /// Day of month the payment is formally due (1-31).
    ///
    /// Excluded from monthly debit candidates to avoid debiting on the
    /// due date itself.
    pub payment_due_day: u32,
}

impl Loan {
    /// Validates the field constraints the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `DebitError::InvalidAmount` if `monthly_payment_amount` is
    /// not positive, or `DebitError::InvalidDueDay` if `payment_due_day`
    /// is outside 1-31.
    pub fn validate(&self) -> DebitResult<()> {
        if self.monthly_payment_amount <= Decimal::ZERO {
            return Err(DebitError::invalid_amount(
                self.monthly_payment_amount,
                "must be positive",
            ));
        }
        if self.payment_due_day < 1 || self.payment_due_day > 31 {
            return Err(DebitError::InvalidDueDay {
                day: self.payment_due_day,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_loan() -> Loan {
        Loan {
            debit_start_date: Date::from_ymd(2023, 1, 2).unwrap(),
            debit_day_of_week: DayOfWeek::Monday,
            schedule_type: ScheduleType::Monthly,
            monthly_payment_amount: dec!(1000),
            payment_due_day: 2,
        }
    }

    #[test]
    fn test_valid_loan() {
        assert!(test_loan().validate().is_ok());
    }

    #[test]
    fn test_nonpositive_amount_rejected() {
        let mut loan = test_loan();
        loan.monthly_payment_amount = dec!(0);
        assert!(matches!(
            loan.validate(),
            Err(DebitError::InvalidAmount { .. })
        ));

        loan.monthly_payment_amount = dec!(-10);
        assert!(loan.validate().is_err());
    }

    #[test]
    fn test_due_day_range() {
        let mut loan = test_loan();
        loan.payment_due_day = 0;
        assert_eq!(loan.validate(), Err(DebitError::InvalidDueDay { day: 0 }));

        loan.payment_due_day = 32;
        assert!(loan.validate().is_err());

        loan.payment_due_day = 31;
        assert!(loan.validate().is_ok());
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let loan: Loan = serde_json::from_str(
            r#"{
                "debit_start_date": "2023-01-02",
                "debit_day_of_week": "monday",
                "schedule_type": "monthly",
                "monthly_payment_amount": 1000,
                "payment_due_day": 2
            }"#,
        )
        .unwrap();

        assert_eq!(loan, test_loan());
    }

    #[test]
    fn test_deserialize_rejects_bad_fields() {
        // Unparseable date
        assert!(serde_json::from_str::<Loan>(
            r#"{
                "debit_start_date": "01/02/2023",
                "debit_day_of_week": "monday",
                "schedule_type": "monthly",
                "monthly_payment_amount": 1000,
                "payment_due_day": 2
            }"#,
        )
        .is_err());

        // Unknown weekday name
        assert!(serde_json::from_str::<Loan>(
            r#"{
                "debit_start_date": "2023-01-02",
                "debit_day_of_week": "funday",
                "schedule_type": "monthly",
                "monthly_payment_amount": 1000,
                "payment_due_day": 2
            }"#,
        )
        .is_err());

        // Unknown schedule type (no silent monthly fallback)
        assert!(serde_json::from_str::<Loan>(
            r#"{
                "debit_start_date": "2023-01-02",
                "debit_day_of_week": "monday",
                "schedule_type": "weekly",
                "monthly_payment_amount": 1000,
                "payment_due_day": 2
            }"#,
        )
        .is_err());

        // Missing field
        assert!(serde_json::from_str::<Loan>(
            r#"{
                "debit_start_date": "2023-01-02",
                "debit_day_of_week": "monday",
                "schedule_type": "monthly",
                "monthly_payment_amount": 1000
            }"#,
        )
        .is_err());
    }
}
