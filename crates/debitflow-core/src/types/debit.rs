//! Debit output record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Date;

/// A scheduled withdrawal: the next debit for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Debit {
    /// Date the debit will be drawn.
    pub date: Date,
    /// Amount to draw.
    pub amount: Decimal,
}
