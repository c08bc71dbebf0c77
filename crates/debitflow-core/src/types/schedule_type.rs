//! Schedule cadence type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DebitError;

/// Cadence governing how often a loan is debited.
///
/// Unrecognized values are an input error; there is no implicit
/// monthly fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    /// One debit per month.
    Monthly,
    /// One debit on every second occurrence of the debit weekday.
    Biweekly,
}

impl ScheduleType {
    /// Resolves a lowercase schedule type name.
    ///
    /// Returns `None` for anything other than `"monthly"` or `"biweekly"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "monthly" => Some(ScheduleType::Monthly),
            "biweekly" => Some(ScheduleType::Biweekly),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ScheduleType::Monthly => "monthly",
            ScheduleType::Biweekly => "biweekly",
        }
    }
}

impl FromStr for ScheduleType {
    type Err = DebitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DebitError::unknown_schedule_type(s))
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
