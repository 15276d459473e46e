//! Shared enums and validation errors for projection primitives.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lowest calendar day a recurring definition may target.
pub const MIN_DAY_OF_MONTH: u32 = 1;
/// Highest calendar day a recurring definition may target.
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Whether a movement adds to or removes from the running balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Returns the balance delta produced by moving `amount` in this direction.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Direction::Credit => amount,
            Direction::Debit => -amount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised when a recurring or what-if definition breaks its invariants.
pub enum DefinitionError {
    NonPositiveAmount { id: String, amount: Decimal },
    DayOutOfRange { id: String, day: u32 },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::NonPositiveAmount { id, amount } => {
                write!(f, "definition `{}` must have a positive amount (got {})", id, amount)
            }
            DefinitionError::DayOutOfRange { id, day } => write!(
                f,
                "definition `{}` targets day {} (expected {}-{})",
                id, day, MIN_DAY_OF_MONTH, MAX_DAY_OF_MONTH
            ),
        }
    }
}

impl std::error::Error for DefinitionError {}

pub(crate) fn ensure_positive(id: &str, amount: Decimal) -> Result<(), DefinitionError> {
    if amount <= Decimal::ZERO {
        return Err(DefinitionError::NonPositiveAmount {
            id: id.to_string(),
            amount,
        });
    }
    Ok(())
}
