use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use kakeibo_domain::DefinitionError;

/// Reasons a projection request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("start date is required")]
    MissingStartDate,
    #[error("end date is required")]
    MissingEndDate,
    #[error("start date {start} must be earlier than end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("initial balance must be zero or greater (got {0})")]
    NegativeInitialBalance(Decimal),
    #[error("projected balance on {date} exceeds the supported range")]
    BalanceOverflow { date: NaiveDate },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error("Invalid definition: {0}")]
    Definition(#[from] DefinitionError),
    #[error("Validation failed: {0}")]
    Validation(String),
}
