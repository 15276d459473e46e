//! Inputs and outputs of the cash-flow projection.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{
    ensure_positive, DefinitionError, Direction, MAX_DAY_OF_MONTH, MIN_DAY_OF_MONTH,
};

/// Description used for recurring events whose definition has none.
pub const DEFAULT_RECURRING_DESCRIPTION: &str = "Recurring transaction";
/// Description used for what-if events whose definition has none.
pub const DEFAULT_WHAT_IF_DESCRIPTION: &str = "What-if event";

/// A transaction that fires on the same calendar day of every month.
///
/// Construction goes through [`RecurringTransaction::new`] (or a checked
/// deserialization) so `amount > 0` and `1 <= day_of_month <= 31` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecurringTransactionRecord")]
pub struct RecurringTransaction {
    id: String,
    amount: Decimal,
    direction: Direction,
    day_of_month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl RecurringTransaction {
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        direction: Direction,
        day_of_month: u32,
        description: Option<String>,
    ) -> Result<Self, DefinitionError> {
        let id = id.into();
        ensure_positive(&id, amount)?;
        if !(MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(&day_of_month) {
            return Err(DefinitionError::DayOutOfRange {
                id,
                day: day_of_month,
            });
        }
        Ok(Self {
            id,
            amount,
            direction,
            day_of_month,
            description: non_blank(description),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True when the definition fires on `date`. Months without the target day
    /// (e.g. the 31st in April) never match; there is no end-of-month rollover.
    pub fn fires_on(&self, date: NaiveDate) -> bool {
        date.day() == self.day_of_month
    }
}

#[derive(Deserialize)]
struct RecurringTransactionRecord {
    id: String,
    amount: Decimal,
    direction: Direction,
    day_of_month: u32,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RecurringTransactionRecord> for RecurringTransaction {
    type Error = DefinitionError;

    fn try_from(record: RecurringTransactionRecord) -> Result<Self, Self::Error> {
        RecurringTransaction::new(
            record.id,
            record.amount,
            record.direction,
            record.day_of_month,
            record.description,
        )
    }
}

/// A one-off hypothetical movement on an absolute date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WhatIfEventRecord")]
pub struct WhatIfEvent {
    id: String,
    date: NaiveDate,
    amount: Decimal,
    direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl WhatIfEvent {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: Decimal,
        direction: Direction,
        description: Option<String>,
    ) -> Result<Self, DefinitionError> {
        let id = id.into();
        ensure_positive(&id, amount)?;
        Ok(Self {
            id,
            date,
            amount,
            direction,
            description: non_blank(description),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Matches on year, month and day of month.
    pub fn fires_on(&self, date: NaiveDate) -> bool {
        self.date.year() == date.year()
            && self.date.month() == date.month()
            && self.date.day() == date.day()
    }
}

#[derive(Deserialize)]
struct WhatIfEventRecord {
    id: String,
    date: NaiveDate,
    amount: Decimal,
    direction: Direction,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<WhatIfEventRecord> for WhatIfEvent {
    type Error = DefinitionError;

    fn try_from(record: WhatIfEventRecord) -> Result<Self, Self::Error> {
        WhatIfEvent::new(
            record.id,
            record.date,
            record.amount,
            record.direction,
            record.description,
        )
    }
}

/// Blank descriptions count as absent so events fall back to the defaults.
fn non_blank(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.trim().is_empty())
}

/// Which input list an applied event came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    Recurring,
    WhatIf,
}

/// An event applied to the balance on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvent {
    pub source: EventSource,
    pub description: String,
    pub amount: Decimal,
    pub direction: Direction,
}

impl DayEvent {
    pub fn signed_amount(&self) -> Decimal {
        self.direction.signed(self.amount)
    }
}

impl From<&RecurringTransaction> for DayEvent {
    fn from(definition: &RecurringTransaction) -> Self {
        Self {
            source: EventSource::Recurring,
            description: definition
                .description()
                .unwrap_or(DEFAULT_RECURRING_DESCRIPTION)
                .to_string(),
            amount: definition.amount(),
            direction: definition.direction(),
        }
    }
}

impl From<&WhatIfEvent> for DayEvent {
    fn from(event: &WhatIfEvent) -> Self {
        Self {
            source: EventSource::WhatIf,
            description: event
                .description()
                .unwrap_or(DEFAULT_WHAT_IF_DESCRIPTION)
                .to_string(),
            amount: event.amount(),
            direction: event.direction(),
        }
    }
}

/// End-of-day balance with the events that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: Decimal,
    pub events: Vec<DayEvent>,
}

impl DailyBalance {
    /// Sum of credits applied on this day.
    pub fn credits(&self) -> Decimal {
        self.sum_for(Direction::Credit)
    }

    /// Sum of debits applied on this day.
    pub fn debits(&self) -> Decimal {
        self.sum_for(Direction::Debit)
    }

    /// Net movement applied on this day.
    pub fn net_change(&self) -> Decimal {
        self.events.iter().map(DayEvent::signed_amount).sum()
    }

    fn sum_for(&self, direction: Direction) -> Decimal {
        self.events
            .iter()
            .filter(|event| event.direction == direction)
            .map(|event| event.amount)
            .sum()
    }
}
