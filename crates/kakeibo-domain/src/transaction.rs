//! Persisted transaction records the recurring catalogue is derived from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Direction;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Income raises the balance, expenses lower it.
    pub fn direction(self) -> Direction {
        match self {
            TransactionKind::Income => Direction::Credit,
            TransactionKind::Expense => Direction::Debit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_day: Option<u32>,
}

impl Transaction {
    pub fn new(account_id: Uuid, kind: TransactionKind, date: NaiveDate, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            category_id: None,
            kind,
            date,
            amount,
            description: None,
            is_recurring: false,
            recurring_day: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the transaction as repeating every month on `day`.
    pub fn recurring_on(mut self, day: u32) -> Self {
        self.is_recurring = true;
        self.recurring_day = Some(day);
        self
    }
}
