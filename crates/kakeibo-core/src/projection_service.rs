//! Day-by-day cash-flow projection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use kakeibo_domain::{DailyBalance, DayEvent, RecurringTransaction, WhatIfEvent};

use crate::{BalanceSource, ProjectionError, TransactionCatalogue};

/// Everything a projection run consumes, passed explicitly by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub initial_balance: Decimal,
    #[serde(default)]
    pub recurring: Vec<RecurringTransaction>,
    #[serde(default)]
    pub what_if: Vec<WhatIfEvent>,
}

impl ProjectionRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, initial_balance: Decimal) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            initial_balance,
            recurring: Vec::new(),
            what_if: Vec::new(),
        }
    }

    /// Builds a request whose recurring definitions and starting balance come
    /// from external collaborators.
    pub fn from_sources<C, B>(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        catalogue: &C,
        balance: &B,
    ) -> Self
    where
        C: TransactionCatalogue + ?Sized,
        B: BalanceSource + ?Sized,
    {
        Self {
            start_date,
            end_date,
            initial_balance: balance.initial_balance(),
            recurring: catalogue.recurring_definitions(),
            what_if: Vec::new(),
        }
    }

    pub fn with_recurring(mut self, recurring: Vec<RecurringTransaction>) -> Self {
        self.recurring = recurring;
        self
    }

    pub fn with_what_if(mut self, what_if: Vec<WhatIfEvent>) -> Self {
        self.what_if = what_if;
        self
    }
}

/// Result envelope handed to presentation layers: `{success, data}` or `{success, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DailyBalance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SimulationOutcome {
    pub fn succeeded(data: Vec<DailyBalance>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl From<Result<Vec<DailyBalance>, ProjectionError>> for SimulationOutcome {
    fn from(result: Result<Vec<DailyBalance>, ProjectionError>) -> Self {
        match result {
            Ok(data) => SimulationOutcome::succeeded(data),
            Err(err) => SimulationOutcome::failed(err.to_string()),
        }
    }
}

pub struct ProjectionService;

impl ProjectionService {
    /// Projects the request into one [`DailyBalance`] per day of its range.
    pub fn project(request: &ProjectionRequest) -> Result<Vec<DailyBalance>, ProjectionError> {
        project(
            request.start_date,
            request.end_date,
            request.initial_balance,
            &request.recurring,
            &request.what_if,
        )
    }

    /// Same as [`ProjectionService::project`], wrapped in the outcome envelope.
    pub fn run(request: &ProjectionRequest) -> SimulationOutcome {
        Self::project(request).into()
    }
}

/// Simulates every calendar day from `start_date` to `end_date` inclusive.
///
/// On each day the matching recurring definitions are applied first, then the
/// matching what-if events, each group in input order. Days without events
/// still produce a record carrying the previous balance forward.
pub fn project(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    initial_balance: Decimal,
    recurring: &[RecurringTransaction],
    what_if: &[WhatIfEvent],
) -> Result<Vec<DailyBalance>, ProjectionError> {
    let (start, end) = validate(start_date, end_date, initial_balance).map_err(|err| {
        warn!(error = %err, "projection request rejected");
        err
    })?;

    let mut balance = initial_balance;
    let trajectory = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let events = events_on(date, recurring, what_if);
            balance = apply_events(balance, &events).ok_or_else(|| {
                let err = ProjectionError::BalanceOverflow { date };
                warn!(error = %err, "projection aborted");
                err
            })?;
            Ok(DailyBalance {
                date,
                balance,
                events,
            })
        })
        .collect::<Result<Vec<_>, ProjectionError>>()?;

    debug!(
        days = trajectory.len(),
        recurring = recurring.len(),
        what_if = what_if.len(),
        "projection completed"
    );
    Ok(trajectory)
}

fn validate(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    initial_balance: Decimal,
) -> Result<(NaiveDate, NaiveDate), ProjectionError> {
    let start = start_date.ok_or(ProjectionError::MissingStartDate)?;
    let end = end_date.ok_or(ProjectionError::MissingEndDate)?;
    if start >= end {
        return Err(ProjectionError::InvalidRange { start, end });
    }
    if initial_balance < Decimal::ZERO {
        return Err(ProjectionError::NegativeInitialBalance(initial_balance));
    }
    Ok((start, end))
}

/// `None` when the running balance leaves the representable range.
fn apply_events(balance: Decimal, events: &[DayEvent]) -> Option<Decimal> {
    events
        .iter()
        .try_fold(balance, |running, event| running.checked_add(event.signed_amount()))
}

fn events_on(
    date: NaiveDate,
    recurring: &[RecurringTransaction],
    what_if: &[WhatIfEvent],
) -> Vec<DayEvent> {
    recurring
        .iter()
        .filter(|definition| definition.fires_on(date))
        .map(DayEvent::from)
        .chain(
            what_if
                .iter()
                .filter(|event| event.fires_on(date))
                .map(DayEvent::from),
        )
        .collect()
}
