//! Aggregates over a projected trajectory for dashboards and reports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use kakeibo_domain::DailyBalance;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrajectorySummary {
    pub opening: Decimal,
    pub closing: Decimal,
    pub highest: Decimal,
    pub highest_on: NaiveDate,
    pub lowest: Decimal,
    pub lowest_on: NaiveDate,
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    pub event_days: usize,
}

impl TrajectorySummary {
    pub fn net_change(&self) -> Decimal {
        self.total_credits - self.total_debits
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Summarizes a trajectory; `None` when it is empty. Ties on the highest or
    /// lowest balance resolve to the earliest day.
    pub fn summarize(trajectory: &[DailyBalance]) -> Option<TrajectorySummary> {
        let first = trajectory.first()?;
        let last = trajectory.last()?;
        let mut summary = TrajectorySummary {
            opening: first.balance,
            closing: last.balance,
            highest: first.balance,
            highest_on: first.date,
            lowest: first.balance,
            lowest_on: first.date,
            total_credits: Decimal::ZERO,
            total_debits: Decimal::ZERO,
            event_days: 0,
        };

        for day in trajectory {
            if day.balance > summary.highest {
                summary.highest = day.balance;
                summary.highest_on = day.date;
            }
            if day.balance < summary.lowest {
                summary.lowest = day.balance;
                summary.lowest_on = day.date;
            }
            summary.total_credits += day.credits();
            summary.total_debits += day.debits();
            if !day.events.is_empty() {
                summary.event_days += 1;
            }
        }

        Some(summary)
    }

    /// The first `limit` days that carry at least one event.
    pub fn highlights(trajectory: &[DailyBalance], limit: usize) -> Vec<&DailyBalance> {
        trajectory
            .iter()
            .filter(|day| !day.events.is_empty())
            .take(limit)
            .collect()
    }
}
