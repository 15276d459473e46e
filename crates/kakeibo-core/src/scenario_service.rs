//! Ready-made what-if scenarios and default projection windows.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use kakeibo_domain::{Direction, WhatIfEvent};

use crate::{Clock, CoreError};

const SAMPLE_BONUS_OFFSET_DAYS: u64 = 7;
const SAMPLE_TRAVEL_OFFSET_DAYS: u64 = 15;

pub struct ScenarioService;

impl ScenarioService {
    /// Two illustrative events relative to `today`: a bonus a week out and a
    /// trip a little over two weeks out.
    pub fn sample_what_if_events(today: NaiveDate) -> Result<Vec<WhatIfEvent>, CoreError> {
        let bonus = WhatIfEvent::new(
            "sample-1",
            days_after(today, SAMPLE_BONUS_OFFSET_DAYS)?,
            Decimal::from(50_000),
            Direction::Credit,
            Some("Bonus".into()),
        )?;
        let travel = WhatIfEvent::new(
            "sample-2",
            days_after(today, SAMPLE_TRAVEL_OFFSET_DAYS)?,
            Decimal::from(15_000),
            Direction::Debit,
            Some("Travel expenses".into()),
        )?;
        Ok(vec![bonus, travel])
    }

    /// Sample events anchored on the clock's current day.
    pub fn sample_for(clock: &dyn Clock) -> Result<Vec<WhatIfEvent>, CoreError> {
        Self::sample_what_if_events(clock.today())
    }

    /// Returns `(today, today + horizon_days)`.
    pub fn default_window(
        today: NaiveDate,
        horizon_days: u32,
    ) -> Result<(NaiveDate, NaiveDate), CoreError> {
        if horizon_days == 0 {
            return Err(CoreError::Validation(
                "projection horizon must be at least one day".into(),
            ));
        }
        Ok((today, days_after(today, u64::from(horizon_days))?))
    }
}

fn days_after(today: NaiveDate, days: u64) -> Result<NaiveDate, CoreError> {
    today.checked_add_days(Days::new(days)).ok_or_else(|| {
        CoreError::Validation(format!("{today} plus {days} days is outside the calendar"))
    })
}
