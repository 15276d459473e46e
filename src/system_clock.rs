use std::env;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use kakeibo_core::{Clock, FixedClock};

/// Pins "today" for reproducible runs, formatted `YYYY-MM-DD`.
pub const TODAY_ENV: &str = "KAKEIBO_TODAY";

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Returns a [`FixedClock`] when `KAKEIBO_TODAY` holds a valid date, the system clock otherwise.
pub fn clock_from_env() -> Box<dyn Clock> {
    match env::var(TODAY_ENV) {
        Ok(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(today) => Box::new(FixedClock::new(today)),
            Err(err) => {
                warn!(value = %raw, error = %err, "ignoring unparsable {}", TODAY_ENV);
                Box::new(SystemClock)
            }
        },
        Err(_) => Box::new(SystemClock),
    }
}
