//! JSON scenario files: a projection request plus optional ledger context.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kakeibo_config::Config;
use kakeibo_core::{
    CatalogueService, Clock, ProjectionRequest, ScenarioService, TransactionCatalogue,
};
use kakeibo_domain::{Ledger, RecurringTransaction, WhatIfEvent};

use crate::errors::AppError;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<Decimal>,
    #[serde(default)]
    pub recurring: Vec<RecurringTransaction>,
    #[serde(default)]
    pub what_if: Vec<WhatIfEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<Ledger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_samples: Option<bool>,
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the scenario to disk atomically by staging to a temporary file.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let tmp = tmp_path(path);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Skeleton scenario over the configured default window, seeded with the
    /// sample what-if events.
    pub fn template(clock: &dyn Clock, config: &Config) -> Result<Self, AppError> {
        let (start, end) =
            ScenarioService::default_window(clock.today(), config.default_horizon_days)?;
        Ok(Self {
            start_date: Some(start),
            end_date: Some(end),
            initial_balance: Some(Decimal::ZERO),
            what_if: ScenarioService::sample_for(clock)?,
            ..Self::default()
        })
    }

    /// Resolves the scenario into a projection request.
    ///
    /// The starting balance is the explicit value, else the ledger's total in the
    /// configured currency, else zero. Recurring definitions are the explicit
    /// ones followed by the ledger catalogue's; sample events are appended to the
    /// what-if list when requested (or enabled in the config).
    pub fn into_request(
        self,
        clock: &dyn Clock,
        config: &Config,
    ) -> Result<ProjectionRequest, AppError> {
        let initial_balance = match (self.initial_balance, &self.ledger) {
            (Some(balance), _) => balance,
            (None, Some(ledger)) => {
                CatalogueService::total_balance(&ledger.accounts, Some(&config.currency))
            }
            (None, None) => Decimal::ZERO,
        };

        let mut recurring = self.recurring;
        if let Some(ledger) = &self.ledger {
            recurring.extend(ledger.recurring_definitions());
        }

        let mut what_if = self.what_if;
        if self.include_samples.unwrap_or(config.include_sample_events) {
            what_if.extend(ScenarioService::sample_for(clock)?);
        }

        debug!(
            recurring = recurring.len(),
            what_if = what_if.len(),
            "scenario resolved"
        );

        Ok(ProjectionRequest {
            start_date: self.start_date,
            end_date: self.end_date,
            initial_balance,
            recurring,
            what_if,
        })
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
