use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use thiserror::Error;

/// Rows rendered per listing; the true match count is always reported alongside.
pub const MAX_RESULTS: usize = 100;

pub const DATASET_FILE_NAME: &str = "existencias.csv";

pub const DOWN_PAYMENT_PRESETS: [f64; 4] = [15.0, 20.0, 25.0, 30.0];
pub const ANNUAL_RATE_PRESETS: [f64; 3] = [33.0, 36.0, 39.0];
pub const TERM_MONTH_PRESETS: [u32; 8] = [3, 6, 12, 18, 24, 30, 36, 48];

pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 36.0;
pub const DEFAULT_TERM_MONTHS: u32 = 24;

/// User-adjustable loan parameters applied to a product price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaParams {
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl Default for QuotaParams {
    fn default() -> Self {
        Self {
            down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            term_months: DEFAULT_TERM_MONTHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    #[error("down payment {0}% is not offered; choose one of {1:?}")]
    DownPayment(f64, &'static [f64]),
    #[error("annual rate {0}% is not offered; choose one of {1:?}")]
    AnnualRate(f64, &'static [f64]),
    #[error("term of {0} months is not offered; choose one of {1:?}")]
    TermMonths(u32, &'static [u32]),
}

impl QuotaParams {
    /// Checks the parameters against the offered presets.
    pub fn validate_presets(&self) -> Result<(), PresetError> {
        if !DOWN_PAYMENT_PRESETS.contains(&self.down_payment_percent) {
            return Err(PresetError::DownPayment(
                self.down_payment_percent,
                &DOWN_PAYMENT_PRESETS,
            ));
        }
        if !ANNUAL_RATE_PRESETS.contains(&self.annual_rate_percent) {
            return Err(PresetError::AnnualRate(
                self.annual_rate_percent,
                &ANNUAL_RATE_PRESETS,
            ));
        }
        if !TERM_MONTH_PRESETS.contains(&self.term_months) {
            return Err(PresetError::TermMonths(self.term_months, &TERM_MONTH_PRESETS));
        }
        Ok(())
    }
}

pub fn default_dataset_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "inventory", "inventory-explorer")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join(DATASET_FILE_NAME))
}
