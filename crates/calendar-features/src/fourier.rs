//! Fourier Seasonality Terms
//!
//! Cosine/sine pairs at harmonics `1..=n` of a periodicity, driven by row
//! position. Rows are assumed evenly spaced at the periodicity's unit.

use crate::column::{emit, FeatureColumn};
use crate::error::{FeatureError, Result};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Options for [`create_fourier_terms`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierOptions {
    /// Rows per full cycle, e.g. 12 for yearly seasonality on monthly rows
    pub periodicity: f64,
    /// Number of harmonics
    pub n_components: usize,
}

impl Default for FourierOptions {
    fn default() -> Self {
        Self {
            periodicity: 12.0,
            n_components: 1,
        }
    }
}

impl FourierOptions {
    fn validate(&self) -> Result<()> {
        if self.periodicity.is_finite() && self.periodicity > 0.0 {
            Ok(())
        } else {
            Err(FeatureError::InvalidPeriodicity(self.periodicity))
        }
    }
}

/// `season_fourier_cos_{n}` and `season_fourier_sin_{n}` for `n = 1..=N`
pub fn fourier_columns(n_rows: usize, options: &FourierOptions) -> Result<Vec<FeatureColumn>> {
    options.validate()?;
    if options.n_components == 0 {
        warn!("Fourier order is 0, no seasonality columns generated");
    }

    let columns = (1..=options.n_components)
        .flat_map(|n| {
            let angles: Vec<f64> = (0..n_rows)
                .map(|i| 2.0 * PI * n as f64 * i as f64 / options.periodicity)
                .collect();
            [
                FeatureColumn::float(
                    format!("season_fourier_cos_{n}"),
                    angles.iter().map(|a| Some(a.cos())).collect(),
                ),
                FeatureColumn::float(
                    format!("season_fourier_sin_{n}"),
                    angles.iter().map(|a| Some(a.sin())).collect(),
                ),
            ]
        })
        .collect();
    Ok(columns)
}

/// Append (or return) Fourier seasonality terms for every row of `df`
pub fn create_fourier_terms(df: &DataFrame, options: &FourierOptions, append: bool) -> Result<DataFrame> {
    let columns = fourier_columns(df.height(), options)?;
    debug!(
        "Generated {} Fourier columns (period {}) over {} rows",
        columns.len(),
        options.periodicity,
        df.height()
    );
    emit(df, columns, append)
}
