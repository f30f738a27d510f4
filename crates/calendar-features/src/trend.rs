//! Trend Ramps and Change Points
//!
//! Structural-break features keyed on caller-supplied reference dates. Each
//! reference date yields one column named after its `YYYYMM` token.

use crate::calendar::{month_index, year_month_token};
use crate::column::{date_values, emit, FeatureColumn};
use crate::error::Result;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use tracing::{debug, warn};

/// Prefix of ramp column names
pub const RAMP_PREFIX: &str = "trend_relu_";
/// Prefix of change-point column names
pub const CHANGE_POINT_PREFIX: &str = "trend_change_";

/// Whole months `date` is at or past the month of `reference`, floored at 0
pub fn months_since(date: NaiveDate, reference: NaiveDate) -> i32 {
    (month_index(date) - month_index(reference)).max(0)
}

/// 1 once `date` has reached `reference` (full date comparison), else 0
pub fn change_point(date: NaiveDate, reference: NaiveDate) -> i32 {
    i32::from(date >= reference)
}

/// Ramp column name for a reference date, e.g. `trend_relu_202403`
pub fn ramp_name(reference: NaiveDate) -> String {
    format!("{RAMP_PREFIX}{}", year_month_token(reference))
}

/// Change-point column name for a reference date, e.g. `trend_change_202403`
pub fn change_point_name(reference: NaiveDate) -> String {
    format!("{CHANGE_POINT_PREFIX}{}", year_month_token(reference))
}

/// One ramp column per reference date, in reference order
pub fn trend_ramp_columns(dates: &[Option<NaiveDate>], references: &[NaiveDate]) -> Vec<FeatureColumn> {
    keyed_columns(dates, references, ramp_name, months_since)
}

/// One change-point column per reference date, in reference order
pub fn change_point_columns(dates: &[Option<NaiveDate>], references: &[NaiveDate]) -> Vec<FeatureColumn> {
    keyed_columns(dates, references, change_point_name, change_point)
}

fn keyed_columns(
    dates: &[Option<NaiveDate>],
    references: &[NaiveDate],
    name: fn(NaiveDate) -> String,
    value: fn(NaiveDate, NaiveDate) -> i32,
) -> Vec<FeatureColumn> {
    if references.is_empty() {
        warn!("No reference dates supplied, no trend columns generated");
    }
    references
        .iter()
        .map(|&reference| {
            FeatureColumn::int(
                name(reference),
                dates.iter().map(|d| d.map(|d| value(d, reference))).collect(),
            )
        })
        .collect()
}

/// Append (or return) one ramp column per reference date
pub fn create_trend_ramps(
    df: &DataFrame,
    date_column: &str,
    references: &[NaiveDate],
    append: bool,
) -> Result<DataFrame> {
    let dates = date_values(df, date_column)?;
    let columns = trend_ramp_columns(&dates, references);
    debug!("Generated {} ramp columns over {} rows", columns.len(), dates.len());
    emit(df, columns, append)
}

/// Append (or return) one change-point column per reference date
pub fn create_change_points(
    df: &DataFrame,
    date_column: &str,
    references: &[NaiveDate],
    append: bool,
) -> Result<DataFrame> {
    let dates = date_values(df, date_column)?;
    let columns = change_point_columns(&dates, references);
    debug!("Generated {} change-point columns over {} rows", columns.len(), dates.len());
    emit(df, columns, append)
}
