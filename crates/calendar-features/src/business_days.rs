//! Business-Day Counts
//!
//! Counts Monday to Friday days in the half-open window
//! `[date, date + 1 month)`.

use crate::calendar::{add_one_month, days_in_month, is_business_day};
use crate::column::{date_values, emit, FeatureColumn};
use crate::error::Result;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for [`count_business_days`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDayOptions {
    /// Output column name
    pub name: String,
    /// Also emit `{name}_prop` = count / days in the row's month
    pub proportion: bool,
}

impl Default for BusinessDayOptions {
    fn default() -> Self {
        Self {
            name: "holiday_business_day_count".to_string(),
            proportion: false,
        }
    }
}

/// Weekdays in `[date, date + 1 month)`
pub fn business_days_in_month_window(date: NaiveDate) -> Result<u32> {
    let end = add_one_month(date)?;
    Ok(date
        .iter_days()
        .take_while(|day| *day < end)
        .filter(|day| is_business_day(*day))
        .count() as u32)
}

/// Count column, plus the proportion column when requested
pub fn business_day_columns(
    dates: &[Option<NaiveDate>],
    options: &BusinessDayOptions,
) -> Result<Vec<FeatureColumn>> {
    let counts = dates
        .iter()
        .map(|date| date.map(business_days_in_month_window).transpose())
        .collect::<Result<Vec<Option<u32>>>>()?;

    Ok(count_columns(&options.name, dates, &counts, options.proportion))
}

/// Count column and optional `_prop` column shared by the day counters
pub(crate) fn count_columns(
    name: &str,
    dates: &[Option<NaiveDate>],
    counts: &[Option<u32>],
    proportion: bool,
) -> Vec<FeatureColumn> {
    let mut columns = vec![FeatureColumn::int(
        name,
        counts.iter().map(|c| c.map(|c| c as i32)).collect(),
    )];

    if proportion {
        let props = dates
            .iter()
            .zip(counts)
            .map(|(date, count)| match (date, count) {
                (Some(date), Some(count)) => Some(f64::from(*count) / f64::from(days_in_month(*date))),
                _ => None,
            })
            .collect();
        columns.push(FeatureColumn::float(format!("{name}_prop"), props));
    }

    columns
}

/// Count business days in the month starting at each row's date
pub fn count_business_days(
    df: &DataFrame,
    date_column: &str,
    options: &BusinessDayOptions,
    append: bool,
) -> Result<DataFrame> {
    let dates = date_values(df, date_column)?;
    let columns = business_day_columns(&dates, options)?;
    debug!("Counted business days for {} rows into {}", dates.len(), options.name);
    emit(df, columns, append)
}
