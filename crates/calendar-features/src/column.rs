//! Generated Columns and DataFrame Plumbing
//!
//! Generators compute [`FeatureColumn`]s from plain dates; this module moves
//! them in and out of a polars [`DataFrame`] with append-or-return semantics.

use crate::error::{FeatureError, Result};
use chrono::NaiveDate;
use polars::prelude::*;

/// Days between 0001-01-01 and the Unix epoch
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Typed values of a generated column, row-aligned with the input
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValues {
    Int(Vec<Option<i32>>),
    Float(Vec<Option<f64>>),
}

/// A named, generated column
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub values: FeatureValues,
}

impl FeatureColumn {
    /// Integer-valued column
    pub fn int(name: impl Into<String>, values: Vec<Option<i32>>) -> Self {
        Self {
            name: name.into(),
            values: FeatureValues::Int(values),
        }
    }

    /// Float-valued column
    pub fn float(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values: FeatureValues::Float(values),
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        match &self.values {
            FeatureValues::Int(values) => values.len(),
            FeatureValues::Float(values) => values.len(),
        }
    }

    /// True when the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `row` widened to `f64`
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match &self.values {
            FeatureValues::Int(values) => values.get(row).copied().flatten().map(f64::from),
            FeatureValues::Float(values) => values.get(row).copied().flatten(),
        }
    }

    /// Convert into a polars column
    pub fn into_column(self) -> Column {
        let name = PlSmallStr::from_string(self.name);
        match self.values {
            FeatureValues::Int(values) => Series::new(name, values).into(),
            FeatureValues::Float(values) => Series::new(name, values).into(),
        }
    }
}

/// Read `date_column` as calendar dates.
///
/// `Date` columns are read directly; `Datetime` columns are truncated to
/// their date. Nulls stay nulls.
pub fn date_values(df: &DataFrame, date_column: &str) -> Result<Vec<Option<NaiveDate>>> {
    let column = df
        .column(date_column)
        .map_err(|_| FeatureError::ColumnNotFound(date_column.to_string()))?;
    let series = column.as_materialized_series();

    let dates = match series.dtype() {
        DataType::Date => series.clone(),
        DataType::Datetime(_, _) => series.cast(&DataType::Date)?,
        other => {
            return Err(FeatureError::NotADateColumn {
                column: date_column.to_string(),
                dtype: other.clone(),
            })
        }
    };

    let days = dates.cast(&DataType::Int32)?;
    Ok(days
        .i32()?
        .into_iter()
        .map(|day| day.and_then(date_from_epoch_days))
        .collect())
}

/// Return the generated columns alone, or appended to the right of `df`.
///
/// Row order is never changed. With `append = false` and no generated
/// columns the result has no columns but keeps the height of `df`.
pub fn emit(df: &DataFrame, features: Vec<FeatureColumn>, append: bool) -> Result<DataFrame> {
    let columns: Vec<Column> = features
        .into_iter()
        .map(FeatureColumn::into_column)
        .collect();

    if append {
        Ok(df.hstack(&columns)?)
    } else if columns.is_empty() {
        Ok(DataFrame::full_null(&Schema::default(), df.height()))
    } else {
        Ok(DataFrame::new(columns)?)
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}
