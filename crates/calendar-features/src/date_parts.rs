//! Date-Part Features
//!
//! Maps each row's date to named scalar features (year, quarter, month,
//! cyclical encodings, month indicators) driven by a [`FeatureDefinitions`]
//! table.

use crate::calendar::quarter;
use crate::column::{date_values, emit, FeatureColumn};
use crate::error::{FeatureError, Result};
use chrono::{Datelike, NaiveDate};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// A date-to-scalar transform
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePart {
    /// Calendar year
    Year,
    /// Calendar quarter, 1 to 4
    Quarter,
    /// Calendar month, 1 to 12
    Month,
    /// `cos(2π(quarter - 1) / 4)`
    QuarterCos,
    /// `sin(2π(quarter - 1) / 4)`
    QuarterSin,
    /// `cos(2π(month - 1) / 12)`
    MonthCos,
    /// `sin(2π(month - 1) / 12)`
    MonthSin,
    /// 1 when the date falls in the given month, else 0
    IsMonth(u32),
    /// Caller-supplied transform
    #[serde(skip)]
    Custom(fn(NaiveDate) -> f64),
}

impl DatePart {
    /// Whether the part produces integer values
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DatePart::Year | DatePart::Quarter | DatePart::Month | DatePart::IsMonth(_)
        )
    }

    /// Evaluate as an integer; `None` for float-valued parts
    pub fn eval_int(&self, date: NaiveDate) -> Option<i32> {
        match self {
            DatePart::Year => Some(date.year()),
            DatePart::Quarter => Some(quarter(date) as i32),
            DatePart::Month => Some(date.month() as i32),
            DatePart::IsMonth(month) => Some(i32::from(date.month() == *month)),
            _ => None,
        }
    }

    /// Evaluate as a float
    pub fn eval(&self, date: NaiveDate) -> f64 {
        match self {
            DatePart::QuarterCos => phase(quarter(date), 4).cos(),
            DatePart::QuarterSin => phase(quarter(date), 4).sin(),
            DatePart::MonthCos => phase(date.month(), 12).cos(),
            DatePart::MonthSin => phase(date.month(), 12).sin(),
            DatePart::Custom(f) => f(date),
            integer => integer.eval_int(date).map(f64::from).unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            DatePart::IsMonth(month) if !(1..=12).contains(month) => {
                Err(FeatureError::InvalidMonth(*month))
            }
            _ => Ok(()),
        }
    }
}

fn phase(index: u32, period: u32) -> f64 {
    2.0 * PI * f64::from(index - 1) / f64::from(period)
}

/// Insertion-ordered mapping from feature name to [`DatePart`].
///
/// Names are unique; inserting an existing name replaces its definition in
/// place and keeps its position.
#[derive(Debug, Clone, Default)]
pub struct FeatureDefinitions {
    entries: Vec<(String, DatePart)>,
}

impl FeatureDefinitions {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in monthly set: trend year/quarter/month, cyclical quarter and
    /// month encodings, and January/March/April/December indicators.
    pub fn monthly() -> Self {
        [
            ("trend_yr", DatePart::Year),
            ("trend_qtr", DatePart::Quarter),
            ("trend_mth", DatePart::Month),
            ("season_qtr_cos", DatePart::QuarterCos),
            ("season_qtr_sin", DatePart::QuarterSin),
            ("season_mth_cos", DatePart::MonthCos),
            ("season_mth_sin", DatePart::MonthSin),
            ("season_is_jan", DatePart::IsMonth(1)),
            ("season_is_mar", DatePart::IsMonth(3)),
            ("season_is_apr", DatePart::IsMonth(4)),
            ("season_is_dec", DatePart::IsMonth(12)),
        ]
        .into_iter()
        .collect()
    }

    /// Insert or replace a definition
    pub fn insert(&mut self, name: impl Into<String>, part: DatePart) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = part,
            None => self.entries.push((name, part)),
        }
        self
    }

    /// Remove a definition, returning it
    pub fn remove(&mut self, name: &str) -> Option<DatePart> {
        let index = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Look up a definition
    pub fn get(&self, name: &str) -> Option<&DatePart> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, part)| part)
    }

    /// Definitions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DatePart)> {
        self.entries.iter().map(|(name, part)| (name.as_str(), part))
    }

    /// Feature names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, DatePart)> for FeatureDefinitions {
    fn from_iter<I: IntoIterator<Item = (N, DatePart)>>(iter: I) -> Self {
        let mut definitions = Self::new();
        for (name, part) in iter {
            definitions.insert(name, part);
        }
        definitions
    }
}

/// One column per definition, evaluated over `dates`
pub fn date_part_columns(
    dates: &[Option<NaiveDate>],
    definitions: &FeatureDefinitions,
) -> Result<Vec<FeatureColumn>> {
    definitions
        .iter()
        .map(|(name, part)| {
            part.validate()?;
            let column = if part.is_integer() {
                FeatureColumn::int(
                    name,
                    dates.iter().map(|d| d.and_then(|d| part.eval_int(d))).collect(),
                )
            } else {
                FeatureColumn::float(name, dates.iter().map(|d| d.map(|d| part.eval(d))).collect())
            };
            Ok(column)
        })
        .collect()
}

/// Derive date-part features from `date_column`.
///
/// Returns the generated columns alone, or `df` with them appended when
/// `append` is set.
pub fn create_date_features(
    df: &DataFrame,
    date_column: &str,
    definitions: &FeatureDefinitions,
    append: bool,
) -> Result<DataFrame> {
    let dates = date_values(df, date_column)?;
    let columns = date_part_columns(&dates, definitions)?;
    debug!(
        "Generated {} date-part features over {} rows",
        columns.len(),
        dates.len()
    );
    emit(df, columns, append)
}
