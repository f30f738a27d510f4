//! Feature Generation Error Types

use chrono::NaiveDate;
use holiday_calendar::HolidayError;
use polars::prelude::{DataType, PolarsError};
use thiserror::Error;

/// Errors raised while deriving calendar features
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Date column missing from the input frame
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Date column holds something other than dates
    #[error("Column {column} has dtype {dtype}, expected Date or Datetime")]
    NotADateColumn { column: String, dtype: DataType },

    /// Month indicator outside 1..=12
    #[error("Invalid month {0}, expected 1..=12")]
    InvalidMonth(u32),

    /// Fourier periodicity must be finite and positive
    #[error("Invalid periodicity {0}, expected a finite value > 0")]
    InvalidPeriodicity(f64),

    /// Month arithmetic left the representable date range
    #[error("Date {0} is out of range for month arithmetic")]
    DateOutOfRange(NaiveDate),

    /// Holiday calendar lookup failed
    #[error("Holiday calendar error: {0}")]
    Holiday(#[from] HolidayError),

    /// Table library error
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Pipeline configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result alias for feature generation
pub type Result<T> = std::result::Result<T, FeatureError>;
