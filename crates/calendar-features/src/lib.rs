//! Calendar Feature Engine
//!
//! Derives calendar predictor columns for time-series regression from a
//! DataFrame's date column:
//! - Date parts (year, quarter, month, cyclical encodings, month flags)
//! - Business-day and public-holiday counts over a one-month window
//! - Trend ramps and change points at reference dates
//! - Fourier seasonality terms
//!
//! Every generator preserves row count and order, and either returns the
//! generated columns alone or appends them to the input frame.

mod business_days;
mod calendar;
mod column;
mod date_parts;
mod error;
mod fourier;
mod holidays;
mod pipeline;
mod trend;

pub use business_days::{
    business_day_columns, business_days_in_month_window, count_business_days, BusinessDayOptions,
};
pub use calendar::{add_one_month, days_in_month, quarter, year_month_token};
pub use column::{date_values, emit, FeatureColumn, FeatureValues};
pub use date_parts::{create_date_features, date_part_columns, DatePart, FeatureDefinitions};
pub use error::{FeatureError, Result};
pub use fourier::{create_fourier_terms, fourier_columns, FourierOptions};
pub use holidays::{
    count_bank_holidays, holiday_columns, holidays_in_month_window, HolidayCountOptions,
    WindowBounds,
};
pub use pipeline::{DatePartSpec, FeaturePipeline, FeatureStep, PipelineConfig, ENV_PREFIX};
pub use trend::{
    change_point, change_point_columns, change_point_name, create_change_points,
    create_trend_ramps, months_since, ramp_name, trend_ramp_columns, CHANGE_POINT_PREFIX,
    RAMP_PREFIX,
};

pub use holiday_calendar::{HolidayCalendars, HolidayProvider, Region};
