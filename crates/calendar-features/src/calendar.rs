//! Calendar Arithmetic

use crate::error::{FeatureError, Result};
use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Add one calendar month, clamping to the end of a shorter month
/// (`2024-01-31` becomes `2024-02-29`).
pub fn add_one_month(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or(FeatureError::DateOutOfRange(date))
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Calendar quarter, 1 to 4
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Months elapsed since year 0, used to measure whole-month distances
pub fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32
}

/// Monday to Friday, no holiday awareness
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Reference token `YYYYMM` used in trend column names
pub fn year_month_token(date: NaiveDate) -> String {
    format!("{:04}{:02}", date.year(), date.month())
}
