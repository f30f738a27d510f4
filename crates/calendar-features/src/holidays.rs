//! Public-Holiday Counts
//!
//! Counts the public holidays of a region in the one-month window starting
//! at each row's date.

use crate::business_days::count_columns;
use crate::calendar::add_one_month;
use crate::column::{date_values, emit, FeatureColumn};
use crate::error::Result;
use chrono::NaiveDate;
use holiday_calendar::{HolidayProvider, DEFAULT_REGION};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// End bound of the one-month holiday window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBounds {
    /// `[date, date + 1 month]`, one day wider than the business-day window
    #[default]
    Inclusive,
    /// `[date, date + 1 month)`, same as the business-day window
    HalfOpen,
}

/// Options for [`count_bank_holidays`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayCountOptions {
    /// Output column name
    pub name: String,
    /// ISO 3166 region code understood by the holiday provider
    pub region: String,
    /// Also emit `{name}_prop` = count / days in the row's month
    pub proportion: bool,
    /// Whether the window end date is counted
    pub window: WindowBounds,
}

impl Default for HolidayCountOptions {
    fn default() -> Self {
        Self {
            name: "holiday_bank_count".to_string(),
            region: DEFAULT_REGION.to_string(),
            proportion: false,
            window: WindowBounds::Inclusive,
        }
    }
}

/// Holidays of `region` in the month window starting at `date`
pub fn holidays_in_month_window<P: HolidayProvider + ?Sized>(
    provider: &P,
    region: &str,
    date: NaiveDate,
    window: WindowBounds,
) -> Result<u32> {
    let end = add_one_month(date)?;
    let mut count = 0;
    for day in date.iter_days() {
        let in_window = match window {
            WindowBounds::Inclusive => day <= end,
            WindowBounds::HalfOpen => day < end,
        };
        if !in_window {
            break;
        }
        if provider.is_holiday(region, day)? {
            count += 1;
        }
    }
    Ok(count)
}

/// Count column, plus the proportion column when requested
pub fn holiday_columns<P: HolidayProvider + ?Sized>(
    dates: &[Option<NaiveDate>],
    provider: &P,
    options: &HolidayCountOptions,
) -> Result<Vec<FeatureColumn>> {
    provider.check_region(&options.region)?;
    let counts = dates
        .iter()
        .map(|date| {
            date.map(|date| holidays_in_month_window(provider, &options.region, date, options.window))
                .transpose()
        })
        .collect::<Result<Vec<Option<u32>>>>()?;

    Ok(count_columns(&options.name, dates, &counts, options.proportion))
}

/// Count public holidays in the month starting at each row's date
pub fn count_bank_holidays<P: HolidayProvider + ?Sized>(
    df: &DataFrame,
    date_column: &str,
    provider: &P,
    options: &HolidayCountOptions,
    append: bool,
) -> Result<DataFrame> {
    let dates = date_values(df, date_column)?;
    let columns = holiday_columns(&dates, provider, options)?;
    debug!(
        "Counted {} holidays for {} rows into {} ({:?} window)",
        options.region,
        dates.len(),
        options.name,
        options.window
    );
    emit(df, columns, append)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureError;
    use holiday_calendar::{HolidayCalendars, HolidayError};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Every first day of a month is a holiday
    struct FirstOfMonth;

    impl HolidayProvider for FirstOfMonth {
        fn is_holiday(&self, _region: &str, date: NaiveDate) -> holiday_calendar::Result<bool> {
            Ok(chrono::Datelike::day(&date) == 1)
        }
    }

    #[test]
    fn test_christmas_window_spans_new_year() {
        let calendars = HolidayCalendars::new();
        let count =
            holidays_in_month_window(&calendars, "GB", ymd(2024, 12, 25), WindowBounds::Inclusive).unwrap();
        // 25 Dec, 26 Dec, 1 Jan
        assert_eq!(count, 3);
    }

    #[test]
    fn test_inclusive_window_counts_end_date() {
        let start = ymd(2024, 3, 1);
        assert_eq!(
            holidays_in_month_window(&FirstOfMonth, "any", start, WindowBounds::Inclusive).unwrap(),
            2
        );
        assert_eq!(
            holidays_in_month_window(&FirstOfMonth, "any", start, WindowBounds::HalfOpen).unwrap(),
            1
        );
    }

    #[test]
    fn test_unsupported_region() {
        let calendars = HolidayCalendars::new();
        let options = HolidayCountOptions {
            region: "ZZ".to_string(),
            ..Default::default()
        };
        let err = holiday_columns(&[Some(ymd(2024, 1, 1))], &calendars, &options).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Holiday(HolidayError::UnsupportedRegion(code)) if code == "ZZ"
        ));
    }

    #[test]
    fn test_unsupported_region_without_dates() {
        let calendars = HolidayCalendars::new();
        let options = HolidayCountOptions {
            region: "ZZ".to_string(),
            ..Default::default()
        };
        for dates in [&[][..], &[None, None][..]] {
            let err = holiday_columns(dates, &calendars, &options).unwrap_err();
            assert!(matches!(err, FeatureError::Holiday(HolidayError::UnsupportedRegion(_))));
        }

        // Providers without a region check accept any code
        assert!(holiday_columns(&[None], &FirstOfMonth, &options).is_ok());
    }

    #[test]
    fn test_proportion_and_nulls() {
        let options = HolidayCountOptions {
            proportion: true,
            ..Default::default()
        };
        // [1 Dec, 1 Jan] holds Christmas, Boxing Day and New Year's Day
        let columns =
            holiday_columns(&[Some(ymd(2024, 12, 1)), None], &HolidayCalendars::new(), &options).unwrap();

        assert_eq!(columns[0], FeatureColumn::int("holiday_bank_count", vec![Some(3), None]));
        assert_eq!(columns[1].name, "holiday_bank_count_prop");
        assert!((columns[1].get_f64(0).unwrap() - 3.0 / 31.0).abs() < 1e-12);
    }
}
