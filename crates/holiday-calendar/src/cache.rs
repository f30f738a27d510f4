//! Memoized Holiday Lookup

use crate::error::Result;
use crate::region::Region;
use crate::table::HolidayTable;
use chrono::{Datelike, NaiveDate};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Source of public-holiday membership, keyed by region code and date
pub trait HolidayProvider {
    /// Whether `date` is a public holiday in `region`
    fn is_holiday(&self, region: &str, date: NaiveDate) -> Result<bool>;

    /// Fail early when `region` is not served by this provider
    fn check_region(&self, _region: &str) -> Result<()> {
        Ok(())
    }
}

/// Built-in calendars with tables memoized per `(region, year)`
#[derive(Debug, Default)]
pub struct HolidayCalendars {
    tables: RwLock<HashMap<(Region, i32), Arc<HolidayTable>>>,
}

impl HolidayCalendars {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Holiday table for `region` and `year`, built on first use
    pub fn table(&self, region: Region, year: i32) -> Arc<HolidayTable> {
        let key = (region, year);
        if let Some(table) = self.tables.read().get(&key) {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write();
        let table = tables.entry(key).or_insert_with(|| {
            let table = HolidayTable::build(region, year);
            info!("Built holiday table for {} {} ({} days)", region, year, table.len());
            Arc::new(table)
        });
        Arc::clone(table)
    }

    /// Whether `date` is a holiday in an already parsed region
    pub fn contains(&self, region: Region, date: NaiveDate) -> bool {
        self.table(region, date.year()).contains(date)
    }

    /// Name of the holiday on `date`, if any
    pub fn holiday_name(&self, region: &str, date: NaiveDate) -> Result<Option<String>> {
        let region: Region = region.parse()?;
        Ok(self
            .table(region, date.year())
            .name(date)
            .map(str::to_string))
    }

    /// Holidays of `region` between `start` and `end`, both inclusive
    pub fn holidays_between(
        &self,
        region: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, String)>> {
        let region: Region = region.parse()?;
        let mut found = Vec::new();
        for year in start.year()..=end.year() {
            let table = self.table(region, year);
            found.extend(
                table
                    .iter()
                    .filter(|(date, _)| *date >= start && *date <= end)
                    .map(|(date, name)| (date, name.to_string())),
            );
        }
        Ok(found)
    }

    /// Number of memoized tables
    pub fn cached_tables(&self) -> usize {
        self.tables.read().len()
    }

    /// Drop every memoized table
    pub fn clear(&self) {
        let mut tables = self.tables.write();
        debug!("Clearing {} cached holiday tables", tables.len());
        tables.clear();
    }
}

impl HolidayProvider for HolidayCalendars {
    fn is_holiday(&self, region: &str, date: NaiveDate) -> Result<bool> {
        let region: Region = region.parse()?;
        Ok(self.contains(region, date))
    }

    fn check_region(&self, region: &str) -> Result<()> {
        region.parse::<Region>().map(|_| ())
    }
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for &P {
    fn is_holiday(&self, region: &str, date: NaiveDate) -> Result<bool> {
        (**self).is_holiday(region, date)
    }

    fn check_region(&self, region: &str) -> Result<()> {
        (**self).check_region(region)
    }
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for Arc<P> {
    fn is_holiday(&self, region: &str, date: NaiveDate) -> Result<bool> {
        (**self).is_holiday(region, date)
    }

    fn check_region(&self, region: &str) -> Result<()> {
        (**self).check_region(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HolidayError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lookup_memoizes_per_region_and_year() {
        let calendars = HolidayCalendars::new();
        assert!(calendars.is_holiday("GB", ymd(2024, 12, 25)).unwrap());
        assert!(!calendars.is_holiday("GB", ymd(2024, 12, 24)).unwrap());
        assert_eq!(calendars.cached_tables(), 1);

        assert!(calendars.is_holiday("GB", ymd(2025, 1, 1)).unwrap());
        assert!(calendars.is_holiday("US", ymd(2024, 7, 4)).unwrap());
        assert_eq!(calendars.cached_tables(), 3);

        // "UK" resolves to the same key as "GB"
        calendars.is_holiday("uk", ymd(2024, 5, 6)).unwrap();
        assert_eq!(calendars.cached_tables(), 3);

        calendars.clear();
        assert_eq!(calendars.cached_tables(), 0);
    }

    #[test]
    fn test_unsupported_region_propagates() {
        let calendars = HolidayCalendars::new();
        let err = calendars.is_holiday("XX", ymd(2024, 1, 1)).unwrap_err();
        assert_eq!(err, HolidayError::UnsupportedRegion("XX".to_string()));
        assert_eq!(calendars.cached_tables(), 0);

        assert!(calendars.check_region("gb-sct").is_ok());
        assert_eq!(
            Arc::new(HolidayCalendars::new()).check_region("XX"),
            Err(HolidayError::UnsupportedRegion("XX".to_string()))
        );
    }

    #[test]
    fn test_holidays_between_spans_years() {
        let calendars = HolidayCalendars::new();
        let found = calendars
            .holidays_between("GB", ymd(2024, 12, 25), ymd(2025, 1, 25))
            .unwrap();
        let dates: Vec<NaiveDate> = found.iter().map(|(date, _)| *date).collect();
        assert_eq!(dates, vec![ymd(2024, 12, 25), ymd(2024, 12, 26), ymd(2025, 1, 1)]);
    }

    #[test]
    fn test_holiday_name() {
        let calendars = HolidayCalendars::new();
        assert_eq!(
            calendars.holiday_name("GB-ENG", ymd(2024, 4, 1)).unwrap().as_deref(),
            Some("Easter Monday")
        );
        assert_eq!(calendars.holiday_name("GB", ymd(2024, 4, 1)).unwrap(), None);
    }

    #[test]
    fn test_provider_through_reference_and_arc() {
        fn count<P: HolidayProvider>(provider: P) -> usize {
            [ymd(2024, 1, 1), ymd(2024, 1, 2)]
                .into_iter()
                .filter(|date| provider.is_holiday("DE", *date).unwrap())
                .count()
        }

        let calendars = Arc::new(HolidayCalendars::new());
        assert_eq!(count(&*calendars), 1);
        assert_eq!(count(Arc::clone(&calendars)), 1);
    }
}
