//! Per-Year Holiday Tables

use crate::calendars::rules_for;
use crate::region::Region;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Public holidays of one region that fall inside one calendar year
#[derive(Debug, Clone)]
pub struct HolidayTable {
    region: Region,
    year: i32,
    days: BTreeMap<NaiveDate, String>,
}

impl HolidayTable {
    /// Build the table for `region` and `year`.
    ///
    /// Rules of the neighbouring years are evaluated as well so that a
    /// substitute day crossing the year boundary (a Saturday 1 January
    /// observed on the preceding Friday) lands in the year it falls in.
    pub fn build(region: Region, year: i32) -> Self {
        let mut days = BTreeMap::new();
        for rule_year in [year - 1, year, year + 1] {
            for (date, name) in rules_for(region, rule_year).resolve() {
                if date.year() == year {
                    days.entry(date).or_insert(name);
                }
            }
        }
        Self { region, year, days }
    }

    /// Region this table belongs to
    pub fn region(&self) -> Region {
        self.region
    }

    /// Calendar year covered
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether `date` is a holiday in this table
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Holiday name for `date`
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    /// Holidays in date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.days.iter().map(|(date, name)| (*date, name.as_str()))
    }

    /// Number of holidays
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when the region has no holidays in this year
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
