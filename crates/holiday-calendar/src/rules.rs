//! Holiday Rule Primitives
//!
//! Date arithmetic shared by the country calendars: Easter, nth/last weekday
//! of a month, and weekend substitution.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// How a holiday that lands on a weekend is substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// No substitute day
    None,
    /// Next weekday that is not already a holiday (UK/IE bank holidays)
    NextWorkday,
    /// Saturday moves to Friday, Sunday to Monday (US federal)
    NearestWeekday,
}

/// A single holiday produced by a calendar for one year
#[derive(Debug, Clone)]
pub struct HolidayRule {
    pub date: NaiveDate,
    pub name: &'static str,
    pub observance: Observance,
}

/// Holidays produced by the rules of one calendar year
#[derive(Debug, Default)]
pub struct YearRules {
    rules: Vec<HolidayRule>,
}

impl YearRules {
    /// Add a holiday without weekend substitution
    pub fn add(&mut self, date: Option<NaiveDate>, name: &'static str) {
        self.add_observed(date, name, Observance::None);
    }

    /// Add a holiday with a weekend substitution rule
    pub fn add_observed(&mut self, date: Option<NaiveDate>, name: &'static str, observance: Observance) {
        if let Some(date) = date {
            self.rules.push(HolidayRule {
                date,
                name,
                observance,
            });
        }
    }

    /// Resolve the rules into dated holidays, substitute days included
    pub fn resolve(mut self) -> BTreeMap<NaiveDate, String> {
        self.rules.sort_by_key(|rule| rule.date);

        let mut days: BTreeMap<NaiveDate, String> = BTreeMap::new();
        for rule in &self.rules {
            days.entry(rule.date).or_insert_with(|| rule.name.to_string());
        }

        for rule in &self.rules {
            if !is_weekend(rule.date) {
                continue;
            }
            let substitute = match rule.observance {
                Observance::None => None,
                Observance::NextWorkday => next_free_workday(rule.date, &days),
                Observance::NearestWeekday => nearest_weekday(rule.date),
            };
            if let Some(date) = substitute {
                days.entry(date)
                    .or_insert_with(|| format!("{} (observed)", rule.name));
            }
        }

        days
    }
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Western (Gregorian) Easter Sunday, anonymous Gregorian algorithm
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Date offset from Easter Sunday by `offset` days
pub fn easter_offset(year: i32, offset: i64) -> Option<NaiveDate> {
    let easter = easter_sunday(year)?;
    if offset >= 0 {
        easter.checked_add_days(Days::new(offset as u64))
    } else {
        easter.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Fixed calendar date
pub fn fixed(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The `n`-th (1-based) given weekday of a month
pub fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// The last given weekday of a month
pub fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let mut date = last_day_of_month(year, month)?;
    while date.weekday() != weekday {
        date = date.pred_opt()?;
    }
    Some(date)
}

/// Last calendar day of a month
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

fn next_free_workday(date: NaiveDate, taken: &BTreeMap<NaiveDate, String>) -> Option<NaiveDate> {
    let mut candidate = date.succ_opt()?;
    while is_weekend(candidate) || taken.contains_key(&candidate) {
        candidate = candidate.succ_opt()?;
    }
    Some(candidate)
}

fn nearest_weekday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => Some(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter_sunday(2019), Some(ymd(2019, 4, 21)));
        assert_eq!(easter_sunday(2024), Some(ymd(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
        assert_eq!(easter_sunday(2038), Some(ymd(2038, 4, 25)));
        assert_eq!(easter_sunday(1818), Some(ymd(1818, 3, 22)));
    }

    #[test]
    fn test_easter_offset() {
        assert_eq!(easter_offset(2024, -2), Some(ymd(2024, 3, 29)));
        assert_eq!(easter_offset(2024, 1), Some(ymd(2024, 4, 1)));
    }

    #[test]
    fn test_weekday_helpers() {
        assert_eq!(nth_weekday(2024, 5, Weekday::Mon, 1), Some(ymd(2024, 5, 6)));
        assert_eq!(last_weekday(2024, 5, Weekday::Mon), Some(ymd(2024, 5, 27)));
        assert_eq!(last_weekday(2024, 8, Weekday::Mon), Some(ymd(2024, 8, 26)));
        assert_eq!(last_day_of_month(2024, 2), Some(ymd(2024, 2, 29)));
        assert_eq!(last_day_of_month(2023, 12), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn test_next_workday_substitution_skips_taken_days() {
        // Christmas on Saturday, Boxing Day on Sunday
        let mut rules = YearRules::default();
        rules.add_observed(fixed(2021, 12, 25), "Christmas Day", Observance::NextWorkday);
        rules.add_observed(fixed(2021, 12, 26), "Boxing Day", Observance::NextWorkday);
        let days = rules.resolve();

        assert_eq!(days.get(&ymd(2021, 12, 27)).unwrap(), "Christmas Day (observed)");
        assert_eq!(days.get(&ymd(2021, 12, 28)).unwrap(), "Boxing Day (observed)");
        assert_eq!(days.len(), 4);
    }

    #[test]
    fn test_nearest_weekday_substitution() {
        let mut rules = YearRules::default();
        rules.add_observed(fixed(2026, 7, 4), "Independence Day", Observance::NearestWeekday);
        let days = rules.resolve();
        assert!(days.contains_key(&ymd(2026, 7, 3)));
    }

    #[test]
    fn test_weekday_holiday_has_no_substitute() {
        let mut rules = YearRules::default();
        rules.add_observed(fixed(2024, 12, 25), "Christmas Day", Observance::NextWorkday);
        assert_eq!(rules.resolve().len(), 1);
    }
}
