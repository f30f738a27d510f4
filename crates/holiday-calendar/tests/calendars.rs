use chrono::{Datelike, NaiveDate, Weekday};
use holiday_calendar::{easter_sunday, HolidayCalendars, HolidayProvider, HolidayTable, Region};
use proptest::prelude::*;

proptest! {
    #[test]
    fn easter_is_a_sunday_in_range(year in 1583i32..4000) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!(easter >= NaiveDate::from_ymd_opt(year, 3, 22).unwrap());
        prop_assert!(easter <= NaiveDate::from_ymd_opt(year, 4, 25).unwrap());
    }

    #[test]
    fn substitute_days_are_weekdays(year in 1975i32..2100, code in prop::sample::select(vec!["GB", "GB-SCT", "GB-NIR", "IE", "US"])) {
        let region: Region = code.parse().unwrap();
        let table = HolidayTable::build(region, year);
        for (date, name) in table.iter() {
            if name.ends_with("(observed)") {
                prop_assert!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
            }
        }
    }

    #[test]
    fn lookup_agrees_with_table(ordinal in 1u32..=365, year in 2000i32..2040) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let calendars = HolidayCalendars::new();
        let table = HolidayTable::build(Region::Gb(None), year);
        prop_assert_eq!(calendars.is_holiday("GB", date).unwrap(), table.contains(date));
    }
}

#[test]
fn christmas_and_new_year_in_window() {
    let calendars = HolidayCalendars::new();
    let start = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    let count = start
        .iter_days()
        .take_while(|date| *date <= NaiveDate::from_ymd_opt(2025, 1, 25).unwrap())
        .filter(|date| calendars.is_holiday("GB", *date).unwrap())
        .count();
    assert_eq!(count, 3);
}
