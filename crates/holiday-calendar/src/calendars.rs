//! Built-in Country Calendars

use crate::region::{Region, UkNation};
use crate::rules::{
    easter_offset, fixed, last_weekday, nth_weekday, Observance, YearRules,
};
use chrono::{Datelike, Weekday};

/// Holiday rules of `region` evaluated for `year`
pub(crate) fn rules_for(region: Region, year: i32) -> YearRules {
    let mut rules = YearRules::default();
    match region {
        Region::Gb(nation) => united_kingdom(&mut rules, year, nation),
        Region::Ie => ireland(&mut rules, year),
        Region::Us => united_states(&mut rules, year),
        Region::De => germany(&mut rules, year),
        Region::Fr => france(&mut rules, year),
    }
    rules
}

fn united_kingdom(rules: &mut YearRules, year: i32, nation: Option<UkNation>) {
    use Observance::NextWorkday;

    if year >= 1974 {
        rules.add_observed(fixed(year, 1, 1), "New Year's Day", NextWorkday);
    }
    rules.add(easter_offset(year, -2), "Good Friday");

    if year >= 1978 {
        let may_day = match year {
            1995 | 2020 => fixed(year, 5, 8),
            _ => nth_weekday(year, 5, Weekday::Mon, 1),
        };
        rules.add(may_day, "May Day");
    }

    if year >= 1971 {
        let spring = match year {
            1977 => fixed(year, 6, 6),
            2002 | 2012 => fixed(year, 6, 4),
            2022 => fixed(year, 6, 2),
            _ => last_weekday(year, 5, Weekday::Mon),
        };
        rules.add(spring, "Spring Bank Holiday");
    }

    rules.add_observed(fixed(year, 12, 25), "Christmas Day", NextWorkday);
    rules.add_observed(fixed(year, 12, 26), "Boxing Day", NextWorkday);

    match nation {
        Some(UkNation::England | UkNation::Wales) => {
            rules.add(easter_offset(year, 1), "Easter Monday");
            if year >= 1971 {
                rules.add(last_weekday(year, 8, Weekday::Mon), "Late Summer Bank Holiday");
            }
        }
        Some(UkNation::Scotland) => {
            rules.add_observed(fixed(year, 1, 2), "New Year Holiday", NextWorkday);
            rules.add(nth_weekday(year, 8, Weekday::Mon, 1), "Summer Bank Holiday");
            if year >= 2007 {
                rules.add_observed(fixed(year, 11, 30), "St. Andrew's Day", NextWorkday);
            }
        }
        Some(UkNation::NorthernIreland) => {
            rules.add_observed(fixed(year, 3, 17), "St. Patrick's Day", NextWorkday);
            rules.add(easter_offset(year, 1), "Easter Monday");
            rules.add_observed(fixed(year, 7, 12), "Battle of the Boyne", NextWorkday);
            if year >= 1971 {
                rules.add(last_weekday(year, 8, Weekday::Mon), "Late Summer Bank Holiday");
            }
        }
        None => {}
    }

    let special = match year {
        1977 => Some((fixed(year, 6, 7), "Silver Jubilee of Elizabeth II")),
        1981 => Some((fixed(year, 7, 29), "Wedding of Charles and Diana")),
        1999 => Some((fixed(year, 12, 31), "Millennium Celebrations")),
        2002 => Some((fixed(year, 6, 3), "Golden Jubilee of Elizabeth II")),
        2011 => Some((fixed(year, 4, 29), "Wedding of William and Catherine")),
        2012 => Some((fixed(year, 6, 5), "Diamond Jubilee of Elizabeth II")),
        2023 => Some((fixed(year, 5, 8), "Coronation of Charles III")),
        _ => None,
    };
    if let Some((date, name)) = special {
        rules.add(date, name);
    }
    if year == 2022 {
        rules.add(fixed(year, 6, 3), "Platinum Jubilee of Elizabeth II");
        rules.add(fixed(year, 9, 19), "State Funeral of Queen Elizabeth II");
    }
}

fn ireland(rules: &mut YearRules, year: i32) {
    use Observance::NextWorkday;

    if year >= 1974 {
        rules.add_observed(fixed(year, 1, 1), "New Year's Day", NextWorkday);
    }
    if year >= 2023 {
        // First Monday of February, or 1 February when that is a Friday
        let feb_first = fixed(year, 2, 1);
        let brigid = match feb_first {
            Some(date) if date.weekday() == Weekday::Fri => Some(date),
            _ => nth_weekday(year, 2, Weekday::Mon, 1),
        };
        rules.add(brigid, "St. Brigid's Day");
    }
    rules.add_observed(fixed(year, 3, 17), "St. Patrick's Day", NextWorkday);
    rules.add(easter_offset(year, 1), "Easter Monday");
    if year >= 1994 {
        rules.add(nth_weekday(year, 5, Weekday::Mon, 1), "May Day");
    }
    rules.add(nth_weekday(year, 6, Weekday::Mon, 1), "June Bank Holiday");
    rules.add(nth_weekday(year, 8, Weekday::Mon, 1), "August Bank Holiday");
    if year >= 1977 {
        rules.add(last_weekday(year, 10, Weekday::Mon), "October Bank Holiday");
    }
    rules.add_observed(fixed(year, 12, 25), "Christmas Day", NextWorkday);
    rules.add_observed(fixed(year, 12, 26), "St. Stephen's Day", NextWorkday);

    if year == 2022 {
        rules.add(fixed(year, 3, 18), "Day of Remembrance and Recognition");
    }
}

fn united_states(rules: &mut YearRules, year: i32) {
    use Observance::NearestWeekday;

    rules.add_observed(fixed(year, 1, 1), "New Year's Day", NearestWeekday);
    if year >= 1986 {
        rules.add(nth_weekday(year, 1, Weekday::Mon, 3), "Martin Luther King Jr. Day");
    }
    rules.add(nth_weekday(year, 2, Weekday::Mon, 3), "Washington's Birthday");
    rules.add(last_weekday(year, 5, Weekday::Mon), "Memorial Day");
    if year >= 2021 {
        rules.add_observed(fixed(year, 6, 19), "Juneteenth National Independence Day", NearestWeekday);
    }
    rules.add_observed(fixed(year, 7, 4), "Independence Day", NearestWeekday);
    rules.add(nth_weekday(year, 9, Weekday::Mon, 1), "Labor Day");
    rules.add(nth_weekday(year, 10, Weekday::Mon, 2), "Columbus Day");
    rules.add_observed(fixed(year, 11, 11), "Veterans Day", NearestWeekday);
    rules.add(nth_weekday(year, 11, Weekday::Thu, 4), "Thanksgiving");
    rules.add_observed(fixed(year, 12, 25), "Christmas Day", NearestWeekday);
}

fn germany(rules: &mut YearRules, year: i32) {
    rules.add(fixed(year, 1, 1), "New Year's Day");
    rules.add(easter_offset(year, -2), "Good Friday");
    rules.add(easter_offset(year, 1), "Easter Monday");
    rules.add(fixed(year, 5, 1), "Labour Day");
    rules.add(easter_offset(year, 39), "Ascension Day");
    rules.add(easter_offset(year, 50), "Whit Monday");
    if year >= 1990 {
        rules.add(fixed(year, 10, 3), "German Unity Day");
    }
    rules.add(fixed(year, 12, 25), "Christmas Day");
    rules.add(fixed(year, 12, 26), "Second Day of Christmas");

    if year == 2017 {
        rules.add(fixed(year, 10, 31), "Reformation Day");
    }
}

fn france(rules: &mut YearRules, year: i32) {
    rules.add(fixed(year, 1, 1), "New Year's Day");
    rules.add(easter_offset(year, 1), "Easter Monday");
    rules.add(fixed(year, 5, 1), "Labour Day");
    if year >= 1982 {
        rules.add(fixed(year, 5, 8), "Victory in Europe Day");
    }
    rules.add(easter_offset(year, 39), "Ascension Day");
    if !(2005..=2007).contains(&year) {
        rules.add(easter_offset(year, 50), "Whit Monday");
    }
    rules.add(fixed(year, 7, 14), "National Day");
    rules.add(fixed(year, 8, 15), "Assumption Day");
    rules.add(fixed(year, 11, 1), "All Saints' Day");
    if year >= 1919 {
        rules.add(fixed(year, 11, 11), "Armistice Day");
    }
    rules.add(fixed(year, 12, 25), "Christmas Day");
}
