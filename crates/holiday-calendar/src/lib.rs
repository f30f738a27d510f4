//! Public Holiday Calendars
//!
//! Rule-based public holiday calendars for a handful of regions, looked up by
//! ISO 3166 region code and memoized per `(region, year)`.

mod cache;
mod calendars;
mod error;
mod region;
mod rules;
mod table;

pub use cache::{HolidayCalendars, HolidayProvider};
pub use error::{HolidayError, Result};
pub use region::{Region, UkNation};
pub use rules::easter_sunday;
pub use table::HolidayTable;

/// Region used when a caller does not name one
pub const DEFAULT_REGION: &str = "GB";
