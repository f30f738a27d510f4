//! Region Codes
//!
//! ISO 3166 alpha-2 country codes with an optional subdivision suffix
//! (`GB-SCT`). Parsing is case-insensitive and ignores surrounding whitespace.

use crate::error::HolidayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constituent nations of the United Kingdom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UkNation {
    England,
    Wales,
    Scotland,
    NorthernIreland,
}

impl UkNation {
    /// ISO 3166-2 subdivision code
    pub fn code(&self) -> &'static str {
        match self {
            UkNation::England => "ENG",
            UkNation::Wales => "WLS",
            UkNation::Scotland => "SCT",
            UkNation::NorthernIreland => "NIR",
        }
    }
}

/// Region with a built-in holiday calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    /// United Kingdom; `None` means the holidays common to every nation
    Gb(Option<UkNation>),
    /// Ireland
    Ie,
    /// United States (federal holidays)
    Us,
    /// Germany (nationwide holidays)
    De,
    /// France (metropolitan, nationwide holidays)
    Fr,
}

impl Region {
    /// Country part of the code
    pub fn country_code(&self) -> &'static str {
        match self {
            Region::Gb(_) => "GB",
            Region::Ie => "IE",
            Region::Us => "US",
            Region::De => "DE",
            Region::Fr => "FR",
        }
    }

    /// Every country code with a built-in calendar
    pub fn supported() -> &'static [&'static str] {
        &["GB", "UK", "IE", "US", "DE", "FR"]
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Gb(None)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Gb(Some(nation)) => write!(f, "GB-{}", nation.code()),
            other => f.write_str(other.country_code()),
        }
    }
}

impl FromStr for Region {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let (country, subdivision) = match code.split_once('-') {
            Some((country, sub)) => (country, Some(sub)),
            None => (code.as_str(), None),
        };

        let base = match country {
            "GB" | "UK" => Region::Gb(None),
            "IE" => Region::Ie,
            "US" => Region::Us,
            "DE" => Region::De,
            "FR" => Region::Fr,
            _ => return Err(HolidayError::UnsupportedRegion(s.trim().to_string())),
        };

        let Some(sub) = subdivision else {
            return Ok(base);
        };

        let nation = match (base, sub) {
            (Region::Gb(_), "ENG") => UkNation::England,
            (Region::Gb(_), "WLS") => UkNation::Wales,
            (Region::Gb(_), "SCT") => UkNation::Scotland,
            (Region::Gb(_), "NIR") => UkNation::NorthernIreland,
            _ => {
                return Err(HolidayError::UnsupportedSubdivision {
                    country: base.country_code(),
                    subdivision: sub.to_string(),
                })
            }
        };
        Ok(Region::Gb(Some(nation)))
    }
}

impl TryFrom<String> for Region {
    type Error = HolidayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.to_string()
    }
}
