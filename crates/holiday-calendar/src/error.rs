//! Holiday Calendar Error Types

use thiserror::Error;

/// Errors raised while resolving a holiday calendar
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HolidayError {
    /// Region code not recognised by any built-in calendar
    #[error("Unsupported region: {0}")]
    UnsupportedRegion(String),

    /// Subdivision code not recognised for an otherwise supported country
    #[error("Unsupported subdivision {subdivision} for country {country}")]
    UnsupportedSubdivision {
        country: &'static str,
        subdivision: String,
    },
}

/// Result alias for holiday lookups
pub type Result<T> = std::result::Result<T, HolidayError>;
