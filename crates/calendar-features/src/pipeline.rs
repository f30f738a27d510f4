//! Configured Feature Pipeline
//!
//! Runs an ordered list of generator steps over one DataFrame. Configuration
//! can be loaded from a file (format picked by extension) with environment
//! overrides under `CALENDAR_FEATURES__*`, e.g.
//! `CALENDAR_FEATURES__DATE_COLUMN=month_start`.
//!
//! ```toml
//! date_column = "date"
//!
//! [[steps]]
//! type = "date_parts"
//!
//! [[steps]]
//! type = "holidays"
//! region = "GB-ENG"
//! proportion = true
//!
//! [[steps]]
//! type = "trend_ramps"
//! reference_dates = ["2020-03-01", "2021-07-01"]
//!
//! [[steps]]
//! type = "fourier"
//! periodicity = 12
//! n_components = 2
//! ```

use crate::business_days::{business_day_columns, BusinessDayOptions};
use crate::column::{date_values, emit, FeatureColumn};
use crate::date_parts::{date_part_columns, DatePart, FeatureDefinitions};
use crate::error::Result;
use crate::fourier::{fourier_columns, FourierOptions};
use crate::holidays::{holiday_columns, HolidayCountOptions};
use crate::trend::{change_point_columns, trend_ramp_columns};
use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use holiday_calendar::HolidayCalendars;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "CALENDAR_FEATURES";

/// Named date-part definition as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePartSpec {
    pub name: String,
    pub part: DatePart,
}

/// One generator invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureStep {
    /// Date-part features; an empty list means the built-in monthly set
    DateParts {
        #[serde(default)]
        features: Vec<DatePartSpec>,
    },
    BusinessDays(BusinessDayOptions),
    Holidays(HolidayCountOptions),
    TrendRamps { reference_dates: Vec<NaiveDate> },
    ChangePoints { reference_dates: Vec<NaiveDate> },
    Fourier(FourierOptions),
}

impl FeatureStep {
    /// Whether the step reads the date column
    pub fn uses_dates(&self) -> bool {
        !matches!(self, FeatureStep::Fourier(_))
    }

    /// Step kind as written in configuration
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureStep::DateParts { .. } => "date_parts",
            FeatureStep::BusinessDays(_) => "business_days",
            FeatureStep::Holidays(_) => "holidays",
            FeatureStep::TrendRamps { .. } => "trend_ramps",
            FeatureStep::ChangePoints { .. } => "change_points",
            FeatureStep::Fourier(_) => "fourier",
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Name of the date column in the input frame
    #[serde(default = "default_date_column")]
    pub date_column: String,
    /// Steps in output column order
    #[serde(default)]
    pub steps: Vec<FeatureStep>,
}

fn default_date_column() -> String {
    "date".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            date_column: default_date_column(),
            steps: vec![FeatureStep::DateParts {
                features: Vec::new(),
            }],
        }
    }
}

impl PipelineConfig {
    /// Load from a file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parse a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Runs configured steps, sharing one memoized holiday calendar
#[derive(Debug)]
pub struct FeaturePipeline {
    config: PipelineConfig,
    calendars: HolidayCalendars,
}

impl FeaturePipeline {
    /// Create a pipeline from configuration
    pub fn new(config: PipelineConfig) -> Self {
        info!(
            "Creating feature pipeline on column {} with {} steps",
            config.date_column,
            config.steps.len()
        );
        Self {
            config,
            calendars: HolidayCalendars::new(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Holiday cache shared by the holiday steps
    pub fn calendars(&self) -> &HolidayCalendars {
        &self.calendars
    }

    /// Generated columns of every step, in step order
    pub fn columns(&self, df: &DataFrame) -> Result<Vec<FeatureColumn>> {
        let dates = if self.config.steps.iter().any(FeatureStep::uses_dates) {
            date_values(df, &self.config.date_column)?
        } else {
            Vec::new()
        };

        let mut columns = Vec::new();
        for step in &self.config.steps {
            let generated = self.run_step(step, &dates, df.height())?;
            debug!("Step {} generated {} columns", step.kind(), generated.len());
            columns.extend(generated);
        }
        Ok(columns)
    }

    /// Apply every step; returns the generated columns alone, or `df` with
    /// them appended when `append` is set
    pub fn apply(&self, df: &DataFrame, append: bool) -> Result<DataFrame> {
        let columns = self.columns(df)?;
        info!("Feature pipeline generated {} columns over {} rows", columns.len(), df.height());
        emit(df, columns, append)
    }

    fn run_step(
        &self,
        step: &FeatureStep,
        dates: &[Option<NaiveDate>],
        n_rows: usize,
    ) -> Result<Vec<FeatureColumn>> {
        match step {
            FeatureStep::DateParts { features } => {
                let definitions = if features.is_empty() {
                    FeatureDefinitions::monthly()
                } else {
                    features
                        .iter()
                        .map(|spec| (spec.name.clone(), spec.part))
                        .collect()
                };
                date_part_columns(dates, &definitions)
            }
            FeatureStep::BusinessDays(options) => business_day_columns(dates, options),
            FeatureStep::Holidays(options) => holiday_columns(dates, &self.calendars, options),
            FeatureStep::TrendRamps { reference_dates } => {
                Ok(trend_ramp_columns(dates, reference_dates))
            }
            FeatureStep::ChangePoints { reference_dates } => {
                Ok(change_point_columns(dates, reference_dates))
            }
            FeatureStep::Fourier(options) => fourier_columns(n_rows, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::WindowBounds;
    use polars::prelude::{NamedFrom, Series};

    const FULL: &str = r#"
        date_column = "month_start"

        [[steps]]
        type = "date_parts"
        features = [
            { name = "trend_yr", part = "year" },
            { name = "season_is_jun", part = { is_month = 6 } },
        ]

        [[steps]]
        type = "business_days"
        proportion = true

        [[steps]]
        type = "holidays"
        region = "GB-SCT"
        window = "half_open"

        [[steps]]
        type = "trend_ramps"
        reference_dates = ["2020-03-01"]

        [[steps]]
        type = "change_points"
        reference_dates = ["2021-07-15", "2022-01-01"]

        [[steps]]
        type = "fourier"
        periodicity = 12
        n_components = 2
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = PipelineConfig::from_toml_str(FULL).unwrap();
        assert_eq!(config.date_column, "month_start");
        let kinds: Vec<&str> = config.steps.iter().map(FeatureStep::kind).collect();
        assert_eq!(
            kinds,
            vec!["date_parts", "business_days", "holidays", "trend_ramps", "change_points", "fourier"]
        );

        match &config.steps[0] {
            FeatureStep::DateParts { features } => {
                assert_eq!(features.len(), 2);
                assert!(matches!(features[1].part, DatePart::IsMonth(6)));
            }
            other => panic!("unexpected step {other:?}"),
        }
        match &config.steps[1] {
            FeatureStep::BusinessDays(options) => {
                assert!(options.proportion);
                assert_eq!(options.name, "holiday_business_day_count");
            }
            other => panic!("unexpected step {other:?}"),
        }
        match &config.steps[2] {
            FeatureStep::Holidays(options) => {
                assert_eq!(options.region, "GB-SCT");
                assert_eq!(options.window, WindowBounds::HalfOpen);
                assert_eq!(options.name, "holiday_bank_count");
            }
            other => panic!("unexpected step {other:?}"),
        }
        match &config.steps[4] {
            FeatureStep::ChangePoints { reference_dates } => {
                assert_eq!(reference_dates[0], NaiveDate::from_ymd_opt(2021, 7, 15).unwrap());
            }
            other => panic!("unexpected step {other:?}"),
        }
        match &config.steps[5] {
            FeatureStep::Fourier(options) => {
                assert_eq!(options.periodicity, 12.0);
                assert_eq!(options.n_components, 2);
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config.date_column, "date");
        assert!(config.steps.is_empty());

        let config = PipelineConfig::default();
        assert!(matches!(&config.steps[..], [FeatureStep::DateParts { features }] if features.is_empty()));
    }

    #[test]
    fn test_unknown_step_rejected() {
        let err = PipelineConfig::from_toml_str("[[steps]]\ntype = \"lags\"\n").unwrap_err();
        assert!(matches!(err, crate::error::FeatureError::Config(_)));
    }

    #[test]
    fn test_fourier_only_pipeline_skips_date_column() {
        let config = PipelineConfig {
            date_column: "absent".to_string(),
            steps: vec![FeatureStep::Fourier(FourierOptions::default())],
        };
        let df = DataFrame::new(vec![Series::new("y".into(), &[1.0, 2.0, 3.0]).into()]).unwrap();
        let out = FeaturePipeline::new(config).apply(&df, true).unwrap();
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 3);
    }

    #[test]
    fn test_steps_without_columns_keep_height() {
        let config = PipelineConfig {
            date_column: "absent".to_string(),
            steps: vec![FeatureStep::Fourier(FourierOptions {
                periodicity: 12.0,
                n_components: 0,
            })],
        };
        let df = DataFrame::new(vec![Series::new("y".into(), &[1.0, 2.0, 3.0]).into()]).unwrap();
        let out = FeaturePipeline::new(config).apply(&df, false).unwrap();
        assert_eq!(out.width(), 0);
        assert_eq!(out.height(), 3);
    }
}
