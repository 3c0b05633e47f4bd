//!
//! Benchmark result report input.
//!

pub mod error;
pub mod pytest;

use std::path::Path;

use crate::store::measurement::Measurement;

use self::error::Error as InputError;
use self::pytest::PytestReport;

///
/// A benchmark result report in one of the supported formats.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// The JSON report emitted by `pytest-benchmark`.
    Pytest(PytestReport),
    /// A bare array of pre-shaped measurements.
    Measurements(Vec<Measurement>),
}

impl Report {
    ///
    /// Converts the report into measurements ready to be recorded.
    ///
    pub fn into_measurements(self, unit: &str) -> Vec<Measurement> {
        match self {
            Self::Pytest(report) => report.into_measurements(unit),
            Self::Measurements(measurements) => measurements,
        }
    }
}

impl From<PytestReport> for Report {
    fn from(report: PytestReport) -> Self {
        Self::Pytest(report)
    }
}

impl From<Vec<Measurement>> for Report {
    fn from(measurements: Vec<Measurement>) -> Self {
        Self::Measurements(measurements)
    }
}

impl TryFrom<&Path> for Report {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}
