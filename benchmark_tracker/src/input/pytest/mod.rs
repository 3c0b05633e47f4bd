//!
//! The `pytest-benchmark` JSON report format.
//!

pub mod case;
pub mod stats;

use crate::store::measurement::Measurement;

use self::case::Case;

///
/// The `pytest-benchmark` JSON report format.
/// Only the sections the tracker records are deserialized.
///
#[derive(Debug, serde::Deserialize)]
pub struct PytestReport {
    /// Per-test measurement series.
    pub benchmarks: Vec<Case>,
}

impl PytestReport {
    ///
    /// Converts the report into measurements ready to be recorded.
    ///
    pub fn into_measurements(self, unit: &str) -> Vec<Measurement> {
        self.benchmarks
            .into_iter()
            .map(|case| case.into_measurement(unit))
            .collect()
    }
}
