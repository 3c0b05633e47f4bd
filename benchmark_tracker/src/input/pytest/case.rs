//!
//! One benchmarked test in a `pytest-benchmark` report.
//!

use crate::store::measurement::Measurement;

use super::stats::Stats;

///
/// One benchmarked test in a `pytest-benchmark` report.
///
#[derive(Debug, serde::Deserialize)]
pub struct Case {
    /// The test identifier, e.g. "test_analyze_ssl31".
    pub name: String,
    /// Aggregated statistics over the measurement rounds.
    pub stats: Stats,
}

impl Case {
    ///
    /// Converts the case into a recorded measurement.
    ///
    /// The `range` and `extra` strings match what the dashboard renders:
    /// the standard deviation, and the mean restated with the round count.
    ///
    pub fn into_measurement(self, unit: &str) -> Measurement {
        Measurement::new(
            self.name,
            self.stats.mean,
            unit.to_owned(),
            Some(format!("stddev: {}", self.stats.stddev)),
            Some(format!(
                "mean: {} {unit}\nrounds: {}",
                self.stats.mean, self.stats.rounds
            )),
        )
    }
}
