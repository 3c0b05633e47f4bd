//!
//! One CI run's recorded measurement, tied to a specific commit.
//!

use chrono::DateTime;
use chrono::Utc;

use crate::store::commit::Commit;
use crate::store::measurement::Measurement;

///
/// One CI run's recorded measurement, tied to a specific commit.
/// Created once when a run completes; never mutated afterwards.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    /// The measured commit.
    pub commit: Commit,
    /// The collection time, Unix epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// The benchmark tool that produced the measurements, e.g. "pytest".
    pub tool: String,
    /// The measurements of this run.
    pub benches: Vec<Measurement>,
}

impl Sample {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        commit: Commit,
        date: DateTime<Utc>,
        tool: String,
        benches: Vec<Measurement>,
    ) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }
}
