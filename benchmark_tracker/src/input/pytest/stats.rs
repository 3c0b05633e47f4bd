//!
//! Aggregated statistics of a benchmarked test.
//!

///
/// Aggregated statistics over the measurement rounds of one test.
///
#[derive(Debug, serde::Deserialize)]
pub struct Stats {
    /// The fastest round.
    pub min: f64,
    /// The slowest round.
    pub max: f64,
    /// The mean over all rounds.
    pub mean: f64,
    /// The standard deviation over all rounds.
    pub stddev: f64,
    /// The median over all rounds.
    pub median: f64,
    /// The number of measurement rounds.
    pub rounds: u64,
}
