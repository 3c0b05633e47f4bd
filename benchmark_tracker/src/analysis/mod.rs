//!
//! Provides tools for comparing samples of a benchmark suite.
//!

use std::collections::BTreeMap;

use crate::results::Results;
use crate::store::sample::Sample;
use crate::util;

///
/// Compares two samples of one suite, matching benches by name.
///
/// Ratios are `candidate / reference`: values above 1 mean a slowdown,
/// since the recorded metric is wall-clock time. Benches present in only
/// one of the samples are skipped, as are benches whose reference value
/// is zero.
///
pub fn compare<'a>(reference: &'a Sample, candidate: &'a Sample) -> Results<'a> {
    let reference_values: BTreeMap<&str, f64> = reference
        .benches
        .iter()
        .map(|measurement| (measurement.name.as_str(), measurement.value))
        .collect();

    let mut ratios = Vec::with_capacity(candidate.benches.len());
    let mut negatives = Vec::with_capacity(candidate.benches.len());
    let mut positives = Vec::with_capacity(candidate.benches.len());

    for measurement in candidate.benches.iter() {
        let reference_value = match reference_values.get(measurement.name.as_str()) {
            Some(value) => *value,
            None => continue,
        };
        if reference_value == 0.0 {
            continue;
        }

        let ratio = measurement.value / reference_value;
        ratios.push(ratio);
        if ratio > 1.0 {
            negatives.push((ratio, measurement.name.as_str()));
        } else if ratio < 1.0 {
            positives.push((ratio, measurement.name.as_str()));
        }
    }

    let mean = util::geometric_mean(ratios.as_slice());
    let best = ratios.iter().copied().fold(1.0, f64::min);
    let worst = ratios.iter().copied().fold(1.0, f64::max);

    Results::new(mean, best, worst, negatives, positives)
}
