//!
//! The benchmark data store.
//!

pub mod commit;
pub mod error;
pub mod format;
pub mod measurement;
pub mod sample;

use std::collections::BTreeMap;
use std::path::Path;

use chrono::DateTime;
use chrono::Utc;

use self::error::Error;
use self::error::ValidationError;
use self::format::Format;
use self::sample::Sample;

///
/// The benchmark data store: the persistent history behind the dashboard.
///
/// The field order matches the generated data file, so re-serializing
/// a parsed store reproduces the original layout.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Store {
    /// The time of the latest append, Unix epoch milliseconds.
    #[serde(rename = "lastUpdate", with = "chrono::serde::ts_milliseconds")]
    pub last_update: DateTime<Utc>,
    /// URL of the repository whose commits are measured.
    #[serde(rename = "repoUrl", default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// The benchmark suites; each owns its samples in collection order.
    pub entries: BTreeMap<String, Vec<Sample>>,
}

impl Store {
    ///
    /// A shortcut constructor for an empty store.
    ///
    pub fn new() -> Self {
        Self {
            last_update: DateTime::from_timestamp_millis(0).expect("Always valid"),
            repo_url: None,
            entries: BTreeMap::new(),
        }
    }

    ///
    /// Appends a sample to a suite, creating the suite on first use.
    ///
    /// Appending is permissive: duplicate commit ids and out-of-order dates
    /// are kept as separate samples.
    ///
    pub fn append(&mut self, suite: &str, sample: Sample) {
        self.last_update = sample.date;
        self.entries.entry(suite.to_owned()).or_default().push(sample);
    }

    ///
    /// Drops the oldest samples of a suite down to `max_items`.
    /// Returns the number of samples dropped.
    ///
    pub fn truncate(&mut self, suite: &str, max_items: usize) -> usize {
        match self.entries.get_mut(suite) {
            Some(samples) if samples.len() > max_items => {
                let excess = samples.len() - max_items;
                samples.drain(..excess);
                excess
            }
            _ => 0,
        }
    }

    ///
    /// Returns the samples of a suite in collection order.
    ///
    pub fn suite(&self, name: &str) -> Option<&[Sample]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    ///
    /// Returns the previous and the latest sample of a suite,
    /// or `None` if there are fewer than two.
    ///
    pub fn last_two(&self, suite: &str) -> Option<(&Sample, &Sample)> {
        let samples = self.entries.get(suite)?;
        if samples.len() < 2 {
            return None;
        }
        Some((&samples[samples.len() - 2], &samples[samples.len() - 1]))
    }

    ///
    /// Checks the schema-level invariants: every sample has a non-empty
    /// `benches` array, and every value is a non-negative finite number.
    ///
    /// Out-of-order dates are tolerated: see [`Store::out_of_order_dates`].
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (suite, samples) in self.entries.iter() {
            for (index, sample) in samples.iter().enumerate() {
                if sample.benches.is_empty() {
                    return Err(ValidationError::EmptyBenches {
                        suite: suite.to_owned(),
                        index,
                    });
                }
                for measurement in sample.benches.iter() {
                    if !(measurement.value.is_finite() && measurement.value >= 0.0) {
                        return Err(ValidationError::InvalidValue {
                            suite: suite.to_owned(),
                            index,
                            name: measurement.name.clone(),
                            value: measurement.value,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    ///
    /// Counts the samples of a suite whose date precedes that of the sample
    /// before them. Merge artifacts in CI produce such samples; they are
    /// reported but never rejected.
    ///
    pub fn out_of_order_dates(&self, suite: &str) -> usize {
        self.entries
            .get(suite)
            .map(|samples| {
                samples
                    .windows(2)
                    .filter(|pair| pair[1].date < pair[0].date)
                    .count()
            })
            .unwrap_or_default()
    }

    ///
    /// Writes the store to a file in the flavor matching the file extension.
    ///
    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self).expect("Always valid");
        let contents = Format::from_path(path).encode(json);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|error| Error::Writing {
                    error,
                    path: path.to_path_buf(),
                })?;
            }
        }
        std::fs::write(path, contents).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&Path> for Store {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(Error::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let payload = Format::from_path(path)
            .payload(text.as_str())
            .ok_or_else(|| Error::MissingAssignment {
                path: path.to_path_buf(),
            })?;
        serde_json::from_str(payload).map_err(|error| Error::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}
