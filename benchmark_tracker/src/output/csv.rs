//!
//! Serializing suite history to CSV.
//!

use std::fmt::Write;

use crate::store::sample::Sample;
use crate::store::Store;
use crate::util;

use super::file::File;

///
/// Serialize each suite's history to its own CSV file in the following format:
/// "commit", "date", "name", "value", "unit", "range"
///
#[derive(Default)]
pub struct Csv {
    /// One CSV file per suite.
    pub files: Vec<File>,
}

impl Csv {
    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let commit_id_length = 40;
        let date_length = 32;
        let name_estimated_max = 120;
        let value_estimated_max = 24;
        let unit_and_range_estimated_max = 40;
        commit_id_length
            + date_length
            + name_estimated_max
            + value_estimated_max
            + unit_and_range_estimated_max
    }

    ///
    /// Estimate the size of one suite's CSV file from its measurement count.
    ///
    fn estimate_csv_size(samples: &[Sample]) -> usize {
        let measurements: usize = samples.iter().map(|sample| sample.benches.len()).sum();
        (measurements + 1) * Self::estimate_csv_line_length()
    }

    ///
    /// Escapes a string for a quoted CSV field.
    ///
    fn escape(text: &str) -> String {
        text.replace('"', "\"\"")
    }
}

impl From<Store> for Csv {
    fn from(store: Store) -> Csv {
        let mut files = Vec::with_capacity(store.entries.len());

        for (suite_name, samples) in store.entries.into_iter() {
            let mut content = String::with_capacity(Self::estimate_csv_size(samples.as_slice()));
            content.push_str(r#""commit", "date", "name", "value", "unit", "range""#);
            content.push('\n');

            for sample in samples.into_iter() {
                let Sample {
                    commit,
                    date,
                    benches,
                    ..
                } = sample;
                let date = date.to_rfc3339();

                for measurement in benches.into_iter() {
                    writeln!(
                        content,
                        r#""{}", "{}", "{}", {}, "{}", "{}""#,
                        commit.id,
                        date,
                        Self::escape(measurement.name.as_str()),
                        measurement.value,
                        Self::escape(measurement.unit.as_str()),
                        Self::escape(measurement.range.as_deref().unwrap_or_default()),
                    )
                    .expect("Always valid");
                }
            }

            files.push(File::new(
                format!("{}.csv", util::sanitize_file_name(suite_name.as_str())),
                content,
            ));
        }

        Self { files }
    }
}
