//!
//! Data store reading and validation errors.
//!

use std::path::PathBuf;

///
/// Data file reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the data file.
    #[error("Data file {path:?} reading: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error parsing the data file.
    #[error("Data file {path:?} parsing: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Data file {path:?} is empty")]
    EmptyFile {
        /// The path to the data file.
        path: PathBuf,
    },
    /// The dashboard script flavor is missing its assignment wrapper.
    #[error("Data file {path:?} is not a dashboard script: the `window.BENCHMARK_DATA` assignment is missing")]
    MissingAssignment {
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error writing the data file.
    #[error("Data file {path:?} writing: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
}

///
/// Schema-level validation error.
///
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A sample without measurements.
    #[error("Suite {suite:?}, sample #{index}: `benches` is empty")]
    EmptyBenches {
        /// The suite name.
        suite: String,
        /// The sample position in the suite.
        index: usize,
    },
    /// A measurement with a negative or non-finite value.
    #[error("Suite {suite:?}, sample #{index}, bench {name:?}: value {value} is not a non-negative finite number")]
    InvalidValue {
        /// The suite name.
        suite: String,
        /// The sample position in the suite.
        index: usize,
        /// The bench name.
        name: String,
        /// The offending value.
        value: f64,
    },
}
