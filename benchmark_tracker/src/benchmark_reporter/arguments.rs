//!
//! The benchmark reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Path to the benchmark data file, `data.js` or `data.json`.
    #[arg(long = "data-path", default_value = "dev/bench/data.js")]
    pub data_path: PathBuf,

    /// Only report on the given suite; all suites by default.
    #[arg(long)]
    pub suite: Option<String>,

    /// Maximum number of per-bench rows displayed for a suite.
    #[arg(long = "group-max", default_value_t = 100)]
    pub group_max: usize,

    /// The ratio over the previous sample that is reported as a regression alert.
    #[arg(long = "alert-threshold")]
    pub alert_threshold: Option<f64>,

    /// The output file or directory. If unset, only the terminal report is printed.
    #[arg(short = 'o', long = "output-path")]
    pub output_path: Option<PathBuf>,

    /// History export format: `json`, `csv`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_tracker::OutputFormat::Json)]
    pub output_format: benchmark_tracker::OutputFormat,
}
