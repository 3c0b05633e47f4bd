//!
//! The benchmark recorder arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark recorder arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Path to the benchmark data file, `data.js` or `data.json`.
    #[arg(long = "data-path", default_value = "dev/bench/data.js")]
    pub data_path: PathBuf,

    /// The benchmark suite name the sample is appended to.
    #[arg(long)]
    pub name: String,

    /// The benchmark tool that produced the input reports.
    #[arg(long, default_value = "pytest")]
    pub tool: String,

    /// The measurement unit recorded with each value.
    #[arg(long, default_value = "sec")]
    pub unit: String,

    /// Input report files, or a single directory to scan for JSON reports.
    #[arg(long = "input-paths")]
    pub input_paths: Vec<PathBuf>,

    /// Path to a JSON file with the commit descriptor of the measured
    /// revision, e.g. the `head_commit` object of the forge's event payload.
    #[arg(long = "commit-path")]
    pub commit_path: PathBuf,

    /// The repository URL recorded at the top level of the data file.
    #[arg(long = "repo-url")]
    pub repo_url: Option<String>,

    /// The maximum number of samples retained per suite; the oldest are dropped.
    #[arg(long = "max-items")]
    pub max_items: Option<usize>,

    /// The ratio over the previous sample that triggers a performance alert,
    /// e.g. `1.5` to alert on a 50% slowdown.
    #[arg(long = "alert-threshold")]
    pub alert_threshold: Option<f64>,

    /// Exit with a non-zero code when a performance alert is raised.
    #[arg(long = "fail-on-alert", default_value_t = false)]
    pub fail_on_alert: bool,
}
