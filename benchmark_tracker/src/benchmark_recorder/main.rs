//!
//! The benchmark recorder binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let mut store = if arguments.data_path.exists() {
        benchmark_tracker::Store::try_from(arguments.data_path.as_path())?
    } else {
        benchmark_tracker::Store::new()
    };
    if arguments.repo_url.is_some() {
        store.repo_url = arguments.repo_url;
    }

    let commit = benchmark_tracker::Commit::try_from(arguments.commit_path)?;
    commit.validate()?;

    let mut measurements = Vec::new();
    if arguments.input_paths.len() == 1 && arguments.input_paths[0].is_dir() {
        let resolution_pattern =
            format!("{}/**/*.json", arguments.input_paths[0].to_string_lossy());
        for path in glob::glob(resolution_pattern.as_str())?.filter_map(Result::ok) {
            let report = benchmark_tracker::InputReport::try_from(path.as_path())?;
            measurements.extend(report.into_measurements(arguments.unit.as_str()));
        }
    } else if arguments.input_paths.is_empty() {
        anyhow::bail!(
            "No input files provided. Use `--input-paths` to specify report files or a directory."
        );
    } else {
        for input_path in arguments.input_paths.iter() {
            let report = benchmark_tracker::InputReport::try_from(input_path.as_path())?;
            measurements.extend(report.into_measurements(arguments.unit.as_str()));
        }
    }
    if measurements.is_empty() {
        anyhow::bail!("Input reports contain no measurements; nothing to record.");
    }

    let sample = benchmark_tracker::Sample::new(
        commit,
        chrono::Utc::now(),
        arguments.tool,
        measurements,
    );

    let mut alerts: Vec<(f64, String)> = Vec::new();
    if let Some(threshold) = arguments.alert_threshold {
        if let Some(previous) = store
            .suite(arguments.name.as_str())
            .and_then(|samples| samples.last())
        {
            let results = benchmark_tracker::analysis::compare(previous, &sample);
            alerts = results
                .regressions(threshold)
                .into_iter()
                .map(|(ratio, name)| (ratio, name.to_owned()))
                .collect();
        }
    }

    store.append(arguments.name.as_str(), sample);
    if let Some(max_items) = arguments.max_items {
        let dropped = store.truncate(arguments.name.as_str(), max_items);
        if dropped > 0 {
            println!(
                "Dropped {dropped} oldest sample(s) of suite '{}' to keep the last {max_items}.",
                arguments.name
            );
        }
    }
    store.write_to_file(arguments.data_path.as_path())?;
    println!(
        "Recorded sample #{} in suite '{}'.",
        store
            .suite(arguments.name.as_str())
            .map(<[benchmark_tracker::Sample]>::len)
            .unwrap_or_default(),
        arguments.name
    );

    if !alerts.is_empty() {
        let threshold = arguments.alert_threshold.unwrap_or_default();
        for (ratio, name) in alerts.iter() {
            println!(
                "{} '{name}' is {ratio:.2}x the previous value (threshold {threshold:.2})",
                "Performance alert:".bright_red()
            );
        }
        if arguments.fail_on_alert {
            anyhow::bail!(
                "{} bench(es) regressed beyond the alert threshold",
                alerts.len()
            );
        }
    }

    Ok(())
}
