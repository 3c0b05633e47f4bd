//!
//! The benchmark reporter binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let store = benchmark_tracker::Store::try_from(arguments.data_path.as_path())?;
    store.validate()?;

    let suite_names: Vec<String> = match arguments.suite {
        Some(suite) => {
            if !store.entries.contains_key(suite.as_str()) {
                anyhow::bail!("Suite {suite:?} is not present in {:?}", arguments.data_path);
            }
            vec![suite]
        }
        None => store.entries.keys().cloned().collect(),
    };

    let mut stdout = std::io::stdout();
    for suite_name in suite_names.iter() {
        let out_of_order = store.out_of_order_dates(suite_name.as_str());
        if out_of_order > 0 {
            println!(
                "note: {out_of_order} sample(s) in suite '{suite_name}' are recorded out of chronological order"
            );
        }

        match store.last_two(suite_name.as_str()) {
            Some((previous, latest)) => {
                let mut results = benchmark_tracker::analysis::compare(previous, latest);
                results.sort_worst();
                results.print_worst_results(arguments.group_max, suite_name.as_str());
                results.write_all(&mut stdout, suite_name.as_str())?;
                println!();

                if let Some(threshold) = arguments.alert_threshold {
                    for (ratio, name) in results.regressions(threshold) {
                        println!(
                            "{} '{name}' is {ratio:.2}x the previous value (threshold {threshold:.2})",
                            "Performance alert:".bright_red()
                        );
                    }
                }
            }
            None => {
                println!("Suite '{suite_name}' has fewer than two samples; nothing to compare.");
            }
        }
    }

    if let Some(output_path) = arguments.output_path {
        let output: benchmark_tracker::Output = (store, arguments.output_format).try_into()?;
        output.write_to_file(output_path)?;
    }

    Ok(())
}
