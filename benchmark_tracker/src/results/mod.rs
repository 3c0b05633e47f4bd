//!
//! The suite comparison results.
//!

use std::cmp;

use colored::Colorize;

///
/// The suite comparison results.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// The ratio geometric mean.
    pub mean: f64,
    /// The best (lowest) ratio.
    pub best: f64,
    /// The worst (highest) ratio.
    pub worst: f64,
    /// The benches that got slower, as (ratio, name).
    pub negatives: Vec<(f64, &'a str)>,
    /// The benches that got faster, as (ratio, name).
    pub positives: Vec<(f64, &'a str)>,
}

impl<'a> Results<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        mean: f64,
        best: f64,
        worst: f64,
        negatives: Vec<(f64, &'a str)>,
        positives: Vec<(f64, &'a str)>,
    ) -> Self {
        Self {
            mean,
            best,
            worst,
            negatives,
            positives,
        }
    }

    ///
    /// Sorts the results with the largest changes first.
    ///
    pub fn sort_worst(&mut self) {
        self.negatives
            .sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(cmp::Ordering::Equal));
        self.positives
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(cmp::Ordering::Equal));
    }

    ///
    /// The benches whose slowdown ratio meets or exceeds the threshold.
    ///
    pub fn regressions(&self, threshold: f64) -> Vec<(f64, &'a str)> {
        self.negatives
            .iter()
            .copied()
            .filter(|(ratio, _name)| *ratio >= threshold)
            .collect()
    }

    ///
    /// Writes the worst benchmark results top to the terminal.
    ///
    pub fn print_worst_results(&self, count: usize, suite_name: &str) {
        println!(
            "Suite '{}' time (-%) worst {} out of {}:",
            suite_name,
            cmp::min(count, self.negatives.len()),
            self.negatives.len()
        );
        for (value, name) in self.negatives.iter().take(count) {
            println!("{:010}: {}", Self::format_ratio(*value), name);
        }
        println!();
        println!(
            "Suite '{}' time (-%) best {} out of {}:",
            suite_name,
            cmp::min(count, self.positives.len()),
            self.positives.len()
        );
        for (value, name) in self.positives.iter().take(count) {
            println!("{:010}: {}", Self::format_ratio(*value), name);
        }
        println!();
    }

    ///
    /// Writes the summary table to a file or terminal.
    ///
    pub fn write_all<W>(&self, w: &mut W, suite_name: &str) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            "Time (-%)".bright_white(),
            "═".repeat(24usize.saturating_sub(suite_name.len())),
            suite_name.bright_white()
        )?;
        writeln!(
            w,
            "║ {:33} {:07} ║",
            "Mean".bright_white(),
            Self::format_ratio(self.mean)
        )?;
        writeln!(
            w,
            "║ {:33} {:07} ║",
            "Best".bright_white(),
            Self::format_ratio(self.best)
        )?;
        writeln!(
            w,
            "║ {:33} {:07} ║",
            "Worst".bright_white(),
            Self::format_ratio(self.worst)
        )?;
        writeln!(w, "╚═{}═╝", "═".repeat(42))?;
        Ok(())
    }

    ///
    /// Formats and colorizes a ratio as a percentage improvement.
    ///
    fn format_ratio(value: f64) -> colored::ColoredString {
        if value > 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).bright_red()
        } else if value == 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).white()
        } else {
            format!("{:7.3}", 100.0 - value * 100.0).green()
        }
    }
}
