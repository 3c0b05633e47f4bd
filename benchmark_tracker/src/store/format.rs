//!
//! Data file flavor.
//!

use std::path::Path;

use regex::Regex;

///
/// Data file flavor.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// The dashboard flavor: JSON behind a `window.BENCHMARK_DATA` assignment.
    Js,
    /// The bare JSON document.
    Json,
}

impl Format {
    /// The assignment the dashboard page expects at the top of the script.
    pub const SCRIPT_ASSIGNMENT: &'static str = "window.BENCHMARK_DATA = ";

    ///
    /// Detects the flavor from the file extension. Anything but `.json`
    /// is treated as the dashboard script.
    ///
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Js,
        }
    }

    ///
    /// Extracts the JSON payload from file contents of this flavor.
    /// Returns `None` if the script flavor has no assignment wrapper.
    ///
    pub fn payload<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Self::Json => Some(text),
            Self::Js => {
                let assignment =
                    Regex::new(r"^\s*window\.BENCHMARK_DATA\s*=\s*").expect("Always valid");
                let matched = assignment.find(text)?;
                let payload = text[matched.end()..]
                    .trim_end()
                    .trim_end_matches(';')
                    .trim_end();
                Some(payload)
            }
        }
    }

    ///
    /// Wraps a serialized JSON document into file contents of this flavor.
    ///
    pub fn encode(&self, json: String) -> String {
        match self {
            Self::Json => json,
            Self::Js => format!("{}{json}\n", Self::SCRIPT_ASSIGNMENT),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "js" => Ok(Self::Js),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown data file flavor `{string}`. Supported flavors: {}",
                vec![Self::Js, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Js => write!(f, "js"),
            Format::Json => write!(f, "json"),
        }
    }
}
