//!
//! Output history format.
//!

///
/// Output history format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// The bare store as pretty-printed JSON.
    Json,
    /// One CSV file per suite.
    Csv,
    /// Excel spreadsheet format, one worksheet per suite.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                vec![Self::Json, Self::Csv, Self::Xlsx]
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
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
