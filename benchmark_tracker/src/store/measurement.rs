//!
//! One scalar measurement within a sample.
//!

///
/// One scalar measurement within a sample: an element of the `benches` array.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// The benchmark test identifier, e.g. "test_analyze_ssl31".
    pub name: String,
    /// The measured value; non-negative.
    pub value: f64,
    /// The measurement unit, e.g. "sec".
    pub unit: String,
    /// The measurement noise, formatted as "stddev: X".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Free text restating the mean and the number of rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Measurement {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: String,
        value: f64,
        unit: String,
        range: Option<String>,
        extra: Option<String>,
    ) -> Self {
        Self {
            name,
            value,
            unit,
            range,
            extra,
        }
    }
}
