//!
//! Utility functions.
//!

///
/// The geometric mean of a sequence of ratios.
/// Returns 1.0 for an empty sequence.
///
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 1.0;
    }
    (values.iter().map(|value| value.ln()).sum::<f64>() / values.len() as f64).exp()
}

///
/// Turns a suite name into a file-system-safe stem.
///
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '_'
            }
        })
        .collect()
}

///
/// The abbreviated commit hash used in reports and exports.
///
pub fn shorten_commit_id(id: &str) -> &str {
    id.get(..7).unwrap_or(id)
}
