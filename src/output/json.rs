//! JSON serialization for analysis results.

use serde::Serialize;

/// Serialize results to a compact JSON string.
///
/// Accepts anything serializable: a single [`crate::TestOutcome`], one
/// [`crate::AnalysisReport`] or a slice of them.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// result types of this crate).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize results to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
