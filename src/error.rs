//! Error types for the caller-facing layers.
//!
//! The statistical core never returns errors: degenerate numeric input
//! shows up as NaN or an infinity in the result records. These types cover
//! what happens before a test runs (data extraction, selection, input
//! validation).

use thiserror::Error;

use crate::types::TestKind;

/// Failure to extract samples from a [`crate::data::Table`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A required column is absent.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// No row carries the requested group label.
    #[error("no rows with {column} == '{label}'")]
    UnknownLabel {
        /// Grouping column.
        column: String,
        /// Requested label.
        label: String,
    },

    /// A record has a different number of fields than the header.
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Fields in the header.
        expected: usize,
        /// Fields in the row.
        found: usize,
    },

    /// A value column holds text that is not a number.
    #[error("column '{column}' row {row}: '{value}' is not numeric")]
    NotNumeric {
        /// Column name.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// Offending cell.
        value: String,
    },
}

/// An unrecognised test selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing was entered.
    #[error("no test selected")]
    Empty,

    /// Menu number outside 1-5.
    #[error("unknown test selector {0} (expected 1-5)")]
    UnknownSelector(u8),

    /// Name that matches no test kind.
    #[error("unknown test '{0}'")]
    UnknownName(String),
}

/// Why a test could not be dispatched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required input was not supplied.
    #[error("{kind} requires {what}")]
    MissingInput {
        /// Test being dispatched.
        kind: TestKind,
        /// Description of the missing input.
        what: &'static str,
    },

    /// Paired samples of different lengths.
    #[error("{kind} needs matched pairs: {len_a} vs {len_b} observations")]
    LengthMismatch {
        /// Test being dispatched.
        kind: TestKind,
        /// Length of the first sample.
        len_a: usize,
        /// Length of the second sample.
        len_b: usize,
    },

    /// A sample is below the minimum size for the statistic.
    #[error("{kind} needs at least {required} observations per sample, got {available}")]
    InsufficientSamples {
        /// Test being dispatched.
        kind: TestKind,
        /// Observations available.
        available: usize,
        /// Observations required.
        required: usize,
    },

    /// A sample contains NaN or an infinity.
    #[error("{kind}: sample contains non-finite values")]
    NonFinite {
        /// Test being dispatched.
        kind: TestKind,
    },

    /// Sample extraction failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Test selection failed.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AnalysisError::LengthMismatch {
            kind: TestKind::PairedT,
            len_a: 10,
            len_b: 9,
        };
        assert_eq!(err.to_string(), "paired_t needs matched pairs: 10 vs 9 observations");

        let err: AnalysisError = DataError::MissingColumn("math_score".into()).into();
        assert_eq!(err.to_string(), "missing column 'math_score'");

        let err = SelectionError::UnknownSelector(9);
        assert_eq!(err.to_string(), "unknown test selector 9 (expected 1-5)");
    }
}
