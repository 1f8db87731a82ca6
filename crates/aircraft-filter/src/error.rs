//! Error types for filtering and classification.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while filtering source rows. All of them abort the stage.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Row is shorter than a field position the filter reads.
    #[error("{table} record {record}: missing field {position} (record has {len} fields)")]
    MissingField {
        table: &'static str,
        record: usize,
        position: usize,
        len: usize,
    },

    /// Accepted registration refers to a type key absent from the reference table.
    #[error("MASTER record {record}: type key '{key}' not found in reference table")]
    UnknownTypeKey { record: usize, key: String },

    /// Reference row's engine count is not an unsigned decimal integer.
    #[error("reference row '{key}': engine count '{value}' is not a number: {source}")]
    InvalidEngineCount {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Keyword terms did not compile into a pattern.
    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
