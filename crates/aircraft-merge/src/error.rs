//! Error types for keyed loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// Row has no fields, so there is no identifier to key it by.
    #[error("record {record}: empty row has no identifier")]
    EmptyRow { record: usize },
}

pub type Result<T> = std::result::Result<T, MergeError>;
