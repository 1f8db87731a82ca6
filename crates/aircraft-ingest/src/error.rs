//! Error types for archive extraction and CSV file handling.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading or writing pipeline files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Archive Errors ===
    /// File is not a readable zip archive.
    #[error("failed to open archive {path}: {source}")]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Named member is absent from the archive.
    #[error("member '{member}' not found in archive {path}")]
    MissingMember { path: PathBuf, member: String },

    /// Member exists but could not be decompressed.
    #[error("failed to read member '{member}' of archive {path}: {source}")]
    MemberRead {
        path: PathBuf,
        member: String,
        #[source]
        source: zip::result::ZipError,
    },

    // === Encoding Errors ===
    /// Label is not a known text encoding.
    #[error("unknown text encoding: {label}")]
    UnknownEncoding { label: String },

    /// Bytes are not valid in the configured encoding.
    #[error("malformed {encoding} text in {path}")]
    MalformedText {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to create or write a CSV file.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv_write(path: &Path, source: &csv::Error) -> Self {
        Self::CsvWrite {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
