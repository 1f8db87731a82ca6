//! File-level plumbing for the interesting aircraft pipeline.
//!
//! # Features
//!
//! - **Archive Extraction**: Copy named zip members verbatim to disk
//! - **CSV Reading**: Headerless, flexible rows decoded with a configured text encoding
//! - **CSV Writing**: Headerless, minimally quoted rows with CRLF terminators
//! - **Checksums**: SHA-256 of written outputs for run-to-run comparison

mod archive;
mod checksum;
mod encoding;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Archives ===
pub use archive::{ArchiveMember, extract_members};

// === Text Decoding ===
pub use encoding::{REGISTRY_ENCODING_LABEL, TextEncoding};

// === CSV ===
pub use table::{CsvOutput, read_rows, write_records, write_rows};

// === Checksums ===
pub use checksum::compute_file_sha256;
