//! Headerless CSV reading and writing.

mod reader;
mod writer;

pub use reader::read_rows;
pub use writer::{CsvOutput, write_records, write_rows};
