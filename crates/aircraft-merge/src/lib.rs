//! Merging of the two filtered aircraft tables.
//!
//! Rows are keyed by their first field (the ICAO 24-bit address). Both
//! tables are loaded into insertion-ordered maps and compared as sets; every
//! derived table keeps the iteration order of the map it was drawn from.

mod error;
mod keyed;
mod merge;

pub use error::{MergeError, Result};
pub use keyed::KeyedRows;
pub use merge::{MergeReport, merge};
