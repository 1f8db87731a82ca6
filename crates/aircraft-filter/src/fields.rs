//! Fixed field positions of the source tables and checked access to them.

use crate::error::{FilterError, Result};

/// Positions in FAA `MASTER.txt` rows.
pub mod master {
    pub const TABLE: &str = "MASTER";
    /// MFR MDL CODE, joins to the reference table.
    pub const TYPE_KEY: usize = 2;
    /// TYPE REGISTRANT.
    pub const STATUS: usize = 5;
    /// NAME.
    pub const OWNER: usize = 6;
    /// MODE S CODE HEX.
    pub const ICAO24: usize = 33;
}

/// Positions in FAA `ACFTREF.txt` rows.
pub mod reference {
    pub const TABLE: &str = "ACFTREF";
    pub const KEY: usize = 0;
    pub const MANUFACTURER: usize = 1;
    pub const AIRCRAFT_TYPE: usize = 3;
    pub const ENGINE_TYPE: usize = 4;
    pub const CATEGORY: usize = 5;
    pub const ENGINE_COUNT: usize = 7;
}

/// Positions in OpenSky `aircraftDatabase.csv` rows.
pub mod opensky {
    pub const TABLE: &str = "OpenSky";
    pub const ICAO24: usize = 0;
    pub const MANUFACTURER: usize = 3;
    pub const AIRCRAFT_TYPE: usize = 8;
    pub const OPERATOR: usize = 9;
    pub const OWNER: usize = 13;
}

/// A row with its table name and record number, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'static str,
    record: usize,
    fields: &'a [String],
}

impl<'a> RowView<'a> {
    /// `index` is the zero-based position of the row in its table.
    pub fn new(table: &'static str, index: usize, fields: &'a [String]) -> Self {
        Self {
            table,
            record: index + 1,
            fields,
        }
    }

    /// One-based record number.
    pub fn record(&self) -> usize {
        self.record
    }

    pub fn get(&self, position: usize) -> Result<&'a str> {
        self.fields
            .get(position)
            .map(String::as_str)
            .ok_or(FilterError::MissingField {
                table: self.table,
                record: self.record,
                position,
                len: self.fields.len(),
            })
    }
}
