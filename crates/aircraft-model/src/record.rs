use serde::Serialize;

/// A raw, positionally addressed table row.
pub type Row = Vec<String>;

/// One filtered aircraft, keyed by its ICAO 24-bit address.
///
/// Registry records carry a derived classification code in `type_code`;
/// tracker records carry the source's own ICAO aircraft type text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftRecord {
    pub icao24: String,
    pub description: String,
    pub type_code: String,
    pub owner: String,
}

impl AircraftRecord {
    pub fn new(
        icao24: impl Into<String>,
        description: impl Into<String>,
        type_code: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            icao24: icao24.into(),
            description: description.into(),
            type_code: type_code.into(),
            owner: owner.into(),
        }
    }
}
