//! OpenSky aircraft database filter.

use tracing::{debug, trace};

use aircraft_model::{AircraftRecord, Row};

use crate::error::Result;
use crate::fields::{RowView, opensky};
use crate::keywords::{KeywordMatcher, KeywordRules};

/// Leading character of the ICAO addresses kept (the US `a` block).
pub const US_ADDRESS_PREFIX: char = 'a';

/// Settings for [`OpenSkyFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSkyFilterConfig {
    /// Rows are kept only when the identifier starts with this character.
    pub discriminator: char,
    pub operator_keywords: KeywordRules,
}

impl Default for OpenSkyFilterConfig {
    fn default() -> Self {
        Self {
            discriminator: US_ADDRESS_PREFIX,
            operator_keywords: KeywordRules::opensky_operator(),
        }
    }
}

/// Selects aircraft whose operator or owner looks like law enforcement.
#[derive(Debug, Clone)]
pub struct OpenSkyFilter {
    discriminator: char,
    operator: KeywordMatcher,
}

impl OpenSkyFilter {
    pub fn new(config: &OpenSkyFilterConfig) -> Result<Self> {
        Ok(Self {
            discriminator: config.discriminator,
            operator: config.operator_keywords.compile()?,
        })
    }

    pub fn is_interesting_operator(&self, text: &str) -> bool {
        self.operator.is_match(text)
    }

    /// Keep matching rows as `[icao24, manufacturer, aircraft type, owner]`,
    /// in source order. The owner column is only read when the operator
    /// column does not match.
    pub fn filter(&self, rows: &[Row]) -> Result<Vec<AircraftRecord>> {
        let mut accepted = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let aircraft = RowView::new(opensky::TABLE, index, row);
            let icao24 = aircraft.get(opensky::ICAO24)?;
            if !icao24.starts_with(self.discriminator) {
                continue;
            }
            let interesting = self.is_interesting_operator(aircraft.get(opensky::OPERATOR)?)
                || self.is_interesting_operator(aircraft.get(opensky::OWNER)?);
            if !interesting {
                continue;
            }

            let record = AircraftRecord::new(
                icao24,
                aircraft.get(opensky::MANUFACTURER)?,
                aircraft.get(opensky::AIRCRAFT_TYPE)?,
                aircraft.get(opensky::OWNER)?,
            );
            trace!(icao24 = %record.icao24, "accepted aircraft");
            accepted.push(record);
        }
        debug!(
            rows = rows.len(),
            accepted = accepted.len(),
            "filtered OpenSky aircraft"
        );
        Ok(accepted)
    }
}
