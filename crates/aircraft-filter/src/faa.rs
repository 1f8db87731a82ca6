//! FAA registry filter: MASTER registrations joined to ACFTREF type rows.

use std::collections::HashMap;

use tracing::{debug, trace};

use aircraft_model::{AircraftRecord, Row};

use crate::classify::{CodedFields, classify};
use crate::error::{FilterError, Result};
use crate::fields::{RowView, master, reference};
use crate::keywords::{KeywordMatcher, KeywordRules};
use crate::text::capwords;

/// TYPE REGISTRANT value for government registrations.
pub const GOVERNMENT_STATUS: &str = "5";

/// Settings for [`FaaFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaaFilterConfig {
    /// Registrations are kept only when their status equals this exactly.
    pub status_code: String,
    pub owner_keywords: KeywordRules,
}

impl Default for FaaFilterConfig {
    fn default() -> Self {
        Self {
            status_code: GOVERNMENT_STATUS.to_string(),
            owner_keywords: KeywordRules::faa_owner(),
        }
    }
}

/// ACFTREF rows keyed by their type code.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    // Row index in the source table, for error messages.
    rows: HashMap<String, (usize, Row)>,
}

impl ReferenceTable {
    /// Index rows by their first field; a later row replaces an earlier one
    /// with the same key.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let mut indexed = HashMap::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let key = RowView::new(reference::TABLE, index, &row)
                .get(reference::KEY)?
                .to_string();
            indexed.insert(key, (index, row));
        }
        debug!(types = indexed.len(), "indexed reference table");
        Ok(Self { rows: indexed })
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.rows.get(key).map(|(_, row)| row)
    }

    fn view(&self, key: &str) -> Option<RowView<'_>> {
        self.rows
            .get(key)
            .map(|(index, row)| RowView::new(reference::TABLE, *index, row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Selects government-owned registrations with an interesting owner name.
#[derive(Debug, Clone)]
pub struct FaaFilter {
    status_code: String,
    owner: KeywordMatcher,
}

impl FaaFilter {
    pub fn new(config: &FaaFilterConfig) -> Result<Self> {
        Ok(Self {
            status_code: config.status_code.clone(),
            owner: config.owner_keywords.compile()?,
        })
    }

    pub fn is_interesting_owner(&self, owner: &str) -> bool {
        self.owner.is_match(owner)
    }

    /// Filter and classify registrations, preserving their order.
    ///
    /// Every accepted registration must resolve to a reference row.
    pub fn filter(
        &self,
        registrations: &[Row],
        reference_table: &ReferenceTable,
    ) -> Result<Vec<AircraftRecord>> {
        let mut accepted = Vec::new();
        for (index, row) in registrations.iter().enumerate() {
            let registration = RowView::new(master::TABLE, index, row);
            if registration.get(master::STATUS)? != self.status_code {
                continue;
            }
            let owner = registration.get(master::OWNER)?;
            if !self.is_interesting_owner(owner) {
                continue;
            }

            let type_key = registration.get(master::TYPE_KEY)?;
            let Some(reference_row) = reference_table.view(type_key) else {
                return Err(FilterError::UnknownTypeKey {
                    record: registration.record(),
                    key: type_key.to_string(),
                });
            };
            let record = build_record(&registration, &reference_row)?;
            trace!(
                icao24 = %record.icao24,
                type_code = %record.type_code,
                "accepted registration"
            );
            accepted.push(record);
        }
        debug!(
            registrations = registrations.len(),
            accepted = accepted.len(),
            "filtered FAA registrations"
        );
        Ok(accepted)
    }
}

fn build_record(
    registration: &RowView<'_>,
    reference_view: &RowView<'_>,
) -> Result<AircraftRecord> {
    let type_key = reference_view.get(reference::KEY)?;
    let code = classify(&CodedFields {
        type_key,
        category: reference_view.get(reference::CATEGORY)?,
        aircraft_type: reference_view.get(reference::AIRCRAFT_TYPE)?,
        engine_type: reference_view.get(reference::ENGINE_TYPE)?,
        engine_count: reference_view.get(reference::ENGINE_COUNT)?,
    })?;

    Ok(AircraftRecord {
        icao24: registration.get(master::ICAO24)?.trim().to_lowercase(),
        description: capwords(reference_view.get(reference::MANUFACTURER)?),
        type_code: code.to_string(),
        owner: capwords(registration.get(master::OWNER)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn later_reference_row_wins() {
        let table = ReferenceTable::from_rows(vec![
            row(&["0010101", "CESSNA"]),
            row(&["0010101", "TEXTRON"]),
        ])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("0010101").unwrap()[1], "TEXTRON");
    }

    #[test]
    fn empty_reference_row_is_an_error() {
        let err = ReferenceTable::from_rows(vec![Vec::new()]).unwrap_err();
        assert!(matches!(err, FilterError::MissingField { position: 0, .. }));
    }
}
