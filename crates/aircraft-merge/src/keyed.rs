use indexmap::IndexMap;
use tracing::debug;

use aircraft_model::Row;

use crate::error::{MergeError, Result};

/// Rows keyed by identifier, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedRows {
    rows: IndexMap<String, Row>,
}

impl KeyedRows {
    /// Key rows by their first field. A repeated identifier replaces the
    /// earlier row but keeps the earlier position.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut keyed = IndexMap::new();
        let mut duplicates = 0usize;
        for (index, row) in rows.into_iter().enumerate() {
            let Some(key) = row.first().cloned() else {
                return Err(MergeError::EmptyRow { record: index + 1 });
            };
            if keyed.insert(key, row).is_some() {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            debug!(duplicates, "replaced rows with repeated identifiers");
        }
        Ok(Self { rows: keyed })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.rows.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.rows.iter().map(|(key, row)| (key.as_str(), row))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Insert or replace, keeping an existing key's position.
    pub fn insert(&mut self, key: String, row: Row) -> Option<Row> {
        self.rows.insert(key, row)
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows.into_values().collect()
    }
}
