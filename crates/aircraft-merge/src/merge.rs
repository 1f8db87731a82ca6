use tracing::debug;

use aircraft_model::Row;

use crate::keyed::KeyedRows;

/// The tables derived from comparing the registry set (A) with the tracker
/// set (B).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// B rows whose identifier is also in A, in B order.
    pub common_b: Vec<Row>,
    /// The A rows for the same identifiers, line-aligned with `common_b`.
    pub common_a: Vec<Row>,
    /// B rows absent from A, in B order.
    pub only_b: Vec<Row>,
    /// A rows absent from B, in A order.
    pub only_a: Vec<Row>,
    /// A overlaid with B: A's keys first, B's row on shared keys, then B's
    /// remaining keys.
    pub union: Vec<Row>,
}

impl MergeReport {
    pub fn intersection_len(&self) -> usize {
        self.common_b.len()
    }
}

/// Compare two keyed tables.
pub fn merge(a: &KeyedRows, b: &KeyedRows) -> MergeReport {
    let mut report = MergeReport::default();

    for (key, b_row) in b.iter() {
        match a.get(key) {
            Some(a_row) => {
                report.common_b.push(b_row.clone());
                report.common_a.push(a_row.clone());
            }
            None => report.only_b.push(b_row.clone()),
        }
    }

    report.only_a = a
        .iter()
        .filter(|(key, _)| !b.contains_key(key))
        .map(|(_, row)| row.clone())
        .collect();

    let mut union = a.clone();
    for (key, b_row) in b.iter() {
        union.insert(key.to_string(), b_row.clone());
    }
    report.union = union.into_rows();

    debug!(
        a = a.len(),
        b = b.len(),
        intersection = report.intersection_len(),
        union = report.union.len(),
        "merged keyed tables"
    );
    report
}
