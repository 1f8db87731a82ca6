//! Tests for the OpenSky aircraft database filter.

use aircraft_filter::{FilterError, OpenSkyFilter, OpenSkyFilterConfig};
use aircraft_model::{AircraftRecord, Row};

const OPENSKY_WIDTH: usize = 27;

fn aircraft(icao24: &str, operator: &str, owner: &str) -> Row {
    let mut row = vec![String::new(); OPENSKY_WIDTH];
    row[0] = icao24.to_string();
    row[1] = "N12345".to_string();
    row[3] = "Bell Helicopter".to_string();
    row[8] = "H1T".to_string();
    row[9] = operator.to_string();
    row[13] = owner.to_string();
    row
}

fn default_filter() -> OpenSkyFilter {
    OpenSkyFilter::new(&OpenSkyFilterConfig::default()).unwrap()
}

#[test]
fn keeps_us_law_enforcement_aircraft() {
    let rows = vec![
        aircraft("a12345", "", "STATE OF TEXAS DPS"),
        aircraft("b99999", "", "STATE OF TEXAS DPS"),
    ];
    let records = default_filter().filter(&rows).unwrap();
    assert_eq!(
        records,
        vec![AircraftRecord::new(
            "a12345",
            "Bell Helicopter",
            "H1T",
            "STATE OF TEXAS DPS",
        )]
    );
}

#[test]
fn operator_or_owner_may_match() {
    let rows = vec![
        aircraft("a00001", "County Sheriff", ""),
        aircraft("a00002", "", "City Police Department"),
        aircraft("a00003", "Acme Charter", "Acme Holdings"),
    ];
    let records = default_filter().filter(&rows).unwrap();
    let keys: Vec<&str> = records.iter().map(|record| record.icao24.as_str()).collect();
    assert_eq!(keys, ["a00001", "a00002"]);
    // The owner column is copied as-is even when the operator matched.
    assert_eq!(records[0].owner, "");
}

#[test]
fn exclusions_reject_civilian_patrols() {
    let rows = vec![
        aircraft("a00001", "Civil Air Patrol", ""),
        aircraft("a00002", "", "Pipeline Patrol Inc"),
        aircraft("a00003", "", "FLORIDA HIGHWAY PATROL"),
        aircraft("a00004", "", "Florida Highway Patrol"),
    ];
    let records = default_filter().filter(&rows).unwrap();
    let keys: Vec<&str> = records.iter().map(|record| record.icao24.as_str()).collect();
    assert_eq!(keys, ["a00004"]);
}

#[test]
fn excluded_operator_falls_back_to_owner() {
    let rows = vec![aircraft("a00001", "Sheriff Aviation LLC", "County Sheriff")];
    let records = default_filter().filter(&rows).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn discriminator_is_case_sensitive_prefix() {
    let rows = vec![
        aircraft("A00001", "County Sheriff", ""),
        aircraft(" a00002", "County Sheriff", ""),
        aircraft("a00003", "County Sheriff", ""),
    ];
    let records = default_filter().filter(&rows).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].icao24, "a00003");
}

#[test]
fn other_fields_are_not_read_for_foreign_identifiers() {
    let rows = vec![
        vec!["c0ffee".to_string()],
        aircraft("a00001", "State Police", ""),
    ];
    let records = default_filter().filter(&rows).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn short_candidate_row_is_fatal() {
    let rows = vec![vec!["a00001".to_string(), "N1".to_string()]];
    let err = default_filter().filter(&rows).unwrap_err();
    assert!(matches!(
        err,
        FilterError::MissingField {
            table: "OpenSky",
            record: 1,
            position: 9,
            ..
        }
    ));
}

#[test]
fn header_row_is_treated_as_data() {
    let mut header = aircraft("icao24", "operator", "owner");
    header[3] = "manufacturername".to_string();
    let records = default_filter().filter(&[header]).unwrap();
    assert!(records.is_empty());
}
