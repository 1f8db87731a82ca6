//! Tests for the FAA registry filter.

use aircraft_filter::{FaaFilter, FaaFilterConfig, FilterError, KeywordRules, ReferenceTable};
use aircraft_model::{AircraftRecord, Row};

const MASTER_WIDTH: usize = 35;

fn master(type_key: &str, status: &str, owner: &str, icao24: &str) -> Row {
    let mut row = vec![String::new(); MASTER_WIDTH];
    row[2] = type_key.to_string();
    row[5] = status.to_string();
    row[6] = owner.to_string();
    row[33] = icao24.to_string();
    row
}

/// `[key, mfr, model, type-acft, type-eng, ac-cat, build-cert, no-eng]`
fn reference(fields: [&str; 8]) -> Row {
    fields.iter().map(|f| (*f).to_string()).collect()
}

fn reference_table() -> ReferenceTable {
    ReferenceTable::from_rows(vec![
        reference(["05611CW", "GULFSTREAM AEROSPACE", "G-IV", "4", "6", "2", "0", "2"]),
        reference(["1151320", "BELL", "206B", "6", "3", "1", "0", "01"]),
        reference(["2072738", "CESSNA", "172S", "4", "1", "1", "0", "1"]),
    ])
    .unwrap()
}

fn default_filter() -> FaaFilter {
    FaaFilter::new(&FaaFilterConfig::default()).unwrap()
}

#[test]
fn classifies_and_formats_accepted_registration() {
    let rows = vec![master(
        "05611CW",
        "5",
        "NATIONAL AERONAUTICS AND SPACE ADMINISTRATION",
        " A0B1C2 ",
    )];
    let records = default_filter().filter(&rows, &reference_table()).unwrap();
    assert_eq!(
        records,
        vec![AircraftRecord::new(
            "a0b1c2",
            "Gulfstream Aerospace",
            "L2J",
            "National Aeronautics And Space Administration",
        )]
    );
}

#[test]
fn keeps_only_government_registrations_with_interesting_owner() {
    let rows = vec![
        master("2072738", "1", "PURDUE UNIVERSITY", "A00001"),
        master("2072738", "5", "SMITH JOHN", "A00002"),
        master("2072738", "5 ", "US FOREST SERVICE", "A00003"),
        master("1151320", "5", "us forest service", "A00004"),
    ];
    let records = default_filter().filter(&rows, &reference_table()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].icao24, "a00004");
    assert_eq!(records[0].type_code, "H1T");
    assert_eq!(records[0].owner, "Us Forest Service");
}

#[test]
fn preserves_registration_order() {
    let rows = vec![
        master("2072738", "5", "NAVAL AIR STATION", "A00003"),
        master("1151320", "5", "STATE FIRE DEPT", "A00001"),
        master("05611CW", "5", "AIR FORCE MUSEUM", "A00002"),
    ];
    let filter = default_filter();
    let table = reference_table();
    let first = filter.filter(&rows, &table).unwrap();
    let keys: Vec<&str> = first.iter().map(|record| record.icao24.as_str()).collect();
    assert_eq!(keys, ["a00003", "a00001", "a00002"]);

    let second = filter.filter(&rows, &table).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_type_key_for_accepted_registration_is_fatal() {
    let rows = vec![
        master("9999999", "1", "SMITH JOHN", "A00001"),
        master("9999999", "5", "STATE UNIVERSITY", "A00002"),
    ];
    let err = default_filter()
        .filter(&rows, &reference_table())
        .unwrap_err();
    match err {
        FilterError::UnknownTypeKey { record, key } => {
            assert_eq!(record, 2);
            assert_eq!(key, "9999999");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_registration_is_fatal() {
    let mut row = master("2072738", "5", "STATE UNIVERSITY", "A00001");
    row.truncate(20);
    let err = default_filter()
        .filter(&[row], &reference_table())
        .unwrap_err();
    assert!(matches!(
        err,
        FilterError::MissingField {
            table: "MASTER",
            position: 33,
            len: 20,
            ..
        }
    ));
}

#[test]
fn non_numeric_engine_count_is_fatal() {
    let table = ReferenceTable::from_rows(vec![reference([
        "0000001", "ACME", "X", "4", "1", "1", "0", "two",
    ])])
    .unwrap();
    let rows = vec![master("0000001", "5", "STATE UNIVERSITY", "A00001")];
    let err = default_filter().filter(&rows, &table).unwrap_err();
    assert!(matches!(err, FilterError::InvalidEngineCount { .. }));
    assert!(err.to_string().contains("'two'"));
}

#[test]
fn engine_count_keeps_last_digit() {
    let table = ReferenceTable::from_rows(vec![reference([
        "0000001", "BOEING", "B-52", "4", "5", "1", "0", "08",
    ])])
    .unwrap();
    let rows = vec![master("0000001", "5", "US AIR FORCE", "AE0001")];
    let records = default_filter().filter(&rows, &table).unwrap();
    assert_eq!(records[0].type_code, "L8J");
}

#[test]
fn injected_configuration_replaces_defaults() {
    let config = FaaFilterConfig {
        status_code: "1".to_string(),
        owner_keywords: KeywordRules::new(["flying"]),
    };
    let filter = FaaFilter::new(&config).unwrap();
    let rows = vec![
        master("2072738", "1", "FLYING CLUB", "A00001"),
        master("2072738", "5", "FLYING CLUB", "A00002"),
        master("2072738", "1", "STATE UNIVERSITY", "A00003"),
    ];
    let records = filter.filter(&rows, &reference_table()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].icao24, "a00001");
}
