//! Tests for aircraft-model types.

use aircraft_model::{AircraftCategory, AircraftRecord, ClassificationCode, PowerPlant};

#[test]
fn full_code_renders_in_position_order() {
    let code = ClassificationCode {
        category: Some(AircraftCategory::Landplane),
        power_plant: Some(PowerPlant::Jet),
        ..ClassificationCode::unknown()
    }
    .with_engine_count(2);
    assert_eq!(code.to_string(), "L2J");
}

#[test]
fn letters_follow_icao_description_codes() {
    let categories = [
        AircraftCategory::Landplane,
        AircraftCategory::Seaplane,
        AircraftCategory::Amphibian,
        AircraftCategory::Helicopter,
        AircraftCategory::Gyrocopter,
    ];
    let letters: String = categories.into_iter().map(AircraftCategory::code).collect();
    assert_eq!(letters, "LSAHG");

    let plants = [
        PowerPlant::Jet,
        PowerPlant::Turboprop,
        PowerPlant::Piston,
        PowerPlant::Electric,
    ];
    let letters: String = plants.into_iter().map(PowerPlant::code).collect();
    assert_eq!(letters, "JTPE");
}

#[test]
fn record_fields_follow_constructor_order() {
    let record = AircraftRecord::new("a0b1c2", "Bell", "H1T", "County Sheriff");
    assert_eq!(record.icao24, "a0b1c2");
    assert_eq!(record.description, "Bell");
    assert_eq!(record.type_code, "H1T");
    assert_eq!(record.owner, "County Sheriff");
}
