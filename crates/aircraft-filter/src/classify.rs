//! Derivation of ICAO-style classification codes from FAA reference codes.
//!
//! Each position is decided by a chain of rules over a coded reference
//! field. Every rule in a chain is tested in order and the last one that
//! matches wins, so a later rule overrides an earlier match.

use aircraft_model::{AircraftCategory, ClassificationCode, PowerPlant};

use crate::error::{FilterError, Result};

/// The coded reference fields a classification is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodedFields<'a> {
    /// Reference table key, used in error messages.
    pub type_key: &'a str,
    /// AC-CAT: 1 land, 2 sea, 3 amphibian.
    pub category: &'a str,
    /// TYPE-ACFT: 1 glider, 4/5 fixed wing, 6 rotorcraft, 9 gyroplane, ...
    pub aircraft_type: &'a str,
    /// TYPE-ENG: 1 reciprocating, 2 turbo-prop, 3 turbo-shaft, 4 turbo-jet,
    /// 5 turbo-fan, 6 ramjet, 7/8 two/four cycle, 10 electric, 11 rotary.
    pub engine_type: &'a str,
    /// NO-ENG.
    pub engine_count: &'a str,
}

#[derive(Debug, Clone, Copy)]
enum Needle {
    AnyOf(&'static [char]),
    Substring(&'static str),
}

impl Needle {
    /// Only the first line of `field` is searched, as with the owner keywords.
    fn is_found_in(self, field: &str) -> bool {
        let first_line = field.split('\n').next().unwrap_or(field);
        match self {
            Self::AnyOf(chars) => first_line.contains(chars),
            Self::Substring(text) => first_line.contains(text),
        }
    }
}

type Rule<T> = (Needle, T);

const CATEGORY_RULES: [Rule<AircraftCategory>; 3] = [
    (Needle::AnyOf(&['1']), AircraftCategory::Landplane),
    (Needle::AnyOf(&['2']), AircraftCategory::Seaplane),
    (Needle::AnyOf(&['3']), AircraftCategory::Amphibian),
];

// Applied after CATEGORY_RULES and overriding them.
const AIRCRAFT_TYPE_RULES: [Rule<AircraftCategory>; 3] = [
    (Needle::AnyOf(&['1', '4', '5']), AircraftCategory::Landplane),
    (Needle::AnyOf(&['6']), AircraftCategory::Helicopter),
    (Needle::AnyOf(&['9']), AircraftCategory::Gyrocopter),
];

const ENGINE_TYPE_RULES: [Rule<PowerPlant>; 4] = [
    (Needle::AnyOf(&['4', '5', '6']), PowerPlant::Jet),
    (Needle::AnyOf(&['2', '3']), PowerPlant::Turboprop),
    (Needle::AnyOf(&['1', '7', '8']), PowerPlant::Piston),
    (Needle::Substring("10"), PowerPlant::Electric),
];

fn last_match<T: Copy>(rules: &[Rule<T>], field: &str) -> Option<T> {
    rules
        .iter()
        .rev()
        .find(|(needle, _)| needle.is_found_in(field))
        .map(|(_, value)| *value)
}

/// Derive the three-position code for one reference row.
///
/// Positions that no rule matches stay unknown. The engine count must be an
/// unsigned decimal integer (surrounding whitespace allowed).
pub fn classify(fields: &CodedFields<'_>) -> Result<ClassificationCode> {
    let category = last_match(&AIRCRAFT_TYPE_RULES, fields.aircraft_type)
        .or_else(|| last_match(&CATEGORY_RULES, fields.category));
    let power_plant = last_match(&ENGINE_TYPE_RULES, fields.engine_type);

    let engine_count = fields
        .engine_count
        .trim()
        .parse::<u64>()
        .map_err(|source| FilterError::InvalidEngineCount {
            key: fields.type_key.to_string(),
            value: fields.engine_count.to_string(),
            source,
        })?;

    Ok(ClassificationCode {
        category,
        power_plant,
        ..ClassificationCode::unknown()
    }
    .with_engine_count(engine_count))
}
