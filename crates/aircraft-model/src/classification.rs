//! ICAO-style aircraft description codes.
//!
//! A code has three positions: the aircraft category, the last digit of the
//! engine count, and the power-plant type (`L2J` is a landplane with two jet
//! engines). A position without a value renders as [`UNKNOWN_POSITION`].

use std::fmt;

/// Placeholder rendered for a position that has no value.
pub const UNKNOWN_POSITION: char = '?';

/// Aircraft category, position 0 of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftCategory {
    Landplane,
    Seaplane,
    Amphibian,
    Helicopter,
    Gyrocopter,
}

impl AircraftCategory {
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Landplane => 'L',
            Self::Seaplane => 'S',
            Self::Amphibian => 'A',
            Self::Helicopter => 'H',
            Self::Gyrocopter => 'G',
        }
    }
}

/// Power-plant type, position 2 of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerPlant {
    Jet,
    Turboprop,
    Piston,
    Electric,
}

impl PowerPlant {
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Jet => 'J',
            Self::Turboprop => 'T',
            Self::Piston => 'P',
            Self::Electric => 'E',
        }
    }
}

/// A three-position aircraft classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassificationCode {
    pub category: Option<AircraftCategory>,
    /// Final decimal digit of the engine count (0-9).
    pub engine_digit: Option<u8>,
    pub power_plant: Option<PowerPlant>,
}

impl ClassificationCode {
    /// A code with every position unknown (`???`).
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            category: None,
            engine_digit: None,
            power_plant: None,
        }
    }

    /// Records the engine count; only its last decimal digit is kept.
    #[must_use]
    pub const fn with_engine_count(mut self, count: u64) -> Self {
        self.engine_digit = Some((count % 10) as u8);
        self
    }

    /// The three rendered positions.
    #[must_use]
    pub fn chars(&self) -> [char; 3] {
        [
            self.category
                .map_or(UNKNOWN_POSITION, AircraftCategory::code),
            self.engine_digit
                .and_then(|digit| char::from_digit(u32::from(digit), 10))
                .unwrap_or(UNKNOWN_POSITION),
            self.power_plant.map_or(UNKNOWN_POSITION, PowerPlant::code),
        ]
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_renders_placeholders() {
        assert_eq!(ClassificationCode::unknown().to_string(), "???");
    }

    #[test]
    fn engine_count_keeps_last_digit() {
        let code = ClassificationCode::unknown().with_engine_count(12);
        assert_eq!(code.engine_digit, Some(2));
        assert_eq!(code.to_string(), "?2?");
    }
}
