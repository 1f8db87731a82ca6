//! Shared types for the interesting aircraft pipeline.

pub mod classification;
pub mod record;

pub use classification::{AircraftCategory, ClassificationCode, PowerPlant, UNKNOWN_POSITION};
pub use record::{AircraftRecord, Row};
