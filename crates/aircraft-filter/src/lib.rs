//! Filters that reduce the FAA registry and the OpenSky aircraft database to
//! interesting aircraft.
//!
//! Both filters are pure: they take already-parsed rows and return the
//! accepted records in source order. Keyword sets are plain configuration
//! ([`KeywordRules`]) compiled once into a [`KeywordMatcher`].

mod classify;
mod error;
mod faa;
pub mod fields;
mod keywords;
mod opensky;
mod text;

pub use classify::{CodedFields, classify};
pub use error::{FilterError, Result};
pub use faa::{FaaFilter, FaaFilterConfig, ReferenceTable};
pub use keywords::{
    FAA_OWNER_TERMS, KeywordMatcher, KeywordRules, OPENSKY_EXACT_CASE_EXCLUDED_TERMS,
    OPENSKY_EXCLUDED_TERMS, OPENSKY_OPERATOR_TERMS,
};
pub use opensky::{OpenSkyFilter, OpenSkyFilterConfig};
pub use text::capwords;
