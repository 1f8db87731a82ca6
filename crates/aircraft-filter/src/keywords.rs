//! Keyword configuration and matching for owner and operator text.
//!
//! Terms are literal substrings. A field is interesting when it contains an
//! inclusion term (any case), no exact-case exclusion term, and no exclusion
//! term (any case). Only the first line of a field is searched.

use regex::Regex;

use crate::error::Result;

/// Owner-name terms marking a registration as interesting in the FAA registry.
pub const FAA_OWNER_TERMS: &[&str] = &[
    "versity",
    "college",
    "forest",
    "naval",
    "usda",
    "mosquito",
    "air force",
    "usaf",
    "aeronautic",
    "commission",
    "fire",
    "aviation administration",
    "school",
    "nasa",
    "environment",
    "fish",
    "club",
    "institute",
    "army",
    "agriculture",
    "development",
    "laboratory",
    "aviation authority",
    "board",
    "oceanic",
    "museum",
    "science",
    "water",
    "academy",
    "weed",
    "energy",
    "career",
    "consumer",
    "airforce",
    "engineer",
    "ag center",
    "project",
    "arsenal",
    "space",
    "navy",
    "marine",
    "power",
    "joey",
];

/// Operator/owner terms marking an OpenSky aircraft as law enforcement.
pub const OPENSKY_OPERATOR_TERMS: &[&str] = &[
    "patrol",
    "police",
    "policia",
    "sheriff",
    "state of",
    "highway",
    "law enforce",
];

/// Civilian organisations that contain an operator term.
pub const OPENSKY_EXCLUDED_TERMS: &[&str] = &[
    "civil air patrol",
    "forest patrol ltd",
    "bearhawk patrol",
    "llc",
    "patroller",
    "patrol inc",
    "patrols inc",
];

/// Upper-case spellings rejected only in that exact case.
pub const OPENSKY_EXACT_CASE_EXCLUDED_TERMS: &[&str] = &["PATROL"];

/// Ordered keyword terms injected into a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordRules {
    /// A field must contain one of these, compared case-insensitively.
    pub include: Vec<String>,
    /// A field containing one of these is rejected, compared case-insensitively.
    pub exclude: Vec<String>,
    /// A field containing one of these exactly as written is rejected.
    pub exclude_exact_case: Vec<String>,
}

impl KeywordRules {
    pub fn new<I, S>(include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_exclude<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = terms.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_exclude_exact_case<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_exact_case = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Government, academic and institutional owners in the FAA registry.
    pub fn faa_owner() -> Self {
        Self::new(FAA_OWNER_TERMS.iter().copied())
    }

    /// Law-enforcement operators in the OpenSky database.
    pub fn opensky_operator() -> Self {
        Self::new(OPENSKY_OPERATOR_TERMS.iter().copied())
            .with_exclude(OPENSKY_EXCLUDED_TERMS.iter().copied())
            .with_exclude_exact_case(OPENSKY_EXACT_CASE_EXCLUDED_TERMS.iter().copied())
    }

    pub fn compile(&self) -> Result<KeywordMatcher> {
        Ok(KeywordMatcher {
            include: build_pattern(&self.include, true)?,
            exclude: build_pattern(&self.exclude, true)?,
            exclude_exact_case: build_pattern(&self.exclude_exact_case, false)?,
        })
    }
}

/// Compiled form of [`KeywordRules`].
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    include: Option<Regex>,
    exclude: Option<Regex>,
    exclude_exact_case: Option<Regex>,
}

impl KeywordMatcher {
    /// With no inclusion terms nothing matches.
    pub fn is_match(&self, text: &str) -> bool {
        let Some(include) = &self.include else {
            return false;
        };
        include.is_match(text)
            && !matches_any(self.exclude_exact_case.as_ref(), text)
            && !matches_any(self.exclude.as_ref(), text)
    }

    pub fn include_pattern(&self) -> Option<&str> {
        self.include.as_ref().map(Regex::as_str)
    }

    pub fn exclude_pattern(&self) -> Option<&str> {
        self.exclude.as_ref().map(Regex::as_str)
    }

    pub fn exclude_exact_case_pattern(&self) -> Option<&str> {
        self.exclude_exact_case.as_ref().map(Regex::as_str)
    }
}

fn matches_any(pattern: Option<&Regex>, text: &str) -> bool {
    pattern.is_some_and(|regex| regex.is_match(text))
}

// `^.*` keeps the search on the first line of the field.
fn build_pattern(terms: &[String], case_insensitive: bool) -> Result<Option<Regex>> {
    let alternation: Vec<String> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| regex::escape(term))
        .collect();
    if alternation.is_empty() {
        return Ok(None);
    }
    let flags = if case_insensitive { "(?i)" } else { "" };
    let pattern = format!("{flags}^.*(?:{})", alternation.join("|"));
    Ok(Some(Regex::new(&pattern)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opensky_patterns_are_stable() {
        let matcher = KeywordRules::opensky_operator().compile().unwrap();
        insta::assert_snapshot!(
            matcher.include_pattern().unwrap(),
            @"(?i)^.*(?:patrol|police|policia|sheriff|state of|highway|law enforce)"
        );
        insta::assert_snapshot!(
            matcher.exclude_pattern().unwrap(),
            @"(?i)^.*(?:civil air patrol|forest patrol ltd|bearhawk patrol|llc|patroller|patrol inc|patrols inc)"
        );
        insta::assert_snapshot!(matcher.exclude_exact_case_pattern().unwrap(), @"^.*(?:PATROL)");
    }

    #[test]
    fn terms_are_matched_literally() {
        let matcher = KeywordRules::new(["u.s. army"]).compile().unwrap();
        assert!(matcher.is_match("U.S. ARMY CORPS"));
        assert!(!matcher.is_match("UXSX ARMY"));
    }

    #[test]
    fn inclusion_is_case_insensitive() {
        let matcher = KeywordRules::faa_owner().compile().unwrap();
        assert!(matcher.is_match("PURDUE UNIVERSITY"));
        assert!(matcher.is_match("City Fire Dept"));
        assert!(!matcher.is_match("SMITH JOHN"));
    }

    #[test]
    fn exclusion_wins_over_inclusion() {
        let matcher = KeywordRules::opensky_operator().compile().unwrap();
        assert!(matcher.is_match("County Sheriff"));
        assert!(!matcher.is_match("Civil Air Patrol"));
        assert!(!matcher.is_match("Sheriff Aviation LLC"));
    }

    #[test]
    fn exact_case_exclusion_only_rejects_that_case() {
        let matcher = KeywordRules::opensky_operator().compile().unwrap();
        assert!(!matcher.is_match("FLORIDA HIGHWAY PATROL"));
        assert!(matcher.is_match("Florida Highway Patrol"));
    }

    #[test]
    fn only_first_line_is_searched() {
        let matcher = KeywordRules::new(["police"]).compile().unwrap();
        assert!(matcher.is_match("city police\nhangar 4"));
        assert!(!matcher.is_match("hangar 4\ncity police"));
    }

    #[test]
    fn empty_rules_match_nothing() {
        let matcher = KeywordRules::default().compile().unwrap();
        assert!(!matcher.is_match("anything at all"));
        assert!(matcher.include_pattern().is_none());
    }
}
