//! # Timezone Resolver
//!
//! Best-effort timezone lookup for free-text locations.
//!
//! Carrier tracking feeds timestamp events in local time and name the
//! location as free text. The resolver maps that text to an IANA timezone
//! identifier using a precomputed country → city → timezone table, trying
//! an exact match first and falling back to approximate matching with
//! length-adaptive acceptance thresholds.
//!
//! The table is generated offline from a geographic place-name dataset,
//! loaded once at startup, and never mutated afterwards, so it is safely
//! shared by any number of concurrent lookups without locking.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::services::timezone::{TimezoneMap, TimezoneResolver};
//!
//! let mut map = TimezoneMap::new();
//! map.insert("SE", "Stockholm", "Europe/Stockholm");
//!
//! let resolver = TimezoneResolver::new(map);
//! let result = resolver.find("Stockholm", "SE").unwrap();
//!
//! assert_eq!(result.timezone(), "Europe/Stockholm");
//! assert_eq!(result.matched_location(), "stockholm");
//! ```

use crate::domain::services::location::{normalize, similarity_percent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for timezone table loading.
#[derive(Debug, Error)]
pub enum TimezoneDataError {
    /// The data file could not be read.
    #[error("failed to read timezone data: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid JSON of the expected shape.
    #[error("failed to parse timezone data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The precomputed country → city → timezone table.
///
/// Country codes are ISO-3166 alpha-2, stored uppercase; city keys are
/// stored in normalized form (see
/// [`normalize`](crate::domain::services::location::normalize)); values are
/// IANA timezone identifiers. `BTreeMap` keeps iteration order
/// deterministic, which the resolver's tie-breaking relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimezoneMap {
    countries: BTreeMap<String, BTreeMap<String, String>>,
}

impl TimezoneMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from raw nested data, normalizing all keys.
    #[must_use]
    pub fn from_nested(raw: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let mut map = Self::new();
        for (country, cities) in raw {
            for (city, timezone) in cities {
                map.insert(&country, &city, &timezone);
            }
        }
        map
    }

    /// Parses a table from a generated JSON document.
    ///
    /// Expected shape: `{"SE": {"stockholm": "Europe/Stockholm", ...}, ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneDataError::Parse`] on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, TimezoneDataError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;
        Ok(Self::from_nested(raw))
    }

    /// Loads a table from a generated JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneDataError::Io`] if the file cannot be read and
    /// [`TimezoneDataError::Parse`] on malformed JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimezoneDataError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Inserts one entry, normalizing the keys.
    ///
    /// Intended for table construction; hand the finished table to a
    /// [`TimezoneResolver`], which never mutates it.
    pub fn insert(&mut self, country_code: &str, city: &str, timezone: impl Into<String>) {
        self.countries
            .entry(country_code.trim().to_ascii_uppercase())
            .or_default()
            .insert(normalize(city), timezone.into());
    }

    /// Returns the city table for a country code.
    #[must_use]
    pub fn country(&self, country_code: &str) -> Option<&BTreeMap<String, String>> {
        self.countries.get(country_code)
    }

    /// Returns the number of countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterates over `(country, cities)` pairs in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, String>)> {
        self.countries.iter()
    }
}

/// A successful timezone lookup.
///
/// # Invariants
///
/// - Constructed only when a match (exact or fuzzy-accepted) was found, so
///   `timezone` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneResult {
    /// The matched IANA timezone identifier.
    timezone: String,
    /// The queried location, in normalized form.
    input_location: String,
    /// The table entry that matched, in normalized form.
    matched_location: String,
}

impl TimezoneResult {
    fn new(
        timezone: impl Into<String>,
        input_location: impl Into<String>,
        matched_location: impl Into<String>,
    ) -> Self {
        Self {
            timezone: timezone.into(),
            input_location: input_location.into(),
            matched_location: matched_location.into(),
        }
    }

    /// Returns the IANA timezone identifier.
    #[inline]
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the queried location in normalized form.
    #[inline]
    #[must_use]
    pub fn input_location(&self) -> &str {
        &self.input_location
    }

    /// Returns the matched table entry in normalized form.
    #[inline]
    #[must_use]
    pub fn matched_location(&self) -> &str {
        &self.matched_location
    }
}

/// Resolves free-text locations to timezones over an immutable table.
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    map: TimezoneMap,
}

impl TimezoneResolver {
    /// Creates a resolver over the given table.
    #[must_use]
    pub fn new(map: TimezoneMap) -> Self {
        Self { map }
    }

    /// Returns the underlying table.
    #[inline]
    #[must_use]
    pub fn map(&self) -> &TimezoneMap {
        &self.map
    }

    /// Finds the best-effort timezone for a free-text location.
    ///
    /// Matching proceeds in tiers, short-circuiting on the first success:
    ///
    /// 1. Normalize the location; an empty result resolves to `None`.
    /// 2. When `country_code` is non-empty and present in the table, the
    ///    search space is that country's city table alone; otherwise it is
    ///    every country's table.
    /// 3. Exact fast path: when a country code was given, look the
    ///    normalized location up directly in its table.
    /// 4. Exhaustive scan for an exact hit, covering the no-country-code
    ///    case the fast path skipped.
    /// 5. Fuzzy matching: score every candidate city with
    ///    [`similarity_percent`] and keep the best. When the caller gave a
    ///    country code any similarity qualifies; without one a candidate
    ///    must beat a length-adaptive minimum keyed by the normalized query
    ///    length (1–3 chars → 85%, 4–6 → 80%, 7+ → 75%). First-encountered
    ///    candidate wins exact ties.
    ///
    /// A non-match returns `None`; it is a normal outcome, not an error.
    #[must_use]
    pub fn find(&self, location: &str, country_code: &str) -> Option<TimezoneResult> {
        let needle = normalize(location);
        if needle.is_empty() {
            return None;
        }
        let country = country_code.trim().to_ascii_uppercase();
        let country_given = !country.is_empty();
        let restricted = if country_given {
            self.map.country(&country)
        } else {
            None
        };

        // Exact fast path for the country-scoped case.
        if let Some(cities) = restricted
            && let Some(timezone) = cities.get(&needle)
        {
            return Some(TimezoneResult::new(timezone.as_str(), needle.clone(), needle));
        }

        let scope: Vec<&BTreeMap<String, String>> = match restricted {
            Some(cities) => vec![cities],
            None => self.map.iter().map(|(_, cities)| cities).collect(),
        };

        // Exhaustive exact hit, covering the no-country-code case.
        for cities in &scope {
            if let Some(timezone) = cities.get(&needle) {
                return Some(TimezoneResult::new(timezone.as_str(), needle.clone(), needle));
            }
        }

        // Fuzzy tier. The running best starts at zero, so a candidate must
        // score strictly above zero to qualify at all.
        let threshold = min_similarity(needle.chars().count());
        let mut best: Option<(f64, &String, &String)> = None;
        for cities in &scope {
            for (city, timezone) in cities.iter() {
                let pct = similarity_percent(&needle, city);
                let beats_best = best.as_ref().map_or(pct > 0.0, |(b, _, _)| pct > *b);
                if beats_best && (country_given || pct > threshold) {
                    best = Some((pct, city, timezone));
                }
            }
        }

        best.map(|(_, city, timezone)| TimezoneResult::new(timezone.as_str(), needle, city.as_str()))
    }
}

/// Minimum similarity required when no country code narrows the search.
///
/// Short queries need near-exact matches; longer ones tolerate more noise.
fn min_similarity(query_len: usize) -> f64 {
    match query_len {
        0..=3 => 85.0,
        4..=6 => 80.0,
        _ => 75.0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_map() -> TimezoneMap {
        let mut map = TimezoneMap::new();
        map.insert("SE", "Stockholm", "Europe/Stockholm");
        map.insert("SE", "Göteborg", "Europe/Stockholm");
        map.insert("DE", "Berlin", "Europe/Berlin");
        map.insert("DE", "München", "Europe/Berlin");
        map.insert("US", "New York", "America/New_York");
        map.insert("US", "Los Angeles", "America/Los_Angeles");
        map
    }

    #[test]
    fn exact_match_with_country_code() {
        let resolver = TimezoneResolver::new(test_map());
        let result = resolver.find("Stockholm", "SE").unwrap();
        assert_eq!(result.timezone(), "Europe/Stockholm");
        assert_eq!(result.input_location(), "stockholm");
        assert_eq!(result.matched_location(), "stockholm");
    }

    #[test]
    fn exact_match_without_country_code() {
        let resolver = TimezoneResolver::new(test_map());
        let result = resolver.find("münchen", "").unwrap();
        assert_eq!(result.timezone(), "Europe/Berlin");
        assert_eq!(result.matched_location(), "munchen");
    }

    #[test]
    fn country_code_is_case_insensitive() {
        let resolver = TimezoneResolver::new(test_map());
        let result = resolver.find("Berlin", "de").unwrap();
        assert_eq!(result.timezone(), "Europe/Berlin");
    }

    #[test]
    fn country_scoped_fuzzy_accepts_any_similarity() {
        let resolver = TimezoneResolver::new(test_map());
        // "stock" vs "stockholm" is ~71%, below every threshold, but a
        // country code makes any similarity qualify.
        let result = resolver.find("stock", "SE").unwrap();
        assert_eq!(result.timezone(), "Europe/Stockholm");
        assert_eq!(result.matched_location(), "stockholm");
    }

    #[test]
    fn unscoped_fuzzy_applies_length_threshold() {
        let resolver = TimezoneResolver::new(test_map());
        // Same query without a country code: 71% < 80% for a 5-char query.
        assert!(resolver.find("stock", "").is_none());
    }

    #[test]
    fn unscoped_fuzzy_accepts_close_match() {
        let resolver = TimezoneResolver::new(test_map());
        // "gotheborg" vs "goteborg" matches "eborg" plus "got", 8 of 17
        // chars total: 2*8/17 = 94.1% > 75% for a 9-char query.
        let result = resolver.find("Gotheborg", "").unwrap();
        assert_eq!(result.matched_location(), "goteborg");
        assert_eq!(result.input_location(), "gotheborg");
    }

    #[test]
    fn no_match_returns_none() {
        let resolver = TimezoneResolver::new(test_map());
        assert!(resolver.find("yee", "").is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        let resolver = TimezoneResolver::new(test_map());
        assert!(resolver.find("", "").is_none());
        assert!(resolver.find("  !? ", "SE").is_none());
    }

    #[test]
    fn unknown_country_code_falls_back_to_all_tables() {
        let resolver = TimezoneResolver::new(test_map());
        let result = resolver.find("Berlin", "XX").unwrap();
        assert_eq!(result.timezone(), "Europe/Berlin");
    }

    #[test]
    fn first_candidate_wins_exact_ties() {
        let mut map = TimezoneMap::new();
        // Both candidates score identically against "abcx"; iteration
        // order over the BTreeMap is lexicographic, so "abcd" is seen
        // first and must be kept.
        map.insert("SE", "abcd", "Europe/Stockholm");
        map.insert("SE", "abce", "Europe/Oslo");
        let resolver = TimezoneResolver::new(map);
        let result = resolver.find("abcx", "SE").unwrap();
        assert_eq!(result.matched_location(), "abcd");
        assert_eq!(result.timezone(), "Europe/Stockholm");
    }

    #[test]
    fn loads_generated_json() {
        let json = r#"{"SE": {"stockholm": "Europe/Stockholm"}, "NO": {"oslo": "Europe/Oslo"}}"#;
        let map = TimezoneMap::from_json_str(json).unwrap();
        assert_eq!(map.len(), 2);

        let resolver = TimezoneResolver::new(map);
        assert_eq!(
            resolver.find("Oslo", "NO").unwrap().timezone(),
            "Europe/Oslo"
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = TimezoneMap::from_json_str(r#"{"SE": ["not", "a", "map"]}"#).unwrap_err();
        assert!(matches!(err, TimezoneDataError::Parse(_)));
    }

    #[test]
    fn insert_normalizes_keys() {
        let mut map = TimezoneMap::new();
        map.insert(" se ", "  Göteborg! ", "Europe/Stockholm");
        assert!(map.country("SE").unwrap().contains_key("goteborg"));
    }
}
