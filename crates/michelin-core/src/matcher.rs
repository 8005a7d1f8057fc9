// crates/michelin-core/src/matcher.rs

//! # Location Matcher
//!
//! Resolves free-text place names (`"Lyon"`, `"Saint-Tropez, 83990"`,
//! `"st tropez"`) to a gazetteer row by fuzzy matching on the folded city
//! name.
//!
//! The matcher takes a private copy of the gazetteer at construction and
//! precomputes the folded keys once; queries never touch the source rows
//! again. A built matcher is read-only and can be shared across threads.

use crate::error::{MatchError, Result};
use crate::gazetteer::{GazetteerEntry, GazetteerStats, IndexedEntry};
use crate::scorer::{best_match, Scorer, TokenSortRatio};
use crate::text::{normalize_text, split_location_field};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Minimum similarity score accepted by [`LocationMatcher::new`].
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Label reported for cities that are their department's capital.
pub const CAPITAL_LABEL: &str = "Department Capital";

/// A successful lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The original `location` field of the matched row.
    pub matched_location: String,
    pub region: String,
    pub department: String,
    pub is_capital: bool,
    /// Similarity of the query to the matched city, 0–100.
    pub score: u8,
}

impl MatchResult {
    /// `"Department Capital"` for capitals, `""` otherwise.
    pub fn capital_status(&self) -> &'static str {
        if self.is_capital {
            CAPITAL_LABEL
        } else {
            ""
        }
    }

    /// The display mapping consumed by the UI layer.
    pub fn to_record(&self) -> MatchRecord {
        MatchRecord {
            matched_location: self.matched_location.clone(),
            region: self.region.clone(),
            department: self.department.clone(),
            is_capital: self.capital_status().to_string(),
        }
    }
}

/// Key/value view of a [`MatchResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Matched Location")]
    pub matched_location: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Is Capital")]
    pub is_capital: String,
}

/// Outcome of [`LocationMatcher::find_region_department`].
///
/// The three cases are mutually exclusive; empty input is never reported as
/// "no match".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(MatchResult),
    /// A city was extracted but nothing reached the threshold.
    NoMatch,
    /// The query was empty, blank or had no city part.
    InvalidInput,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub fn as_match(&self) -> Option<&MatchResult> {
        match self {
            MatchOutcome::Matched(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_match(self) -> Option<MatchResult> {
        match self {
            MatchOutcome::Matched(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Matched(m) => {
                write!(f, "{} ({}, {})", m.matched_location, m.department, m.region)?;
                if m.is_capital {
                    write!(f, " [{CAPITAL_LABEL}]")?;
                }
                Ok(())
            }
            MatchOutcome::NoMatch => f.write_str("No match found."),
            MatchOutcome::InvalidInput => f.write_str("Invalid input."),
        }
    }
}

/// Fuzzy resolver from place names to gazetteer rows.
///
/// # Examples
///
/// ```rust
/// use michelin_core::{GazetteerEntry, LocationMatcher, MatchOutcome};
///
/// let rows = vec![
///     GazetteerEntry::new("Paris, 75001", "Île-de-France", "Paris", "Paris"),
///     GazetteerEntry::new("Lyon, 69001", "Auvergne-Rhône-Alpes", "Rhône", "Lyon"),
/// ];
/// let matcher = LocationMatcher::new(&rows);
///
/// let hit = matcher.find_region_department("lyon, 69002").into_match().unwrap();
/// assert_eq!(hit.department, "Rhône");
/// assert!(hit.is_capital);
///
/// assert_eq!(matcher.find_region_department(""), MatchOutcome::InvalidInput);
/// assert_eq!(matcher.find_region_department("Qqzxhjklw"), MatchOutcome::NoMatch);
/// ```
#[derive(Clone, Debug)]
pub struct LocationMatcher<S: Scorer = TokenSortRatio> {
    entries: Vec<IndexedEntry>,
    threshold: u8,
    scorer: S,
}

impl LocationMatcher<TokenSortRatio> {
    /// Build a matcher with the default scorer and a threshold of 80.
    pub fn new(entries: &[GazetteerEntry]) -> Self {
        Self::build(entries, DEFAULT_THRESHOLD, TokenSortRatio)
    }

    /// Build a matcher with the default scorer and a custom threshold.
    pub fn with_threshold(entries: &[GazetteerEntry], threshold: u8) -> Result<Self> {
        Self::with_scorer(entries, threshold, TokenSortRatio)
    }
}

impl<S: Scorer> LocationMatcher<S> {
    /// Build a matcher around a custom [`Scorer`].
    pub fn with_scorer(entries: &[GazetteerEntry], threshold: u8, scorer: S) -> Result<Self> {
        if threshold > 100 {
            return Err(MatchError::InvalidThreshold(threshold));
        }
        Ok(Self::build(entries, threshold, scorer))
    }

    fn build(entries: &[GazetteerEntry], threshold: u8, scorer: S) -> Self {
        let entries = entries
            .iter()
            .map(|e| IndexedEntry::build(e, &scorer))
            .collect();
        Self {
            entries,
            threshold,
            scorer,
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The matcher's own copy of the gazetteer, in table order.
    pub fn entries(&self) -> impl Iterator<Item = &GazetteerEntry> + '_ {
        self.entries.iter().map(|ix| &ix.entry)
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats::from_entries(self.entries())
    }

    /// Resolve a bare city name.
    ///
    /// The city is folded, scored against every gazetteer city and the best
    /// candidate is accepted when its score is at least the threshold. When
    /// several rows share the matched city, the first row in table order is
    /// used.
    pub fn get_region_department(&self, city: &str) -> Option<MatchResult> {
        let folded = normalize_text(city);
        let query = self.scorer.prepare(&folded);
        let (idx, score) = best_match(
            &self.scorer,
            &query,
            self.entries.iter().map(|e| e.score_key.as_str()),
        )?;

        let matched_city = &self.entries[idx].normalized_city;
        debug!(query = %folded, candidate = %matched_city, score, "best gazetteer candidate");
        if score < self.threshold {
            return None;
        }

        let row = self
            .entries
            .iter()
            .find(|e| &e.normalized_city == matched_city)?;

        Some(MatchResult {
            matched_location: row.entry.location.clone().unwrap_or_default(),
            region: row.entry.region.clone(),
            department: row.entry.department.clone(),
            is_capital: row.is_capital(),
            score,
        })
    }

    /// Resolve a raw query such as `"Saint-Tropez, 83990"`.
    ///
    /// Only the city part is matched; a postal code suffix is ignored.
    pub fn find_region_department(&self, input: &str) -> MatchOutcome {
        let (city, _postal_code) = split_location_field(input);
        match city {
            Some(city) if !city.trim().is_empty() => match self.get_region_department(city) {
                Some(found) => MatchOutcome::Matched(found),
                None => MatchOutcome::NoMatch,
            },
            _ => MatchOutcome::InvalidInput,
        }
    }
}
