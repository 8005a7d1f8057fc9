// crates/michelin-core/src/gazetteer.rs

//! Reference table of known places.

use crate::scorer::Scorer;
use crate::text::{normalize_opt, split_location_field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the gazetteer.
///
/// `location` is either `"<city>"` or `"<city>, <postal code>"`. `capital` is
/// the name of the department's capital and repeats across every row of that
/// department. Both may be missing in the source table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub location: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub department: String,
    pub capital: Option<String>,
}

impl GazetteerEntry {
    pub fn new(
        location: impl Into<String>,
        region: impl Into<String>,
        department: impl Into<String>,
        capital: impl Into<String>,
    ) -> Self {
        Self {
            location: Some(location.into()),
            region: region.into(),
            department: department.into(),
            capital: Some(capital.into()),
        }
    }

    /// The city part of `location`, before any postal code.
    pub fn city(&self) -> Option<&str> {
        self.location
            .as_deref()
            .and_then(|loc| split_location_field(loc).0)
    }
}

/// Aggregate counts over a gazetteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub entries: usize,
    pub regions: usize,
    pub departments: usize,
    pub capitals: usize,
}

impl GazetteerStats {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a GazetteerEntry>) -> Self {
        let mut count = 0;
        let mut regions = BTreeSet::new();
        let mut departments = BTreeSet::new();
        let mut capitals = BTreeSet::new();
        for e in entries {
            count += 1;
            regions.insert(e.region.as_str());
            departments.insert(e.department.as_str());
            if let Some(c) = e.capital.as_deref() {
                capitals.insert(c);
            }
        }
        Self {
            entries: count,
            regions: regions.len(),
            departments: departments.len(),
            capitals: capitals.len(),
        }
    }
}

/// A gazetteer row together with the folded keys derived from it.
///
/// The derived fields are computed once in [`IndexedEntry::build`] and never
/// change afterwards.
#[derive(Clone, Debug)]
pub(crate) struct IndexedEntry {
    pub entry: GazetteerEntry,
    pub normalized_city: String,
    pub normalized_capital: String,
    pub score_key: String,
}

impl IndexedEntry {
    pub fn build<S: Scorer + ?Sized>(entry: &GazetteerEntry, scorer: &S) -> Self {
        let normalized_city = normalize_opt(entry.city());
        let normalized_capital = normalize_opt(entry.capital.as_deref());
        let score_key = scorer.prepare(&normalized_city);
        Self {
            entry: entry.clone(),
            normalized_city,
            normalized_capital,
            score_key,
        }
    }

    pub fn is_capital(&self) -> bool {
        self.normalized_capital == self.normalized_city
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::TokenSortRatio;

    #[test]
    fn indexed_entry_derives_keys() {
        let e = GazetteerEntry::new("Saint-Étienne, 42000", "Auvergne-Rhône-Alpes", "Loire", "Saint-Étienne");
        let ix = IndexedEntry::build(&e, &TokenSortRatio);
        assert_eq!(ix.normalized_city, "saint-etienne");
        assert_eq!(ix.normalized_capital, "saint-etienne");
        assert_eq!(ix.score_key, "etienne saint");
        assert!(ix.is_capital());
    }

    #[test]
    fn missing_values_fold_to_empty() {
        let e = GazetteerEntry {
            location: None,
            region: "Corse".into(),
            department: "Corse-du-Sud".into(),
            capital: None,
        };
        let ix = IndexedEntry::build(&e, &TokenSortRatio);
        assert_eq!(ix.normalized_city, "");
        assert_eq!(ix.normalized_capital, "");
        assert_eq!(e.city(), None);
    }

    #[test]
    fn stats_count_distinct_values() {
        let rows = vec![
            GazetteerEntry::new("Lyon, 69001", "Auvergne-Rhône-Alpes", "Rhône", "Lyon"),
            GazetteerEntry::new("Villeurbanne", "Auvergne-Rhône-Alpes", "Rhône", "Lyon"),
            GazetteerEntry::new("Nice", "Provence-Alpes-Côte d'Azur", "Alpes-Maritimes", "Nice"),
        ];
        let stats = GazetteerStats::from_entries(&rows);
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.regions, 2);
        assert_eq!(stats.departments, 2);
        assert_eq!(stats.capitals, 2);
    }
}
