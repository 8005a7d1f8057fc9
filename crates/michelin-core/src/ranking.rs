// crates/michelin-core/src/ranking.rs

//! "Top areas" rankings: which regions, departments or arrondissements hold
//! the most restaurants of a given rating.

use crate::rating::Rating;
use crate::restaurant::Restaurant;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Region,
    Department,
    Arrondissement,
}

impl Granularity {
    /// The area a restaurant belongs to at this granularity, if any.
    pub fn area_of<'a>(&self, r: &'a Restaurant) -> Option<&'a str> {
        match self {
            Granularity::Region => Some(r.region.as_str()),
            Granularity::Department => Some(r.department.as_str()),
            Granularity::Arrondissement => r.arrondissement.as_deref(),
        }
    }

    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" | "regions" => Some(Granularity::Region),
            "department" | "departments" => Some(Granularity::Department),
            "arrondissement" | "arrondissements" => Some(Granularity::Arrondissement),
            _ => None,
        }
    }
}

/// Number of restaurants of one rating in one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCount {
    pub area: String,
    /// Heading shown for the area, including parent names where useful.
    pub label: String,
    pub count: usize,
}

impl AreaCount {
    pub fn restaurant_word(&self) -> &'static str {
        if self.count == 1 {
            "Restaurant"
        } else {
            "Restaurants"
        }
    }
}

impl fmt::Display for AreaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.count, self.restaurant_word())
    }
}

/// Result of [`top_areas`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub top: Vec<AreaCount>,
    /// Areas outside the top whose count equals the last top entry.
    pub tied: Vec<AreaCount>,
}

impl Ranking {
    pub fn is_tied(&self) -> bool {
        !self.tied.is_empty()
    }
}

/// Rank areas by how many restaurants of `rating` they hold.
///
/// Areas are sorted by descending count; equal counts keep the order in
/// which the areas first appear in `restaurants`.
pub fn top_areas(
    restaurants: &[Restaurant],
    granularity: Granularity,
    rating: Rating,
    top_n: usize,
) -> Ranking {
    // (area, first restaurant seen in it, count)
    let mut counts: Vec<(&str, &Restaurant, usize)> = Vec::new();
    for r in restaurants.iter().filter(|r| r.stars == rating) {
        let Some(area) = granularity.area_of(r) else {
            continue;
        };
        match counts.iter_mut().find(|(a, _, _)| *a == area) {
            Some(entry) => entry.2 += 1,
            None => counts.push((area, r, 1)),
        }
    }
    counts.sort_by(|a, b| b.2.cmp(&a.2));

    let to_count = |(area, first, count): &(&str, &Restaurant, usize)| AreaCount {
        area: area.to_string(),
        label: area_label(granularity, area, first),
        count: *count,
    };

    let split = top_n.min(counts.len());
    let top: Vec<AreaCount> = counts[..split].iter().map(to_count).collect();
    let tied = match top.last() {
        Some(last) => counts[split..]
            .iter()
            .filter(|(_, _, c)| *c == last.count)
            .map(to_count)
            .collect(),
        None => Vec::new(),
    };

    Ranking { top, tied }
}

fn area_label(granularity: Granularity, area: &str, r: &Restaurant) -> String {
    match granularity {
        Granularity::Region => area.to_string(),
        Granularity::Department => format!("{area} ({}): {}", r.department_num, r.region),
        Granularity::Arrondissement => format!(
            "{area}, {} ({}), {}",
            r.department, r.department_num, r.region
        ),
    }
}
