// crates/michelin-core/src/area.rs

//! Region / department / arrondissement lookups over the restaurant table.

use crate::rating::Rating;
use crate::restaurant::Restaurant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The area currently shown on the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaSelection {
    #[default]
    All,
    Region(String),
    Department(String),
    Arrondissement(String),
}

impl AreaSelection {
    pub fn contains(&self, r: &Restaurant) -> bool {
        match self {
            AreaSelection::All => true,
            AreaSelection::Region(name) => &r.region == name,
            AreaSelection::Department(name) => &r.department == name,
            AreaSelection::Arrondissement(name) => r.arrondissement.as_ref() == Some(name),
        }
    }

    /// Map zoom level the UI should use for this selection.
    pub fn default_zoom(&self) -> u8 {
        match self {
            AreaSelection::All => 5,
            AreaSelection::Region(_) => 7,
            AreaSelection::Department(name) if name == "Paris" => 11,
            AreaSelection::Department(_) => 8,
            AreaSelection::Arrondissement(_) => 13,
        }
    }
}

/// A department entry for a region's dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentOption {
    pub name: String,
    pub code: String,
}

impl DepartmentOption {
    /// `"Rhône (69)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Regions and their departments, in the order they first appear.
#[derive(Clone, Debug, Default)]
pub struct AreaIndex {
    regions: Vec<String>,
    // (region, department option)
    departments: Vec<(String, DepartmentOption)>,
}

impl AreaIndex {
    pub fn build(restaurants: &[Restaurant]) -> Self {
        let mut index = AreaIndex::default();
        for r in restaurants {
            if !index.regions.contains(&r.region) {
                index.regions.push(r.region.clone());
            }
            if !index.departments.iter().any(|(_, d)| d.name == r.department) {
                index.departments.push((
                    r.region.clone(),
                    DepartmentOption {
                        name: r.department.clone(),
                        code: r.department_num.clone(),
                    },
                ));
            }
        }
        index
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn departments_in(&self, region: &str) -> Vec<&DepartmentOption> {
        self.departments
            .iter()
            .filter(|(r, _)| r == region)
            .map(|(_, d)| d)
            .collect()
    }

    pub fn department_code(&self, department: &str) -> Option<&str> {
        self.departments
            .iter()
            .find(|(_, d)| d.name == department)
            .map(|(_, d)| d.code.as_str())
    }

    pub fn region_of(&self, department: &str) -> Option<&str> {
        self.departments
            .iter()
            .find(|(_, d)| d.name == department)
            .map(|(r, _)| r.as_str())
    }
}

/// Ratings present among the restaurants of an area.
pub fn available_ratings(restaurants: &[Restaurant], area: &AreaSelection) -> BTreeSet<Rating> {
    restaurants
        .iter()
        .filter(|r| area.contains(r))
        .map(|r| r.stars)
        .collect()
}
