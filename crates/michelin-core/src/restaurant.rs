// crates/michelin-core/src/restaurant.rs
use crate::rating::Rating;
use serde::{Deserialize, Serialize};

/// Department number for Paris, the only department split into
/// arrondissements in the guide data.
pub const PARIS_DEPARTMENT: &str = "75";

/// One row of the restaurant table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub stars: Rating,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub address: String,
    pub location: String,
    #[serde(default)]
    pub arrondissement: Option<String>,
    #[serde(default)]
    pub url: String,
    pub department: String,
    pub department_num: String,
    pub region: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Restaurant {
    pub fn is_in_paris(&self) -> bool {
        self.department_num == PARIS_DEPARTMENT
    }

    /// Location line for a detail card.
    ///
    /// Paris restaurants are prefixed with their arrondissement.
    pub fn location_line(&self) -> String {
        match (&self.arrondissement, self.is_in_paris()) {
            (Some(arr), true) => format!("{arr}, {}", self.location),
            _ => self.location.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn paris_location_includes_arrondissement() {
        let r = in_paris("Le Cinq", Rating::ThreeStars, "8th arrondissement");
        assert_eq!(r.location_line(), "8th arrondissement, Paris, 75008");
    }

    #[test]
    fn other_departments_use_location() {
        let r = restaurant("Maison Pic", Rating::ThreeStars, "Drôme", "26", "Auvergne-Rhône-Alpes");
        assert_eq!(r.location_line(), "Drôme, 26000");
    }

    #[test]
    fn deserializes_numeric_stars() {
        let json = r#"{
            "name": "Le Baratin", "stars": 0.5, "location": "Paris, 75020",
            "arrondissement": "20th arrondissement",
            "department": "Paris", "department_num": "75", "region": "Île-de-France",
            "latitude": 48.87, "longitude": 2.38
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.stars, Rating::BibGourmand);
        assert!(r.is_in_paris());
        assert_eq!(r.cuisine, "");
    }
}
