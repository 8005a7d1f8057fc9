// crates/michelin-core/src/rating.rs

//! Michelin distinctions and the colours they are drawn with.

use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A restaurant's distinction in the guide.
///
/// The source tables store these as numbers: `0.25` for restaurants that
/// are only "selected", `0.5` for Bib Gourmand and `1`–`3` for stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Rating {
    Selected,
    BibGourmand,
    OneStar,
    TwoStars,
    ThreeStars,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::Selected,
        Rating::BibGourmand,
        Rating::OneStar,
        Rating::TwoStars,
        Rating::ThreeStars,
    ];

    /// Numeric value as stored in the data tables.
    pub fn value(self) -> f64 {
        match self {
            Rating::Selected => 0.25,
            Rating::BibGourmand => 0.5,
            Rating::OneStar => 1.0,
            Rating::TwoStars => 2.0,
            Rating::ThreeStars => 3.0,
        }
    }

    /// Number of stars; zero for Bib Gourmand and selected restaurants.
    pub fn stars(self) -> u8 {
        match self {
            Rating::OneStar => 1,
            Rating::TwoStars => 2,
            Rating::ThreeStars => 3,
            Rating::Selected | Rating::BibGourmand => 0,
        }
    }

    /// Short label: `"⭐⭐"`, `"Bib Gourmand"` or `"Selected"`.
    pub fn label(self) -> String {
        match self {
            Rating::Selected => "Selected".to_string(),
            Rating::BibGourmand => "Bib Gourmand".to_string(),
            starred => "⭐".repeat(starred.stars() as usize),
        }
    }

    /// The guide's wording for each tier.
    pub fn description(self) -> &'static str {
        match self {
            Rating::ThreeStars => "Exceptional cuisine, worth a special journey",
            Rating::TwoStars => "Excellent cooking, worth a detour",
            Rating::OneStar => "High-quality cooking, worth a stop",
            Rating::BibGourmand => "Exceptionally good food at moderate prices",
            Rating::Selected => "Fresh ingredients, carefully prepared",
        }
    }

    /// Parse a CLI-style name (`"bib"`, `"2"`, `"three"`, `"0.25"`...).
    pub fn parse_name(s: &str) -> Option<Rating> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selected" | "0.25" => Some(Rating::Selected),
            "bib" | "bib-gourmand" | "bib_gourmand" | "0.5" => Some(Rating::BibGourmand),
            "1" | "one" => Some(Rating::OneStar),
            "2" | "two" => Some(Rating::TwoStars),
            "3" | "three" => Some(Rating::ThreeStars),
            _ => None,
        }
    }
}

impl TryFrom<f64> for Rating {
    type Error = MatchError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Rating::ALL
            .into_iter()
            .find(|r| r.value() == v)
            .ok_or_else(|| MatchError::InvalidRating(v.to_string()))
    }
}

impl From<Rating> for f64 {
    fn from(r: Rating) -> f64 {
        r.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Colour per rating, as `#RRGGBB`.
///
/// Passed explicitly to anything that renders ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: BTreeMap<Rating, String>,
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            (Rating::Selected, "#808080"),
            (Rating::BibGourmand, "#640A64"),
            (Rating::OneStar, "#FFB84D"),
            (Rating::TwoStars, "#FE6F64"),
            (Rating::ThreeStars, "#C2282D"),
        ]
        .into_iter()
        .map(|(r, c)| (r, c.to_string()))
        .collect();
        Self {
            colors,
            fallback: "#CCCCCC".to_string(),
        }
    }
}

impl Palette {
    /// Replace the colour of one rating.
    pub fn with_color(mut self, rating: Rating, hex: impl Into<String>) -> Self {
        self.colors.insert(rating, hex.into());
        self
    }

    pub fn color(&self, rating: Rating) -> &str {
        self.colors.get(&rating).unwrap_or(&self.fallback)
    }

    /// The rating colour at 60% opacity, e.g. `rgba(254,111,100,0.6)`.
    ///
    /// Colours that are not `#RRGGBB` are returned unchanged.
    pub fn inactive_color(&self, rating: Rating) -> String {
        let hex = self.color(rating);
        match parse_hex(hex) {
            Some((r, g, b)) => format!("rgba({r},{g},{b},0.6)"),
            None => hex.to_string(),
        }
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
