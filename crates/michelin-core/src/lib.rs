// crates/michelin-core/src/lib.rs

//! # michelin-core
//!
//! The data side of a Michelin guide explorer for France:
//!
//! - [`LocationMatcher`]: fuzzy resolution of a typed town name to its
//!   region and department, with department-capital detection.
//! - [`explorer`]: the map page's state (selected area, rating filter)
//!   driven by explicit events.
//! - [`ranking`]: areas with the most restaurants of a rating.
//!
//! ```rust
//! use michelin_core::prelude::*;
//!
//! let gazetteer = vec![
//!     GazetteerEntry::new("Saint-Paul-de-Vence, 06570", "Provence-Alpes-Côte d'Azur", "Alpes-Maritimes", "Nice"),
//! ];
//! let matcher = LocationMatcher::new(&gazetteer);
//! let outcome = matcher.find_region_department("vence saint paul de");
//! assert_eq!(outcome.as_match().map(|m| m.department.as_str()), Some("Alpes-Maritimes"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod area;
pub mod error;
pub mod explorer;
pub mod gazetteer;
#[cfg(feature = "json")]
pub mod loader;
pub mod matcher;
pub mod prelude;
pub mod ranking;
pub mod rating;
pub mod restaurant;
pub mod scorer;
pub mod text;

// Re-exports
pub use crate::error::{MatchError, Result};
pub use crate::gazetteer::{GazetteerEntry, GazetteerStats};
pub use crate::matcher::{LocationMatcher, MatchOutcome, MatchRecord, MatchResult};
pub use crate::rating::{Palette, Rating};
pub use crate::restaurant::Restaurant;
pub use crate::scorer::{Scorer, TokenSortRatio};
