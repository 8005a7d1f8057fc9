// crates/michelin-core/src/prelude.rs
pub use crate::area::{available_ratings, AreaIndex, AreaSelection, DepartmentOption};
pub use crate::error::{MatchError, Result};
pub use crate::explorer::{ButtonState, Effect, Event, ExplorerState, StarFilter};
pub use crate::gazetteer::{GazetteerEntry, GazetteerStats};
#[cfg(feature = "json")]
pub use crate::loader::{load_gazetteer, load_restaurants};
pub use crate::matcher::{LocationMatcher, MatchOutcome, MatchRecord, MatchResult};
pub use crate::ranking::{top_areas, AreaCount, Granularity, Ranking};
pub use crate::rating::{Palette, Rating};
pub use crate::restaurant::Restaurant;
pub use crate::scorer::{Scorer, TokenSortRatio};
