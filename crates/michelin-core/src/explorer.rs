// crates/michelin-core/src/explorer.rs

//! # Explorer state
//!
//! The map page reacts to a handful of UI events: picking an area, toggling
//! rating buttons, and searching for a town. Every event goes through
//! [`ExplorerState::apply`], a pure transition over the current state and
//! the restaurant table. Rendering code reads the resulting state and never
//! mutates it.

use crate::area::{available_ratings, AreaSelection};
use crate::matcher::MatchOutcome;
use crate::rating::{Palette, Rating};
use crate::restaurant::Restaurant;
use std::collections::BTreeSet;

/// Which rating buttons exist for the current area and which are pressed.
///
/// `active` is always a subset of `available`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarFilter {
    available: BTreeSet<Rating>,
    active: BTreeSet<Rating>,
}

impl StarFilter {
    /// A filter with every available rating switched on.
    pub fn new(available: BTreeSet<Rating>) -> Self {
        Self {
            active: available.clone(),
            available,
        }
    }

    pub fn available(&self) -> &BTreeSet<Rating> {
        &self.available
    }

    pub fn active(&self) -> &BTreeSet<Rating> {
        &self.active
    }

    pub fn is_active(&self, rating: Rating) -> bool {
        self.active.contains(&rating)
    }

    /// Flip one rating. Returns `false` when the rating has no button.
    pub fn toggle(&mut self, rating: Rating) -> bool {
        if !self.available.contains(&rating) {
            return false;
        }
        if !self.active.remove(&rating) {
            self.active.insert(rating);
        }
        true
    }

    /// Switch every available rating back on.
    pub fn show_all(&mut self) -> bool {
        if self.active == self.available {
            return false;
        }
        self.active = self.available.clone();
        true
    }

    /// Replace the available set, keeping everything active.
    pub fn reset(&mut self, available: BTreeSet<Rating>) {
        *self = StarFilter::new(available);
    }
}

/// A rendered rating button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub rating: Rating,
    pub label: String,
    pub class_name: String,
    pub background: String,
}

/// UI events the explorer understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    SelectRegion(String),
    SelectDepartment(String),
    SelectArrondissement(String),
    ToggleRating(Rating),
    ShowAll,
    ClearSelection,
    LocationSearched(MatchOutcome),
}

/// What the view layer has to do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Unchanged,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerState {
    selection: AreaSelection,
    filter: StarFilter,
    search: Option<MatchOutcome>,
}

impl ExplorerState {
    /// Initial state: the whole country, every rating on.
    pub fn new(restaurants: &[Restaurant]) -> Self {
        let selection = AreaSelection::All;
        let filter = StarFilter::new(available_ratings(restaurants, &selection));
        Self {
            selection,
            filter,
            search: None,
        }
    }

    pub fn selection(&self) -> &AreaSelection {
        &self.selection
    }

    pub fn filter(&self) -> &StarFilter {
        &self.filter
    }

    /// Outcome of the most recent location search, if any.
    pub fn last_search(&self) -> Option<&MatchOutcome> {
        self.search.as_ref()
    }

    pub fn apply(&mut self, event: Event, restaurants: &[Restaurant]) -> Effect {
        match event {
            Event::SelectRegion(name) => self.select(AreaSelection::Region(name), restaurants),
            Event::SelectDepartment(name) => {
                self.select(AreaSelection::Department(name), restaurants)
            }
            Event::SelectArrondissement(name) => {
                self.select(AreaSelection::Arrondissement(name), restaurants)
            }
            Event::ClearSelection => self.select(AreaSelection::All, restaurants),
            Event::ToggleRating(rating) => changed(self.filter.toggle(rating)),
            Event::ShowAll => changed(self.filter.show_all()),
            Event::LocationSearched(outcome) => {
                let target = outcome
                    .as_match()
                    .map(|m| AreaSelection::Department(m.department.clone()));
                self.search = Some(outcome);
                match target {
                    Some(area) => {
                        self.select(area, restaurants);
                        Effect::Redraw
                    }
                    // Only the message panel changes.
                    None => Effect::Unchanged,
                }
            }
        }
    }

    fn select(&mut self, area: AreaSelection, restaurants: &[Restaurant]) -> Effect {
        if area == self.selection {
            return Effect::Unchanged;
        }
        self.filter.reset(available_ratings(restaurants, &area));
        self.selection = area;
        Effect::Redraw
    }

    /// Restaurants in the selected area whose rating is switched on.
    pub fn visible_restaurants<'a>(&self, restaurants: &'a [Restaurant]) -> Vec<&'a Restaurant> {
        restaurants
            .iter()
            .filter(|r| self.selection.contains(r) && self.filter.is_active(r.stars))
            .collect()
    }

    /// Button states for the rating filter, in rating order.
    pub fn button_states(&self, palette: &Palette, filter_type: &str) -> Vec<ButtonState> {
        self.filter
            .available()
            .iter()
            .map(|&rating| {
                let active = self.filter.is_active(rating);
                let mut class_name = format!("me-1 star-button-{filter_type}");
                if active {
                    class_name.push_str(" active");
                }
                let background = if active {
                    palette.color(rating).to_string()
                } else {
                    palette.inactive_color(rating)
                };
                ButtonState {
                    rating,
                    label: rating.label(),
                    class_name,
                    background,
                }
            })
            .collect()
    }
}

fn changed(flag: bool) -> Effect {
    if flag {
        Effect::Redraw
    } else {
        Effect::Unchanged
    }
}
