//! Explorer session example for michelin-rs
//!
//! Replays what a user does on the map page: search a town, narrow the
//! rating filter, then look at the department and national rankings.

use michelin_core::loader::{
    default_data_dir, DEFAULT_GAZETTEER_FILE, DEFAULT_RESTAURANTS_FILE,
};
use michelin_core::prelude::*;

fn main() -> Result<()> {
    println!("=== michelin-rs Explorer Session ===\n");

    let dir = default_data_dir();
    let restaurants = load_restaurants(dir.join(DEFAULT_RESTAURANTS_FILE))?;
    let matcher = LocationMatcher::new(&load_gazetteer(dir.join(DEFAULT_GAZETTEER_FILE))?);
    let palette = Palette::default();
    let mut state = ExplorerState::new(&restaurants);

    let events = vec![
        Event::LocationSearched(matcher.find_region_department("Saint-Tropez, 83990")),
        Event::SelectRegion("Provence-Alpes-Côte d'Azur".into()),
        Event::ToggleRating(Rating::TwoStars),
        Event::LocationSearched(matcher.find_region_department("Xyzzyqqq")),
    ];

    for event in events {
        println!("> {event:?}");
        let effect = state.apply(event, &restaurants);
        println!("  effect: {effect:?}, area: {:?}", state.selection());
        for b in state.button_states(&palette, "mainpage") {
            println!("    {:<14} {:<28} {}", b.label, b.class_name, b.background);
        }
        for r in state.visible_restaurants(&restaurants) {
            println!("    * {} ({}) {}", r.name, r.stars, r.location_line());
        }
        if let Some(search) = state.last_search() {
            println!("  last search: {search}");
        }
        println!();
    }

    println!("--- Departments with the most three-star restaurants ---");
    let ranking = top_areas(&restaurants, Granularity::Department, Rating::ThreeStars, 2);
    for area in &ranking.top {
        println!("  {area}");
    }
    if ranking.is_tied() {
        println!("  Tied Areas:");
        for area in &ranking.tied {
            println!("  {area}");
        }
    }

    Ok(())
}
