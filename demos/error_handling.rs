//! Error handling example for michelin-rs
//!
//! This example demonstrates the difference between hard errors (bad data,
//! bad configuration) and query outcomes (no match, invalid input).

use michelin_core::prelude::*;

fn main() -> Result<()> {
    println!("=== michelin-rs Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a missing gazetteer ---");
    match load_gazetteer("does/not/exist.json") {
        Ok(rows) => println!("✓ Loaded {} rows", rows.len()),
        Err(e) => eprintln!("✗ Failed to load gazetteer: {e}"),
    }
    println!();

    // Example 2: Rejected threshold
    println!("--- Example 2: Threshold out of range ---");
    let rows = vec![
        GazetteerEntry::new("Reims, 51100", "Grand Est", "Marne", "Châlons-en-Champagne"),
        GazetteerEntry::new("Cancale, 35260", "Bretagne", "Ille-et-Vilaine", "Rennes"),
    ];
    match LocationMatcher::with_threshold(&rows, 150) {
        Ok(_) => println!("  accepted"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();

    // Example 3: Query outcomes are values, not errors
    println!("--- Example 3: Query outcomes ---");
    let matcher = LocationMatcher::with_threshold(&rows, 80)?;
    for query in ["", "   ", ", 51100", "Qqzxhjklw", "reims"] {
        let label = match matcher.find_region_department(query) {
            MatchOutcome::Matched(_) => "Matched",
            MatchOutcome::NoMatch => "NoMatch",
            MatchOutcome::InvalidInput => "InvalidInput",
        };
        println!("  {query:?} -> {label}");
    }

    Ok(())
}
