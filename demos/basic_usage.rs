//! Basic usage example for michelin-rs
//!
//! This example demonstrates how to:
//! - Load the bundled gazetteer
//! - Resolve place names with the fuzzy matcher
//! - Tell capitals, misses and invalid input apart

use michelin_core::loader::{default_data_dir, DEFAULT_GAZETTEER_FILE};
use michelin_core::prelude::*;

fn main() -> Result<()> {
    println!("=== michelin-rs Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let rows = load_gazetteer(default_data_dir().join(DEFAULT_GAZETTEER_FILE))?;
    let matcher = LocationMatcher::new(&rows);
    let stats = matcher.stats();
    println!(
        "✓ {} places in {} departments ({} regions)\n",
        stats.entries, stats.departments, stats.regions
    );

    // Example 1: exact names, with and without postal code
    println!("--- Example 1: Exact lookups ---");
    for query in ["Paris", "Lyon, 69001", "Menton"] {
        println!("  {query:<20} -> {}", matcher.find_region_department(query));
    }
    println!();

    // Example 2: accents, case and word order
    println!("--- Example 2: Fuzzy lookups ---");
    for query in ["EVIAN LES BAINS", "tropez saint", "Bordeau", "collonges au mont d'or"] {
        match matcher.find_region_department(query) {
            MatchOutcome::Matched(m) => println!(
                "  {query:<24} -> {} (score {}){}",
                m.matched_location,
                m.score,
                if m.is_capital { " [capital]" } else { "" }
            ),
            other => println!("  {query:<24} -> {other}"),
        }
    }
    println!();

    // Example 3: the record shape handed to the UI
    println!("--- Example 3: Display record ---");
    if let Some(m) = matcher.get_region_department("nice") {
        let record = m.to_record();
        println!("  Matched Location: {}", record.matched_location);
        println!("  Region: {}", record.region);
        println!("  Department: {}", record.department);
        println!("  Is Capital: {}", record.is_capital);
    }

    Ok(())
}
