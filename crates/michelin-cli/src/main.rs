//! michelin — Command-line interface for michelin-core
//!
//! Usage examples
//! --------------
//!
//! - Resolve a place name
//!   $ michelin match "Évian"
//!   $ michelin --threshold 90 match "bordeau"
//!
//! - Gazetteer summary
//!   $ michelin stats
//!
//! - Regions and departments with restaurants
//!   $ michelin regions
//!   $ michelin departments "Auvergne-Rhône-Alpes"
//!
//! - Top areas for a rating
//!   $ michelin rank --granularity department --stars 2
//!
//! - Explorer session
//!   $ michelin explore --search "Lyon" --toggle bib
//!
//! Data source
//! -----------
//!
//! By default the bundled sample tables from `michelin-core/data` are used.
//! Point `--gazetteer` and `--restaurants` at full exports (`.json` or
//! `.json.gz`) for real data. Set `RUST_LOG` or pass `-v` for logs on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, Context};
use clap::Parser;
use michelin_core::loader::{
    default_data_dir, load_gazetteer, load_restaurants, DEFAULT_GAZETTEER_FILE,
    DEFAULT_RESTAURANTS_FILE,
};
use michelin_core::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit path from the command line, or the bundled sample file.
fn resolve_path(arg: Option<&str>, default_file: &str) -> String {
    match arg {
        Some(path) => {
            debug!(path, "using path from command line");
            path.to_string()
        }
        None => {
            let path = default_data_dir()
                .join(default_file)
                .to_string_lossy()
                .to_string();
            debug!(path = %path, "using bundled sample");
            path
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let gazetteer_path = resolve_path(args.gazetteer.as_deref(), DEFAULT_GAZETTEER_FILE);
    let restaurants_path = resolve_path(args.restaurants.as_deref(), DEFAULT_RESTAURANTS_FILE);

    let matcher = || -> anyhow::Result<LocationMatcher> {
        let rows = load_gazetteer(&gazetteer_path)
            .with_context(|| format!("loading gazetteer {gazetteer_path}"))?;
        info!(threshold = args.threshold, "building matcher");
        Ok(LocationMatcher::with_threshold(&rows, args.threshold)?)
    };
    let restaurants = || -> anyhow::Result<Vec<Restaurant>> {
        load_restaurants(&restaurants_path)
            .with_context(|| format!("loading restaurants {restaurants_path}"))
    };

    match &args.command {
        Commands::Match { query } => {
            let outcome = matcher()?.find_region_department(query);
            if args.json {
                let value = match &outcome {
                    MatchOutcome::Matched(m) => serde_json::to_value(m.to_record())?,
                    other => serde_json::json!({ "error": other.to_string() }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                match outcome {
                    MatchOutcome::Matched(m) => {
                        println!("Matched Location: {}", m.matched_location);
                        println!("Region: {}", m.region);
                        println!("Department: {}", m.department);
                        println!("Is Capital: {}", m.capital_status());
                        println!("Score: {}", m.score);
                    }
                    other => println!("{other}"),
                }
            }
        }

        Commands::Stats => {
            let m = matcher()?;
            let stats = m.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Gazetteer statistics:");
                println!("  Entries: {}", stats.entries);
                println!("  Regions: {}", stats.regions);
                println!("  Departments: {}", stats.departments);
                println!("  Capitals: {}", stats.capitals);
                println!("  Threshold: {}", m.threshold());
            }
        }

        Commands::Regions => {
            let data = restaurants()?;
            for region in AreaIndex::build(&data).regions() {
                println!("{region}");
            }
        }

        Commands::Departments { region } => {
            let data = restaurants()?;
            let index = AreaIndex::build(&data);
            let departments = index.departments_in(region);
            if departments.is_empty() {
                eprintln!("No departments found for region: {region}");
            }
            for d in departments {
                println!("{}", d.label());
            }
        }

        Commands::Rank {
            granularity,
            stars,
            top,
        } => {
            let granularity = Granularity::parse_name(granularity)
                .ok_or_else(|| anyhow!("unknown granularity: {granularity}"))?;
            let rating =
                Rating::parse_name(stars).ok_or_else(|| anyhow!("unknown rating: {stars}"))?;
            let ranking = top_areas(&restaurants()?, granularity, rating, *top);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&ranking)?);
            } else if ranking.top.is_empty() {
                println!("No {} restaurants found.", rating.label());
            } else {
                println!("{} ({})", rating.label(), rating.description());
                for (i, area) in ranking.top.iter().enumerate() {
                    println!("{}. {area}", i + 1);
                }
                if ranking.is_tied() {
                    println!("Tied Areas:");
                    for area in &ranking.tied {
                        println!("- {area}");
                    }
                }
            }
        }

        Commands::Explore {
            region,
            department,
            search,
            toggles,
        } => {
            let data = restaurants()?;
            let mut state = ExplorerState::new(&data);

            if let Some(region) = region {
                state.apply(Event::SelectRegion(region.clone()), &data);
            }
            if let Some(department) = department {
                state.apply(Event::SelectDepartment(department.clone()), &data);
            }
            if let Some(query) = search {
                let outcome = matcher()?.find_region_department(query);
                println!("Search: {outcome}");
                state.apply(Event::LocationSearched(outcome), &data);
            }
            for t in toggles {
                let rating = Rating::parse_name(t).ok_or_else(|| anyhow!("unknown rating: {t}"))?;
                state.apply(Event::ToggleRating(rating), &data);
            }

            println!("Area: {:?}", state.selection());
            for b in state.button_states(&Palette::default(), "mainpage") {
                let mark = if state.filter().is_active(b.rating) { "x" } else { " " };
                println!("[{mark}] {} {}", b.label, b.background);
            }
            for r in state.visible_restaurants(&data) {
                println!("{} — {} — {}", r.name, r.stars.label(), r.location_line());
            }
        }
    }

    Ok(())
}
