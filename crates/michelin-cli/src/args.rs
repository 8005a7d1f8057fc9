use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for michelin-cli
#[derive(Debug, Parser)]
#[command(
    name = "michelin",
    version,
    about = "Resolve French place names and explore the Michelin guide tables"
)]
pub struct CliArgs {
    /// Gazetteer JSON (or .json.gz) file (default: bundled sample)
    #[arg(short = 'g', long = "gazetteer", global = true)]
    pub gazetteer: Option<String>,

    /// Restaurant JSON (or .json.gz) file (default: bundled sample)
    #[arg(short = 'r', long = "restaurants", global = true)]
    pub restaurants: Option<String>,

    /// Minimum similarity score (0-100) for a location match
    #[arg(short = 't', long = "threshold", global = true, default_value_t = 80)]
    pub threshold: u8,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a place name (e.g. "Saint-Tropez, 83990") to region and department
    Match {
        query: String,
    },

    /// Show a summary of the gazetteer
    Stats,

    /// List regions that have restaurants
    Regions,

    /// List departments of a region
    Departments {
        region: String,
    },

    /// Areas with the most restaurants of a rating
    Rank {
        /// region, department or arrondissement
        #[arg(short = 'l', long = "granularity", default_value = "region")]
        granularity: String,

        /// Rating: 3, 2, 1, bib or selected
        #[arg(short = 's', long = "stars", default_value = "3")]
        stars: String,

        #[arg(short = 'n', long = "top", default_value_t = 5)]
        top: usize,
    },

    /// Replay explorer events and print the visible restaurants
    Explore {
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        department: Option<String>,

        /// Place name to search; a match selects its department
        #[arg(long)]
        search: Option<String>,

        /// Ratings to switch off (repeatable)
        #[arg(long = "toggle")]
        toggles: Vec<String>,
    },
}
