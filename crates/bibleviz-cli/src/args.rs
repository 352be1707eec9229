use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for bibleviz-cli
#[derive(Debug, Parser)]
#[command(
    name = "bibleviz",
    version,
    about = "CLI for building and inspecting the bible map overlays of bibleviz-core"
)]
pub struct CliArgs {
    /// Feature cache exported from the rendered map (.json or .json.gz)
    #[arg(short = 'f', long = "features", global = true)]
    pub features: Option<PathBuf>,

    /// Basemap style document (.json or .json.gz)
    #[arg(short = 's', long = "style", global = true)]
    pub style: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the genealogy lines as a GeoJSON FeatureCollection
    Edges {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Ranked search suggestions from the feature cache (needs --features)
    Search {
        /// Substring to search (case-insensitive)
        query: String,

        /// Maximum number of suggestions to print
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Print the patched text-opacity of the label layers (needs --style)
    Patch {
        /// Group id (e.g. "Tribe of Levi") or "all"
        group: String,

        /// Only this label layer
        #[arg(long)]
        layer: Option<String>,
    },

    /// Print every layer change a legend selection results in
    Plan {
        /// Group id or "all"
        group: String,
    },

    /// Print the bounds the map flies to for a legend selection (needs --features)
    Bounds {
        /// Group id or "all"
        group: String,
    },

    /// List the ancestry legend with its HTML ids
    Legend,

    /// Remove properties the renderer rejects from a style document
    FixStyle {
        /// Path, or http(s) URL when built with the 'fetch' feature
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Slim a people export down to the popup fields
    PrunePeople { input: PathBuf, output: PathBuf },

    /// Slim a groups export down to id and name
    PruneGroups { input: PathBuf, output: PathBuf },

    /// Show the popup content of a person
    Person {
        /// PersonID as found on the map feature
        id: String,

        /// People dataset
        #[arg(long)]
        people: PathBuf,

        /// Groups dataset
        #[arg(long)]
        groups: PathBuf,
    },

    /// Print the journeys layer changes for a route (first, second, third, rome, all)
    Route { route: String },
}
