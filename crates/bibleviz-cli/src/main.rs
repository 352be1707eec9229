//! bibleviz-cli: Command-line interface for bibleviz-core
//!
//! Builds the map overlays offline and prints what the map shells would
//! apply, which makes style and dataset problems easy to inspect.
//!
//! Usage examples
//! --------------
//!
//! - Genealogy lines for the ancestry map
//!   $ bibleviz edges --pretty
//!
//! - Search the exported feature cache
//!   $ bibleviz --features cache.json search boaz
//!
//! - Layer changes of a legend click
//!   $ bibleviz --style style.json --features cache.json plan "Tribe of Judah"
//!
//! - Prepare datasets and styles for the web app
//!   $ bibleviz fix-style style.json -o style.fixed.json
//!   $ bibleviz prune-people people.json people_filtered.json
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use bibleviz_core::data::{HIDE_OPACITY, LABEL_LAYER_IDS, SHOW_OPACITY};
use bibleviz_core::filter::{legend_html_id, legend_options, GroupFilter};
use bibleviz_core::journeys::{route_plan, Route};
use bibleviz_core::loader;
use bibleviz_core::people::{parse_person_id, PersonDirectory};
use bibleviz_core::style::{fix_style_document, patch_opacity, OpacitySnapshot};
use bibleviz_core::{AncestrySession, FeatureCache};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn require<'a>(path: &'a Option<PathBuf>, flag: &str) -> anyhow::Result<&'a Path> {
    match path {
        Some(p) => Ok(p.as_path()),
        None => bail!("this command needs --{flag} <path>"),
    }
}

fn load_features(path: &Option<PathBuf>) -> anyhow::Result<FeatureCache> {
    match path {
        Some(p) => loader::load_feature_cache(p)
            .with_context(|| format!("loading feature cache {}", p.display())),
        None => Ok(FeatureCache::new()),
    }
}

fn load_style(path: &Path) -> anyhow::Result<Value> {
    loader::load_style(path).with_context(|| format!("loading style {}", path.display()))
}

fn read_style_input(input: &str) -> anyhow::Result<Value> {
    if input.starts_with("http://") || input.starts_with("https://") {
        #[cfg(feature = "fetch")]
        {
            return bibleviz_core::style::fetch_style(input)
                .with_context(|| format!("fetching {input}"));
        }
        #[cfg(not(feature = "fetch"))]
        bail!("fetching styles over HTTP needs the 'fetch' feature");
    }
    load_style(Path::new(input))
}

/// A session over the optional style and feature cache flags.
fn session(args: &CliArgs) -> anyhow::Result<AncestrySession> {
    let mut session = AncestrySession::new();
    let style = match &args.style {
        Some(path) => load_style(path)?,
        None => Value::Object(Default::default()),
    };
    session.initialize(&style);
    let items = session.load_features(load_features(&args.features)?);
    log::info!("{items} searchable items");
    Ok(session)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    match &args.command {
        Commands::Edges { pretty } => {
            let collection = AncestrySession::new().genealogy_collection();
            print_json(&collection, *pretty)?;
        }

        Commands::Search { query, limit } => {
            require(&args.features, "features")?;
            let session = session(&args)?;
            let hits = session.suggestions(query);
            if hits.is_empty() {
                println!("No matches for: {query}");
            }
            for item in hits.iter().take(*limit) {
                println!(
                    "{} (verses: {}) [{}, {}] {}",
                    item.name,
                    item.verse_count.unwrap_or(0),
                    item.coordinates.lng,
                    item.coordinates.lat,
                    item.group_label.as_deref().unwrap_or("-")
                );
            }
        }

        Commands::Patch { group, layer } => {
            let style = load_style(require(&args.style, "style")?)?;
            let filter: GroupFilter = group.parse()?;
            let snapshot = OpacitySnapshot::capture(&style, LABEL_LAYER_IDS, "text-opacity");

            for id in LABEL_LAYER_IDS {
                if layer.as_deref().is_some_and(|only| only != id) {
                    continue;
                }
                let original = snapshot.original(id);
                let value = match filter.condition() {
                    Some(cond) => {
                        Some(patch_opacity(original, &cond, HIDE_OPACITY, SHOW_OPACITY))
                    }
                    None => original.cloned(),
                };
                match value {
                    Some(v) => println!("{id}: {v}"),
                    None => println!("{id}: <unset>"),
                }
            }
        }

        Commands::Plan { group } => {
            let mut session = session(&args)?;
            let plan = session.plan_filter(group.parse::<GroupFilter>()?);
            print_json(&plan, true)?;
        }

        Commands::Bounds { group } => {
            let filter: GroupFilter = group.parse()?;
            let b = load_features(&args.features)?.group_bounds(&filter);
            println!(
                "[[{}, {}], [{}, {}]]",
                b.min.lng, b.min.lat, b.max.lng, b.max.lat
            );
        }

        Commands::Legend => {
            for option in legend_options() {
                let marker = if option.default_checked { "*" } else { " " };
                println!(
                    "{marker} {:<10} {:<20} {}",
                    option.text,
                    option.id,
                    legend_html_id(option.id)
                );
            }
        }

        Commands::FixStyle { input, output } => {
            let fixed = fix_style_document(&read_style_input(input)?);
            match output {
                Some(path) => {
                    loader::write_json(path, &fixed, true)?;
                    println!("Fixed style saved to {}", path.display());
                }
                None => print_json(&fixed, true)?,
            }
        }

        Commands::PrunePeople { input, output } => {
            let people = loader::load_people(input)?;
            loader::write_json(output, &people, true)?;
            println!("{} people saved to {}", people.len(), output.display());
        }

        Commands::PruneGroups { input, output } => {
            let groups = loader::load_groups(input)?;
            loader::write_json(output, &groups, true)?;
            println!("{} groups saved to {}", groups.len(), output.display());
        }

        Commands::Person { id, people, groups } => {
            let Some(person_id) = parse_person_id(&Value::String(id.clone())) else {
                bail!("not a valid PersonID: {id}");
            };
            let directory =
                PersonDirectory::new(loader::load_people(people)?, loader::load_groups(groups)?);
            match directory.summary(person_id) {
                Some(summary) => print_json(&summary, true)?,
                None => eprintln!("Person not found: {person_id}"),
            }
        }

        Commands::Route { route } => {
            let route: Route = route.parse()?;
            print_json(&route_plan(route), true)?;
        }
    }

    Ok(())
}
