//! Error handling example for bibleviz-rs
//!
//! This example demonstrates the error paths at the I/O edges and how the
//! core degrades instead of failing.

use bibleviz_core::data::{HIDE_OPACITY, SHOW_OPACITY};
use bibleviz_core::loader;
use bibleviz_core::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== bibleviz-rs Error Handling Example ===\n");

    // Example 1: Missing input files
    println!("--- Example 1: Loading a missing feature cache ---");
    match loader::load_feature_cache("does-not-exist.json") {
        Ok(cache) => println!("  Loaded {} features", cache.feature_count()),
        Err(VizError::NotFound(msg)) => println!("  Not found: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Datasets with the wrong shape
    println!("--- Example 2: People dataset that is not an array ---");
    match PersonDirectory::from_values(&json!({ "people": [] }), &json!([])) {
        Ok(dir) => println!("  {} people", dir.len()),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    // Example 3: Invalid legend values
    println!("--- Example 3: Route legend values ---");
    for value in ["first", "Rome", "fourth", ""] {
        match value.parse::<Route>() {
            Ok(route) => println!("  {value:?} -> {route}"),
            Err(e) => println!("  {value:?} -> {e}"),
        }
    }
    println!();

    // Example 4: The core never fails, it falls back
    println!("--- Example 4: Fallbacks ---");
    let cache = FeatureCache::new();
    let bounds = cache.group_bounds(&GroupFilter::Group("Tribe of Dan".into()));
    println!("  Bounds without features: {:?}", bounds);

    let weird = json!("not an opacity");
    let cond = group_condition("Tribe of Dan");
    let patched = patch_opacity(Some(&weird), &cond, HIDE_OPACITY, SHOW_OPACITY);
    println!("  Patched string opacity: {patched}");

    println!("  Search for blank query: {} hits", search::<SearchItem>(&[], "  ").len());

    Ok(())
}
