//! Basic usage example for bibleviz-rs
//!
//! This example demonstrates how to:
//! - Build the genealogy lines of the ancestry map
//! - Register a style and plan a legend selection
//! - Rank search suggestions

use bibleviz_core::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== bibleviz-rs Basic Usage Example ===\n");

    // Example 1: Genealogy lines
    println!("--- Example 1: Genealogy lines ---");
    let mut session = AncestrySession::new();
    let lines = session.genealogy_lines();
    println!("Total lines: {}", lines.len());
    for (i, line) in lines.iter().take(3).enumerate() {
        if let Some((a, b)) = line.segment() {
            println!("{}. [{}, {}] -> [{}, {}]", i + 1, a.lng, a.lat, b.lng, b.lat);
        }
    }
    println!();

    // Example 2: Register a style and filter by group
    println!("--- Example 2: Legend selection ---");
    let style = json!({
        "layers": [
            { "id": "father-points" },
            { "id": "father-lines" },
            { "id": "labels-top-level", "paint": { "text-opacity": 0.9 } }
        ]
    });
    session.initialize(&style);
    let plan = session.plan_filter(GroupFilter::Group("Tribe of Judah".into()));
    for change in &plan.changes {
        println!("  {change:?}");
    }
    println!();

    // Example 3: Search suggestions
    println!("--- Example 3: Search suggestions ---");
    let cache: FeatureCache = serde_json::from_value(json!({
        "father-points": [
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [13.494, 0.6868] },
              "properties": { "nameLabel": "Boaz", "verseCount": 24 } },
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [14.7772, 3.1912] },
              "properties": { "nameLabel": "Jesse", "verseCount": 47 } },
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [16.2846, 5.5798] },
              "properties": { "nameLabel": "David", "verseCount": 1118 } }
        ]
    }))?;
    session.load_features(cache);
    for item in session.suggestions("s") {
        println!("  {} ({} verses)", item.name, item.verse_count.unwrap_or(0));
    }

    Ok(())
}
