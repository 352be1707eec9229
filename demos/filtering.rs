//! Opacity filtering example for bibleviz-rs
//!
//! Shows how each shape of label opacity is gated on a legend group.

use bibleviz_core::data::{HIDE_OPACITY, SHOW_OPACITY};
use bibleviz_core::prelude::*;
use bibleviz_core::style::OpacityShape;
use serde_json::{json, Value};

fn main() {
    println!("=== bibleviz-rs Filtering Example ===\n");

    let cond = group_condition("Tribe of Levi");
    let originals: [(&str, Option<Value>); 4] = [
        ("unset", None),
        ("constant", Some(json!(0.8))),
        (
            "zoom interpolation",
            Some(json!(["interpolate", ["linear"], ["zoom"], 5, 0, 7, 1])),
        ),
        ("step expression", Some(json!(["step", ["zoom"], 0, 6, 1]))),
    ];

    for (label, original) in &originals {
        let shape = original.as_ref().and_then(OpacityShape::classify);
        println!("--- {label} ---");
        println!("  shape:   {}", shape.map_or("none".into(), |s| format!("{s:?}")));
        println!(
            "  patched: {}",
            patch_opacity(original.as_ref(), &cond, HIDE_OPACITY, SHOW_OPACITY)
        );
        println!();
    }

    println!("--- Visibility of search hits ---");
    let mut item = SearchItem::new("father-points", "Aaron", Point::new(-3.5, -6.0));
    item.group_label = Some("Tribe of Levi".into());
    for filter in [
        GroupFilter::All,
        GroupFilter::Group("Tribe of Levi".into()),
        GroupFilter::Group("Tribe of Dan".into()),
    ] {
        println!(
            "  {:<14} -> visible: {}",
            filter.to_string(),
            is_visible_in_filter(&item, &filter)
        );
    }
}
