// crates/bibleviz-core/tests/ancestry.rs
//
// End-to-end behaviour of the ancestry map core: the shipped genealogy table,
// a session driven through style registration, feature loading, search and
// legend changes.

use bibleviz_core::data::{
    EXCLUDE_LINES, GENEALOGY_GROUP_LABEL, GENEALOGY_LAYER_ID, INCLUDE_LINES, INITIAL_MAP_BOUNDS,
    JUDAH_JESUS_POINTS, LABEL_LAYER_IDS,
};
use bibleviz_core::filter::LayerChange;
use bibleviz_core::genealogy::build_genealogy_edges;
use bibleviz_core::prelude::*;
use serde_json::{json, Value};

fn style() -> Value {
    json!({
        "version": 8,
        "terrain": null,
        "layers": [
            { "id": "father-points", "type": "circle" },
            { "id": "father-lines", "type": "line" },
            { "id": "labels-top-level", "type": "symbol",
              "layout": { "text-size-scale-range": [0.8, 2] },
              "paint": { "text-opacity": ["interpolate", ["linear"], ["zoom"], 4, 0, 6, 1] } },
            { "id": "labels-mid-level", "type": "symbol", "paint": { "text-opacity": 0.8 } },
            { "id": "labels-bottom-level", "type": "symbol" }
        ]
    })
}

fn person(name: &str, at: [f64; 2], group: &str, verses: u32) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": at },
        "properties": { "nameLabel": name, "groupLabel": group, "verseCount": verses }
    })
}

fn feature_cache() -> FeatureCache {
    serde_json::from_value(json!({
        "featuresCache": {
            "father-points": [
                person("Judah", [1.112, -3.1458], "Tribe of Judah", 48),
                person("Boaz", [13.494, 0.6868], "Tribe of Judah,Genealogy of Jesus", 24),
                person("Levi", [-2.0, -4.0], "Tribe of Levi", 64),
                person("Aaron", [-3.5, -6.0], "Tribe of Levi", 347)
            ],
            "father-lines": {
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "LineString", "coordinates": [[-2.0, -4.0], [-3.5, -6.0]] },
                    "properties": { "groupLabel": "Tribe of Levi" }
                }]
            }
        }
    }))
    .unwrap()
}

fn contains_segment(lines: &[Feature], a: Point, b: Point) -> bool {
    lines
        .iter()
        .filter_map(Feature::segment)
        .any(|(s, e)| (s == a && e == b) || (s == b && e == a))
}

#[test]
fn shipped_table_applies_overrides() {
    let lines = build_genealogy_edges(
        &JUDAH_JESUS_POINTS,
        &INCLUDE_LINES,
        &EXCLUDE_LINES,
        GENEALOGY_GROUP_LABEL,
    );

    for [a, b] in EXCLUDE_LINES.segments() {
        assert!(!contains_segment(&lines, *a, *b), "excluded {a:?}-{b:?} survived");
    }
    for [a, b] in INCLUDE_LINES.segments() {
        assert!(contains_segment(&lines, *a, *b), "included {a:?}-{b:?} missing");
    }
    assert!(lines
        .iter()
        .all(|f| f.str_property("groupLabel") == Some(GENEALOGY_GROUP_LABEL)));
}

#[test]
fn session_flow() {
    let style = fix_style_document(&style());
    assert!(style.get("terrain").is_none());

    let mut session = AncestrySession::new();
    assert!(session.initialize(&style));
    assert_eq!(session.load_features(feature_cache()), 4);

    let names: Vec<String> = session
        .suggestions("lev")
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, ["Levi"]);

    let plan = session.plan_filter("Tribe of Levi".parse().unwrap());
    assert_eq!(plan.bounds.min, Point::new(-3.5, -6.0));
    assert_eq!(plan.bounds.max, Point::new(-2.0, -4.0));
    assert_eq!(
        plan.changes_for(GENEALOGY_LAYER_ID).next(),
        Some(&LayerChange::Visibility {
            layer: GENEALOGY_LAYER_ID.into(),
            visible: false
        })
    );
    let label_changes = LABEL_LAYER_IDS
        .iter()
        .map(|id| plan.changes_for(id).count())
        .sum::<usize>();
    assert_eq!(label_changes, 3);

    // Boaz is hidden under the Levi selection, so focusing resets to "all".
    let boaz = session.exact_match("boaz").unwrap();
    let reset = session.focus(&boaz).unwrap();
    assert_eq!(reset.bounds, INITIAL_MAP_BOUNDS);
    assert!(reset.changes.contains(&LayerChange::Paint {
        layer: "labels-mid-level".into(),
        property: "text-opacity".into(),
        value: Some(json!(0.8)),
    }));
    assert!(reset.changes.contains(&LayerChange::Paint {
        layer: "labels-bottom-level".into(),
        property: "text-opacity".into(),
        value: None,
    }));
}

#[test]
fn judah_filter_patches_zoom_interpolation() {
    let mut session = AncestrySession::new();
    session.initialize(&style());
    let plan = session.plan_filter(GroupFilter::Group("Tribe of Judah".into()));
    let cond = group_condition("Tribe of Judah");

    assert!(plan.changes.contains(&LayerChange::Visibility {
        layer: GENEALOGY_LAYER_ID.into(),
        visible: true
    }));
    assert!(plan.changes.contains(&LayerChange::Paint {
        layer: "labels-top-level".into(),
        property: "text-opacity".into(),
        value: Some(json!([
            "interpolate", ["linear"], ["zoom"],
            4, ["case", cond, 0, 0.2],
            6, ["case", cond, 1, 0.2]
        ])),
    }));
}

#[test]
fn plan_serializes_for_the_shell() {
    let mut session = AncestrySession::new();
    session.initialize(&style());
    let plan = session.plan_filter(GroupFilter::All);
    let v = serde_json::to_value(&plan).unwrap();

    assert_eq!(v["filter"], json!("all"));
    assert_eq!(v["changes"][0]["kind"], json!("visibility"));
    assert_eq!(v["bounds"], serde_json::to_value(INITIAL_MAP_BOUNDS).unwrap());
}
