// crates/bibleviz-core/src/style/document.rs
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Layout properties some style exports carry that the renderer rejects.
const INVALID_LAYOUT_PROPERTIES: [&str; 1] = ["text-size-scale-range"];

/// Returns a copy of a fetched style document the renderer accepts.
///
/// - drops `text-size-scale-range` from every layer layout,
/// - drops a top-level `"terrain": null`.
pub fn fix_style_document(style: &Value) -> Value {
    let mut fixed = style.clone();

    if let Some(layers) = fixed.get_mut("layers").and_then(Value::as_array_mut) {
        for layer in layers {
            if let Some(layout) = layer.get_mut("layout").and_then(Value::as_object_mut) {
                for key in INVALID_LAYOUT_PROPERTIES {
                    layout.remove(key);
                }
            }
        }
    }

    if let Some(root) = fixed.as_object_mut() {
        if root.get("terrain").is_some_and(Value::is_null) {
            root.remove("terrain");
        }
    }
    fixed
}

fn layers(style: &Value) -> impl Iterator<Item = &Value> {
    style
        .get("layers")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn find_layer<'a>(style: &'a Value, layer_id: &str) -> Option<&'a Value> {
    layers(style).find(|l| l.get("id").and_then(Value::as_str) == Some(layer_id))
}

/// Ids of every layer in the style document.
pub fn style_layer_ids(style: &Value) -> BTreeSet<String> {
    layers(style)
        .filter_map(|l| l.get("id").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

/// The paint values a set of layers carried before any filter touched them.
///
/// "Show all" restores these values verbatim, so the snapshot is taken once
/// and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpacitySnapshot {
    property: String,
    values: BTreeMap<String, Option<Value>>,
}

impl OpacitySnapshot {
    /// Records `paint[property]` for each layer in `layer_ids`.
    ///
    /// A layer missing from the style, or without the property, records
    /// `None`; the missing layer case is logged.
    pub fn capture<'a, I>(style: &Value, layer_ids: I, property: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values = layer_ids
            .into_iter()
            .map(|id| {
                let value = match find_layer(style, id) {
                    Some(layer) => layer
                        .get("paint")
                        .and_then(|paint| paint.get(property))
                        .cloned(),
                    None => {
                        log::warn!("label layer {id} not found in the current map style");
                        None
                    }
                };
                (id.to_owned(), value)
            })
            .collect();

        Self {
            property: property.to_owned(),
            values,
        }
    }

    /// Paint property the snapshot was taken of (e.g. `text-opacity`).
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The original value of `layer_id`; `None` if unset or unknown.
    pub fn original(&self, layer_id: &str) -> Option<&Value> {
        self.values.get(layer_id)?.as_ref()
    }

    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Downloads a style document (blocking).
#[cfg(feature = "fetch")]
pub fn fetch_style(url: &str) -> crate::error::Result<Value> {
    use crate::error::VizError;

    let response = reqwest::blocking::get(url).map_err(|e| VizError::Fetch(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(VizError::Fetch(format!("HTTP {status} for {url}")));
    }
    let body = response
        .text()
        .map_err(|e| VizError::Fetch(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_style() -> Value {
        json!({
            "version": 8,
            "terrain": null,
            "layers": [
                { "id": "background", "type": "background" },
                {
                    "id": "labels-top-level",
                    "type": "symbol",
                    "layout": { "text-field": "{name}", "text-size-scale-range": [0.8, 2] },
                    "paint": { "text-opacity": ["interpolate", ["linear"], ["zoom"], 2, 0, 4, 1] }
                },
                {
                    "id": "labels-mid-level",
                    "type": "symbol",
                    "paint": { "text-opacity": 0.9 }
                },
                { "id": "labels-bottom-level", "type": "symbol", "paint": {} }
            ]
        })
    }

    #[test]
    fn fix_removes_invalid_properties_only() {
        let style = sample_style();
        let fixed = fix_style_document(&style);

        assert!(fixed.get("terrain").is_none());
        let layout = &fixed["layers"][1]["layout"];
        assert!(layout.get("text-size-scale-range").is_none());
        assert_eq!(layout["text-field"], json!("{name}"));
        // input untouched
        assert!(style["layers"][1]["layout"]
            .get("text-size-scale-range")
            .is_some());
    }

    #[test]
    fn fix_keeps_real_terrain() {
        let style = json!({ "terrain": { "source": "dem" }, "layers": [] });
        assert_eq!(fix_style_document(&style), style);
    }

    #[test]
    fn layer_ids_are_collected() {
        let ids = style_layer_ids(&sample_style());
        assert!(ids.contains("background"));
        assert!(ids.contains("labels-bottom-level"));
        assert_eq!(ids.len(), 4);
        assert!(style_layer_ids(&json!({})).is_empty());
    }

    #[test]
    fn snapshot_records_originals() {
        let snap = OpacitySnapshot::capture(
            &sample_style(),
            ["labels-top-level", "labels-mid-level", "labels-bottom-level", "ghost"],
            "text-opacity",
        );
        assert_eq!(snap.property(), "text-opacity");
        assert_eq!(snap.original("labels-mid-level"), Some(&json!(0.9)));
        assert!(snap.original("labels-top-level").unwrap().is_array());
        assert_eq!(snap.original("labels-bottom-level"), None);
        assert_eq!(snap.original("ghost"), None);
        assert_eq!(snap.layer_ids().count(), 4);
    }
}
