// crates/bibleviz-core/src/catalog.rs
//! # Feature Catalog
//!
//! The rendered map's feature cache arrives in several shapes depending on
//! how it was exported. [`FeatureCache`] accepts all of them once, at the
//! boundary, and everything downstream works on a plain
//! `layer id -> features` map.
//!
//! Accepted shapes:
//! - `{ "<layer>": [Feature, ...] }`
//! - `{ "<layer>": { "type": "FeatureCollection", "features": [...] } }`
//! - `{ "featuresCache": { ...either of the above... } }`

use crate::common::{Bounds, Feature};
use crate::data::{GROUP_PROPERTY_NAME, INITIAL_MAP_BOUNDS, LINES_LAYER_ID, POINTS_LAYER_ID};
use crate::filter::GroupFilter;
use crate::search::{item_id, SearchItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<Value>,
}

/// A cached layer before its features are parsed one by one.
#[derive(Deserialize)]
#[serde(untagged)]
enum LayerFeatures {
    List(Vec<Value>),
    Collection(RawCollection),
    Other(serde::de::IgnoredAny),
}

impl LayerFeatures {
    /// Parses every feature on its own; malformed ones are dropped.
    fn into_features(self, layer_id: &str) -> Vec<Feature> {
        let raw = match self {
            LayerFeatures::List(features) => features,
            LayerFeatures::Collection(fc) => fc.features,
            LayerFeatures::Other(_) => return Vec::new(),
        };
        let total = raw.len();
        let features: Vec<Feature> = raw
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        let dropped = total - features.len();
        if dropped > 0 {
            log::warn!("layer {layer_id}: dropped {dropped} of {total} malformed features");
        }
        features
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CacheShape {
    Nested {
        #[serde(rename = "featuresCache")]
        features_cache: BTreeMap<String, LayerFeatures>,
    },
    Flat(BTreeMap<String, LayerFeatures>),
}

impl From<CacheShape> for FeatureCache {
    fn from(shape: CacheShape) -> Self {
        let layers = match shape {
            CacheShape::Nested { features_cache } => features_cache,
            CacheShape::Flat(layers) => layers,
        };
        FeatureCache {
            layers: layers
                .into_iter()
                .map(|(id, features)| {
                    let features = features.into_features(&id);
                    (id, features)
                })
                .collect(),
        }
    }
}

/// Features per layer id, normalized from any upstream cache shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CacheShape", into = "BTreeMap<String, Vec<Feature>>")]
pub struct FeatureCache {
    layers: BTreeMap<String, Vec<Feature>>,
}

impl From<FeatureCache> for BTreeMap<String, Vec<Feature>> {
    fn from(cache: FeatureCache) -> Self {
        cache.layers
    }
}

/// Which layer a search item comes from and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    pub layer_id: String,
    /// Property holding the display name.
    pub name_property: String,
    /// Vector-tile source layer the features were queried from.
    pub source_layer: Option<String>,
}

impl LayerConfig {
    /// The person points of the ancestry map.
    pub fn people() -> Self {
        Self {
            layer_id: POINTS_LAYER_ID.to_owned(),
            name_property: "nameLabel".to_owned(),
            source_layer: Some(crate::data::PEOPLE_SOURCE_LAYER.to_owned()),
        }
    }
}

fn verse_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u32)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn group_label_contains(feature: &Feature, group_id: &str) -> bool {
    feature
        .str_property(GROUP_PROPERTY_NAME)
        .is_some_and(|label| !label.is_empty() && label.contains(group_id))
}

impl FeatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, layer_id: impl Into<String>, features: Vec<Feature>) {
        self.layers.insert(layer_id.into(), features);
    }

    /// Features of `layer_id`; empty when the layer is not cached.
    pub fn features(&self, layer_id: &str) -> &[Feature] {
        self.layers.get(layer_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn feature_count(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Builds the search catalog: one item per distinct named point feature.
    ///
    /// Features without a non-empty string name or without point geometry
    /// are skipped; repeated ids keep their first occurrence.
    pub fn searchable_items(&self, configs: &[LayerConfig]) -> Vec<SearchItem> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();

        for config in configs {
            for feature in self.features(&config.layer_id) {
                let Some(name) = feature
                    .str_property(&config.name_property)
                    .filter(|n| !n.is_empty())
                else {
                    continue;
                };
                let Some(coordinates) = feature.point() else {
                    continue;
                };

                let id = item_id(&config.layer_id, name, coordinates);
                if !seen.insert(id.clone()) {
                    continue;
                }
                items.push(SearchItem {
                    id,
                    name: name.to_owned(),
                    coordinates,
                    layer_id: config.layer_id.clone(),
                    group_label: feature.str_property(GROUP_PROPERTY_NAME).map(str::to_owned),
                    verse_count: feature.property("verseCount").and_then(verse_count),
                });
            }
        }
        log::debug!("catalog: {} searchable items", items.len());
        items
    }

    /// Framing for a legend selection.
    ///
    /// Covers the person points (those with a `verseCount`) and the parent
    /// lines whose group label mentions the group. "All", or a group without
    /// any feature, falls back to [`INITIAL_MAP_BOUNDS`].
    pub fn group_bounds(&self, filter: &GroupFilter) -> Bounds {
        let GroupFilter::Group(group_id) = filter else {
            return INITIAL_MAP_BOUNDS;
        };

        let points = self
            .features(POINTS_LAYER_ID)
            .iter()
            .filter(|f| f.property("verseCount").is_some() && group_label_contains(f, group_id));
        let lines = self
            .features(LINES_LAYER_ID)
            .iter()
            .filter(|f| group_label_contains(f, group_id));

        let vertices = points
            .chain(lines)
            .flat_map(|f| f.geometry.points().iter().copied());

        match Bounds::from_points(vertices) {
            Some(bounds) => bounds,
            None => {
                log::warn!("no features found for group {group_id}; using the initial map bounds");
                INITIAL_MAP_BOUNDS
            }
        }
    }
}
