// crates/bibleviz-core/src/session.rs
//! # Ancestry Session
//!
//! State of one loaded ancestry map: the registered style, the cached
//! genealogy lines, the label opacity snapshot, the search catalog and the
//! current legend selection. The shell creates one session per map instance
//! and passes it explicitly; there is no global state.

use crate::catalog::{FeatureCache, LayerConfig};
use crate::common::{Feature, FeatureCollection};
use crate::data::{
    EXCLUDE_LINES, GENEALOGY_DATASET, GENEALOGY_GROUP_LABEL, GENEALOGY_LAYER_ID, INCLUDE_LINES,
    JUDAH_JESUS_POINTS, LABEL_LAYER_IDS,
};
use crate::filter::{self, FilterContext, FilterPlan, GroupFilter};
use crate::genealogy::build_genealogy_edges;
use crate::search::{self, SearchItem};
use crate::style::{style_layer_ids, OpacitySnapshot};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

const LABEL_OPACITY_PROPERTY: &str = "text-opacity";

#[derive(Debug, Clone)]
pub struct AncestrySession {
    initialized: bool,
    layers: BTreeSet<String>,
    labels: OpacitySnapshot,
    /// Genealogy lines per dataset name.
    edge_cache: HashMap<String, Vec<Feature>>,
    features: FeatureCache,
    items: Vec<SearchItem>,
    layer_configs: Vec<LayerConfig>,
    filter: GroupFilter,
}

fn build_judah_jesus_lines() -> Vec<Feature> {
    build_genealogy_edges(
        &JUDAH_JESUS_POINTS,
        &INCLUDE_LINES,
        &EXCLUDE_LINES,
        GENEALOGY_GROUP_LABEL,
    )
}

impl Default for AncestrySession {
    fn default() -> Self {
        Self {
            initialized: false,
            layers: BTreeSet::new(),
            labels: OpacitySnapshot::default(),
            edge_cache: HashMap::new(),
            features: FeatureCache::new(),
            items: Vec::new(),
            layer_configs: vec![LayerConfig::people()],
            filter: GroupFilter::All,
        }
    }
}

impl AncestrySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses custom layers for the search catalog.
    pub fn with_layer_configs(mut self, configs: Vec<LayerConfig>) -> Self {
        self.layer_configs = configs;
        self
    }

    /// Registers the loaded style document.
    ///
    /// Runs once per session: captures the label opacities, records the
    /// layers and builds the genealogy lines. Returns `false` when the
    /// session was already initialized and nothing changed.
    pub fn initialize(&mut self, style: &Value) -> bool {
        if self.initialized {
            log::debug!("session already initialized; ignoring style");
            return false;
        }

        self.labels = OpacitySnapshot::capture(style, LABEL_LAYER_IDS, LABEL_OPACITY_PROPERTY);
        self.layers = style_layer_ids(style);
        if !self.genealogy_lines().is_empty() {
            self.layers.insert(GENEALOGY_LAYER_ID.to_owned());
        }
        self.initialized = true;

        log::info!(
            "session initialized: {} style layers, {} genealogy lines",
            self.layers.len(),
            self.edge_cache.get(GENEALOGY_DATASET).map_or(0, Vec::len)
        );
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The genealogy lines, built on first use and cached afterwards.
    pub fn genealogy_lines(&mut self) -> &[Feature] {
        self.edge_cache
            .entry(GENEALOGY_DATASET.to_owned())
            .or_insert_with(build_judah_jesus_lines)
    }

    /// The genealogy lines as a source-ready collection.
    pub fn genealogy_collection(&mut self) -> FeatureCollection {
        FeatureCollection::new(self.genealogy_lines().to_vec())
    }

    pub fn layers(&self) -> &BTreeSet<String> {
        &self.layers
    }

    pub fn label_snapshot(&self) -> &OpacitySnapshot {
        &self.labels
    }

    pub fn current_filter(&self) -> &GroupFilter {
        &self.filter
    }

    /// Applies a legend selection and returns the changes to perform.
    pub fn plan_filter(&mut self, filter: GroupFilter) -> FilterPlan {
        let plan = filter::plan_filter(
            FilterContext {
                layers: &self.layers,
                labels: &self.labels,
                features: &self.features,
            },
            &filter,
        );
        self.filter = filter;
        plan
    }

    /// Replaces the feature cache and rebuilds the search catalog.
    /// Returns the number of searchable items.
    pub fn load_features(&mut self, cache: FeatureCache) -> usize {
        self.items = cache.searchable_items(&self.layer_configs);
        self.features = cache;
        self.items.len()
    }

    pub fn features(&self) -> &FeatureCache {
        &self.features
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Ranked suggestions for the search box.
    pub fn suggestions(&self, query: &str) -> Vec<SearchItem> {
        search::search(&self.items, query)
    }

    /// The item the Enter key picks: the first suggestion named exactly like
    /// the query, ignoring case.
    pub fn exact_match(&self, query: &str) -> Option<SearchItem> {
        let suggestions = self.suggestions(query);
        search::exact_match(&suggestions, query).cloned()
    }

    /// Prepares flying to a search hit. When the hit is hidden by the current
    /// legend selection the legend is reset to "all" and that plan returned.
    pub fn focus(&mut self, item: &SearchItem) -> Option<FilterPlan> {
        if filter::is_visible_in_filter(item, &self.filter) {
            return None;
        }
        log::debug!("{} is hidden by {}; resetting the legend", item.name, self.filter);
        Some(self.plan_filter(GroupFilter::All))
    }
}
