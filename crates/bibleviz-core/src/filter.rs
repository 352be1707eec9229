// crates/bibleviz-core/src/filter.rs
//! # Legend Filtering
//!
//! Turns a legend selection into the concrete layer changes the map shell
//! applies: layer visibility, layer filters and patched opacity paints.
//! Nothing here touches a renderer; the output is plain data.

use crate::catalog::FeatureCache;
use crate::common::Bounds;
use crate::data::{
    LegendOption, GENEALOGY_LAYER_ID, GENEALOGY_VISIBLE_GROUP, HIDE_OPACITY,
    LABEL_LAYER_IDS, LEGEND_OPTIONS, LINES_LAYER_ID, POINTS_LAYER_ID, SHOW_OPACITY,
};
use crate::search::SearchItem;
use crate::style::{case_expression, group_condition, patch_opacity, OpacitySnapshot};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Legend value meaning "show every group".
pub const ALL_GROUPS: &str = "all";

const LEGEND_HTML_ID_PREFIX: &str = "ancestry-legend-";

/// The legend selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupFilter {
    #[default]
    All,
    /// A group id such as `"Tribe of Levi"`, matched against `groupLabel`.
    Group(String),
}

impl GroupFilter {
    pub fn group_id(&self) -> Option<&str> {
        match self {
            GroupFilter::All => None,
            GroupFilter::Group(id) => Some(id),
        }
    }

    /// The map expression selecting features of this group, if any.
    pub fn condition(&self) -> Option<Value> {
        self.group_id().map(group_condition)
    }
}

impl FromStr for GroupFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<String> for GroupFilter {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(ALL_GROUPS) {
            GroupFilter::All
        } else {
            GroupFilter::Group(value)
        }
    }
}

impl From<GroupFilter> for String {
    fn from(filter: GroupFilter) -> Self {
        match filter {
            GroupFilter::All => ALL_GROUPS.to_owned(),
            GroupFilter::Group(id) => id,
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_id().unwrap_or(ALL_GROUPS))
    }
}

/// One instruction for the map shell.
///
/// `None` values mean "unset": the shell removes the filter or resets the
/// paint property to the style default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayerChange {
    Visibility {
        layer: String,
        visible: bool,
    },
    Filter {
        layer: String,
        filter: Option<Value>,
    },
    Paint {
        layer: String,
        property: String,
        value: Option<Value>,
    },
}

impl LayerChange {
    pub fn layer(&self) -> &str {
        match self {
            LayerChange::Visibility { layer, .. }
            | LayerChange::Filter { layer, .. }
            | LayerChange::Paint { layer, .. } => layer,
        }
    }
}

/// Everything a legend click results in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPlan {
    pub filter: GroupFilter,
    pub changes: Vec<LayerChange>,
    /// Where the camera should fit afterwards.
    pub bounds: Bounds,
}

impl FilterPlan {
    pub fn changes_for<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a LayerChange> {
        self.changes.iter().filter(move |c| c.layer() == layer)
    }
}

/// The style state a plan is computed against.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    /// Layers present in the registered style document.
    pub layers: &'a BTreeSet<String>,
    /// Label `text-opacity` values captured before the first filter.
    pub labels: &'a OpacitySnapshot,
    pub features: &'a FeatureCache,
}

fn paint(layer: &str, property: &str, value: Option<Value>) -> LayerChange {
    LayerChange::Paint {
        layer: layer.to_owned(),
        property: property.to_owned(),
        value,
    }
}

/// Plans the layer changes for a legend selection.
///
/// Changes are only emitted for layers that exist in `ctx.layers`, in a fixed
/// order: genealogy visibility, person points, parent lines, labels.
pub fn plan_filter(ctx: FilterContext<'_>, filter: &GroupFilter) -> FilterPlan {
    let has = |layer: &str| ctx.layers.contains(layer);
    let condition = filter.condition();
    let gated = condition
        .as_ref()
        .map(|cond| case_expression(cond, Value::from(SHOW_OPACITY), HIDE_OPACITY));

    let mut changes = Vec::new();

    if has(GENEALOGY_LAYER_ID) {
        changes.push(LayerChange::Visibility {
            layer: GENEALOGY_LAYER_ID.to_owned(),
            visible: filter.group_id() == Some(GENEALOGY_VISIBLE_GROUP),
        });
    }

    if has(POINTS_LAYER_ID) {
        changes.push(LayerChange::Filter {
            layer: POINTS_LAYER_ID.to_owned(),
            filter: Some(json!(["has", "verseCount"])),
        });
        changes.push(paint(POINTS_LAYER_ID, "circle-opacity", gated.clone()));
    }

    if has(LINES_LAYER_ID) {
        changes.push(LayerChange::Filter {
            layer: LINES_LAYER_ID.to_owned(),
            filter: None,
        });
        changes.push(paint(LINES_LAYER_ID, "line-opacity", gated));
    }

    for layer in LABEL_LAYER_IDS {
        if !has(layer) {
            continue;
        }
        let original = ctx.labels.original(layer);
        let value = match &condition {
            None => original.cloned(),
            Some(cond) => Some(patch_opacity(original, cond, HIDE_OPACITY, SHOW_OPACITY)),
        };
        changes.push(paint(layer, ctx.labels.property(), value));
    }

    log::debug!("filter {filter}: {} layer changes", changes.len());
    FilterPlan {
        filter: filter.clone(),
        changes,
        bounds: ctx.features.group_bounds(filter),
    }
}

/// Whether a search hit is visible under the current legend selection.
pub fn is_visible_in_filter(item: &SearchItem, filter: &GroupFilter) -> bool {
    match filter {
        GroupFilter::All => true,
        GroupFilter::Group(id) => item
            .group_label
            .as_deref()
            .is_some_and(|label| label.contains(id.as_str())),
    }
}

/// The fixed ancestry legend, "ALL" first.
pub fn legend_options() -> &'static [LegendOption] {
    &LEGEND_OPTIONS
}

/// DOM id of a legend radio button.
///
/// ```rust
/// use bibleviz_core::filter::legend_html_id;
/// assert_eq!(legend_html_id("Tribe of  Judah"), "ancestry-legend-tribe-of-judah");
/// ```
pub fn legend_html_id(option_id: &str) -> String {
    let slug = option_id
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{LEGEND_HTML_ID_PREFIX}{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point;
    use crate::data::{GENEALOGY_LAYER_ID, INITIAL_MAP_BOUNDS};

    fn style() -> Value {
        json!({
            "layers": [
                { "id": "father-points", "type": "circle" },
                { "id": "father-lines", "type": "line" },
                { "id": "labels-top-level", "paint": { "text-opacity": 0.9 } },
                { "id": "labels-mid-level", "paint": {} },
                { "id": GENEALOGY_LAYER_ID }
            ]
        })
    }

    fn snapshot(style: &Value) -> OpacitySnapshot {
        OpacitySnapshot::capture(style, LABEL_LAYER_IDS, "text-opacity")
    }

    #[test]
    fn parses_legend_values() {
        assert_eq!("all".parse::<GroupFilter>().unwrap(), GroupFilter::All);
        assert_eq!(
            "Tribe of Dan".parse::<GroupFilter>().unwrap(),
            GroupFilter::Group("Tribe of Dan".into())
        );
        assert_eq!(GroupFilter::All.to_string(), "all");
        assert_eq!(
            serde_json::to_value(GroupFilter::Group("Tribe of Gad".into())).unwrap(),
            json!("Tribe of Gad")
        );
    }

    #[test]
    fn judah_shows_the_genealogy_lines() {
        let style = style();
        let layers = crate::style::style_layer_ids(&style);
        let labels = snapshot(&style);
        let features = FeatureCache::new();
        let ctx = FilterContext {
            layers: &layers,
            labels: &labels,
            features: &features,
        };

        let judah = plan_filter(ctx, &GroupFilter::Group("Tribe of Judah".into()));
        assert_eq!(
            judah.changes[0],
            LayerChange::Visibility {
                layer: GENEALOGY_LAYER_ID.into(),
                visible: true
            }
        );

        let levi = plan_filter(ctx, &GroupFilter::Group("Tribe of Levi".into()));
        assert_eq!(
            levi.changes[0],
            LayerChange::Visibility {
                layer: GENEALOGY_LAYER_ID.into(),
                visible: false
            }
        );
        assert_eq!(levi.bounds, INITIAL_MAP_BOUNDS);
    }

    #[test]
    fn group_selection_patches_every_present_layer() {
        let style = style();
        let layers = crate::style::style_layer_ids(&style);
        let labels = snapshot(&style);
        let features = FeatureCache::new();
        let ctx = FilterContext {
            layers: &layers,
            labels: &labels,
            features: &features,
        };
        let cond = group_condition("Tribe of Levi");
        let plan = plan_filter(ctx, &GroupFilter::Group("Tribe of Levi".into()));

        assert!(plan.changes.contains(&LayerChange::Filter {
            layer: POINTS_LAYER_ID.into(),
            filter: Some(json!(["has", "verseCount"])),
        }));
        assert!(plan.changes.contains(&paint(
            LINES_LAYER_ID,
            "line-opacity",
            Some(json!(["case", cond, 1.0, 0.2]))
        )));
        assert!(plan.changes.contains(&paint(
            "labels-top-level",
            "text-opacity",
            Some(json!(["case", cond, 0.9, 0.2]))
        )));
        assert!(plan.changes.contains(&paint(
            "labels-mid-level",
            "text-opacity",
            Some(json!(["case", cond, 1.0, 0.2]))
        )));
        // Not in the style.
        assert_eq!(plan.changes_for("labels-bottom-level").count(), 0);
    }

    #[test]
    fn all_restores_the_snapshot() {
        let style = style();
        let layers = crate::style::style_layer_ids(&style);
        let labels = snapshot(&style);
        let features = FeatureCache::new();
        let ctx = FilterContext {
            layers: &layers,
            labels: &labels,
            features: &features,
        };
        let plan = plan_filter(ctx, &GroupFilter::All);

        assert!(plan
            .changes
            .contains(&paint("labels-top-level", "text-opacity", Some(json!(0.9)))));
        assert!(plan
            .changes
            .contains(&paint("labels-mid-level", "text-opacity", None)));
        assert!(plan
            .changes
            .contains(&paint(POINTS_LAYER_ID, "circle-opacity", None)));
    }

    #[test]
    fn visibility_of_search_hits() {
        let mut item = SearchItem::new(POINTS_LAYER_ID, "Aaron", Point::new(1.0, 2.0));
        assert!(is_visible_in_filter(&item, &GroupFilter::All));
        assert!(!is_visible_in_filter(
            &item,
            &GroupFilter::Group("Tribe of Levi".into())
        ));

        item.group_label = Some("Tribe of Levi".into());
        assert!(is_visible_in_filter(
            &item,
            &GroupFilter::Group("Tribe of Levi".into())
        ));
    }

    #[test]
    fn legend_ids() {
        assert_eq!(legend_options().len(), 14);
        assert_eq!(legend_options()[0].id, ALL_GROUPS);
        assert_eq!(legend_html_id("all"), "ancestry-legend-all");
        assert_eq!(
            legend_html_id("Genealogy of Jesus"),
            "ancestry-legend-genealogy-of-jesus"
        );
    }
}
