//! bibleviz-core prelude: bring the common types and traits into scope for
//! shells and demos.

#![allow(unused_imports)]

pub use crate::catalog::{FeatureCache, LayerConfig};
pub use crate::common::{Bounds, Feature, FeatureCollection, Geometry, Point};
pub use crate::error::{Result, VizError};
pub use crate::filter::{
    is_visible_in_filter, legend_html_id, legend_options, FilterPlan, GroupFilter, LayerChange,
};
pub use crate::genealogy::{build_genealogy_edges, EdgeKey, EdgeOverrides};
pub use crate::journeys::{route_plan, JourneyPlan, Route, Slider, ViewState};
pub use crate::people::{PersonDirectory, PersonRecord};
pub use crate::search::{search, SearchItem};
pub use crate::session::AncestrySession;
pub use crate::style::{fix_style_document, group_condition, patch_opacity, OpacitySnapshot};
pub use crate::throttle::Throttle;
pub use crate::traits::Searchable;
