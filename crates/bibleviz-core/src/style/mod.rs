// crates/bibleviz-core/src/style/mod.rs
//! Map style handling: opacity-expression patching for the group filter and
//! clean-up of fetched basemap style documents.

pub mod document;
pub mod opacity;

pub use document::{fix_style_document, style_layer_ids, OpacitySnapshot};
pub use opacity::{case_expression, group_condition, patch_opacity, OpacityShape};

#[cfg(feature = "fetch")]
pub use document::fetch_style;
