// crates/bibleviz-core/src/lib.rs

//! # bibleviz-core
//!
//! The computational core behind the bible map overlays:
//!
//! - [`genealogy`]: nearest-neighbour genealogy lines with manual overrides,
//! - [`style`]: opacity-expression patching for the group filter,
//! - [`search`]: ranked search suggestions,
//!
//! plus the glue the map shells share ([`session`], [`filter`], [`catalog`],
//! [`people`], [`journeys`]). Nothing in here renders; every operation takes
//! and returns plain data.

pub mod catalog;
pub mod common;
pub mod data;
pub mod error;
pub mod filter;
pub mod genealogy;
pub mod geodesic;
pub mod journeys;
#[cfg(feature = "json")]
pub mod loader;
pub mod people;
pub mod prelude;
pub mod search;
pub mod session;
pub mod style;
pub mod throttle;
pub mod traits;

// Re-exports
pub use crate::catalog::FeatureCache;
pub use crate::common::{Bounds, Feature, FeatureCollection, Point};
pub use crate::error::{Result, VizError};
pub use crate::filter::GroupFilter;
pub use crate::search::SearchItem;
pub use crate::session::AncestrySession;
// Export the Search Trait
pub use crate::traits::Searchable;
