// crates/bibleviz-core/src/journeys/mod.rs
//! # Journeys Comparison
//!
//! The second map application: an ancient and a modern basemap side by side,
//! revealed through a draggable slider, kept in sync while panning, with a
//! route legend filtering the journey layers.

pub mod place;
pub mod route;
pub mod slider;
pub mod view;

pub use place::{verse_refs, JourneyPlace, VerseRef};
pub use route::{route_plan, JourneyPlan, Route, ROUTES};
pub use slider::{aspect_ratio, Slider, DEFAULT_SLIDER_VALUE};
pub use view::{sync_target, ActiveMap, ViewState, INITIAL_VIEW_STATE};
