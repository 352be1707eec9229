// crates/bibleviz-core/src/journeys/view.rs
use serde::{Deserialize, Serialize};

/// Camera state shared by the two maps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default)]
    pub bearing: f64,
    #[serde(default)]
    pub pitch: f64,
}

/// Eastern Mediterranean, framing all four journeys.
pub const INITIAL_VIEW_STATE: ViewState = ViewState {
    longitude: 28.976205,
    latitude: 36.434199,
    zoom: 5.3,
    bearing: 0.0,
    pitch: 0.0,
};

impl Default for ViewState {
    fn default() -> Self {
        INITIAL_VIEW_STATE
    }
}

/// Which map the user last started moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveMap {
    /// The ancient basemap.
    #[default]
    Left,
    /// The modern basemap.
    Right,
}

impl ActiveMap {
    pub const fn other(self) -> Self {
        match self {
            ActiveMap::Left => ActiveMap::Right,
            ActiveMap::Right => ActiveMap::Left,
        }
    }
}

/// The map to re-centre after `moved` moved, if any.
///
/// Only moves of the active map propagate; the follower's own `move` events,
/// caused by the sync itself, stop here.
pub fn sync_target(moved: ActiveMap, active: ActiveMap) -> Option<ActiveMap> {
    (moved == active).then(|| moved.other())
}
