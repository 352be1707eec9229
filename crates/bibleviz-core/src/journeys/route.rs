// crates/bibleviz-core/src/journeys/route.rs
use crate::data::JOURNEY_PLACES_LAYER_ID;
use crate::error::VizError;
use crate::filter::LayerChange;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// A route legend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    First,
    Second,
    Third,
    Rome,
    #[default]
    All,
}

/// The individual routes, in legend order.
pub const ROUTES: [Route; 4] = [Route::First, Route::Second, Route::Third, Route::Rome];

impl Route {
    /// Legend value; also the property journey places carry per route.
    pub const fn id(self) -> &'static str {
        match self {
            Route::First => "first",
            Route::Second => "second",
            Route::Third => "third",
            Route::Rome => "rome",
            Route::All => "all",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Route::First => "FIRST",
            Route::Second => "SECOND",
            Route::Third => "THIRD",
            Route::Rome => "ROME",
            Route::All => "ALL",
        }
    }

    pub fn html_id(self) -> String {
        format!("route-{}", self.id())
    }

    /// Whether `route`'s layers show under this selection.
    pub fn shows(self, route: Route) -> bool {
        self == Route::All || self == route
    }

    /// Filter for the journey places layer.
    pub fn places_filter(self) -> Value {
        match self {
            Route::All => {
                let mut any = vec![json!("any")];
                any.extend(ROUTES.iter().map(|r| json!(["has", r.id()])));
                Value::Array(any)
            }
            route => json!(["has", route.id()]),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Route {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Route::First),
            "second" => Ok(Route::Second),
            "third" => Ok(Route::Third),
            "rome" => Ok(Route::Rome),
            "all" => Ok(Route::All),
            other => Err(VizError::InvalidData(format!("unknown route '{other}'"))),
        }
    }
}

/// Layer changes for both maps of the comparison.
///
/// The shell skips changes for layers its map does not have.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyPlan {
    pub route: Route,
    pub ancient: Vec<LayerChange>,
    pub modern: Vec<LayerChange>,
}

fn visibility_changes(selected: Route) -> Vec<LayerChange> {
    ROUTES
        .iter()
        .flat_map(|&route| {
            let visible = selected.shows(route);
            [
                format!("{}-journey", route.id()),
                format!("{}-journey-arrows", route.id()),
            ]
            .into_iter()
            .map(move |layer| LayerChange::Visibility { layer, visible })
        })
        .collect()
}

/// Plans a route legend click.
///
/// Both maps toggle `{route}-journey` and `{route}-journey-arrows`; only the
/// ancient map carries the journey places, so only it gets the filter.
pub fn route_plan(route: Route) -> JourneyPlan {
    let modern = visibility_changes(route);
    let mut ancient = modern.clone();
    ancient.push(LayerChange::Filter {
        layer: JOURNEY_PLACES_LAYER_ID.to_owned(),
        filter: Some(route.places_filter()),
    });
    JourneyPlan {
        route,
        ancient,
        modern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_layers(changes: &[LayerChange]) -> Vec<&str> {
        changes
            .iter()
            .filter_map(|c| match c {
                LayerChange::Visibility {
                    layer,
                    visible: true,
                } => Some(layer.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_legend_values() {
        assert_eq!("Rome".parse::<Route>().unwrap(), Route::Rome);
        assert_eq!("all".parse::<Route>().unwrap(), Route::All);
        assert!("fourth".parse::<Route>().is_err());
        assert_eq!(Route::Second.html_id(), "route-second");
    }

    #[test]
    fn single_route_shows_only_its_layers() {
        let plan = route_plan(Route::Second);
        assert_eq!(
            visible_layers(&plan.modern),
            ["second-journey", "second-journey-arrows"]
        );
        assert_eq!(plan.modern.len(), 8);
        assert_eq!(
            plan.ancient.last(),
            Some(&LayerChange::Filter {
                layer: "journey-places".into(),
                filter: Some(json!(["has", "second"])),
            })
        );
        assert!(plan
            .modern
            .iter()
            .all(|c| matches!(c, LayerChange::Visibility { .. })));
    }

    #[test]
    fn all_shows_everything() {
        let plan = route_plan(Route::All);
        assert_eq!(visible_layers(&plan.ancient).len(), 8);
        assert_eq!(
            Route::All.places_filter(),
            json!(["any", ["has", "first"], ["has", "second"], ["has", "third"], ["has", "rome"]])
        );
    }
}
