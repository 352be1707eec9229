// crates/bibleviz-core/src/common.rs
//! Shared geometry records used by every module: points, bounds and the
//! GeoJSON-like features the rendering layer consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A longitude/latitude pair. Serialized as `[lng, lat]`; extra trailing
/// ordinates (altitude) are accepted and dropped on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for Point {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = String;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [lng, lat, ..] => Ok(Self::new(*lng, *lat)),
            _ => Err(format!("expected at least 2 ordinates, got {}", v.len())),
        }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.lng, p.lat]
    }
}

/// Axis-aligned lng/lat box. Serialized as `[[min_lng, min_lat], [max_lng, max_lat]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Point; 2]", into = "[Point; 2]")]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds::new(first, first);
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, p: Point) {
        self.min.lng = self.min.lng.min(p.lng);
        self.min.lat = self.min.lat.min(p.lat);
        self.max.lng = self.max.lng.max(p.lng);
        self.max.lat = self.max.lat.max(p.lat);
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min.lng..=self.max.lng).contains(&p.lng)
            && (self.min.lat..=self.max.lat).contains(&p.lat)
    }
}

impl From<[Point; 2]> for Bounds {
    fn from([min, max]: [Point; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Bounds> for [Point; 2] {
    fn from(b: Bounds) -> Self {
        [b.min, b.max]
    }
}

/// Geometry of a feature. Only the shapes the overlays draw are modelled;
/// anything else deserializes to [`Geometry::Other`] and is skipped by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Point },
    LineString { coordinates: Vec<Point> },
    #[serde(other)]
    Other,
}

impl Geometry {
    /// Every vertex of the geometry, in order.
    pub fn points(&self) -> &[Point] {
        match self {
            Geometry::Point { coordinates } => std::slice::from_ref(coordinates),
            Geometry::LineString { coordinates } => coordinates,
            Geometry::Other => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

/// A geometry plus its property map; the unit the render engine draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    pub tag: FeatureTag,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// A two-point line carrying a single `groupLabel` property.
    pub fn line(start: Point, end: Point, group_label: &str) -> Self {
        let mut properties = Map::new();
        properties.insert(
            crate::data::GROUP_PROPERTY_NAME.to_string(),
            Value::String(group_label.to_string()),
        );
        Self {
            tag: FeatureTag::Feature,
            geometry: Geometry::LineString {
                coordinates: vec![start, end],
            },
            properties: Some(properties),
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }

    /// Coordinates of a point feature.
    pub fn point(&self) -> Option<Point> {
        match &self.geometry {
            Geometry::Point { coordinates } => Some(*coordinates),
            _ => None,
        }
    }

    /// Endpoints of a two-point line feature.
    pub fn segment(&self) -> Option<(Point, Point)> {
        match &self.geometry {
            Geometry::LineString { coordinates } if coordinates.len() == 2 => {
                Some((coordinates[0], coordinates[1]))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub tag: FeatureCollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
        }
    }
}
