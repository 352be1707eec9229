// crates/bibleviz-core/src/genealogy.rs
//! # Genealogy Lines
//!
//! Synthesizes the connector lines of the genealogy overlay from a fixed
//! point table. Each point nominates its two geodesically nearest
//! neighbours; the nominations are merged into an undirected, deduplicated
//! edge set, then the manual include/exclude tables are applied.

use crate::common::{Feature, Point};
use crate::geodesic::distance_km;
use std::collections::HashSet;

/// How many neighbours each point nominates.
pub const NEIGHBOURS_PER_POINT: usize = 2;

/// Canonical key of an undirected edge: the sorted index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// A named table of explicit coordinate segments.
///
/// Entries keep their insertion order so the appended include lines come out
/// in the order the table lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeOverrides {
    entries: Vec<(String, [Point; 2])>,
}

impl EdgeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, [Point; 2])>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Adds or replaces the segment stored under `label`.
    pub fn insert(&mut self, label: impl Into<String>, segment: [Point; 2]) {
        let label = label.into();
        match self.entries.iter_mut().find(|(k, _)| *k == label) {
            Some(entry) => entry.1 = segment,
            None => self.entries.push((label, segment)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[Point; 2]> {
        self.entries
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v)
    }

    pub fn segments(&self) -> impl Iterator<Item = &[Point; 2]> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Point; 2])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `(start, end)` equals a stored segment in either orientation.
    ///
    /// Comparison is exact `f64` equality; a coordinate written with a
    /// different rounding will not match.
    pub fn matches(&self, start: Point, end: Point) -> bool {
        self.segments()
            .any(|&[a, b]| (a == start && b == end) || (a == end && b == start))
    }
}

/// Indices of the `k` points nearest to `points[i]`, closest first.
///
/// `points[i]` itself is never returned. Equal distances keep table order,
/// so the lower index wins a tie.
pub fn nearest_neighbours(points: &[Point], i: usize, k: usize) -> Vec<usize> {
    let origin = points[i];
    let mut ranked: Vec<(f64, usize)> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, &p)| (distance_km(origin, p), j))
        .collect();

    // Stable sort: ties stay in index order.
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.into_iter().take(k).map(|(_, j)| j).collect()
}

/// `(nominating point, neighbour)` pairs, one per undirected edge, in the
/// order the edges were first nominated.
fn nominations(points: &[Point]) -> Vec<(usize, usize)> {
    let mut seen: HashSet<EdgeKey> = HashSet::new();
    let mut pairs = Vec::new();

    for i in 0..points.len() {
        for j in nearest_neighbours(points, i, NEIGHBOURS_PER_POINT) {
            if seen.insert(EdgeKey::new(i, j)) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Undirected nearest-neighbour edges, in the order they were first nominated.
pub fn proximity_edges(points: &[Point]) -> Vec<EdgeKey> {
    nominations(points)
        .into_iter()
        .map(|(i, j)| EdgeKey::new(i, j))
        .collect()
}

/// Builds the genealogy line features for `points`.
///
/// 1. every point links to its two nearest neighbours (deduplicated; the
///    line starts at the nominating point),
/// 2. every `include` segment is appended verbatim,
/// 3. every line matching an `exclude` segment, in either orientation, is
///    dropped. This also applies to included lines.
///
/// All lines carry `group_label` as their `groupLabel` property.
pub fn build_genealogy_edges(
    points: &[Point],
    include: &EdgeOverrides,
    exclude: &EdgeOverrides,
    group_label: &str,
) -> Vec<Feature> {
    let mut segments: Vec<(Point, Point)> = nominations(points)
        .into_iter()
        .map(|(i, j)| (points[i], points[j]))
        .collect();
    let generated = segments.len();

    segments.extend(include.segments().map(|&[start, end]| (start, end)));

    let lines: Vec<Feature> = segments
        .into_iter()
        .filter(|&(start, end)| !exclude.matches(start, end))
        .map(|(start, end)| Feature::line(start, end, group_label))
        .collect();

    log::debug!(
        "genealogy: {} points -> {} nearest-neighbour lines, {} included, {} kept",
        points.len(),
        generated,
        include.len(),
        lines.len()
    );
    lines
}
