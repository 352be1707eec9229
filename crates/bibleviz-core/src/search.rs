// crates/bibleviz-core/src/search.rs
//! # Search Suggestions
//!
//! Filters searchable items by a case-insensitive substring match and ranks
//! the hits:
//!
//! 1. earlier match position first,
//! 2. higher `verseCount` first (missing counts as 0),
//! 3. shorter name first,
//! 4. case-insensitive alphabetical order.
//!
//! The sort is stable, so fully tied items keep their input order.

use crate::common::Point;
use crate::traits::Searchable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry of the search dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    /// `"{layerId}-{name}-{lng},{lat}"`, unique within one catalog build.
    pub id: String,
    pub name: String,
    pub coordinates: Point,
    pub layer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_count: Option<u32>,
}

impl SearchItem {
    pub fn new(layer_id: &str, name: &str, coordinates: Point) -> Self {
        Self {
            id: item_id(layer_id, name, coordinates),
            name: name.to_owned(),
            coordinates,
            layer_id: layer_id.to_owned(),
            group_label: None,
            verse_count: None,
        }
    }
}

impl Searchable for SearchItem {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn verse_count(&self) -> u32 {
        self.verse_count.unwrap_or(0)
    }
}

/// Composite key of a searchable feature.
pub fn item_id(layer_id: &str, name: &str, coordinates: Point) -> String {
    format!("{layer_id}-{name}-{},{}", coordinates.lng, coordinates.lat)
}

struct Ranked<'a, T> {
    item: &'a T,
    index: usize,
    lower: String,
}

fn compare<T: Searchable>(a: &Ranked<'_, T>, b: &Ranked<'_, T>) -> Ordering {
    a.index
        .cmp(&b.index)
        .then_with(|| b.item.verse_count().cmp(&a.item.verse_count()))
        .then_with(|| {
            let la = a.item.name_str().chars().count();
            let lb = b.item.name_str().chars().count();
            la.cmp(&lb)
        })
        .then_with(|| a.lower.cmp(&b.lower))
}

/// Ranked references to the items whose name contains `query`.
///
/// A blank query yields no suggestions rather than every item.
pub fn search_refs<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let q = query.to_lowercase();

    let mut hits: Vec<Ranked<'a, T>> = items
        .iter()
        .filter_map(|item| {
            let lower = item.name_str().to_lowercase();
            let byte = lower.find(&q)?;
            let index = lower[..byte].chars().count();
            Some(Ranked { item, index, lower })
        })
        .collect();

    hits.sort_by(compare);
    hits.into_iter().map(|r| r.item).collect()
}

/// Owned variant of [`search_refs`].
///
/// # Examples
/// ```rust
/// use bibleviz_core::common::Point;
/// use bibleviz_core::search::{search, SearchItem};
///
/// let items = vec![
///     SearchItem::new("father-points", "Anna", Point::new(1.0, 1.0)),
///     SearchItem::new("father-points", "Ann", Point::new(2.0, 2.0)),
///     SearchItem::new("father-points", "Joanna", Point::new(3.0, 3.0)),
/// ];
/// let names: Vec<_> = search(&items, "ann").into_iter().map(|i| i.name).collect();
/// assert_eq!(names, ["Ann", "Anna", "Joanna"]);
/// assert!(search(&items, "").is_empty());
/// ```
pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    search_refs(items, query).into_iter().cloned().collect()
}

/// The suggestion the Enter key selects: the first one whose name equals the
/// query, ignoring case.
pub fn exact_match<'a, T: Searchable>(suggestions: &'a [T], query: &str) -> Option<&'a T> {
    suggestions.iter().find(|s| s.is_named(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, verses: Option<u32>) -> SearchItem {
        let mut i = SearchItem::new("father-points", name, Point::new(0.0, 0.0));
        i.verse_count = verses;
        i
    }

    fn names(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_and_blank_queries_suggest_nothing() {
        let items = vec![item("Adam", None)];
        assert!(search(&items, "").is_empty());
        assert!(search(&items, "   ").is_empty());
    }

    #[test]
    fn match_position_beats_verse_count() {
        let items = vec![item("Shelah", Some(500)), item("Elah", Some(1))];
        let hits = search(&items, "elah");
        assert_eq!(names(&hits), ["Elah", "Shelah"]);
    }

    #[test]
    fn verse_count_breaks_position_ties() {
        let items = vec![item("Jonathan", Some(3)), item("Joseph", Some(200)), item("Jo", None)];
        assert_eq!(names(&search(&items, "jo")), ["Joseph", "Jonathan", "Jo"]);
    }

    #[test]
    fn shorter_name_wins_equal_relevance() {
        let items = vec![item("Anna", Some(2)), item("Ann", Some(2))];
        assert_eq!(names(&search(&items, "an")), ["Ann", "Anna"]);
    }

    #[test]
    fn alphabetical_is_the_last_resort() {
        let items = vec![item("Mahli", None), item("mahol", None), item("Mahat", None)];
        assert_eq!(names(&search(&items, "mah")), ["Mahat", "Mahli", "mahol"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let items = vec![item("JEHOSHAPHAT", None), item("Noah", None)];
        assert_eq!(names(&search(&items, "shaph")), ["JEHOSHAPHAT"]);
    }

    #[test]
    fn duplicates_survive_the_sort() {
        let items = vec![item("Asa", Some(4)), item("Asa", Some(4)), item("Asaph", None)];
        let hits = search(&items, "asa");
        assert_eq!(hits.len(), 3);
        assert_eq!(names(&hits), ["Asa", "Asa", "Asaph"]);
    }

    #[test]
    fn match_index_counts_characters() {
        let i = item("Ésaü-Edom", None);
        assert_eq!(i.match_index("edom"), Some(5));
    }

    #[test]
    fn enter_selects_exact_name_only() {
        let suggestions = vec![item("Davidson", None), item("David", None)];
        assert_eq!(exact_match(&suggestions, "DAVID").unwrap().name, "David");
        assert!(exact_match(&suggestions, "dav").is_none());
    }

    #[test]
    fn item_id_joins_layer_name_and_coordinates() {
        let i = SearchItem::new("father-points", "Boaz", Point::new(13.494, 0.6868));
        assert_eq!(i.id, "father-points-Boaz-13.494,0.6868");
        let whole = SearchItem::new("father-points", "Ruth", Point::new(12.0, -3.0));
        assert_eq!(whole.id, "father-points-Ruth-12,-3");
    }
}
