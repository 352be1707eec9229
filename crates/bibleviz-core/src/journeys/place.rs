// crates/bibleviz-core/src/journeys/place.rs
use crate::data::VERSE_BASE_URL;
use crate::journeys::route::Route;
use serde::Serialize;
use serde_json::{Map, Value};

/// A link to one verse of Acts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRef {
    pub url: String,
    pub text: String,
}

impl VerseRef {
    /// From an OSIS-style reference such as `"Acts.13.4"`.
    pub fn parse(reference: &str) -> Self {
        let path = reference
            .to_lowercase()
            .replace("acts.", "")
            .replace('.', "/");
        let text = reference.replacen("Acts.", "Acts ", 1).replace('.', ":");
        Self {
            url: format!("{VERSE_BASE_URL}{path}"),
            text,
        }
    }
}

/// Parses a comma-separated reference list. Blank entries are skipped.
///
/// ```rust
/// use bibleviz_core::journeys::verse_refs;
/// let refs = verse_refs("Acts.13.4,Acts.13.5");
/// assert_eq!(refs[0].url, "https://www.blueletterbible.org/kjv/act/13/4");
/// assert_eq!(refs[1].text, "Acts 13:5");
/// ```
pub fn verse_refs(acts: &str) -> Vec<VerseRef> {
    acts.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(VerseRef::parse)
        .collect()
}

/// Popup content of a journey place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JourneyPlace {
    pub name: Option<String>,
    pub notes: Option<String>,
    /// The full `Source Link`.
    pub url: Option<String>,
    /// The source link without its scheme.
    pub source: String,
    pub first: Vec<VerseRef>,
    pub second: Vec<VerseRef>,
    pub third: Vec<VerseRef>,
    pub rome: Vec<VerseRef>,
}

fn text(props: &Map<String, Value>, key: &str) -> Option<String> {
    props.get(key).and_then(Value::as_str).map(str::to_owned)
}

impl JourneyPlace {
    pub fn from_properties(props: &Map<String, Value>) -> Self {
        let url = text(props, "Source Link");
        let source = url
            .as_deref()
            .and_then(|u| u.split("://").nth(1))
            .unwrap_or_default()
            .to_owned();
        let refs = |route: Route| {
            props
                .get(route.id())
                .and_then(Value::as_str)
                .map(verse_refs)
                .unwrap_or_default()
        };

        Self {
            name: text(props, "Place Name"),
            notes: text(props, "Notes"),
            url,
            source,
            first: refs(Route::First),
            second: refs(Route::Second),
            third: refs(Route::Third),
            rome: refs(Route::Rome),
        }
    }

    /// References for one route; empty for [`Route::All`].
    pub fn verses(&self, route: Route) -> &[VerseRef] {
        match route {
            Route::First => &self.first,
            Route::Second => &self.second,
            Route::Third => &self.third,
            Route::Rome => &self.rome,
            Route::All => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verse_reference_formatting() {
        let v = VerseRef::parse("Acts.20.17");
        assert_eq!(v.url, "https://www.blueletterbible.org/kjv/act/20/17");
        assert_eq!(v.text, "Acts 20:17");
        assert!(verse_refs("").is_empty());
        assert_eq!(verse_refs("Acts.13.4, Acts.14.1,").len(), 2);
    }

    #[test]
    fn place_from_feature_properties() {
        let props = json!({
            "Place Name": "Paphos",
            "Notes": "Proconsul Sergius Paulus",
            "Source Link": "https://www.openbible.info/geo/ancient/a62d9b1",
            "first": "Acts.13.6,Acts.13.13",
            "rome": ""
        });
        let place = JourneyPlace::from_properties(props.as_object().unwrap());

        assert_eq!(place.name.as_deref(), Some("Paphos"));
        assert_eq!(place.source, "www.openbible.info/geo/ancient/a62d9b1");
        assert_eq!(place.verses(Route::First).len(), 2);
        assert_eq!(place.first[1].text, "Acts 13:13");
        assert!(place.rome.is_empty());
        assert!(place.second.is_empty());
    }

    #[test]
    fn missing_source_link_gives_empty_host() {
        let place = JourneyPlace::from_properties(&Map::new());
        assert_eq!(place.url, None);
        assert_eq!(place.source, "");
    }
}
