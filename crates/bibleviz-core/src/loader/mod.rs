// crates/bibleviz-core/src/loader/mod.rs

//! # Data Loader
//!
//! File I/O for the shells: feature caches, style documents and the people
//! and groups reference datasets. Every loader reads plain or gzip-compressed
//! JSON (`.json.gz` needs the `compact` feature).

use crate::catalog::FeatureCache;
use crate::error::Result;
use crate::people::{prune_groups, prune_people, GroupRecord, PersonRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

mod common_io;

pub use common_io::{open_stream, write_json};

/// Reads and deserializes one JSON document.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let value = serde_json::from_reader(reader)?;
    log::debug!("loaded {}", path.display());
    Ok(value)
}

/// A rendered map's feature cache, in any of the shapes [`FeatureCache`]
/// accepts.
pub fn load_feature_cache(path: impl AsRef<Path>) -> Result<FeatureCache> {
    let cache: FeatureCache = load_json(path)?;
    log::info!("feature cache: {} features", cache.feature_count());
    Ok(cache)
}

/// A basemap style document, as exported.
pub fn load_style(path: impl AsRef<Path>) -> Result<Value> {
    load_json(path)
}

/// People records, pruned to the popup fields.
pub fn load_people(path: impl AsRef<Path>) -> Result<Vec<PersonRecord>> {
    prune_people(&load_json::<Value>(path)?)
}

/// Group records, pruned to id and name.
pub fn load_groups(path: impl AsRef<Path>) -> Result<Vec<GroupRecord>> {
    prune_groups(&load_json::<Value>(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VizError;
    use serde_json::json;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bibleviz-loader-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_style(temp_path("missing.json")).unwrap_err();
        assert!(matches!(err, VizError::NotFound(_)));
    }

    #[test]
    fn plain_json_round_trip() {
        let path = temp_path("people.json");
        let raw = json!([{ "id": "r1", "fields": { "personID": 5, "name": "Ruth", "alsoCalled": [] } }]);
        write_json(&path, &raw, true).unwrap();

        let people = load_people(&path).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name(), Some("Ruth"));
        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_feature_cache() {
        let path = temp_path("cache.json.gz");
        let raw = json!({ "featuresCache": { "father-points": [] } });
        write_json(&path, &raw, false).unwrap();

        let cache = load_feature_cache(&path).unwrap();
        assert_eq!(cache.layer_ids().collect::<Vec<_>>(), ["father-points"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_output_carries_its_trailer() {
        let path = temp_path("people.json.gz");
        let raw = json!([{ "fields": { "personID": 1, "name": "Aaron" } }]);
        write_json(&path, &raw, true).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        let isize = u32::from_le_bytes(bytes[bytes.len() - 4..].try_into().unwrap());
        assert_eq!(isize as usize, serde_json::to_vec_pretty(&raw).unwrap().len());
        assert_eq!(load_people(&path).unwrap()[0].name(), Some("Aaron"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_style(&path), Err(VizError::Json(_))));
        std::fs::remove_file(&path).unwrap();
    }
}
