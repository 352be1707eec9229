// crates/bibleviz-core/src/people.rs
//! # People & Groups
//!
//! Reference records behind the person popup. Both datasets are Airtable
//! exports (`[{ "id": ..., "fields": { ... } }, ...]`). Pruning keeps the
//! fields the popup reads, copied verbatim whatever their JSON type; values
//! are only interpreted at lookup time.

use crate::data::PERSON_DETAILS_URL;
use crate::error::{Result, VizError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Shown when none of a person's groups resolve.
pub const NO_GROUPS: &str = "N/A";
const UNKNOWN_NAME: &str = "Unknown Name";

/// Person fields kept by [`prune_people`].
pub const PERSON_FIELDS: [&str; 4] = ["personID", "name", "memberOf", "personLookup"];
/// Group fields kept by [`prune_groups`].
pub const GROUP_FIELDS: [&str; 1] = ["groupName"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl PersonRecord {
    pub fn person_id(&self) -> Option<i64> {
        self.fields.get("personID").and_then(person_id_value)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name")?.as_str()
    }

    /// Group record ids; non-string entries are skipped.
    pub fn member_of(&self) -> impl Iterator<Item = &str> {
        self.fields
            .get("memberOf")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Slug used by the external person page.
    pub fn person_lookup(&self) -> Option<&str> {
        self.fields.get("personLookup")?.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl GroupRecord {
    pub fn id(&self) -> Option<&str> {
        self.id.as_str()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.fields.get("groupName")?.as_str()
    }
}

fn records<'a>(data: &'a Value, what: &str) -> Result<&'a [Value]> {
    data.as_array().map(Vec::as_slice).ok_or_else(|| {
        VizError::InvalidData(format!("{what} dataset must be a JSON array"))
    })
}

/// The listed keys of a record's `fields` object, values untouched.
fn kept_fields(record: &Value, keys: &[&str]) -> Map<String, Value> {
    let Some(fields) = record.get("fields").and_then(Value::as_object) else {
        return Map::new();
    };
    keys.iter()
        .filter_map(|&key| Some((key.to_owned(), fields.get(key)?.clone())))
        .collect()
}

/// Keeps `personID`, `name`, `memberOf` and `personLookup` of every person.
/// Records without `fields` stay in place with empty fields.
pub fn prune_people(data: &Value) -> Result<Vec<PersonRecord>> {
    Ok(records(data, "people")?
        .iter()
        .map(|record| PersonRecord {
            fields: kept_fields(record, &PERSON_FIELDS),
        })
        .collect())
}

/// Keeps the record `id` and `groupName` of every group.
pub fn prune_groups(data: &Value) -> Result<Vec<GroupRecord>> {
    Ok(records(data, "groups")?
        .iter()
        .map(|record| GroupRecord {
            id: record.get("id").cloned().unwrap_or(Value::Null),
            fields: kept_fields(record, &GROUP_FIELDS),
        })
        .collect())
}

fn person_id_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

/// Reads the `PersonID` of a clicked feature.
///
/// Numbers are taken as is (fractions truncated); strings are parsed from
/// their leading integer, so `"42"` and `"42 "` both give `42`. Anything else
/// yields `None`.
pub fn parse_person_id(value: &Value) -> Option<i64> {
    let parsed = person_id_value(value);
    if parsed.is_none() {
        log::warn!("clicked feature PersonID is not a valid number: {value}");
    }
    parsed
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// External details page of a person, if the record has a lookup slug.
pub fn person_details_url(person: &PersonRecord) -> Option<String> {
    person
        .person_lookup()
        .map(|lookup| format!("{PERSON_DETAILS_URL}{lookup}"))
}

/// What the person popup shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub person_id: i64,
    pub name: String,
    pub groups: String,
    pub details_url: Option<String>,
}

/// People and group names, indexed for popup lookups.
#[derive(Debug, Clone, Default)]
pub struct PersonDirectory {
    people: Vec<PersonRecord>,
    group_names: HashMap<String, String>,
}

impl PersonDirectory {
    pub fn new(people: Vec<PersonRecord>, groups: Vec<GroupRecord>) -> Self {
        let group_names = groups
            .into_iter()
            .filter_map(|g| Some((g.id()?.to_owned(), g.group_name()?.to_owned())))
            .collect();
        Self {
            people,
            group_names,
        }
    }

    pub fn from_values(people: &Value, groups: &Value) -> Result<Self> {
        Ok(Self::new(prune_people(people)?, prune_groups(groups)?))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find(&self, person_id: i64) -> Option<&PersonRecord> {
        self.people
            .iter()
            .find(|p| p.person_id() == Some(person_id))
    }

    /// Comma-separated names of the person's groups, in `memberOf` order.
    /// Unknown group ids are skipped; [`NO_GROUPS`] when nothing resolves.
    pub fn group_names(&self, person: &PersonRecord) -> String {
        let names: Vec<&str> = person
            .member_of()
            .filter_map(|id| self.group_names.get(id).map(String::as_str))
            .collect();
        if names.is_empty() {
            NO_GROUPS.to_owned()
        } else {
            names.join(", ")
        }
    }

    /// Popup content for a clicked person, `None` if the id is unknown.
    pub fn summary(&self, person_id: i64) -> Option<PersonSummary> {
        let person = self.find(person_id)?;
        Some(PersonSummary {
            person_id,
            name: person.name().unwrap_or(UNKNOWN_NAME).to_owned(),
            groups: self.group_names(person),
            details_url: person_details_url(person),
        })
    }
}
