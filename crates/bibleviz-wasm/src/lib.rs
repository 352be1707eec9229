//! bibleviz-wasm: WebAssembly bindings for bibleviz-core
//!
//! This crate exposes a small JS/WASM API for the two map applications. The
//! map rendering stays in JavaScript; these bindings compute what to render.
//!
//! What it provides
//! ----------------
//! - Logging to the browser console and readable panics (via `start()`)
//! - Ancestry map: `initialize(style)`, `genealogy_lines()`,
//!   `load_features(cache)`, `search(query)`, `exact_match(query)`,
//!   `apply_filter(group)`, `focus(item)`, `legend()`
//! - Person popup: `load_people(people, groups)`, `person_summary(personId)`
//! - Styles: `fix_style(style)`, `patch_opacity(original, group)`
//! - Journeys map: `route_plan(route)`, `journey_place(properties)`,
//!   `slider_clip_path(value)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { initialize, genealogy_lines, apply_filter } from 'bibleviz-wasm';
//!
//! await init();
//! map.on('load', () => {
//!   initialize(map.getStyle());
//!   map.addSource('genealogy-lines-source', { type: 'geojson', data: genealogy_lines() });
//! });
//!
//! legendRadio.onchange = (e) => {
//!   const plan = apply_filter(e.target.value);
//!   for (const change of plan.changes) applyChange(map, change);
//!   map.fitBounds(plan.bounds);
//! };
//! ```
//!
//! Notes
//! -----
//! - State (the ancestry session and the person directory) lives in the
//!   module instance; one page hosts one ancestry map.
//! - Every function returning data returns plain JSON-compatible objects.
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

// Core Imports
use bibleviz_core::data::{HIDE_OPACITY, SHOW_OPACITY};
use bibleviz_core::filter::{legend_html_id, legend_options};
use bibleviz_core::journeys::{JourneyPlace, Route, Slider};
use bibleviz_core::people::{parse_person_id, PersonDirectory};
use bibleviz_core::prelude::*;
use std::result::Result;
use serde::Serialize;
use serde_json::{json, Value};

thread_local! {
    static SESSION: RefCell<AncestrySession> = RefCell::new(AncestrySession::new());
    static PEOPLE: RefCell<PersonDirectory> = RefCell::new(PersonDirectory::default());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    web_sys::console::log_1(&"Initializing bibleviz WASM module...".into());
}

/* --------------------------------------------------------------------------
   Conversion helpers
-------------------------------------------------------------------------- */

/// Plain JS objects (not `Map`s), `null` for `None`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(Into::into)
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/* --------------------------------------------------------------------------
   Ancestry Map
-------------------------------------------------------------------------- */

/// Registers the loaded style. Returns `false` if already initialized.
#[wasm_bindgen]
pub fn initialize(style: JsValue) -> Result<bool, JsValue> {
    let style: Value = from_js(style)?;
    Ok(SESSION.with(|s| s.borrow_mut().initialize(&style)))
}

/// The genealogy lines as a GeoJSON FeatureCollection.
#[wasm_bindgen]
pub fn genealogy_lines() -> Result<JsValue, JsValue> {
    let collection = SESSION.with(|s| s.borrow_mut().genealogy_collection());
    to_js(&collection)
}

/// Replaces the feature cache; returns the number of searchable items.
#[wasm_bindgen]
pub fn load_features(cache: JsValue) -> Result<usize, JsValue> {
    let cache: FeatureCache = from_js(cache)?;
    Ok(SESSION.with(|s| s.borrow_mut().load_features(cache)))
}

#[wasm_bindgen]
pub fn search(query: &str) -> Result<JsValue, JsValue> {
    let hits = SESSION.with(|s| s.borrow().suggestions(query));

    // Preserve ranking order in a JS array
    let array = js_sys::Array::new();
    for hit in &hits {
        array.push(&to_js(hit)?);
    }
    Ok(array.into())
}

/// The item the Enter key selects, or `null`.
#[wasm_bindgen]
pub fn exact_match(query: &str) -> Result<JsValue, JsValue> {
    let hit = SESSION.with(|s| s.borrow().exact_match(query));
    to_js(&hit)
}

/// Applies a legend selection (`"all"` or a group id); returns the plan.
#[wasm_bindgen]
pub fn apply_filter(group: &str) -> Result<JsValue, JsValue> {
    let filter = GroupFilter::from(group.to_owned());
    let plan = SESSION.with(|s| s.borrow_mut().plan_filter(filter));
    to_js(&plan)
}

/// Before flying to a search hit: the plan resetting the legend, or `null`.
#[wasm_bindgen]
pub fn focus(item: JsValue) -> Result<JsValue, JsValue> {
    let item: SearchItem = from_js(item)?;
    let plan = SESSION.with(|s| s.borrow_mut().focus(&item));
    to_js(&plan)
}

#[wasm_bindgen]
pub fn legend() -> Result<JsValue, JsValue> {
    let options: Vec<Value> = legend_options()
        .iter()
        .map(|o| {
            json!({
                "id": o.id,
                "text": o.text,
                "defaultChecked": o.default_checked,
                "htmlId": legend_html_id(o.id),
            })
        })
        .collect();
    to_js(&options)
}

/* --------------------------------------------------------------------------
   Person Popup
-------------------------------------------------------------------------- */

/// Loads the people and groups datasets; returns the number of people.
#[wasm_bindgen]
pub fn load_people(people: JsValue, groups: JsValue) -> Result<usize, JsValue> {
    let people: Value = from_js(people)?;
    let groups: Value = from_js(groups)?;
    let directory = PersonDirectory::from_values(&people, &groups).map_err(js_error)?;
    let count = directory.len();
    PEOPLE.with(|p| *p.borrow_mut() = directory);
    Ok(count)
}

/// Popup content for a clicked feature's `PersonID`, or `null`.
#[wasm_bindgen]
pub fn person_summary(person_id: JsValue) -> Result<JsValue, JsValue> {
    let raw: Value = from_js(person_id)?;
    let Some(id) = parse_person_id(&raw) else {
        return Ok(JsValue::NULL);
    };
    let summary = PEOPLE.with(|p| p.borrow().summary(id));
    to_js(&summary)
}

/* --------------------------------------------------------------------------
   Styles
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn fix_style(style: JsValue) -> Result<JsValue, JsValue> {
    let style: Value = from_js(style)?;
    to_js(&fix_style_document(&style))
}

/// Gates an opacity value on a group; `original` may be `undefined`.
#[wasm_bindgen]
pub fn patch_opacity(original: JsValue, group: &str) -> Result<JsValue, JsValue> {
    let original: Option<Value> = if original.is_undefined() || original.is_null() {
        None
    } else {
        Some(from_js(original)?)
    };
    let cond = group_condition(group);
    let patched = bibleviz_core::style::patch_opacity(
        original.as_ref(),
        &cond,
        HIDE_OPACITY,
        SHOW_OPACITY,
    );
    to_js(&patched)
}

/* --------------------------------------------------------------------------
   Journeys Map
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn route_plan(route: &str) -> Result<JsValue, JsValue> {
    let route: Route = route.parse().map_err(js_error)?;
    to_js(&bibleviz_core::journeys::route_plan(route))
}

#[wasm_bindgen]
pub fn journey_place(properties: JsValue) -> Result<JsValue, JsValue> {
    let props: serde_json::Map<String, Value> = from_js(properties)?;
    to_js(&JourneyPlace::from_properties(&props))
}

#[wasm_bindgen]
pub fn slider_clip_path(value: f64) -> String {
    Slider::new(value).clip_path()
}
