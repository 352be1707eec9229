use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use bibleviz_core::data::{HIDE_OPACITY, SHOW_OPACITY};
use bibleviz_core::style::group_condition;
use bibleviz_wasm::{
    apply_filter, genealogy_lines, initialize, legend, patch_opacity, route_plan,
    slider_clip_path,
};
use serde_json::Value;
use wasm_bindgen::JsValue;

#[wasm_bindgen_test]
fn builds_genealogy_lines() {
    #[cfg(target_arch = "wasm32")]
    bibleviz_wasm::start();

    let lines = genealogy_lines().unwrap();
    let features = js_sys::Reflect::get(&lines, &JsValue::from_str("features")).unwrap();
    let count = js_sys::Array::from(&features).length();
    assert!(count > 0, "expected genealogy lines, got {count}");
}

#[wasm_bindgen_test]
fn filter_plan_after_initialize() {
    #[cfg(target_arch = "wasm32")]
    bibleviz_wasm::start();

    let style = js_sys::JSON::parse(r#"{"layers":[{"id":"father-points"}]}"#).unwrap();
    initialize(style).unwrap();

    let plan = apply_filter("Tribe of Judah").unwrap();
    let changes = js_sys::Reflect::get(&plan, &JsValue::from_str("changes")).unwrap();
    assert!(js_sys::Array::from(&changes).length() >= 2);
}

#[wasm_bindgen_test]
fn journeys_helpers() {
    assert!(route_plan("second").is_ok());
    assert!(route_plan("fourth").is_err());
    assert_eq!(
        slider_clip_path(150.0),
        "polygon(100% 0, 100% 0%, 100% 100%, 100% 100%)"
    );
    assert_eq!(js_sys::Array::from(&legend().unwrap()).length(), 14);
}

#[wasm_bindgen_test]
fn unset_opacity_gets_the_shared_show_and_hide_values() {
    let patched = patch_opacity(JsValue::UNDEFINED, "Tribe of Dan").unwrap();
    let patched: Value = serde_wasm_bindgen::from_value(patched).unwrap();

    assert_eq!(patched[0], "case");
    assert_eq!(patched[1], group_condition("Tribe of Dan"));
    assert_eq!(patched[2].as_f64(), Some(SHOW_OPACITY));
    assert_eq!(patched[3].as_f64(), Some(HIDE_OPACITY));
}
