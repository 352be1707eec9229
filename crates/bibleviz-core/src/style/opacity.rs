// crates/bibleviz-core/src/style/opacity.rs
use crate::data::GROUP_PROPERTY_NAME;
use serde_json::{json, Number, Value};

/// The shapes an opacity paint value takes in a basemap style.
///
/// Classification borrows from the original value so patching never has to
/// re-validate the array layout.
#[derive(Debug, Clone, PartialEq)]
pub enum OpacityShape<'a> {
    /// A plain number, e.g. `0.8`.
    Constant(&'a Number),
    /// `["interpolate", <type>, ["zoom"], in₁, out₁, in₂, out₂, …]`.
    Interpolate {
        interpolation: &'a Value,
        input: &'a Value,
        stops: Vec<(&'a Value, &'a Value)>,
    },
    /// Any other expression array (already conditional, `step`, …).
    Generic(&'a Value),
}

impl<'a> OpacityShape<'a> {
    /// Classifies a paint value. Returns `None` for values that are neither a
    /// number nor an expression array.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(OpacityShape::Constant(n)),
            Value::Array(items) => Some(
                Self::interpolate_by_zoom(items).unwrap_or(OpacityShape::Generic(value)),
            ),
            _ => None,
        }
    }

    fn interpolate_by_zoom(items: &'a [Value]) -> Option<Self> {
        if items.len() < 5 || items[0].as_str() != Some("interpolate") {
            return None;
        }
        let input = &items[2];
        let is_zoom = input
            .as_array()
            .and_then(|root| root.first())
            .and_then(Value::as_str)
            == Some("zoom");
        if !is_zoom {
            return None;
        }

        // A trailing stop input without an output is dropped.
        let stops = items[3..]
            .chunks_exact(2)
            .map(|pair| (&pair[0], &pair[1]))
            .collect();

        Some(OpacityShape::Interpolate {
            interpolation: &items[1],
            input,
            stops,
        })
    }

    /// Gates the shape on `condition`: where it holds the original opacity is
    /// kept, elsewhere `hidden` is used. Interpolations are gated per stop so
    /// zoom-dependent fading survives the filter.
    pub fn gate(&self, condition: &Value, hidden: f64) -> Value {
        match self {
            OpacityShape::Constant(n) => {
                case_expression(condition, Value::Number((*n).clone()), hidden)
            }
            OpacityShape::Interpolate {
                interpolation,
                input,
                stops,
            } => {
                let mut expr = Vec::with_capacity(3 + stops.len() * 2);
                expr.push(Value::from("interpolate"));
                expr.push((*interpolation).clone());
                expr.push((*input).clone());
                for (stop_input, stop_output) in stops {
                    expr.push((*stop_input).clone());
                    expr.push(case_expression(condition, (*stop_output).clone(), hidden));
                }
                Value::Array(expr)
            }
            OpacityShape::Generic(v) => case_expression(condition, (*v).clone(), hidden),
        }
    }
}

/// `["case", condition, shown, hidden]`.
pub fn case_expression(condition: &Value, shown: Value, hidden: f64) -> Value {
    json!(["case", condition, shown, hidden])
}

/// `["in", group_id, ["get", "groupLabel"]]`: true for features whose group
/// label mentions the group.
pub fn group_condition(group_id: &str) -> Value {
    json!(["in", group_id, ["get", GROUP_PROPERTY_NAME]])
}

/// Composites a filter overlay onto a layer's existing opacity.
///
/// - no original value: `["case", condition, shown_fallback, hidden]`
/// - number / interpolation / other expression: see [`OpacityShape::gate`]
/// - anything else (string, object, null, …) is logged and treated like a
///   missing value.
///
/// # Examples
/// ```rust
/// use bibleviz_core::style::{group_condition, patch_opacity};
/// use serde_json::json;
///
/// let cond = group_condition("Tribe of Dan");
/// let original = json!(["interpolate", ["linear"], ["zoom"], 4, 0, 6, 1]);
/// let patched = patch_opacity(Some(&original), &cond, 0.2, 1.0);
/// assert_eq!(
///     patched,
///     json!(["interpolate", ["linear"], ["zoom"],
///         4, ["case", cond, 0, 0.2],
///         6, ["case", cond, 1, 0.2]])
/// );
/// ```
pub fn patch_opacity(
    original: Option<&Value>,
    condition: &Value,
    hidden: f64,
    shown_fallback: f64,
) -> Value {
    let fallback = || case_expression(condition, Value::from(shown_fallback), hidden);

    let Some(original) = original else {
        return fallback();
    };
    match OpacityShape::classify(original) {
        Some(shape) => shape.gate(condition, hidden),
        None => {
            log::warn!(
                "unexpected opacity value {original}; falling back to a plain case expression"
            );
            fallback()
        }
    }
}
