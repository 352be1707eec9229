// crates/bibleviz-core/src/journeys/slider.rs
use serde::{Deserialize, Serialize};

/// Initial reveal position, in percent of the container width.
pub const DEFAULT_SLIDER_VALUE: f64 = 85.0;

/// The reveal slider between the two maps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    value: f64,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            value: DEFAULT_SLIDER_VALUE,
        }
    }
}

impl Slider {
    pub fn new(value: f64) -> Self {
        let mut slider = Self::default();
        slider.set(value);
        slider
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the position, clamped to `[0, 100]`. NaN is ignored.
    pub fn set(&mut self, value: f64) -> f64 {
        if !value.is_nan() {
            self.value = value.clamp(0.0, 100.0);
        }
        self.value
    }

    /// Moves the handle to a pointer `x` pixels from the container's left
    /// edge. A container without width leaves the slider where it is.
    pub fn set_from_pointer(&mut self, x: f64, width: f64) -> f64 {
        if width.is_nan() || width <= 0.0 {
            return self.value;
        }
        self.set(x / width * 100.0)
    }

    /// CSS `clip-path` of the top map.
    ///
    /// ```rust
    /// use bibleviz_core::journeys::Slider;
    /// assert_eq!(
    ///     Slider::default().clip_path(),
    ///     "polygon(85% 0, 100% 0%, 100% 100%, 85% 100%)"
    /// );
    /// ```
    pub fn clip_path(&self) -> String {
        let v = self.value;
        format!("polygon({v}% 0, 100% 0%, 100% 100%, {v}% 100%)")
    }

    /// Bottom padding, in percent, that keeps the container at `aspect`.
    pub fn padding_percent(aspect: f64) -> f64 {
        100.0 / aspect
    }
}

/// Width over height; `None` while the container has no area.
pub fn aspect_ratio(width: f64, height: f64) -> Option<f64> {
    (width * height != 0.0).then(|| width / height)
}
