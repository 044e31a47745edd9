#![allow(dead_code)]

use applepad_core::params::{ParamKey, RawSliderParams};
use applepad_core::style::{RangeLabel, StyleLibrary};

/// Builder for raw slider readings, defaulting every field to 0.
#[derive(Default)]
pub struct RawBuilder {
    raw: RawSliderParams,
}

impl RawBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field at `value` on its own scale (0-100 sliders get `value * 100`).
    pub fn uniform(value: f64) -> Self {
        Self {
            raw: RawSliderParams {
                stroke_thickness: Some(value * 100.0),
                stroke_coarseness: Some(value * 100.0),
                stroke_wiggle: Some(value),
                apple_morph: Some(value),
                apple_rigidity: Some(value),
                apple_symmetry: Some(value),
                color_tone: Some(value),
                color_saturation: Some(value),
                color_variation: Some(value),
                color_brightness: Some(value),
            },
        }
    }

    pub fn thickness(mut self, v: f64) -> Self {
        self.raw.stroke_thickness = Some(v);
        self
    }

    pub fn coarseness(mut self, v: f64) -> Self {
        self.raw.stroke_coarseness = Some(v);
        self
    }

    pub fn morph(mut self, v: f64) -> Self {
        self.raw.apple_morph = Some(v);
        self
    }

    pub fn rigidity(mut self, v: f64) -> Self {
        self.raw.apple_rigidity = Some(v);
        self
    }

    pub fn symmetry(mut self, v: f64) -> Self {
        self.raw.apple_symmetry = Some(v);
        self
    }

    pub fn tone(mut self, v: f64) -> Self {
        self.raw.color_tone = Some(v);
        self
    }

    pub fn variation(mut self, v: f64) -> Self {
        self.raw.color_variation = Some(v);
        self
    }

    pub fn build(self) -> RawSliderParams {
        self.raw
    }
}

/// A library with a low-range fragment for thickness and symmetry only.
pub fn sparse_library(style: &str) -> StyleLibrary {
    let mut lib = StyleLibrary::default();
    lib.insert(style, ParamKey::Thickness, RangeLabel::Low, "Fine linen and pale oak.");
    lib.insert(style, ParamKey::Symmetry, RangeLabel::Low, "Relaxed, off-axis furniture groupings.");
    lib
}
