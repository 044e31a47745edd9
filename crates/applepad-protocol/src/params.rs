use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The ten canonical parameters, in the order every consumer iterates them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamKey {
    Thickness,
    Coarseness,
    Wiggleness,
    Bumpiness,
    Rigidity,
    Symmetry,
    Tone,
    Saturation,
    Brightness,
    Uniform,
}

impl ParamKey {
    pub fn group(self) -> ParamGroup {
        match self {
            ParamKey::Thickness | ParamKey::Coarseness | ParamKey::Wiggleness => {
                ParamGroup::Material
            }
            ParamKey::Bumpiness | ParamKey::Rigidity | ParamKey::Symmetry => ParamGroup::Spatial,
            ParamKey::Tone | ParamKey::Saturation | ParamKey::Brightness | ParamKey::Uniform => {
                ParamGroup::Color
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Parameter groups. Each study step edits one group, prompts bucket their
/// fragments by group, and a refinement pass unlocks exactly one group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamGroup {
    Material,
    Spatial,
    Color,
}

impl ParamGroup {
    pub fn keys(self) -> impl Iterator<Item = ParamKey> {
        ParamKey::iter().filter(move |k| k.group() == self)
    }

    pub fn contains(self, key: ParamKey) -> bool {
        key.group() == self
    }
}

/// Slider values exactly as the UI surface reports them.
///
/// Stroke thickness and coarseness arrive on their 0-100 slider scale, every
/// other field is already 0-1. Any field may be missing or non-numeric; such
/// fields decode to `None` instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSliderParams {
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub stroke_thickness: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub stroke_coarseness: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub stroke_wiggle: Option<f64>,

    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub apple_morph: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub apple_rigidity: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub apple_symmetry: Option<f64>,

    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub color_tone: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub color_saturation: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub color_variation: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub color_brightness: Option<f64>,
}

// Strings, bools, nulls and nested values all read as "not a number".
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Canonical parameters, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedParams {
    pub thickness: f64,
    pub coarseness: f64,
    pub wiggleness: f64,
    pub bumpiness: f64,
    pub rigidity: f64,
    pub symmetry: f64,
    pub tone: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub uniform: f64,
}

impl NormalizedParams {
    /// Every key set to the same value.
    pub fn splat(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn from_fn<F: FnMut(ParamKey) -> f64>(mut f: F) -> Self {
        let mut params = Self::default();
        for key in ParamKey::iter() {
            params.set(key, f(key));
        }
        params
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::Thickness => self.thickness,
            ParamKey::Coarseness => self.coarseness,
            ParamKey::Wiggleness => self.wiggleness,
            ParamKey::Bumpiness => self.bumpiness,
            ParamKey::Rigidity => self.rigidity,
            ParamKey::Symmetry => self.symmetry,
            ParamKey::Tone => self.tone,
            ParamKey::Saturation => self.saturation,
            ParamKey::Brightness => self.brightness,
            ParamKey::Uniform => self.uniform,
        }
    }

    pub fn set(&mut self, key: ParamKey, value: f64) {
        let slot = match key {
            ParamKey::Thickness => &mut self.thickness,
            ParamKey::Coarseness => &mut self.coarseness,
            ParamKey::Wiggleness => &mut self.wiggleness,
            ParamKey::Bumpiness => &mut self.bumpiness,
            ParamKey::Rigidity => &mut self.rigidity,
            ParamKey::Symmetry => &mut self.symmetry,
            ParamKey::Tone => &mut self.tone,
            ParamKey::Saturation => &mut self.saturation,
            ParamKey::Brightness => &mut self.brightness,
            ParamKey::Uniform => &mut self.uniform,
        };
        *slot = value;
    }

    /// `(key, value)` pairs in declared key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, f64)> + '_ {
        ParamKey::iter().map(move |k| (k, self.get(k)))
    }
}
