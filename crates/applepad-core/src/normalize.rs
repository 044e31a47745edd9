use crate::consts::STROKE_SLIDER_MAX;
use crate::params::{NormalizedParams, ParamKey, RawSliderParams};
use strum::IntoEnumIterator;

/// Maps raw slider readings onto the ten canonical `[0, 1]` parameters.
///
/// Missing or non-numeric fields count as 0. Thickness and coarseness are
/// rescaled from their 0-100 sliders; the rest pass through. Every output is
/// clamped, so this never fails.
pub fn normalize(raw: &RawSliderParams) -> NormalizedParams {
    let slider = |v: Option<f64>| v.unwrap_or(0.0) / STROKE_SLIDER_MAX;
    let unit = |v: Option<f64>| v.unwrap_or(0.0);

    let mut params = NormalizedParams {
        thickness: slider(raw.stroke_thickness),
        coarseness: slider(raw.stroke_coarseness),
        wiggleness: unit(raw.stroke_wiggle),

        bumpiness: unit(raw.apple_morph),
        rigidity: unit(raw.apple_rigidity),
        symmetry: unit(raw.apple_symmetry),

        tone: unit(raw.color_tone),
        saturation: unit(raw.color_saturation),
        brightness: unit(raw.color_brightness),
        // 0 = one uniform color, 1 = diverse colors
        uniform: unit(raw.color_variation),
    };

    for key in ParamKey::iter() {
        params.set(key, clamp_unit(params.get(key)));
    }
    params
}

/// Clamps into `[0, 1]`; NaN reads as 0.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Inverse of [`normalize`] for the fields the UI can express.
pub fn to_raw(params: &NormalizedParams) -> RawSliderParams {
    RawSliderParams {
        stroke_thickness: Some(params.thickness * STROKE_SLIDER_MAX),
        stroke_coarseness: Some(params.coarseness * STROKE_SLIDER_MAX),
        stroke_wiggle: Some(params.wiggleness),
        apple_morph: Some(params.bumpiness),
        apple_rigidity: Some(params.rigidity),
        apple_symmetry: Some(params.symmetry),
        color_tone: Some(params.tone),
        color_saturation: Some(params.saturation),
        color_variation: Some(params.uniform),
        color_brightness: Some(params.brightness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_clamps_to_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn to_raw_round_trips_through_normalize() {
        let p = NormalizedParams::from_fn(|k| k as usize as f64 / 10.0);
        let back = normalize(&to_raw(&p));
        for (key, v) in p.iter() {
            assert!((back.get(key) - v).abs() < 1e-12, "{} drifted", key);
        }
    }
}
