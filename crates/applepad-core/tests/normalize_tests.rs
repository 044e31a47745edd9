use applepad_core::normalize::{clamp_unit, normalize, to_raw};
use applepad_core::params::{NormalizedParams, ParamKey, RawSliderParams};
use proptest::prelude::*;
use rstest::rstest;
use strum::{EnumCount, IntoEnumIterator};

mod common;
use common::RawBuilder;

#[rstest]
#[case(-50.0, 0.0)]
#[case(0.0, 0.0)]
#[case(35.0, 0.35)]
#[case(100.0, 1.0)]
#[case(500.0, 1.0)]
fn test_thickness_is_rescaled_and_clamped(#[case] raw: f64, #[case] expected: f64) {
    let params = normalize(&RawBuilder::new().thickness(raw).build());
    assert!((params.thickness - expected).abs() < 1e-12);
}

#[rstest]
#[case(-0.2, 0.0)]
#[case(0.4, 0.4)]
#[case(1.7, 1.0)]
fn test_unit_sliders_pass_through_clamped(#[case] raw: f64, #[case] expected: f64) {
    let params = normalize(&RawBuilder::new().tone(raw).symmetry(raw).build());
    assert_eq!(params.tone, expected);
    assert_eq!(params.symmetry, expected);
}

#[test]
fn test_missing_fields_default_to_zero() {
    let params = normalize(&RawSliderParams::default());
    assert_eq!(params, NormalizedParams::splat(0.0));
}

#[test]
fn test_garbage_payload_degrades_to_zero() {
    let raw: RawSliderParams = serde_json::from_str(
        r#"{"strokeThickness": "thick", "colorTone": null, "appleMorph": [1, 2], "colorBrightness": 0.6}"#,
    )
    .unwrap();
    let params = normalize(&raw);

    assert_eq!(params.thickness, 0.0);
    assert_eq!(params.tone, 0.0);
    assert_eq!(params.bumpiness, 0.0);
    assert_eq!(params.brightness, 0.6);
}

#[test]
fn test_color_variation_feeds_uniform() {
    let params = normalize(&RawBuilder::new().variation(0.8).build());
    assert_eq!(params.uniform, 0.8);
}

#[test]
fn test_nan_clamps_to_zero() {
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
}

#[test]
fn test_to_raw_inverts_normalize() {
    let params = NormalizedParams::from_fn(|k| k as usize as f64 / 10.0);
    let back = normalize(&to_raw(&params));
    for key in ParamKey::iter() {
        assert!((back.get(key) - params.get(key)).abs() < 1e-12, "{}", key);
    }
}

fn arb_slider() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        (-1000.0..1000.0f64).prop_map(Some),
    ]
}

prop_compose! {
    fn arb_raw()(
        a in arb_slider(), b in arb_slider(), c in arb_slider(), d in arb_slider(),
        e in arb_slider(), f in arb_slider(), g in arb_slider(), h in arb_slider(),
        i in arb_slider(), j in arb_slider()
    ) -> RawSliderParams {
        RawSliderParams {
            stroke_thickness: a,
            stroke_coarseness: b,
            stroke_wiggle: c,
            apple_morph: d,
            apple_rigidity: e,
            apple_symmetry: f,
            color_tone: g,
            color_saturation: h,
            color_variation: i,
            color_brightness: j,
        }
    }
}

proptest! {
    #[test]
    fn prop_every_key_lands_in_unit_interval(raw in arb_raw()) {
        let params = normalize(&raw);
        prop_assert_eq!(params.iter().count(), ParamKey::COUNT);
        for (key, value) in params.iter() {
            prop_assert!((0.0..=1.0).contains(&value), "{} = {}", key, value);
        }
    }
}
