use applepad_core::geometry::{AppleShape, Canvas, ShapeParams, BASE_APPLE};
use applepad_core::normalize::normalize;
use applepad_core::params::RawSliderParams;
use applepad_core::prompt::PromptBuilder;
use applepad_core::scorer::{compute_score, select_style_pair};
use applepad_core::stroke::{render_stroke, StrokeStyle};
use criterion::{criterion_group, criterion_main, Criterion};
use fastrand::Rng;
use std::hint::black_box;

fn sample_raw() -> RawSliderParams {
    RawSliderParams {
        stroke_thickness: Some(6.0),
        stroke_coarseness: Some(35.0),
        stroke_wiggle: Some(0.3),
        apple_morph: Some(0.6),
        apple_rigidity: Some(0.5),
        apple_symmetry: Some(0.4),
        color_tone: Some(0.2),
        color_saturation: Some(0.7),
        color_variation: Some(0.5),
        color_brightness: Some(0.8),
    }
}

fn bench_shape(c: &mut Criterion) {
    let canvas = Canvas::default();
    let params = ShapeParams {
        bumpiness: 0.6,
        symmetry: 0.4,
        rigidity: 0.5,
    };

    c.bench_function("apple_shape_build", |b| {
        b.iter(|| AppleShape::build(black_box(&BASE_APPLE), black_box(params), &canvas))
    });

    let shape = AppleShape::build(&BASE_APPLE, params, &canvas);
    let pen = StrokeStyle {
        thickness: 6.0,
        coarseness: 0.35,
    };
    let mut rng = Rng::with_seed(17);
    c.bench_function("outline_stroke", |b| {
        b.iter(|| render_stroke(black_box(&shape.outline), &pen, true, &mut rng))
    });
}

fn bench_derivation(c: &mut Criterion) {
    let raw = sample_raw();
    let builder = PromptBuilder::default();

    c.bench_function("normalize_score_prompt", |b| {
        b.iter(|| {
            let params = normalize(black_box(&raw));
            let pair = select_style_pair(compute_score(&params));
            builder.build(pair.first.name(), &params, None)
        })
    });
}

criterion_group!(benches, bench_shape, bench_derivation);
criterion_main!(benches);
