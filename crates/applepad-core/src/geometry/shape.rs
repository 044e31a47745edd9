use super::deform::{apply_bumpiness, apply_rigidity, apply_symmetry};
use super::{lerp, OutlinePoint, Point, BASE_APPLE};
use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, PREVIEW_MARGIN, PREVIEW_SEGMENTS, STEM_LENGTH,
};
use crate::params::NormalizedParams;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use typed_builder::TypedBuilder;

/// Drawing surface the shape is placed on. The shape is centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Canvas {
    #[builder(default = CANVAS_WIDTH)]
    pub width: f64,
    #[builder(default = CANVAS_HEIGHT)]
    pub height: f64,
    #[builder(default = STEM_LENGTH)]
    pub stem_length: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::builder().build()
    }
}

impl Canvas {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The three parameters that deform the silhouette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub bumpiness: f64,
    pub symmetry: f64,
    pub rigidity: f64,
}

impl From<&NormalizedParams> for ShapeParams {
    fn from(p: &NormalizedParams) -> Self {
        Self {
            bumpiness: p.bumpiness,
            symmetry: p.symmetry,
            rigidity: p.rigidity,
        }
    }
}

/// A fully deformed apple, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppleShape {
    /// Deformed outline, recentered on its centroid (local space).
    pub local: Vec<OutlinePoint>,
    /// The same outline translated onto the canvas.
    pub outline: Vec<Point>,
    /// Stem attachment point, canvas space.
    pub stem_base: Point,
    pub stem_tip: Point,
}

impl AppleShape {
    /// Runs bumpiness, symmetry and rigidity in that order over `base`,
    /// recenters the result and places it in the middle of `canvas`.
    pub fn build(base: &[Point], params: ShapeParams, canvas: &Canvas) -> Self {
        let bumped = apply_bumpiness(base, params.bumpiness);
        let mirrored = apply_symmetry(&bumped, params.symmetry);
        let rounded = apply_rigidity(&mirrored, params.rigidity);

        let local = recenter(&rounded);
        let local_points: Vec<Point> = local.iter().map(|p| p.pos).collect();

        let origin = canvas.center();
        let outline = local_points
            .iter()
            .map(|p| p.offset(origin.x, origin.y))
            .collect();

        let anchor = top_center(&local_points);
        let stem_base = anchor.offset(origin.x, origin.y);
        let stem_tip = stem_base.offset(0.0, -canvas.stem_length);

        Self {
            local,
            outline,
            stem_base,
            stem_tip,
        }
    }

    /// The apple for a full parameter set, from the standard base outline.
    pub fn from_params(params: &NormalizedParams, canvas: &Canvas) -> Self {
        Self::build(&BASE_APPLE, ShapeParams::from(params), canvas)
    }

    pub fn stem(&self) -> [Point; 2] {
        [self.stem_base, self.stem_tip]
    }

    /// Smallest and largest canvas y of the outline.
    pub fn vertical_extent(&self) -> (f64, f64) {
        self.outline
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            })
    }

    /// The canvas outline with the hand-drawn wobble applied.
    pub fn wiggled_outline(&self, wiggle: f64) -> Vec<Point> {
        wiggle_outline(&self.outline, wiggle)
    }
}

/// Shifts the outline so its vertex centroid sits on the origin.
pub fn recenter(points: &[OutlinePoint]) -> Vec<OutlinePoint> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.pos.x, sy + p.pos.y));
    let (cx, cy) = (sx / n, sy / n);

    points
        .iter()
        .map(|p| OutlinePoint {
            pos: p.pos.offset(-cx, -cy),
            ..*p
        })
        .collect()
}

/// Topmost point where the closed outline crosses `x = 0`.
///
/// Falls back to the vertex with the smallest y when no edge reaches the
/// axis, and to the origin for an empty outline.
pub fn top_center(points: &[Point]) -> Point {
    let n = points.len();
    let mut best: Option<Point> = None;
    let mut consider = |y: f64| {
        if best.map_or(true, |b| y < b.y) {
            best = Some(Point::new(0.0, y));
        }
    };

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        if p1.x == 0.0 && p2.x == 0.0 {
            consider(p1.y.min(p2.y));
            continue;
        }

        if (p1.x <= 0.0 && p2.x >= 0.0) || (p1.x >= 0.0 && p2.x <= 0.0) {
            let t = -p1.x / (p2.x - p1.x);
            consider(p1.y + t * (p2.y - p1.y));
        }
    }

    best.or_else(|| {
        points
            .iter()
            .copied()
            .reduce(|a, b| if b.y < a.y { b } else { a })
    })
    .unwrap_or(Point::ORIGIN)
}

/// Offsets outline point `i` of `n` by `10 * wiggle * (sin a, cos a)` with
/// `a = i / n * 2pi * (2 + 5 * wiggle)`.
pub fn wiggle_outline(points: &[Point], wiggle: f64) -> Vec<Point> {
    if wiggle.is_nan() || wiggle <= 0.0 {
        return points.to_vec();
    }
    let n = points.len() as f64;
    let turns = TAU * (2.0 + wiggle * 5.0);

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let angle = i as f64 / n * turns;
            p.offset(angle.sin() * wiggle * 10.0, angle.cos() * wiggle * 10.0)
        })
        .collect()
}

/// Horizontal sample stroke used while the participant tunes the pen.
pub fn preview_path(wiggle: f64, canvas: &Canvas) -> Vec<Point> {
    let x0 = canvas.width * PREVIEW_MARGIN;
    let x1 = canvas.width - x0;
    let y_base = canvas.height / 2.0;
    let freq = 1.0 + wiggle * 30.0;

    (0..=PREVIEW_SEGMENTS)
        .map(|i| {
            let t = i as f64 / PREVIEW_SEGMENTS as f64;
            let mut y = y_base;
            if wiggle > 0.0 {
                y += (t * PI * freq).sin() * wiggle * 2.0;
            }
            Point::new(lerp(x0, x1, t), y)
        })
        .collect()
}
