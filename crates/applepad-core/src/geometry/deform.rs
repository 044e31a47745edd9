//! The three shape deformation stages.
//!
//! Each stage reads its input slice and returns a fresh sequence; inputs are
//! never modified. A non-positive (or NaN) strength is an exact identity.

use super::{lerp, OutlinePoint, Point, VertexKind, CENTERLINE, SYMMETRY_PAIRS};
use crate::consts::{
    BUMP_AMPLITUDE, BUMP_SEED_BASE, BUMP_SEED_SPAN, MAX_CORNER_OFFSET, MIN_CORNER_OFFSET,
    MIN_EDGE_LENGTH,
};
use fastrand::Rng;

/// Seed used for a given bumpiness value.
pub fn bumpiness_seed(bumpiness: f64) -> u64 {
    BUMP_SEED_BASE + (bumpiness * BUMP_SEED_SPAN).floor().max(0.0) as u64
}

/// Adds uniform jitter in `[-amp, amp]` to every coordinate, `amp = 20 * bumpiness`.
///
/// The generator is seeded from the bumpiness value alone, so equal inputs
/// always produce bit-identical outlines.
pub fn apply_bumpiness(points: &[Point], bumpiness: f64) -> Vec<Point> {
    if inactive(bumpiness) {
        return points.to_vec();
    }

    let amp = bumpiness * BUMP_AMPLITUDE;
    let mut rng = Rng::with_seed(bumpiness_seed(bumpiness));
    let mut jitter = || (rng.f64() * 2.0 - 1.0) * amp;

    points
        .iter()
        .map(|p| {
            let dx = jitter();
            let dy = jitter();
            p.offset(dx, dy)
        })
        .collect()
}

/// Pulls mirror pairs toward an exact left/right reflection and the
/// centerline vertices toward `x = 0`, by factor `symmetry`.
///
/// All targets are computed from `points`, never from partially updated
/// output. Pair indices outside `points` are skipped.
pub fn apply_symmetry(points: &[Point], symmetry: f64) -> Vec<Point> {
    if inactive(symmetry) {
        return points.to_vec();
    }

    let t = symmetry.min(1.0);
    let mut out = points.to_vec();

    for &(left, right) in &SYMMETRY_PAIRS {
        let (Some(&l0), Some(&r0)) = (points.get(left), points.get(right)) else {
            continue;
        };

        let magnitude = (l0.x.abs() + r0.x.abs()) / 2.0;
        let y = (l0.y + r0.y) / 2.0;

        out[left] = l0.lerp(Point::new(-magnitude, y), t);
        out[right] = r0.lerp(Point::new(magnitude, y), t);
    }

    for &idx in &CENTERLINE {
        if let Some(p0) = points.get(idx) {
            out[idx] = Point::new(lerp(p0.x, 0.0, t), p0.y);
        }
    }

    out
}

/// Replaces each sharp corner by a two-point chamfer.
///
/// The offset is `min(rigidity * 40, shorter adjacent edge / 3)`. Corners with
/// an adjacent edge shorter than 1, or whose offset collapses to ~0, pass
/// through as a single point. Output length is between `n` and `2n`.
pub fn apply_rigidity(points: &[Point], rigidity: f64) -> Vec<OutlinePoint> {
    let n = points.len();
    if inactive(rigidity) {
        return points
            .iter()
            .enumerate()
            .map(|(i, &p)| OutlinePoint::corner(p, i))
            .collect();
    }

    let mut out = Vec::with_capacity(n * 2);
    for (i, &p) in points.iter().enumerate() {
        let Some(d) = corner_offset(points, i, rigidity) else {
            out.push(OutlinePoint::corner(p, i));
            continue;
        };

        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let toward = |q: Point| {
            let len = p.distance(q);
            p.offset((q.x - p.x) / len * d, (q.y - p.y) / len * d)
        };

        out.push(OutlinePoint {
            pos: toward(prev),
            source: i,
            kind: VertexKind::ChamferIn,
        });
        out.push(OutlinePoint {
            pos: toward(next),
            source: i,
            kind: VertexKind::ChamferOut,
        });
    }

    out
}

/// The chamfer offset the corner at `i` receives, or `None` when it stays sharp.
pub fn corner_offset(points: &[Point], i: usize, rigidity: f64) -> Option<f64> {
    let n = points.len();
    if inactive(rigidity) || i >= n {
        return None;
    }

    let p = points[i];
    let len_prev = p.distance(points[(i + n - 1) % n]);
    let len_next = p.distance(points[(i + 1) % n]);
    if len_prev < MIN_EDGE_LENGTH || len_next < MIN_EDGE_LENGTH {
        return None;
    }

    let d = (rigidity * MAX_CORNER_OFFSET).min(len_prev.min(len_next) / 3.0);
    (d > MIN_CORNER_OFFSET).then_some(d)
}

fn inactive(strength: f64) -> bool {
    strength.is_nan() || strength <= 0.0
}
