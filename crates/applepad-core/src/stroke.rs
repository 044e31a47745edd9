//! Pencil-like stroke texture.
//!
//! A path is drawn as many small scattered dots instead of a solid line.
//! Unlike the shape jitter, the scatter is free-running and never seeded
//! from the parameters: two renders of the same path differ.

use crate::consts::{
    MARK_ALONG_JITTER, MARK_DENSITY, MARK_SIZE_FACTOR, MAX_MARKS_PER_SEGMENT, MIN_MARK_DIAMETER,
    STROKE_SLIDER_MAX,
};
use crate::geometry::Point;
use crate::normalize::clamp_unit;
use crate::params::RawSliderParams;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// Pen settings: thickness in pixels, coarseness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub thickness: f64,
    pub coarseness: f64,
}

impl StrokeStyle {
    /// The pen as set on the stroke sliders: the thickness slider reads
    /// directly in pixels, coarseness is rescaled from its 0-100 range.
    pub fn from_raw(raw: &RawSliderParams) -> Self {
        Self {
            thickness: raw.stroke_thickness.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0),
            coarseness: clamp_unit(raw.stroke_coarseness.unwrap_or(0.0) / STROKE_SLIDER_MAX),
        }
    }

    pub fn radius(&self) -> f64 {
        self.thickness / 2.0
    }

    /// Marks emitted for a segment of `length`, at least one and at most
    /// `MAX_MARKS_PER_SEGMENT`.
    pub fn mark_count(&self, length: f64) -> usize {
        let n = (MARK_DENSITY * length * (1.0 - self.coarseness)).floor();
        if n.is_nan() || n < 1.0 {
            1
        } else if n >= MAX_MARKS_PER_SEGMENT as f64 {
            MAX_MARKS_PER_SEGMENT
        } else {
            n as usize
        }
    }
}

/// A single round dot of the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub center: Point,
    pub diameter: f64,
}

/// Owns the free-running generator used for texture scatter.
pub struct StrokeRenderer {
    rng: Rng,
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// A renderer whose scatter is repeatable, for tests and snapshots.
    pub fn with_rng(rng: Rng) -> Self {
        Self { rng }
    }

    pub fn render(&mut self, path: &[Point], style: &StrokeStyle, closed: bool) -> Vec<Mark> {
        render_stroke(path, style, closed, &mut self.rng)
    }
}

/// Scatters marks along every segment of `path` (plus the closing segment
/// when `closed`).
///
/// Per segment: `floor(20 * length * (1 - coarseness))` marks, at least one.
/// Each sits at a uniform position along the segment, pushed sideways by up
/// to the pen radius and along the segment by up to `0.45 * radius`.
/// Diameters range over `[0.15r, 0.3r]` with a 1px floor. Zero-length
/// segments and paths of fewer than two points emit nothing.
pub fn render_stroke(path: &[Point], style: &StrokeStyle, closed: bool, rng: &mut Rng) -> Vec<Mark> {
    let n = path.len();
    if n < 2 {
        return Vec::new();
    }

    let radius = style.radius();
    let segments = if closed { n } else { n - 1 };
    let mut marks = Vec::new();

    for i in 0..segments {
        let p1 = path[i];
        let p2 = path[(i + 1) % n];

        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let len = dx.hypot(dy);
        if len == 0.0 || !len.is_finite() {
            continue;
        }

        let (tx, ty) = (dx / len, dy / len);
        let (nx, ny) = (-ty, tx);

        let count = style.mark_count(len);
        marks.reserve(count);
        for _ in 0..count {
            let s = rng.f64();
            let cx = p1.x + dx * s;
            let cy = p1.y + dy * s;

            let normal = (rng.f64() - 0.5) * 2.0 * radius;
            let along = (rng.f64() - 0.5) * radius * MARK_ALONG_JITTER;

            let diameter = (radius * MARK_SIZE_FACTOR + rng.f64() * radius * MARK_SIZE_FACTOR)
                .max(MIN_MARK_DIAMETER);

            marks.push(Mark {
                center: Point::new(cx + nx * normal + tx * along, cy + ny * normal + ty * along),
                diameter,
            });
        }
    }

    marks
}
