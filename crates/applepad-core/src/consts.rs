/// Native range of the stroke thickness and coarseness sliders.
pub const STROKE_SLIDER_MAX: f64 = 100.0;

/// Upper bounds (inclusive) of the low and mid prompt range labels.
pub const RANGE_LOW_MAX: f64 = 0.3;
pub const RANGE_MID_MAX: f64 = 0.7;

/// Score thresholds separating the five style bands.
pub const BAND_THRESHOLDS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Score used when there is nothing numeric to average.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Deltas smaller than this are not shown to the participant.
pub const DELTA_DISPLAY_THRESHOLD: f64 = 0.05;

// === Shape deformation ===

/// Jitter amplitude (local units) at bumpiness 1.
pub const BUMP_AMPLITUDE: f64 = 20.0;
/// Seed for bumpiness `b` is `BUMP_SEED_BASE + floor(b * BUMP_SEED_SPAN)`.
pub const BUMP_SEED_BASE: u64 = 1000;
pub const BUMP_SEED_SPAN: f64 = 999.0;

/// Chamfer offset at rigidity 1.
pub const MAX_CORNER_OFFSET: f64 = 40.0;
/// Edges shorter than this leave their corner untouched.
pub const MIN_EDGE_LENGTH: f64 = 1.0;
/// Offsets at or below this collapse back to the original vertex.
pub const MIN_CORNER_OFFSET: f64 = 0.0001;

// === Canvas ===

pub const CANVAS_WIDTH: f64 = 700.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const STEM_LENGTH: f64 = 40.0;
/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: f64 = 10_000.0;

// === Stroke texture ===

/// Marks per unit of segment length at coarseness 0.
pub const MARK_DENSITY: f64 = 20.0;
pub const MARK_SIZE_FACTOR: f64 = 0.15;
pub const MARK_ALONG_JITTER: f64 = 0.9;
pub const MIN_MARK_DIAMETER: f64 = 1.0;
/// Upper bound on marks emitted for one segment.
pub const MAX_MARKS_PER_SEGMENT: usize = 1_000_000;

/// Point count of the step-one preview stroke, minus one.
pub const PREVIEW_SEGMENTS: usize = 200;
pub const PREVIEW_MARGIN: f64 = 0.15;
