pub mod deform;
pub mod shape;

pub use self::deform::{
    apply_bumpiness, apply_rigidity, apply_symmetry, bumpiness_seed, corner_offset,
};
pub use self::shape::{preview_path, top_center, wiggle_outline, AppleShape, Canvas, ShapeParams};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation; exact at both `t = 0` and `t = 1`.
    pub fn lerp(self, target: Point, t: f64) -> Point {
        Point::new(lerp(self.x, target.x, t), lerp(self.y, target.y, t))
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Where an outline point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexKind {
    /// The source vertex, passed through.
    Corner,
    /// Chamfer point pulled back along the incoming edge.
    ChamferIn,
    /// Chamfer point pushed forward along the outgoing edge.
    ChamferOut,
}

/// A point of a deformed outline, tagged with the base vertex it derives from.
///
/// After corner rounding a vertex becomes one or two of these, so outlines are
/// variable length and must be walked as sequences, never by base index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlinePoint {
    pub pos: Point,
    pub source: usize,
    pub kind: VertexKind,
}

impl OutlinePoint {
    pub fn corner(pos: Point, source: usize) -> Self {
        Self {
            pos,
            source,
            kind: VertexKind::Corner,
        }
    }
}

/// Apple silhouette, local coordinates, y pointing down.
pub const BASE_APPLE: [Point; 12] = [
    Point::new(-125.0, 20.0), // left upper side
    Point::new(-100.0, -50.0), // upper-left lobe
    Point::new(-45.0, -75.0), // left top lobe
    Point::new(0.0, -60.0),   // top notch
    Point::new(45.0, -75.0),  // right top lobe
    Point::new(100.0, -50.0), // upper-right lobe
    Point::new(125.0, 20.0),  // right upper side
    Point::new(95.0, 90.0),   // right lower side
    Point::new(40.0, 135.0),  // bottom-right bulge
    Point::new(0.0, 120.0),   // bottom center
    Point::new(-40.0, 135.0), // bottom-left bulge
    Point::new(-95.0, 90.0),  // left lower side
];

/// Left/right mirror correspondences into [`BASE_APPLE`].
pub const SYMMETRY_PAIRS: [(usize, usize); 5] = [(0, 6), (1, 5), (2, 4), (11, 7), (10, 8)];

/// Top notch and bottom center; these only ever move toward `x = 0`.
pub const CENTERLINE: [usize; 2] = [3, 9];
