use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing two coordinates for equality.
///
/// Coordinates are in canvas units, so this is far coarser than `f64::EPSILON`
/// while still well below anything a pointer can resolve.
pub const COORD_EPSILON: f64 = 1e-9;

/// An immutable 2D coordinate.
///
/// Equality is tolerance based (see [`COORD_EPSILON`]), not bitwise.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates differ by less than [`COORD_EPSILON`].
    pub fn equals(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < COORD_EPSILON && (self.y - other.y).abs() < COORD_EPSILON
    }

    /// Euclidean distance between the two points.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(f64::from(pos.x), f64::from(pos.y))
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        Pos2::new(point.x as f32, point.y as f32)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
