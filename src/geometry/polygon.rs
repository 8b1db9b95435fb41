use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::predicates::{orient2d, point_on_segment, Orientation};

/// Where a point lies relative to a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

/// An immutable ring of points.
///
/// A ring is closed when it has at least three points and its last point
/// equals its first; closure is carried by that duplicate point rather than
/// by a flag. Every edit returns a new polygon, and clones share the point
/// buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Arc<[Point]>,
}

impl Default for Polygon {
    fn default() -> Self {
        Self::empty()
    }
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points: Arc::from(points),
        }
    }

    /// Creates a ring with no points.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Point::is_finite)
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns true if the ring has at least three points and ends on its first point.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 3 => first.equals(last),
            _ => false,
        }
    }

    /// The distinct vertices of the ring, without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Iterates over the edges of the ring, wrapping from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let vertices = self.vertices();
        let n = vertices.len();
        (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
    }

    /// Classifies `point` against the ring using an even-odd crossing test.
    ///
    /// Rings with fewer than three points have no interior and report
    /// `Outside` for every point.
    pub fn locate(&self, point: Point) -> Location {
        if self.points.len() < 3 {
            return Location::Outside;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if point_on_segment(point, a, b) {
                return Location::Boundary;
            }

            // Only edges straddling the horizontal line through `point` can
            // cross the ray cast towards +x.
            if (a.y > point.y) != (b.y > point.y) {
                let crosses = match orient2d(a, b, point) {
                    Orientation::CounterClockwise => b.y > a.y,
                    Orientation::Clockwise => b.y < a.y,
                    Orientation::Collinear => false,
                };
                if crosses {
                    inside = !inside;
                }
            }
        }

        if inside {
            Location::Inside
        } else {
            Location::Outside
        }
    }

    /// Returns true only for points strictly inside the ring.
    ///
    /// Points on the boundary count as outside.
    pub fn contains(&self, point: Point) -> bool {
        self.locate(point) == Location::Inside
    }

    /// Returns a new ring with `point` appended. No validity check is made.
    pub fn add_point(&self, point: Point) -> Polygon {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);
        Self::new(points)
    }

    /// Returns a new ring without its last point, or the same ring if it is empty.
    pub fn remove_last_point(&self) -> Polygon {
        match self.points.split_last() {
            Some((_, rest)) => Self::new(rest.to_vec()),
            None => self.clone(),
        }
    }

    /// Appends an exact copy of the first point, closing the ring.
    ///
    /// Rings that are already closed or have fewer than three points are
    /// returned unchanged.
    pub fn close(&self) -> Polygon {
        match self.first() {
            Some(first) if self.points.len() >= 3 && !self.is_closed() => self.add_point(first),
            _ => self.clone(),
        }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
