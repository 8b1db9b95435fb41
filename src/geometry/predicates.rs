//! Orientation predicates with a floating-point error bound.

use super::point::Point;

/// Unit roundoff for `f64` (half of machine epsilon).
const UNIT_ROUNDOFF: f64 = f64::EPSILON / 2.0;

/// Relative error bound of the 2x2 orientation determinant.
///
/// Determinants whose magnitude falls under this fraction of the summed
/// product magnitudes cannot be trusted for sign and are reported collinear.
const ORIENT_ERROR_BOUND: f64 = (3.0 + 16.0 * UNIT_ROUNDOFF) * UNIT_ROUNDOFF;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of the directed line `a -> b`.
    Clockwise,
    /// `c` lies on the line, or too close to it for the sign to be trusted.
    Collinear,
}

/// Computes the orientation of the triangle `a`, `b`, `c`.
///
/// The determinant is only trusted when it exceeds the forward error bound of
/// its own evaluation, so a rounding error can never flip a clockwise result
/// into a counter-clockwise one. Ambiguous cases collapse to `Collinear`.
#[inline]
pub fn orient2d(a: Point, b: Point, c: Point) -> Orientation {
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;
    let bound = ORIENT_ERROR_BOUND * (det_left.abs() + det_right.abs());

    if det > bound {
        Orientation::CounterClockwise
    } else if det < -bound {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks whether `p` lies on the closed segment `a`-`b`.
#[inline]
pub fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    orient2d(a, b, p) == Orientation::Collinear && within_bounds(p, a, b)
}

/// Tests whether the closed segments `p1`-`p2` and `q1`-`q2` share any point.
///
/// Touching endpoints and collinear overlaps count as intersections.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let o1 = orient2d(p1, p2, q1);
    let o2 = orient2d(p1, p2, q2);
    let o3 = orient2d(q1, q2, p1);
    let o4 = orient2d(q1, q2, p2);

    if opposite(o1, o2) && opposite(o3, o4) {
        return true;
    }

    (o1 == Orientation::Collinear && within_bounds(q1, p1, p2))
        || (o2 == Orientation::Collinear && within_bounds(q2, p1, p2))
        || (o3 == Orientation::Collinear && within_bounds(p1, q1, q2))
        || (o4 == Orientation::Collinear && within_bounds(p2, q1, q2))
}

fn opposite(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::CounterClockwise, Orientation::Clockwise)
            | (Orientation::Clockwise, Orientation::CounterClockwise)
    )
}

fn within_bounds(p: Point, a: Point, b: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
