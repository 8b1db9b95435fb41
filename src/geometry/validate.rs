//! Whole-ring hole validation.
//!
//! Drawing only checks each hole vertex against the perimeter. These checks
//! go further: the entire hole ring must sit strictly inside the perimeter
//! and must not touch any other hole.

use super::point::Point;
use super::polygon::{Location, Polygon};
use super::predicates::segments_intersect;
use crate::error::ValidationError;

/// Validates a completed hole against the perimeter and the holes already committed.
pub fn validate_hole(
    perimeter: &Polygon,
    holes: &[Polygon],
    hole: &Polygon,
) -> Result<(), ValidationError> {
    if hole.vertices().len() < 3 {
        return Err(ValidationError::HoleTooSmall);
    }

    if let Some(point) = hole.vertices().iter().find(|p| !perimeter.contains(**p)) {
        return Err(ValidationError::HoleVertexOutsidePerimeter { point: *point });
    }

    if rings_cross(hole, perimeter) {
        return Err(ValidationError::HoleCrossesPerimeter);
    }

    for (index, other) in holes.iter().enumerate() {
        if rings_overlap(hole, other) {
            return Err(ValidationError::HoleOverlapsHole { other: index });
        }
    }

    Ok(())
}

/// Returns true if any edge of `a` touches any edge of `b`.
pub fn rings_cross(a: &Polygon, b: &Polygon) -> bool {
    a.edges()
        .any(|(p1, p2)| b.edges().any(|(q1, q2)| segments_intersect(p1, p2, q1, q2)))
}

/// Returns true if the two rings share any point, boundary or interior.
pub fn rings_overlap(a: &Polygon, b: &Polygon) -> bool {
    rings_cross(a, b)
        || any_vertex_not_outside(a.vertices(), b)
        || any_vertex_not_outside(b.vertices(), a)
}

fn any_vertex_not_outside(vertices: &[Point], ring: &Polygon) -> bool {
    vertices
        .iter()
        .any(|p| ring.locate(*p) != Location::Outside)
}
