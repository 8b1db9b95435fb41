//! Geometric value types and predicates.

pub mod point;
pub mod polygon;
pub mod predicates;
pub mod validate;

pub use point::{Point, COORD_EPSILON};
pub use polygon::{Location, Polygon};
pub use predicates::{orient2d, point_on_segment, segments_intersect, Orientation};
pub use validate::validate_hole;
