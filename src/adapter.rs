//! Mapping between domain geometry and the shapes a renderer draws.

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Polygon};
use crate::state::EditorState;

/// A render-side vertex with a deterministic id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Builds the vertex for the `index`-th point of a ring.
///
/// The id depends only on index and position, so redrawing the same ring
/// yields the same ids.
pub fn point_to_vertex(point: Point, index: usize) -> Vertex {
    Vertex {
        id: format!("vertex-{}-{}-{}", index, point.x, point.y),
        x: point.x,
        y: point.y,
    }
}

pub fn polygon_to_vertices(polygon: &Polygon) -> Vec<Vertex> {
    polygon
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| point_to_vertex(*point, index))
        .collect()
}

pub fn vertices_to_polygon(vertices: &[Vertex]) -> Polygon {
    Polygon::new(vertices.iter().map(|v| coords_to_point(v.x, v.y)).collect())
}

pub fn coords_to_point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Ring positions ready for an egui painter.
pub fn ring_to_positions(polygon: &Polygon) -> Vec<Pos2> {
    polygon.points().iter().map(|p| Pos2::from(*p)).collect()
}

/// Everything a renderer reads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderView {
    pub outer_ring: Vec<Vertex>,
    pub holes: Vec<Vec<Vertex>>,
    pub current_hole: Vec<Vertex>,
    pub is_closed: bool,
    pub is_adding_hole: bool,
}

impl RenderView {
    pub fn from_state(state: &EditorState) -> Self {
        Self {
            outer_ring: polygon_to_vertices(state.perimeter()),
            holes: state.gallery().holes().iter().map(polygon_to_vertices).collect(),
            current_hole: polygon_to_vertices(state.current_hole()),
            is_closed: state.is_closed(),
            is_adding_hole: state.is_adding_hole(),
        }
    }

    /// The vertex a click would close onto, highlighted while a ring is open.
    pub fn closing_vertex(&self) -> Option<&Vertex> {
        if self.is_adding_hole {
            self.current_hole.first()
        } else if !self.is_closed {
            self.outer_ring.first()
        } else {
            None
        }
    }

    /// Whether the canvas should accept clicks (crosshair cursor).
    pub fn accepts_clicks(&self) -> bool {
        !self.is_closed || self.is_adding_hole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_ids_are_deterministic() {
        let polygon = Polygon::new(vec![Point::new(1.5, 2.0), Point::new(3.0, 4.0)]);
        let vertices = polygon_to_vertices(&polygon);
        assert_eq!(vertices[0].id, "vertex-0-1.5-2");
        assert_eq!(vertices[1].id, "vertex-1-3-4");
        assert_eq!(polygon_to_vertices(&polygon), vertices);
    }

    #[test]
    fn vertices_map_back_to_same_polygon() {
        let polygon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        assert_eq!(vertices_to_polygon(&polygon_to_vertices(&polygon)), polygon);
    }

    #[test]
    fn positions_follow_ring_order() {
        let polygon = Polygon::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(
            ring_to_positions(&polygon),
            vec![Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0)]
        );
    }
}
