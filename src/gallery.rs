use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Polygon};

/// An art gallery instance: one perimeter ring, its holes, and any guards.
///
/// Every builder returns a new gallery with exactly one field replaced; the
/// untouched fields are shared with the original. The type enforces no
/// geometric rules, those live in the editing protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(rename = "outer")]
    perimeter: Polygon,
    holes: Arc<[Polygon]>,
    guards: Arc<[Point]>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::empty()
    }
}

impl Gallery {
    pub fn new(perimeter: Polygon, holes: Vec<Polygon>, guards: Vec<Point>) -> Self {
        Self {
            perimeter,
            holes: Arc::from(holes),
            guards: Arc::from(guards),
        }
    }

    /// A gallery with an empty perimeter and no holes or guards.
    pub fn empty() -> Self {
        Self::new(Polygon::empty(), Vec::new(), Vec::new())
    }

    pub fn perimeter(&self) -> &Polygon {
        &self.perimeter
    }

    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    pub fn guards(&self) -> &[Point] {
        &self.guards
    }

    pub fn set_perimeter(&self, perimeter: Polygon) -> Gallery {
        Self {
            perimeter,
            holes: Arc::clone(&self.holes),
            guards: Arc::clone(&self.guards),
        }
    }

    pub fn add_hole(&self, hole: Polygon) -> Gallery {
        let mut holes = self.holes.to_vec();
        holes.push(hole);
        self.set_holes(holes)
    }

    pub fn set_holes(&self, holes: Vec<Polygon>) -> Gallery {
        Self {
            perimeter: self.perimeter.clone(),
            holes: Arc::from(holes),
            guards: Arc::clone(&self.guards),
        }
    }

    /// Drops the most recent hole. A gallery without holes is returned as is.
    pub fn remove_last_hole(&self) -> Gallery {
        match self.holes.split_last() {
            Some((_, rest)) => self.set_holes(rest.to_vec()),
            None => self.clone(),
        }
    }

    pub fn add_guard(&self, guard: Point) -> Gallery {
        let mut guards = self.guards.to_vec();
        guards.push(guard);
        self.set_guards(guards)
    }

    pub fn set_guards(&self, guards: Vec<Point>) -> Gallery {
        Self {
            perimeter: self.perimeter.clone(),
            holes: Arc::clone(&self.holes),
            guards: Arc::from(guards),
        }
    }

    /// True when every coordinate in the gallery is finite.
    pub fn is_finite(&self) -> bool {
        self.perimeter.is_finite()
            && self.holes.iter().all(Polygon::is_finite)
            && self.guards.iter().all(Point::is_finite)
    }

    #[cfg(test)]
    fn shares_holes_with(&self, other: &Gallery) -> bool {
        Arc::ptr_eq(&self.holes, &other.holes)
    }
}
