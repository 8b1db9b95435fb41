use thiserror::Error;

use crate::geometry::Point;

/// Reasons a hole edit is refused.
///
/// These are recoverable and user facing: a rejected command leaves the
/// editor state untouched and the message is shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Hole must be inside perimeter")]
    HoleVertexOutsidePerimeter { point: Point },

    #[error("Hole must not cross the perimeter")]
    HoleCrossesPerimeter,

    #[error("Hole must not overlap hole {other}")]
    HoleOverlapsHole { other: usize },

    #[error("Hole needs at least 3 vertices")]
    HoleTooSmall,
}

/// Errors raised at the solver adapter boundary.
///
/// Never produced by an editor transition.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver transport failed: {0}")]
    Transport(String),

    #[error("Solver API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Coverage {0} is outside [0, 1]")]
    InvalidCoverage(f64),

    #[error("Failed to decode solver payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for solver adapter operations
pub type SolverResult<T> = Result<T, SolverError>;
