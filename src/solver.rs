//! The shape exchanged with a remote guard solver.
//!
//! Only the data contract lives here; transport is left to whoever
//! implements [`SolverClient`].

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::gallery::Gallery;
use crate::geometry::{Point, Polygon};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApiPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPolygon {
    pub points: Vec<ApiPoint>,
}

/// Body of a solve request: the perimeter ring and every hole ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub perimeter: ApiPolygon,
    pub holes: Vec<ApiPolygon>,
}

/// Opaque identifier of a solve job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub job_id: JobId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub is_valid: bool,
    /// Fraction of the gallery interior covered, in [0, 1]
    pub coverage: f64,
}

/// A finished solution carrying the guard positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub solution: Vec<ApiPoint>,
    pub coverage: f64,
    pub is_valid: bool,
}

/// A remote solver. Implementations own transport, retries and timeouts.
pub trait SolverClient {
    /// Submits a gallery and returns the job to poll.
    fn solve(&self, request: &SolveRequest) -> SolverResult<JobId>;

    /// Checks a submitted job.
    fn verify(&self, job: &JobId) -> SolverResult<VerifyResponse>;
}

impl From<Point> for ApiPoint {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<ApiPoint> for Point {
    fn from(point: ApiPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

impl From<&Polygon> for ApiPolygon {
    fn from(polygon: &Polygon) -> Self {
        Self {
            points: polygon.points().iter().map(|p| ApiPoint::from(*p)).collect(),
        }
    }
}

impl From<&ApiPolygon> for Polygon {
    fn from(polygon: &ApiPolygon) -> Self {
        Polygon::new(polygon.points.iter().map(|p| Point::from(*p)).collect())
    }
}

/// Maps a gallery to a solve request. Guards are not sent.
pub fn gallery_to_request(gallery: &Gallery) -> SolveRequest {
    SolveRequest {
        perimeter: ApiPolygon::from(gallery.perimeter()),
        holes: gallery.holes().iter().map(ApiPolygon::from).collect(),
    }
}

/// Rebuilds a guard-less gallery from a request.
pub fn request_to_gallery(request: &SolveRequest) -> Gallery {
    Gallery::new(
        Polygon::from(&request.perimeter),
        request.holes.iter().map(Polygon::from).collect(),
        Vec::new(),
    )
}

fn check_coverage(coverage: f64) -> SolverResult<f64> {
    if (0.0..=1.0).contains(&coverage) {
        Ok(coverage)
    } else {
        Err(SolverError::InvalidCoverage(coverage))
    }
}

impl SolveRequest {
    pub fn to_json(&self) -> SolverResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl SolveResponse {
    pub fn from_json(json: &str) -> SolverResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl VerifyResponse {
    /// Decodes a verify payload, rejecting coverage outside [0, 1].
    pub fn from_json(json: &str) -> SolverResult<Self> {
        let response: Self = serde_json::from_str(json)?;
        check_coverage(response.coverage)?;
        Ok(response)
    }
}

impl Solution {
    pub fn from_json(json: &str) -> SolverResult<Self> {
        let solution: Self = serde_json::from_str(json)?;
        check_coverage(solution.coverage)?;
        Ok(solution)
    }

    /// Guard positions ready for `Command::SetGuards`.
    pub fn guards(&self) -> Vec<Point> {
        self.solution.iter().map(|p| Point::from(*p)).collect()
    }
}
