//! Lines joining two points by id.

use serde::{Deserialize, Serialize};

use super::point::{PointId, PointKind};

/// Unique identifier for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "l{}", self.0)
    }
}

/// Lines share the point classification.
pub type LineKind = PointKind;

/// A weak relation between two points.
///
/// The line never owns point data. If either endpoint no longer exists the line is
/// dangling and read paths skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    id: LineId,
    start_point_id: PointId,
    end_point_id: PointId,
    kind: LineKind,
}

impl Line {
    pub fn new(id: LineId, start: PointId, end: PointId, kind: LineKind) -> Self {
        Self {
            id,
            start_point_id: start,
            end_point_id: end,
            kind,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn start(&self) -> PointId {
        self.start_point_id
    }

    pub fn end(&self) -> PointId {
        self.end_point_id
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Check if either endpoint is the given point.
    pub fn references(&self, point: PointId) -> bool {
        self.start_point_id == point || self.end_point_id == point
    }
}
