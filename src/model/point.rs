//! Reference points placed on the image.

use serde::{Deserialize, Serialize};

use crate::geometry::{Position, point_label};

/// Unique identifier for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// What a point or line is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// Establishes the pixel-to-world scale
    Calibration,
    /// Distance is reported to the user
    Measurement,
}

impl PointKind {
    /// Label prefix (`C` or `M`).
    pub fn prefix(&self) -> &'static str {
        match self {
            PointKind::Calibration => "C",
            PointKind::Measurement => "M",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PointKind::Calibration => "calibration",
            PointKind::Measurement => "measurement",
        }
    }
}

/// A point in image coordinates.
///
/// Only the coordinates change after creation; id, kind and label are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: PointId,
    x: f64,
    y: f64,
    kind: PointKind,
    label: String,
}

impl Point {
    /// Create a point; `ordinal` is the number of existing points of the same kind.
    pub fn new(id: PointId, position: Position, kind: PointKind, ordinal: usize) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            kind,
            label: point_label(kind, ordinal),
        }
    }

    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_calibration(&self) -> bool {
        self.kind == PointKind::Calibration
    }

    pub(crate) fn move_to(&mut self, position: Position) {
        self.x = position.x;
        self.y = position.y;
    }
}
