//! Actions that evolve a session.
//!
//! This is the whole inbound interface of the core. Coordinates are already in
//! image space; the caller applies the viewport transform first.

use serde::{Deserialize, Serialize};

use crate::model::{LineId, LineKind, MeasurementUnit, PointId, PointKind, ToolMode};
use crate::state::ImageRef;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Replace the loaded image and reset the viewport
    SetImage(ImageRef),
    /// Switch the stage interaction mode
    SetMode { mode: ToolMode },
    /// Place a point; auto-links lines per kind
    AddPoint { x: f64, y: f64, kind: PointKind },
    /// Move an existing point
    UpdatePoint { id: PointId, x: f64, y: f64 },
    /// Remove a point and every line touching it
    DeletePoint { id: PointId },
    /// Join two existing points
    AddLine {
        start: PointId,
        end: PointId,
        kind: LineKind,
    },
    /// Remove a line
    DeleteLine { id: LineId },
    /// Enter the known distance between the calibration pair
    SetCalibrationDistance { distance: f64 },
    /// Select the unit distances are reported in
    SetUnit { unit: MeasurementUnit },
    /// Set the zoom factor (clamped)
    SetZoom { scale: f64 },
    /// Set the pan offset
    SetPan { x: f64, y: f64 },
    /// Drop all points, lines and calibration
    ClearAll,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetImage(_) => "SetImage",
            Action::SetMode { .. } => "SetMode",
            Action::AddPoint { .. } => "AddPoint",
            Action::UpdatePoint { .. } => "UpdatePoint",
            Action::DeletePoint { .. } => "DeletePoint",
            Action::AddLine { .. } => "AddLine",
            Action::DeleteLine { .. } => "DeleteLine",
            Action::SetCalibrationDistance { .. } => "SetCalibrationDistance",
            Action::SetUnit { .. } => "SetUnit",
            Action::SetZoom { .. } => "SetZoom",
            Action::SetPan { .. } => "SetPan",
            Action::ClearAll => "ClearAll",
        }
    }

    /// Actions fired on every pointer-move tick.
    pub fn is_high_frequency(&self) -> bool {
        matches!(
            self,
            Action::UpdatePoint { .. } | Action::SetPan { .. } | Action::SetZoom { .. }
        )
    }
}
