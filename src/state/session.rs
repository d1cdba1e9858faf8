//! The session: single owned state of a measurement workspace.

use serde::{Deserialize, Serialize};

use crate::model::{Calibration, Line, LineId, MeasurementUnit, Point, PointId, PointKind, ToolMode};
use crate::viewport::Viewport;

use super::image::ImageRef;

/// Aggregate root for points, lines, calibration and view state.
///
/// Read access is public; all changes go through [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) image: Option<ImageRef>,
    pub(crate) viewport: Viewport,
    pub(crate) points: Vec<Point>,
    pub(crate) lines: Vec<Line>,
    pub(crate) calibration: Calibration,
    pub(crate) selected_unit: MeasurementUnit,
    pub(crate) active_mode: ToolMode,
    /// Next id handed out to a point or line
    pub(crate) next_id: u64,
}

impl Session {
    /// Create an empty session.
    pub fn new(selected_unit: MeasurementUnit, active_mode: ToolMode) -> Self {
        Self {
            image: None,
            viewport: Viewport::identity(),
            points: Vec::new(),
            lines: Vec::new(),
            calibration: Calibration::new(),
            selected_unit,
            active_mode,
            next_id: 1,
        }
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Lines in insertion order, including dangling ones.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn selected_unit(&self) -> MeasurementUnit {
        self.selected_unit
    }

    pub fn active_mode(&self) -> ToolMode {
        self.active_mode
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id() == id)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Find the most recent point carrying a label.
    pub fn point_by_label(&self, label: &str) -> Option<&Point> {
        self.points.iter().rev().find(|p| p.label() == label)
    }

    pub fn count_points(&self, kind: PointKind) -> usize {
        self.points.iter().filter(|p| p.kind() == kind).count()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn has_measurements(&self) -> bool {
        !self.points.is_empty() || !self.lines.is_empty()
    }

    /// Scale in the currently selected unit.
    pub fn pixels_per_unit(&self) -> Option<f64> {
        self.calibration.pixels_per_unit(self.selected_unit)
    }

    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn point_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.iter_mut().find(|p| p.id() == id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MeasurementUnit::default(), ToolMode::default())
    }
}
