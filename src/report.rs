//! Human-readable summary of a session.

use std::fmt;

use serde::Serialize;

use crate::measurement::{CalibrationStatus, LineMeasurement};
use crate::model::{MeasurementUnit, PointKind, ToolMode};
use crate::state::{ImageRef, Session};

/// Snapshot of everything the side panels show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub image: Option<ImageRef>,
    pub mode: ToolMode,
    pub unit: MeasurementUnit,
    pub calibration: CalibrationStatus,
    pub measurement_points: usize,
    /// Measurement lines only, numbered from 1 in insertion order
    pub lines: Vec<LineMeasurement>,
}

impl Report {
    pub fn from_session(session: &Session) -> Self {
        Self {
            image: session.image().cloned(),
            mode: session.active_mode(),
            unit: session.selected_unit(),
            calibration: session.calibration_status(),
            measurement_points: session.count_points(PointKind::Measurement),
            lines: session.measurement_lines(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.image {
            Some(image) => writeln!(
                f,
                "Image: {} ({}x{})",
                image.name, image.dimensions.width, image.dimensions.height
            )?,
            None => writeln!(f, "Image: none")?,
        }
        writeln!(f, "Mode: {}", self.mode.name())?;
        writeln!(f, "Unit: {}", self.unit)?;
        writeln!(f, "{}", self.calibration)?;
        writeln!(f, "Measurement points: {}", self.measurement_points)?;

        for (index, line) in self.lines.iter().enumerate() {
            writeln!(
                f,
                "Line {}: {} -> {}, {:.2} px, {}",
                index + 1,
                line.start_label,
                line.end_label,
                line.pixel_length,
                line.distance
            )?;
        }
        Ok(())
    }
}
