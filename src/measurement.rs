//! Distance read path.
//!
//! Distances are never cached: every read resolves the endpoints by id and
//! measures their current coordinates. Lines with a missing endpoint are skipped.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::constants::CALIBRATION_REQUIRED;
use crate::geometry::{format_distance, pixel_distance, pixels_to_units};
use crate::model::{Line, LineId, LineKind, MeasurementUnit, Point, PointId};
use crate::state::Session;

/// Real-world length of a line, if a scale is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Distance {
    Calibrated { value: f64, unit: MeasurementUnit },
    Uncalibrated,
}

impl Distance {
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Calibrated { value, .. } => Some(*value),
            Distance::Uncalibrated => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Calibrated { value, unit } => f.write_str(&format_distance(*value, *unit)),
            Distance::Uncalibrated => f.write_str(CALIBRATION_REQUIRED),
        }
    }
}

/// A renderable line with its measured length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineMeasurement {
    pub line_id: LineId,
    pub kind: LineKind,
    pub start_label: String,
    pub end_label: String,
    pub pixel_length: f64,
    pub distance: Distance,
}

/// Scale summary shown next to the calibration controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationStatus {
    /// Calibration points placed so far (0..=2)
    pub points_placed: usize,
    /// Current pixel distance between the calibration pair
    pub pixel_distance: Option<f64>,
    pub pixels_per_unit: Option<f64>,
    pub unit: MeasurementUnit,
}

impl fmt::Display for CalibrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pixels_per_unit {
            Some(ppu) => write!(f, "Calibrated: {:.2} pixels per {}", ppu, self.unit),
            None => write!(f, "Not calibrated ({}/2 points)", self.points_placed),
        }
    }
}

impl Session {
    /// Both endpoints of a line, or `None` if the line is dangling.
    pub fn resolve_line(&self, line: &Line) -> Option<(&Point, &Point)> {
        Some((self.point(line.start())?, self.point(line.end())?))
    }

    /// Distance of a line in the selected unit.
    pub fn line_distance(&self, line: &Line) -> Option<Distance> {
        let (start, end) = self.resolve_line(line)?;
        Some(self.distance_for(pixel_distance(start.position(), end.position())))
    }

    /// Every renderable line, in insertion order.
    pub fn measurements(&self) -> Vec<LineMeasurement> {
        let by_id: HashMap<PointId, &Point> = self.points.iter().map(|p| (p.id(), p)).collect();

        self.lines
            .iter()
            .filter_map(|line| {
                let start = by_id.get(&line.start())?;
                let end = by_id.get(&line.end())?;
                let pixel_length = pixel_distance(start.position(), end.position());
                Some(LineMeasurement {
                    line_id: line.id(),
                    kind: line.kind(),
                    start_label: start.label().to_string(),
                    end_label: end.label().to_string(),
                    pixel_length,
                    distance: self.distance_for(pixel_length),
                })
            })
            .collect()
    }

    /// Renderable measurement lines only.
    pub fn measurement_lines(&self) -> Vec<LineMeasurement> {
        self.measurements()
            .into_iter()
            .filter(|m| m.kind == LineKind::Measurement)
            .collect()
    }

    pub fn calibration_status(&self) -> CalibrationStatus {
        let pair = self.calibration.points().pair().and_then(|(a, b)| {
            let a = self.point(a)?;
            let b = self.point(b)?;
            Some(pixel_distance(a.position(), b.position()))
        });

        CalibrationStatus {
            points_placed: self.calibration.points().len(),
            pixel_distance: pair,
            pixels_per_unit: self.pixels_per_unit(),
            unit: self.selected_unit,
        }
    }

    fn distance_for(&self, pixels: f64) -> Distance {
        match self.pixels_per_unit() {
            Some(ppu) => Distance::Calibrated {
                value: pixels_to_units(pixels, ppu),
                unit: self.selected_unit,
            },
            None => Distance::Uncalibrated,
        }
    }
}
