//! Calibration window and derived scale.
//!
//! The scale is stored unit-independently as pixels per millimetre together with
//! the unit the known distance was entered in. Pixels per unit for any unit is
//! derived on read, so switching the selected unit never leaves a stale scale.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::line::LineId;
use super::point::PointId;
use super::units::MeasurementUnit;

/// Number of calibration points that define the scale.
pub const CALIBRATION_WINDOW: usize = 2;

/// Bounded deque holding the ids of the most recent calibration points, in
/// creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationWindow {
    ids: VecDeque<PointId>,
}

impl CalibrationWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly created calibration point. Returns the id that slid out of
    /// the window, if any.
    pub fn push(&mut self, id: PointId) -> Option<PointId> {
        self.ids.push_back(id);
        if self.ids.len() > CALIBRATION_WINDOW {
            self.ids.pop_front()
        } else {
            None
        }
    }

    /// Remove an id. Returns true if it was in the window.
    pub fn remove(&mut self, id: PointId) -> bool {
        match self.ids.iter().position(|candidate| *candidate == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Rebuild from calibration point ids in creation order, keeping the newest.
    pub fn refill<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = PointId>,
    {
        self.ids.clear();
        for id in ids {
            self.push(id);
        }
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.ids.contains(&id)
    }

    /// The two window points, oldest first, once the window is full.
    pub fn pair(&self) -> Option<(PointId, PointId)> {
        match (self.ids.front(), self.ids.back()) {
            (Some(a), Some(b)) if self.ids.len() == CALIBRATION_WINDOW => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.ids.len() == CALIBRATION_WINDOW
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Calibration state.
///
/// Invariant: `pixels_per_mm` is `Some` iff the window is complete and
/// `actual_distance` is a positive number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    points: CalibrationWindow,
    line: Option<LineId>,
    actual_distance: Option<f64>,
    distance_unit: Option<MeasurementUnit>,
    pixels_per_mm: Option<f64>,
}

impl Calibration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the current calibration pair (up to two).
    pub fn points(&self) -> &CalibrationWindow {
        &self.points
    }

    /// The tracked calibration line.
    pub fn line(&self) -> Option<LineId> {
        self.line
    }

    /// Known distance as entered by the user.
    pub fn actual_distance(&self) -> Option<f64> {
        self.actual_distance
    }

    /// Unit the known distance was entered in.
    pub fn distance_unit(&self) -> Option<MeasurementUnit> {
        self.distance_unit
    }

    pub fn pixels_per_mm(&self) -> Option<f64> {
        self.pixels_per_mm
    }

    /// Scale expressed in the given unit.
    pub fn pixels_per_unit(&self, unit: MeasurementUnit) -> Option<f64> {
        self.pixels_per_mm.map(|ppmm| ppmm * unit.millimeters())
    }

    pub fn is_calibrated(&self) -> bool {
        self.pixels_per_mm.is_some()
    }

    /// Derive the scale from the pair's current pixel distance and a known
    /// distance in `unit`. Non-positive or non-finite distances clear the scale.
    pub(crate) fn calibrate(&mut self, pixel_distance: f64, distance: f64, unit: MeasurementUnit) {
        if !self.points.is_complete() || !distance.is_finite() || distance <= 0.0 {
            self.clear_scale();
            return;
        }
        self.actual_distance = Some(distance);
        self.distance_unit = Some(unit);
        self.pixels_per_mm = Some(pixel_distance / (distance * unit.millimeters()));
    }

    pub(crate) fn window_mut(&mut self) -> &mut CalibrationWindow {
        &mut self.points
    }

    /// Replace the tracked line, returning the previous one.
    pub(crate) fn replace_line(&mut self, line: LineId) -> Option<LineId> {
        self.line.replace(line)
    }

    /// Forget the tracked line together with the scale derived through it.
    pub(crate) fn detach_line(&mut self) {
        self.line = None;
        self.clear_scale();
    }

    pub(crate) fn clear_scale(&mut self) {
        self.actual_distance = None;
        self.distance_unit = None;
        self.pixels_per_mm = None;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
