//! Geometry and unit helpers for measurements.
//!
//! Everything here is a total function: degenerate inputs produce defined values
//! (zero, the lower clamp bound) instead of infinities or NaN.

use serde::{Deserialize, Serialize};

use crate::model::{MeasurementUnit, PointKind};

/// A 2D position, either in image pixels or in container pixels depending on
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two positions.
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Width and height of an image or container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Distance between two image-space positions in pixels.
pub fn pixel_distance(a: Position, b: Position) -> f64 {
    a.distance_to(&b)
}

/// Convert a pixel length to real-world units.
///
/// A zero scale yields 0 rather than infinity.
pub fn pixels_to_units(pixels: f64, pixels_per_unit: f64) -> f64 {
    if pixels_per_unit == 0.0 {
        return 0.0;
    }
    pixels / pixels_per_unit
}

/// Convert a value between units, going through millimetres.
pub fn convert_units(value: f64, from: MeasurementUnit, to: MeasurementUnit) -> f64 {
    if from == to {
        return value;
    }
    let millimeters = value * from.millimeters();
    millimeters / to.millimeters()
}

/// Round to two decimals, halves rounding up.
pub fn round_to_hundredths(value: f64) -> f64 {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    // Avoid rendering "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a distance as `"<value> <unit>"` with at most two decimals.
pub fn format_distance(distance: f64, unit: MeasurementUnit) -> String {
    format!("{} {}", round_to_hundredths(distance), unit.symbol())
}

/// Display label for a point: `C1`, `C2`, ... or `M1`, `M2`, ...
///
/// `ordinal` is the number of points of the same kind that existed before this one.
pub fn point_label(kind: PointKind, ordinal: usize) -> String {
    format!("{}{}", kind.prefix(), ordinal + 1)
}

/// Clamp a value into `[min, max]`. NaN clamps to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
