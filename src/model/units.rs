//! Measurement units and tool modes.

use serde::{Deserialize, Serialize};

/// Real-world length units a distance can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MeasurementUnit {
    #[serde(rename = "mm")]
    Millimeters,
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "inches")]
    Inches,
}

impl MeasurementUnit {
    /// Symbol used when rendering a distance.
    pub fn symbol(&self) -> &'static str {
        match self {
            MeasurementUnit::Millimeters => "mm",
            MeasurementUnit::Centimeters => "cm",
            MeasurementUnit::Inches => "inches",
        }
    }

    /// Length of one unit in millimetres, the canonical base unit.
    pub fn millimeters(&self) -> f64 {
        match self {
            MeasurementUnit::Millimeters => 1.0,
            MeasurementUnit::Centimeters => 10.0,
            MeasurementUnit::Inches => 25.4,
        }
    }

    /// All supported units, in selector order.
    pub fn all() -> &'static [MeasurementUnit] {
        &[
            MeasurementUnit::Millimeters,
            MeasurementUnit::Centimeters,
            MeasurementUnit::Inches,
        ]
    }

    /// Parse a unit symbol (`mm`, `cm`, `inches`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::all().iter().copied().find(|u| u.symbol() == symbol)
    }
}

impl std::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Interaction mode of the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    /// Drag pans the image, clicks place nothing
    #[default]
    Pan,
    /// Clicks place calibration points (at most two)
    Calibrate,
    /// Clicks place measurement points
    Measure,
}

impl ToolMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Pan => "Pan & Zoom",
            ToolMode::Calibrate => "Calibrate",
            ToolMode::Measure => "Measure",
        }
    }

    pub fn all() -> &'static [ToolMode] {
        &[ToolMode::Pan, ToolMode::Calibrate, ToolMode::Measure]
    }

    /// Check if clicks in this mode place points.
    pub fn places_points(&self) -> bool {
        !matches!(self, ToolMode::Pan)
    }
}
