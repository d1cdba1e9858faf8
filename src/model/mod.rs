//! Entity model for measurement sessions.

mod calibration;
mod line;
mod point;
mod units;

pub use calibration::{CALIBRATION_WINDOW, Calibration, CalibrationWindow};
pub use line::{Line, LineId, LineKind};
pub use point::{Point, PointId, PointKind};
pub use units::{MeasurementUnit, ToolMode};
