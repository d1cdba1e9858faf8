//! imeasure - Image Measurement Tool
//!
//! Calibrate an image's scale from a known distance between two points, then
//! measure further distances between points placed on it.

mod action;
mod app;
mod config;
mod constants;
mod geometry;
mod intake;
mod interaction;
mod measurement;
mod model;
mod reducer;
mod report;
mod script;
mod state;
mod viewport;

pub use action::Action;
pub use app::MeasureApp;
pub use config::{AppConfig, ConfigError, LogLevel, UserPreferences};
pub use constants::{MAX_ZOOM, MIN_ZOOM};
pub use geometry::{
    Position, Size, clamp, convert_units, format_distance, pixel_distance, pixels_to_units,
    point_label, round_to_hundredths,
};
pub use intake::{IntakeError, SUPPORTED_EXTENSIONS, image_info_from_bytes, is_supported_image, load_image_info};
pub use interaction::StageInput;
pub use measurement::{CalibrationStatus, Distance, LineMeasurement};
pub use model::{
    CALIBRATION_WINDOW, Calibration, CalibrationWindow, Line, LineId, LineKind, MeasurementUnit,
    Point, PointId, PointKind, ToolMode,
};
pub use reducer::reduce;
pub use report::Report;
pub use script::{Script, ScriptError, ScriptEvent};
pub use state::{ImageDimensions, ImageRef, Session};
pub use viewport::{Viewport, clamp_zoom, fit_to_screen};
