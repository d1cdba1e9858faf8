//! Global constants for imeasure

/// Smallest allowed viewport scale
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed viewport scale
pub const MAX_ZOOM: f64 = 10.0;

/// Viewport scale after loading an image
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Base of the exponential wheel zoom: one wheel notch (100 delta units) scales by this
pub const WHEEL_ZOOM_BASE: f64 = 1.1;

/// Wheel delta corresponding to one zoom step
pub const WHEEL_DELTA_PER_STEP: f64 = 100.0;

/// Default stage width used for fit-to-screen
pub const DEFAULT_STAGE_WIDTH: f64 = 800.0;

/// Default stage height used for fit-to-screen
pub const DEFAULT_STAGE_HEIGHT: f64 = 600.0;

/// Text shown in place of a distance before calibration
pub const CALIBRATION_REQUIRED: &str = "calibration required";
