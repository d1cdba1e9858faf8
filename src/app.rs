//! Measurement application.
//!
//! Owns the session and the stage input state, and exposes the operations the
//! presentation layer calls. Every change to the session goes through
//! [`MeasureApp::dispatch`].

use crate::action::Action;
use crate::config::AppConfig;
use crate::geometry::{Position, Size};
use crate::interaction::StageInput;
use crate::model::{LineId, LineKind, MeasurementUnit, PointId, PointKind, ToolMode};
use crate::report::Report;
use crate::state::{ImageRef, Session};

/// Headless application state.
#[derive(Debug, Clone)]
pub struct MeasureApp {
    session: Session,
    input: StageInput,
    /// Container size used by fit-to-screen
    stage_size: Size,
}

impl MeasureApp {
    pub fn new(config: &AppConfig) -> Self {
        let prefs = &config.preferences;
        Self {
            session: Session::new(prefs.default_unit, prefs.default_mode),
            input: StageInput::new(prefs.wheel_zoom_base),
            stage_size: prefs.stage_size(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &StageInput {
        &self.input
    }

    pub fn stage_size(&self) -> Size {
        self.stage_size
    }

    /// The host resized the stage.
    pub fn set_stage_size(&mut self, size: Size) {
        self.stage_size = size;
    }

    pub fn report(&self) -> Report {
        Report::from_session(&self.session)
    }

    /// Apply one action to the session.
    pub fn dispatch(&mut self, action: Action) {
        self.session.apply(action);
    }

    fn last_point(&self) -> Option<PointId> {
        self.session.points().last().map(|point| point.id())
    }

    fn last_line(&self) -> Option<LineId> {
        self.session.lines().last().map(|line| line.id())
    }

    fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    // ========================================================================
    // Direct operations
    // ========================================================================

    pub fn set_image(&mut self, image: ImageRef) {
        self.dispatch(Action::SetImage(image));
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.dispatch(Action::SetMode { mode });
    }

    /// Place a point at image coordinates. Returns its id.
    pub fn add_point(&mut self, x: f64, y: f64, kind: PointKind) -> Option<PointId> {
        self.dispatch(Action::AddPoint { x, y, kind });
        self.last_point()
    }

    pub fn update_point(&mut self, id: PointId, x: f64, y: f64) {
        self.dispatch(Action::UpdatePoint { id, x, y });
    }

    pub fn delete_point(&mut self, id: PointId) {
        self.dispatch(Action::DeletePoint { id });
    }

    /// Join two points. Returns the new line's id, or `None` if an endpoint is missing.
    pub fn add_line(&mut self, start: PointId, end: PointId, kind: LineKind) -> Option<LineId> {
        let previous = self.last_line();
        self.dispatch(Action::AddLine { start, end, kind });
        // New lines are appended; an ignored AddLine leaves the tail unchanged
        self.last_line().filter(|id| Some(*id) != previous)
    }

    pub fn delete_line(&mut self, id: LineId) {
        self.dispatch(Action::DeleteLine { id });
    }

    pub fn set_calibration_distance(&mut self, distance: f64) {
        self.dispatch(Action::SetCalibrationDistance { distance });
    }

    pub fn set_unit(&mut self, unit: MeasurementUnit) {
        self.dispatch(Action::SetUnit { unit });
    }

    pub fn set_zoom(&mut self, scale: f64) {
        self.dispatch(Action::SetZoom { scale });
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.dispatch(Action::SetPan { x, y });
    }

    pub fn clear_all(&mut self) {
        self.dispatch(Action::ClearAll);
    }

    // ========================================================================
    // Stage events (container pixels)
    // ========================================================================

    pub fn on_stage_pointer_down(&mut self) {
        self.input.pointer_down();
    }

    /// Click on the stage. Returns the placed point, if any.
    pub fn on_stage_click(&mut self, pointer: Position) -> Option<PointId> {
        let action = self.input.click(&self.session, pointer)?;
        self.dispatch(action);
        self.last_point()
    }

    pub fn on_stage_drag_start(&mut self) {
        self.input.stage_drag_start();
    }

    pub fn on_stage_drag_end(&mut self, stage_position: Position) {
        let action = self.input.stage_drag_end(stage_position);
        self.dispatch(action);
    }

    /// A point was dragged to `position` (image coordinates).
    pub fn on_point_drag(&mut self, id: PointId, position: Position) {
        let action = self.input.point_drag(id, position);
        self.dispatch(action);
    }

    pub fn on_wheel(&mut self, pointer: Position, delta_y: f64) {
        let actions = self.input.wheel(self.session.viewport(), pointer, delta_y);
        self.dispatch_all(actions);
    }

    pub fn on_pinch_start(&mut self, a: Position, b: Position) {
        self.input.pinch_start(a, b);
    }

    pub fn on_pinch_move(&mut self, a: Position, b: Position) {
        if let Some(actions) = self.input.pinch_move(self.session.viewport(), a, b) {
            self.dispatch_all(actions);
        }
    }

    pub fn on_pinch_end(&mut self) {
        self.input.pinch_end();
    }

    /// Fit the image into the stage. Returns false without an image.
    pub fn fit_to_screen(&mut self) -> bool {
        match self.input.fit_to_screen(&self.session, self.stage_size) {
            Some(actions) => {
                self.dispatch_all(actions);
                true
            }
            None => false,
        }
    }
}

impl Default for MeasureApp {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
