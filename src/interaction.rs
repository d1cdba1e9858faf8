//! Stage input handling.
//!
//! Turns pointer and gesture events from the rendering surface into actions.
//! Pointer positions arrive in container pixels and are mapped to image space
//! with the session's viewport before any point action is built.

use crate::action::Action;
use crate::constants::{WHEEL_DELTA_PER_STEP, WHEEL_ZOOM_BASE};
use crate::geometry::{Position, Size};
use crate::model::{CALIBRATION_WINDOW, PointId, PointKind, ToolMode};
use crate::state::Session;
use crate::viewport::{Viewport, fit_to_screen};

/// Two-finger gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchState {
    last_distance: f64,
    last_center: Position,
}

/// Transient input state of the stage. Not part of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct StageInput {
    /// Set while a stage pan (or pinch) is in progress; swallows the trailing click
    was_dragging: bool,
    pinch: Option<PinchState>,
    wheel_zoom_base: f64,
}

impl StageInput {
    pub fn new(wheel_zoom_base: f64) -> Self {
        Self {
            was_dragging: false,
            pinch: None,
            wheel_zoom_base,
        }
    }

    pub fn was_dragging(&self) -> bool {
        self.was_dragging
    }

    /// A new press on the stage starts a fresh interaction.
    pub fn pointer_down(&mut self) {
        self.was_dragging = false;
    }

    /// Click on the stage. Returns the point to add, if the mode places one.
    pub fn click(&mut self, session: &Session, pointer: Position) -> Option<Action> {
        if !session.has_image() {
            return None;
        }

        if self.was_dragging {
            self.was_dragging = false;
            log::trace!("Click after drag suppressed");
            return None;
        }

        let image = session.viewport().screen_to_image(pointer);
        let kind = match session.active_mode() {
            ToolMode::Pan => return None,
            ToolMode::Calibrate => {
                if session.count_points(PointKind::Calibration) >= CALIBRATION_WINDOW {
                    log::debug!("Calibration click ignored: two points already placed");
                    return None;
                }
                PointKind::Calibration
            }
            ToolMode::Measure => PointKind::Measurement,
        };

        Some(Action::AddPoint {
            x: image.x,
            y: image.y,
            kind,
        })
    }

    pub fn stage_drag_start(&mut self) {
        self.was_dragging = true;
    }

    /// End of a stage pan; `stage_position` is where the surface left the stage.
    pub fn stage_drag_end(&mut self, stage_position: Position) -> Action {
        Action::SetPan {
            x: stage_position.x,
            y: stage_position.y,
        }
    }

    /// A point is being dragged; `position` is already in image space.
    pub fn point_drag(&self, id: PointId, position: Position) -> Action {
        Action::UpdatePoint {
            id,
            x: position.x,
            y: position.y,
        }
    }

    /// Mouse wheel: exponential zoom anchored at the pointer.
    pub fn wheel(&self, viewport: &Viewport, pointer: Position, delta_y: f64) -> [Action; 2] {
        let factor = self.wheel_zoom_base.powf(-delta_y / WHEEL_DELTA_PER_STEP);
        let zoomed = viewport.zoom_around_pointer(pointer, viewport.scale * factor);
        log::trace!(
            "🔍 Wheel zoom: {:.2}x -> {:.2}x at ({:.1}, {:.1})",
            viewport.scale,
            zoomed.scale,
            pointer.x,
            pointer.y
        );
        view_actions(&zoomed)
    }

    pub fn pinch_start(&mut self, a: Position, b: Position) {
        self.was_dragging = true;
        self.pinch = Some(PinchState {
            last_distance: a.distance_to(&b),
            last_center: a.midpoint(&b),
        });
    }

    /// Two-touch move. Zooms by the change in finger spread around the midpoint
    /// and pans by the midpoint's movement.
    pub fn pinch_move(&mut self, viewport: &Viewport, a: Position, b: Position) -> Option<[Action; 2]> {
        let distance = a.distance_to(&b);
        let center = a.midpoint(&b);

        let Some(last) = self.pinch.replace(PinchState {
            last_distance: distance,
            last_center: center,
        }) else {
            self.was_dragging = true;
            return None;
        };
        if last.last_distance <= 0.0 {
            return None;
        }

        let ratio = distance / last.last_distance;
        let zoomed = viewport
            .zoom_around_pointer(center, viewport.scale * ratio)
            .pan_by(center.x - last.last_center.x, center.y - last.last_center.y);
        Some(view_actions(&zoomed))
    }

    pub fn pinch_end(&mut self) {
        self.pinch = None;
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Frame the whole image in a container of the given size.
    pub fn fit_to_screen(&self, session: &Session, container: Size) -> Option<[Action; 2]> {
        let image = session.image().map(|image| image.dimensions.size());
        let fitted = fit_to_screen(container, image)?;
        Some(view_actions(&fitted))
    }
}

impl Default for StageInput {
    fn default() -> Self {
        Self::new(WHEEL_ZOOM_BASE)
    }
}

fn view_actions(viewport: &Viewport) -> [Action; 2] {
    [
        Action::SetZoom {
            scale: viewport.scale,
        },
        Action::SetPan {
            x: viewport.offset.x,
            y: viewport.offset.y,
        },
    ]
}
