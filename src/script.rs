//! Replayable input scripts.
//!
//! A script is a JSON list of stage events that is fed to a [`MeasureApp`] in
//! order. It drives the application without a rendering surface.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::app::MeasureApp;
use crate::geometry::Position;
use crate::intake::{IntakeError, load_image_info};

/// One recorded input event. Positions are container pixels unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Load an image file; relative paths resolve against the script's directory
    LoadImage { path: PathBuf },
    /// Press, release and click on the stage
    Click { x: f64, y: f64 },
    /// Pan the stage so that it ends at (x, y)
    DragStage { x: f64, y: f64 },
    /// Drag a point, found by label, to image coordinates
    DragPoint { label: String, x: f64, y: f64 },
    Wheel { x: f64, y: f64, delta_y: f64 },
    /// Two-finger gesture from one pair of touches to another
    Pinch {
        from: [Position; 2],
        to: [Position; 2],
    },
    FitToScreen,
    /// Apply a raw action
    Dispatch { action: Action },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<ScriptEvent>,
}

/// Errors raised while loading or replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image intake failed: {0}")]
    Intake(#[from] IntakeError),

    #[error("No point labelled {0}")]
    UnknownPoint(String),
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} events from {:?}", script.events.len(), path);
        Ok(script)
    }

    /// Replay every event against `app`, stopping at the first failure.
    pub fn run(&self, app: &mut MeasureApp, base_dir: &Path) -> Result<(), ScriptError> {
        for (index, event) in self.events.iter().enumerate() {
            log::debug!("▶️  Event {}: {:?}", index, event);
            run_event(app, event, base_dir)?;
        }
        Ok(())
    }
}

fn run_event(app: &mut MeasureApp, event: &ScriptEvent, base_dir: &Path) -> Result<(), ScriptError> {
    match event {
        ScriptEvent::LoadImage { path } => {
            let image = load_image_info(&base_dir.join(path))?;
            app.set_image(image);
        }
        ScriptEvent::Click { x, y } => {
            app.on_stage_pointer_down();
            app.on_stage_click(Position::new(*x, *y));
        }
        ScriptEvent::DragStage { x, y } => {
            app.on_stage_pointer_down();
            app.on_stage_drag_start();
            app.on_stage_drag_end(Position::new(*x, *y));
        }
        ScriptEvent::DragPoint { label, x, y } => {
            let id = app
                .session()
                .point_by_label(label)
                .map(|point| point.id())
                .ok_or_else(|| ScriptError::UnknownPoint(label.clone()))?;
            app.on_point_drag(id, Position::new(*x, *y));
        }
        ScriptEvent::Wheel { x, y, delta_y } => {
            app.on_wheel(Position::new(*x, *y), *delta_y);
        }
        ScriptEvent::Pinch { from, to } => {
            app.on_pinch_start(from[0], from[1]);
            app.on_pinch_move(to[0], to[1]);
            app.on_pinch_end();
        }
        ScriptEvent::FitToScreen => {
            if !app.fit_to_screen() {
                log::warn!("Fit to screen ignored: no image loaded");
            }
        }
        ScriptEvent::Dispatch { action } => app.dispatch(action.clone()),
    }
    Ok(())
}
