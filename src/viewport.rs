//! Viewport transform mathematics.
//!
//! The renderer draws image-space content with `screen = image * scale + offset`.
//! Everything here is the exact inverse or a zoom/pan adjustment of that map, so
//! pointer input and rendered content never drift apart.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Position, Size, clamp};

/// Clamp a zoom factor into the supported range.
pub fn clamp_zoom(scale: f64) -> f64 {
    clamp(scale, MIN_ZOOM, MAX_ZOOM)
}

/// Zoom and pan applied to the stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Zoom factor, kept in `[MIN_ZOOM, MAX_ZOOM]` by the reducer
    pub scale: f64,
    /// Pan translation in container pixels
    pub offset: Position,
}

impl Viewport {
    pub fn new(scale: f64, offset: Position) -> Self {
        Self { scale, offset }
    }

    /// Scale 1, no pan.
    pub fn identity() -> Self {
        Self::new(DEFAULT_ZOOM, Position::ORIGIN)
    }

    /// Map a container position to image coordinates.
    pub fn screen_to_image(&self, screen: Position) -> Position {
        Position::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Map an image position to container coordinates.
    pub fn image_to_screen(&self, image: Position) -> Position {
        Position::new(
            image.x * self.scale + self.offset.x,
            image.y * self.scale + self.offset.y,
        )
    }

    /// Zoom while keeping the image point under `pointer` fixed.
    ///
    /// `self.scale` is the old scale and `self.offset` the stage position; the new
    /// scale is clamped before it is applied.
    pub fn zoom_around_pointer(&self, pointer: Position, new_scale: f64) -> Viewport {
        let new_scale = clamp_zoom(new_scale);
        let anchor = self.screen_to_image(pointer);

        Viewport {
            scale: new_scale,
            offset: Position::new(
                pointer.x - anchor.x * new_scale,
                pointer.y - anchor.y * new_scale,
            ),
        }
    }

    /// Apply a pan delta.
    pub fn pan_by(&self, dx: f64, dy: f64) -> Viewport {
        Viewport {
            scale: self.scale,
            offset: Position::new(self.offset.x + dx, self.offset.y + dy),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}

/// Scale and offset that fit the whole image into the container, centred.
///
/// Returns `None` when there is no image or either size is degenerate.
pub fn fit_to_screen(container: Size, image: Option<Size>) -> Option<Viewport> {
    let image = image?;
    if image.is_degenerate() || container.is_degenerate() {
        return None;
    }

    let scale = (container.width / image.width).min(container.height / image.height);
    Some(Viewport::new(
        scale,
        Position::new(
            (container.width - image.width * scale) / 2.0,
            (container.height - image.height * scale) / 2.0,
        ),
    ))
}
