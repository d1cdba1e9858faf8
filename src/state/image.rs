//! Reference to the image currently loaded into the session.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Natural pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Image handed over by the intake collaborator.
///
/// The session only stores this; it never decodes image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// File name as supplied by the user
    pub name: String,
    /// Stable display URL
    pub url: String,
    /// Natural pixel dimensions
    pub dimensions: ImageDimensions,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>, dimensions: ImageDimensions) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            dimensions,
        }
    }
}
