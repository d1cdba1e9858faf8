//! Session state.

mod image;
mod session;

pub use image::{ImageDimensions, ImageRef};
pub use session::Session;
