//! Image intake.
//!
//! Reads just enough of an image file to know its format and pixel size. Pixels
//! are never decoded here; rendering is the host's job.

use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::state::{ImageDimensions, ImageRef};

/// File extensions accepted by the file picker.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Check if a filename has a supported image extension.
/// Works with both full paths and just filenames.
pub fn is_supported_image(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

fn is_supported_format(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP
    )
}

/// Errors raised while taking in an image.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Unsupported image format: {0}. Please use JPEG, PNG or WebP")]
    UnsupportedFormat(String),

    #[error("Failed to read image header: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read format and dimensions of an image file and build its reference.
pub fn load_image_info(path: &Path) -> Result<ImageRef, IntakeError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let dimensions = read_dimensions(&name, reader)?;

    let url = format!("file://{}", path.canonicalize()?.display());
    log::info!(
        "Loaded image {} ({}x{})",
        name,
        dimensions.width,
        dimensions.height
    );
    Ok(ImageRef::new(name, url, dimensions))
}

/// Same as [`load_image_info`] for an in-memory upload; `url` is whatever the
/// host uses to display it.
pub fn image_info_from_bytes(
    name: &str,
    url: &str,
    data: &[u8],
) -> Result<ImageRef, IntakeError> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let dimensions = read_dimensions(name, reader)?;
    Ok(ImageRef::new(name, url, dimensions))
}

fn read_dimensions<R: BufRead + Seek>(
    name: &str,
    reader: ImageReader<R>,
) -> Result<ImageDimensions, IntakeError> {
    // Content decides, not the extension
    match reader.format() {
        Some(format) if is_supported_format(format) => {}
        Some(format) => {
            log::warn!("Rejected {}: {:?}", name, format);
            return Err(IntakeError::UnsupportedFormat(format!("{:?}", format)));
        }
        None => {
            log::warn!("Rejected {}: unrecognized data", name);
            return Err(IntakeError::UnsupportedFormat(name.to_string()));
        }
    }

    let (width, height) = reader.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(IntakeError::EmptyImage { width, height });
    }
    Ok(ImageDimensions::new(width, height))
}
