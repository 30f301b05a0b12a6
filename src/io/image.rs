//! Source image decoding and PNG export of rendered frames

use crate::color::palette::SourceImage;
use crate::io::error::{Result, SketchError};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Decode a source image and shrink it for palette sampling
///
/// Images wider than `sample_width` are resized to that width, keeping the
/// aspect ratio. A `sample_width` of zero keeps the original size.
///
/// # Errors
///
/// Returns:
/// - `ImageLoad` if the file cannot be opened or decoded
/// - `InvalidInput` if the decoded image is empty
pub fn load_source_image(path: &Path, sample_width: u32) -> Result<SourceImage> {
    let decoded = image::open(path).map_err(|e| SketchError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    SourceImage::from_dynamic(&downscale(decoded, sample_width))
}

fn downscale(image: DynamicImage, sample_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if sample_width == 0 || width <= sample_width {
        return image;
    }

    let scaled_height = (u64::from(height) * u64::from(sample_width) / u64::from(width)).max(1);
    image.resize_exact(sample_width, scaled_height as u32, FilterType::Triangle)
}

/// Encode a rendered frame as a PNG byte stream
///
/// # Errors
///
/// Returns `ImageExport` if encoding fails
pub fn encode_png(frame: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| SketchError::ImageExport {
            path: "<memory>".into(),
            source: e,
        })?;
    Ok(bytes)
}

/// Save a rendered frame as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    frame
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
