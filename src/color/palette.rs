//! Source bitmaps and palette extraction by bounded rejection sampling

use crate::color::rgb::Color;
use crate::io::configuration::MAX_SAMPLING_ATTEMPTS;
use crate::io::error::{Result, SketchError, invalid_input, invalid_parameter};
use image::{DynamicImage, RgbaImage};
use ndarray::Array3;
use rand::Rng;

/// Read-only RGBA bitmap used for palette extraction
///
/// Pixels are stored as a `(height, width, 4)` array in row-major order.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: Array3<u8>,
}

impl SourceImage {
    /// Wrap a raw row-major RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero or the buffer length
    /// is not `width * height * 4`
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_input(&format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(invalid_input(&format!(
                "buffer holds {} bytes but {width}x{height} RGBA needs {expected}",
                rgba.len()
            )));
        }

        let pixels = Array3::from_shape_vec((height as usize, width as usize, 4), rgba)
            .map_err(|e| invalid_input(&e))?;

        Ok(Self { pixels })
    }

    /// Take ownership of a decoded RGBA image
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the image is empty
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    /// Convert any decoded image to RGBA and wrap it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the image is empty
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        Self::from_rgba_image(image.to_rgba8())
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// RGB value at the given coordinate, alpha is ignored
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        let r = self.pixels.get((y, x, 0))?;
        let g = self.pixels.get((y, x, 1))?;
        let b = self.pixels.get((y, x, 2))?;
        Some(Color::new(*r, *g, *b))
    }
}

/// Ordered set of distinct colors sampled from a source image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from explicit colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the list is empty or contains duplicates
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"palette needs at least one color",
            ));
        }

        for (index, color) in colors.iter().enumerate() {
            if colors.get(..index).is_some_and(|seen| seen.contains(color)) {
                return Err(invalid_parameter(
                    "palette",
                    color,
                    &"palette colors must be distinct",
                ));
            }
        }

        Ok(Self { colors })
    }

    /// Colors in sampling order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Draw a color uniformly from the palette
    ///
    /// # Errors
    ///
    /// Returns `Computation` if the palette is somehow empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Color> {
        let index = rng.random_range(0..self.colors.len().max(1));
        self.get(index).ok_or_else(|| SketchError::Computation {
            operation: "palette selection",
            reason: format!("index {index} outside palette of {}", self.len()),
        })
    }
}

/// What sampling does when the attempt cap is hit before `count` colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    /// Keep the distinct colors found so far
    #[default]
    Truncate,
    /// Fail with `PaletteExhaustion`
    Fail,
}

/// Sample `count` distinct colors with the default attempt cap
///
/// Low-diversity sources yield a shorter palette.
///
/// # Errors
///
/// See [`extract_palette_bounded`]
pub fn extract_palette<R: Rng + ?Sized>(
    image: &SourceImage,
    count: usize,
    rng: &mut R,
) -> Result<Palette> {
    extract_palette_bounded(
        image,
        count,
        MAX_SAMPLING_ATTEMPTS,
        ExhaustionPolicy::default(),
        rng,
    )
}

/// Sample random pixels until `count` distinct RGB values are collected
///
/// Each sample draws x then y uniformly within the image bounds. A sample is
/// kept only if its exact RGB value hasn't been seen yet. After
/// `max_attempts` samples the `policy` decides between a shorter palette and
/// an error.
///
/// # Errors
///
/// Returns:
/// - `InvalidParameter` if `count` is zero
/// - `PaletteExhaustion` if `max_attempts` samples don't yield enough colors
///   under `ExhaustionPolicy::Fail`, or yield no color at all
pub fn extract_palette_bounded<R: Rng + ?Sized>(
    image: &SourceImage,
    count: usize,
    max_attempts: usize,
    policy: ExhaustionPolicy,
    rng: &mut R,
) -> Result<Palette> {
    if count == 0 {
        return Err(invalid_parameter(
            "palette_size",
            &count,
            &"at least one color is required",
        ));
    }

    let (width, height) = (image.width(), image.height());
    let mut colors: Vec<Color> = Vec::with_capacity(count);
    let mut attempts = 0;

    while colors.len() < count && attempts < max_attempts {
        attempts += 1;

        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let color = image.color_at(x, y).ok_or_else(|| SketchError::Computation {
            operation: "palette sampling",
            reason: format!("sample ({x}, {y}) outside {width}x{height} image"),
        })?;

        if !colors.contains(&color) {
            colors.push(color);
        }
    }

    if colors.len() < count {
        if policy == ExhaustionPolicy::Fail || colors.is_empty() {
            return Err(SketchError::PaletteExhaustion {
                requested: count,
                found: colors.len(),
                attempts,
            });
        }
        tracing::warn!(
            requested = count,
            found = colors.len(),
            attempts,
            "source has too few colors, using a shorter palette"
        );
    }

    tracing::debug!(attempts, palette = ?colors, "palette extracted");

    Ok(Palette { colors })
}
