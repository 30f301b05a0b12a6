//! RGB colors and complementary color computation

use std::fmt;

/// Opaque RGB triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from the first three channels of an RGBA pixel
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2])
    }

    /// Fully opaque RGBA representation
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Darkened inverse of this color, see [`complement`]
    #[must_use]
    pub fn complement(self, darken_factor: f64) -> Self {
        complement(self, darken_factor)
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from_rgba(pixel.0)
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        Self::from_rgba8(color.r, color.g, color.b, 255)
    }
}

/// Inverts each channel and scales the result by `darken_factor`
///
/// Channels are clamped to `[0, 255]` and rounded to the nearest integer, so
/// the operation is lossy: applying it twice does not return the input.
pub fn complement(color: Color, darken_factor: f64) -> Color {
    let channel = |value: u8| {
        let scaled = f64::from(255 - value) * darken_factor;
        scaled.clamp(0.0, 255.0).round() as u8
    };

    Color::new(channel(color.r), channel(color.g), channel(color.b))
}
