//! Seeded pipeline from source image to rendered frame

use crate::{
    color::palette::{ExhaustionPolicy, Palette, SourceImage, extract_palette_bounded},
    io::configuration::{
        CANVAS_HEIGHT, CANVAS_WIDTH, DARKEN_FACTOR, MAX_CANVAS_DIMENSION, MAX_SAMPLING_ATTEMPTS,
        PALETTE_SIZE,
    },
    io::error::{Result, invalid_parameter},
    layout::plan::{RenderPlan, SketchStyle, build_plan_with_style},
    render::raster::rasterize,
};
use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generation parameters; randomized choices are not part of it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchConfig {
    /// Output width in pixels
    pub canvas_width: u32,
    /// Output height in pixels
    pub canvas_height: u32,
    /// Number of distinct colors sampled from the source
    pub palette_size: usize,
    /// Scale applied to the inverted base color for the background
    pub darken_factor: f64,
    /// Pixel samples allowed before palette extraction stops
    pub max_sampling_attempts: usize,
    /// Whether a source with too few colors shrinks the palette or fails
    pub exhaustion_policy: ExhaustionPolicy,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            palette_size: PALETTE_SIZE,
            darken_factor: DARKEN_FACTOR,
            max_sampling_attempts: MAX_SAMPLING_ATTEMPTS,
            exhaustion_policy: ExhaustionPolicy::Truncate,
        }
    }
}

impl SketchConfig {
    /// Check every parameter before any sampling happens
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_width > MAX_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "canvas_width",
                &self.canvas_width,
                &format!("must be within 1..={MAX_CANVAS_DIMENSION}"),
            ));
        }
        if self.canvas_height == 0 || self.canvas_height > MAX_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "canvas_height",
                &self.canvas_height,
                &format!("must be within 1..={MAX_CANVAS_DIMENSION}"),
            ));
        }
        if self.palette_size == 0 {
            return Err(invalid_parameter(
                "palette_size",
                &self.palette_size,
                &"at least one color is required",
            ));
        }
        if !(0.0..=1.0).contains(&self.darken_factor) {
            return Err(invalid_parameter(
                "darken_factor",
                &self.darken_factor,
                &"must be within 0.0..=1.0",
            ));
        }
        if self.max_sampling_attempts < self.palette_size {
            return Err(invalid_parameter(
                "max_sampling_attempts",
                &self.max_sampling_attempts,
                &"must allow at least one sample per palette color",
            ));
        }
        Ok(())
    }
}

/// Generate a plan from a source image using the caller's random source
///
/// Random draws happen in a fixed order: shape mode, cell size, palette
/// samples, base color, then a `(variant, color)` pair per tile.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the palette cannot
/// be sampled
pub fn generate_sketch<R: Rng + ?Sized>(
    image: &SourceImage,
    config: &SketchConfig,
    rng: &mut R,
) -> Result<RenderPlan> {
    config.validate()?;

    let style = SketchStyle::draw(rng);
    let palette: Palette = extract_palette_bounded(
        image,
        config.palette_size,
        config.max_sampling_attempts,
        config.exhaustion_policy,
        rng,
    )?;

    build_plan_with_style(
        config.canvas_width,
        config.canvas_height,
        style,
        &palette,
        config.darken_factor,
        rng,
    )
}

/// Seeded generator turning source images into rendered frames
pub struct TileSketch {
    config: SketchConfig,
    rng: StdRng,
    seed: u64,
}

impl TileSketch {
    /// Create a generator with the default configuration
    pub fn new(seed: u64) -> Self {
        Self {
            config: SketchConfig::default(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn with_config(config: SketchConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Seed the random stream was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Active configuration
    pub const fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Produce the next plan from the random stream
    ///
    /// # Errors
    ///
    /// Returns an error if palette extraction or layout fails
    pub fn generate(&mut self, image: &SourceImage) -> Result<RenderPlan> {
        tracing::debug!(seed = self.seed, "generating sketch");
        generate_sketch(image, &self.config, &mut self.rng)
    }

    /// Produce and rasterize the next plan
    ///
    /// # Errors
    ///
    /// Returns an error if generation or rasterization fails
    pub fn render(&mut self, image: &SourceImage) -> Result<RgbaImage> {
        let plan = self.generate(image)?;
        rasterize(&plan)
    }
}
