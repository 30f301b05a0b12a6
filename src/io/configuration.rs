//! Generation constants and runtime configuration defaults

// Output frame
/// Width of the rendered canvas in pixels
pub const CANVAS_WIDTH: u32 = 1200;
/// Height of the rendered canvas in pixels
pub const CANVAS_HEIGHT: u32 = 630;

// Palette sampling
/// Number of distinct colors sampled from the source image
pub const PALETTE_SIZE: usize = 5;

// Bounds the rejection sampler for low-diversity images
/// Maximum pixel samples drawn while building a palette
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Scale applied to the inverted base color to produce the background
pub const DARKEN_FACTOR: f64 = 0.47;

// Grid layout
/// Smallest cell size in pixels (inclusive)
pub const MIN_CELL_SIZE: u32 = 30;
/// Largest cell size in pixels (exclusive)
pub const MAX_CELL_SIZE: u32 = 60;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

// Shape styling
/// Stroke width used for arc tiles
pub const STROKE_WEIGHT: f32 = 5.0;
/// Number of triangle variants in polygon mode
pub const POLYGON_VARIANTS: usize = 4;
/// Number of arc-pair variants in arc mode
pub const ARC_VARIANTS: usize = 2;

// Source loading
/// Source images wider than this are downscaled before sampling
pub const DEFAULT_SAMPLE_WIDTH: u32 = 144;
/// File extensions accepted as source images
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_sketch";
/// Extension of rendered output files
pub const OUTPUT_EXTENSION: &str = "png";
