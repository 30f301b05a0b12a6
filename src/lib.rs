//! Procedural tiled geometric images driven by the colors of a source image
//!
//! A palette is sampled from the source, one palette color is inverted and
//! darkened into the background, and a regular grid of randomly chosen
//! triangles or quarter arcs is painted over it into a 1200x630 frame.

#![forbid(unsafe_code)]

/// Color values, source bitmaps and palette extraction
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Grid geometry and randomized tile layout
pub mod layout;
/// Tile geometry and rasterization
pub mod render;
/// Seeded generation pipeline
pub mod sketch;

pub use io::error::{Result, SketchError};
