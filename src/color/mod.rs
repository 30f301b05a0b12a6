//! Color values and palette sampling
//!
//! This module contains:
//! - RGB colors and the darkened complement used for backgrounds
//! - Source bitmaps and bounded palette extraction

/// Distinct-color sampling from source bitmaps
pub mod palette;
/// RGB triples and complementary colors
pub mod rgb;

pub use palette::{ExhaustionPolicy, Palette, SourceImage};
pub use rgb::Color;
