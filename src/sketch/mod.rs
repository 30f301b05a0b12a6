/// Seeded pipeline from source image to rendered frame
pub mod executor;

pub use executor::{SketchConfig, TileSketch, generate_sketch};
