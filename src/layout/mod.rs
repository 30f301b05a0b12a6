/// Grid geometry derived from canvas and cell size
pub mod grid;
/// Randomized tile layout and render plans
pub mod plan;

pub use grid::GridSpec;
pub use plan::{RenderPlan, ShapeMode, Tile};
