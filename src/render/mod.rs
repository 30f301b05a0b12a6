/// Rasterization of render plans into RGBA frames
pub mod raster;
/// Per-variant tile geometry
pub mod shapes;
