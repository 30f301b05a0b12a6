//! Tests for generation constants and their relationships

#[cfg(test)]
mod tests {
    use tilesketch::io::configuration::{
        ARC_VARIANTS, CANVAS_HEIGHT, CANVAS_WIDTH, DARKEN_FACTOR, MAX_CANVAS_DIMENSION,
        MAX_CELL_SIZE, MAX_SAMPLING_ATTEMPTS, MIN_CELL_SIZE, OUTPUT_EXTENSION, PALETTE_SIZE,
        POLYGON_VARIANTS, STROKE_WEIGHT, SUPPORTED_EXTENSIONS,
    };

    // Tests the output frame is the social preview size
    // Verified by swapping the dimensions
    #[test]
    fn test_canvas_dimensions() {
        assert_eq!((CANVAS_WIDTH, CANVAS_HEIGHT), (1200, 630));
        assert!(CANVAS_WIDTH <= MAX_CANVAS_DIMENSION);
        assert!(CANVAS_HEIGHT <= MAX_CANVAS_DIMENSION);
    }

    // Tests the cell size range always fits at least one cell
    // Verified by raising the maximum above the canvas height
    #[test]
    fn test_cell_size_range() {
        assert_eq!((MIN_CELL_SIZE, MAX_CELL_SIZE), (30, 60));
        assert!(MIN_CELL_SIZE > 0);
        assert!(MAX_CELL_SIZE <= CANVAS_HEIGHT);
    }

    // Tests palette and styling defaults
    // Verified by changing the darken factor
    #[test]
    fn test_palette_and_style_defaults() {
        assert_eq!(PALETTE_SIZE, 5);
        assert!((DARKEN_FACTOR - 0.47).abs() < f64::EPSILON);
        assert!(MAX_SAMPLING_ATTEMPTS >= PALETTE_SIZE);
        assert!((STROKE_WEIGHT - 5.0).abs() < f32::EPSILON);
        assert_eq!((POLYGON_VARIANTS, ARC_VARIANTS), (4, 2));
    }

    // Tests the output format is readable as a source
    // Verified by removing png from the supported list
    #[test]
    fn test_output_extension_is_supported() {
        assert!(SUPPORTED_EXTENSIONS.contains(&OUTPUT_EXTENSION));
    }
}
