//! Tests for rasterizing render plans into RGBA frames

#[cfg(test)]
mod tests {
    use image::Rgba;
    use rand::{SeedableRng, rngs::StdRng};
    use tilesketch::color::palette::Palette;
    use tilesketch::color::rgb::Color;
    use tilesketch::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use tilesketch::layout::grid::GridSpec;
    use tilesketch::layout::plan::{RenderPlan, ShapeMode, Tile, build_plan};
    use tilesketch::render::raster::rasterize;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn single_tile_plan(mode: ShapeMode, variant: usize) -> RenderPlan {
        let grid = GridSpec::new(40, 40, 40).unwrap();
        let tile = Tile {
            col: 0,
            row: 0,
            x: 0,
            y: 0,
            variant,
            color: RED,
        };
        RenderPlan::from_parts(grid, mode, Color::WHITE, BLUE, vec![tile]).unwrap()
    }

    fn random_plan(seed: u64) -> RenderPlan {
        let palette = Palette::new(vec![
            Color::new(10, 20, 30),
            Color::new(200, 100, 50),
            Color::new(90, 180, 90),
            Color::new(250, 250, 10),
            Color::new(120, 0, 200),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        build_plan(CANVAS_WIDTH, CANVAS_HEIGHT, &palette, &mut rng).unwrap()
    }

    // Tests the frame matches the plan's canvas size
    // Verified by swapping width and height
    #[test]
    fn test_rasterize_dimensions() {
        let frame = rasterize(&random_plan(1)).unwrap();

        assert_eq!(frame.dimensions(), (1200, 630));
    }

    // Tests repeated rasterization is bit-identical
    // Verified by jittering vertices with a random offset
    #[test]
    fn test_rasterize_is_deterministic() {
        for seed in [3, 4] {
            let plan = random_plan(seed);

            let first = rasterize(&plan).unwrap();
            let second = rasterize(&plan).unwrap();

            assert_eq!(first.as_raw(), second.as_raw());
        }
    }

    // Tests the lower-right triangle of polygon variant 0 is filled
    // Verified by drawing the triangle's mirror image
    #[test]
    fn test_polygon_variant_zero_fills_lower_right() {
        let frame = rasterize(&single_tile_plan(ShapeMode::Polygon, 0)).unwrap();

        assert_eq!(frame.get_pixel(35, 35), &Rgba([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(37, 10), &Rgba([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(2, 2), &Rgba([0, 0, 255, 255]));
        assert_eq!(frame.get_pixel(10, 20), &Rgba([0, 0, 255, 255]));
    }

    // Tests polygon variant 1 fills the upper-left half instead
    // Verified by ignoring the variant
    #[test]
    fn test_polygon_variant_one_fills_upper_left() {
        let frame = rasterize(&single_tile_plan(ShapeMode::Polygon, 1)).unwrap();

        assert_eq!(frame.get_pixel(2, 2), &Rgba([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(35, 35), &Rgba([0, 0, 255, 255]));
    }

    // Tests arcs are stroked on their circle and leave the cell center empty
    // Verified by filling arcs instead of stroking them
    #[test]
    fn test_arc_variant_zero_strokes_quarter_circles() {
        let frame = rasterize(&single_tile_plan(ShapeMode::Arc, 0)).unwrap();

        // 45 degrees on the arc around (0, 0) with radius 20
        assert_eq!(frame.get_pixel(14, 14), &Rgba([255, 0, 0, 255]));
        // 225 degrees on the arc around (40, 40)
        assert_eq!(frame.get_pixel(25, 25), &Rgba([255, 0, 0, 255]));
        // Inside the first arc's radius, away from the stroke
        assert_eq!(frame.get_pixel(3, 3), &Rgba([0, 0, 255, 255]));
        // Between the two arcs
        assert_eq!(frame.get_pixel(20, 20), &Rgba([0, 0, 255, 255]));
        // Corners untouched by variant 0
        assert_eq!(frame.get_pixel(38, 1), &Rgba([0, 0, 255, 255]));
    }

    // Tests arc variant 1 uses the opposite diagonal
    // Verified by reusing variant 0 geometry
    #[test]
    fn test_arc_variant_one_strokes_other_diagonal() {
        let frame = rasterize(&single_tile_plan(ShapeMode::Arc, 1)).unwrap();

        // 135 degrees on the arc around (40, 0)
        assert_eq!(frame.get_pixel(25, 14), &Rgba([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(14, 14), &Rgba([0, 0, 255, 255]));
    }

    // Tests an empty grid still paints the background
    // Verified by skipping the background fill
    #[test]
    fn test_empty_grid_paints_background() {
        let grid = GridSpec::new(20, 10, 30).unwrap();
        let plan =
            RenderPlan::from_parts(grid, ShapeMode::Polygon, RED, BLUE, Vec::new()).unwrap();

        let frame = rasterize(&plan).unwrap();

        assert_eq!(frame.dimensions(), (20, 10));
        assert!(frame.pixels().all(|p| *p == Rgba([0, 0, 255, 255])));
    }

    // Tests every pixel is opaque after rendering
    // Verified by leaving the canvas transparent
    #[test]
    fn test_frame_is_opaque() {
        let frame = rasterize(&random_plan(9)).unwrap();

        assert!(frame.pixels().all(|p| p.0[3] == 255));
    }
}
