//! Rasterization of render plans into RGBA frames

use crate::io::configuration::STROKE_WEIGHT;
use crate::io::error::{Result, computation_error};
use crate::layout::plan::RenderPlan;
use crate::render::shapes::{ArcSegment, Point, Shape};
use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// Paint the plan onto a canvas of the plan's dimensions
///
/// The canvas is filled with the background color, then each tile is drawn
/// in plan order. Every color is opaque, so the premultiplied pixmap data is
/// returned unchanged as straight RGBA.
///
/// # Errors
///
/// Returns `Computation` if the canvas cannot be allocated
pub fn rasterize(plan: &RenderPlan) -> Result<RgbaImage> {
    let grid = plan.grid();
    let mut pixmap = Pixmap::new(grid.canvas_width(), grid.canvas_height()).ok_or_else(|| {
        computation_error(
            "rasterize",
            &format!(
                "cannot allocate {}x{} canvas",
                grid.canvas_width(),
                grid.canvas_height()
            ),
        )
    })?;
    pixmap.fill(plan.background().into());

    let size = grid.cell_size() as f32;
    let stroke = Stroke {
        width: STROKE_WEIGHT,
        line_cap: LineCap::Round,
        ..Stroke::default()
    };
    let mut paint = Paint {
        anti_alias: true,
        ..Paint::default()
    };

    for tile in plan.iter_tiles() {
        let shape = Shape::for_variant(plan.shape_mode(), tile.variant, size)?
            .translate(tile.x as f32, tile.y as f32);
        paint.set_color(tile.color.into());

        match shape {
            Shape::Triangle(points) => {
                if let Some(path) = triangle_path(&points) {
                    pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            Shape::Arcs(arcs) => {
                for arc in &arcs {
                    if let Some(path) = arc_path(arc) {
                        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                    }
                }
            }
        }
    }

    let (width, height) = (pixmap.width(), pixmap.height());
    RgbaImage::from_raw(width, height, pixmap.take()).ok_or_else(|| {
        computation_error("rasterize", &"pixmap buffer does not match its dimensions")
    })
}

// Degenerate geometry yields no path and is skipped
fn triangle_path(points: &[Point; 3]) -> Option<Path> {
    let [a, b, c] = points;
    let mut builder = PathBuilder::new();
    builder.move_to(a.x, a.y);
    builder.line_to(b.x, b.y);
    builder.line_to(c.x, c.y);
    builder.close();
    builder.finish()
}

fn arc_path(arc: &ArcSegment) -> Option<Path> {
    let segments = arc.cubic_segments();
    let [first, ..] = segments.first()?;

    let mut builder = PathBuilder::new();
    builder.move_to(first.x, first.y);
    for [_, control1, control2, end] in &segments {
        builder.cubic_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y);
    }
    builder.finish()
}
