//! Local tile geometry for every shape variant
//!
//! Coordinates are relative to the tile's top-left corner with the y axis
//! pointing down, so angles grow clockwise on screen.

use crate::io::error::{Result, invalid_parameter};
use crate::layout::plan::ShapeMode;

/// Point in pixel space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Shift by an offset
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Elliptical arc outline, described the way sketch libraries take it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Ellipse center
    pub center: Point,
    /// Ellipse width
    pub width: f32,
    /// Ellipse height
    pub height: f32,
    /// Start angle in degrees
    pub start_degrees: f32,
    /// Stop angle in degrees, greater than the start
    pub stop_degrees: f32,
}

// Longest sweep approximated by a single cubic
const MAX_SEGMENT_DEGREES: f32 = 90.0;

impl ArcSegment {
    /// Circular arc of the given diameter
    pub const fn circular(
        center: Point,
        diameter: f32,
        start_degrees: f32,
        stop_degrees: f32,
    ) -> Self {
        Self {
            center,
            width: diameter,
            height: diameter,
            start_degrees,
            stop_degrees,
        }
    }

    /// Point on the outline at `degrees`
    pub fn point_at(&self, degrees: f32) -> Point {
        self.point_at_radians(degrees.to_radians())
    }

    fn point_at_radians(&self, radians: f32) -> Point {
        Point::new(
            self.center.x + self.width / 2.0 * radians.cos(),
            self.center.y + self.height / 2.0 * radians.sin(),
        )
    }

    /// Cubic Bézier approximation as `[start, control1, control2, end]` spans
    ///
    /// The sweep is split into pieces of at most 90 degrees.
    pub fn cubic_segments(&self) -> Vec<[Point; 4]> {
        let sweep = self.stop_degrees - self.start_degrees;
        if sweep <= 0.0 {
            return Vec::new();
        }

        let pieces = (sweep / MAX_SEGMENT_DEGREES).ceil().max(1.0) as usize;
        let step = sweep / pieces as f32;
        let (rx, ry) = (self.width / 2.0, self.height / 2.0);
        let handle = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

        (0..pieces)
            .map(|piece| {
                let a0 = (step.mul_add(piece as f32, self.start_degrees)).to_radians();
                let a1 = a0 + step.to_radians();
                let start = self.point_at_radians(a0);
                let end = self.point_at_radians(a1);
                let control1 = Point::new(
                    (handle * rx).mul_add(-a0.sin(), start.x),
                    (handle * ry).mul_add(a0.cos(), start.y),
                );
                let control2 = Point::new(
                    (handle * rx).mul_add(a1.sin(), end.x),
                    (handle * ry).mul_add(-a1.cos(), end.y),
                );
                [start, control1, control2, end]
            })
            .collect()
    }
}

/// Geometry drawn for one tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Filled triangle without outline
    Triangle([Point; 3]),
    /// Pair of stroked arcs without fill
    Arcs([ArcSegment; 2]),
}

impl Shape {
    /// Local geometry of `variant` in `mode` for a cell of `size` pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the variant doesn't exist in the mode
    pub fn for_variant(mode: ShapeMode, variant: usize, size: f32) -> Result<Self> {
        let s = size;
        let shape = match (mode, variant) {
            (ShapeMode::Polygon, 0) => Self::Triangle([
                Point::new(s, 0.0),
                Point::new(s, s),
                Point::new(0.0, s),
            ]),
            (ShapeMode::Polygon, 1) => Self::Triangle([
                Point::new(s, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, s),
            ]),
            (ShapeMode::Polygon, 2) => Self::Triangle([
                Point::new(s, s),
                Point::new(0.0, 0.0),
                Point::new(0.0, s),
            ]),
            (ShapeMode::Polygon, 3) => Self::Triangle([
                Point::new(s, s),
                Point::new(0.0, 0.0),
                Point::new(s, 0.0),
            ]),
            (ShapeMode::Arc, 0) => Self::Arcs([
                ArcSegment::circular(Point::new(0.0, 0.0), s, 0.0, 90.0),
                ArcSegment::circular(Point::new(s, s), s, 180.0, 270.0),
            ]),
            (ShapeMode::Arc, 1) => Self::Arcs([
                ArcSegment::circular(Point::new(s, 0.0), s, 90.0, 180.0),
                ArcSegment::circular(Point::new(0.0, s), s, 270.0, 360.0),
            ]),
            _ => {
                return Err(invalid_parameter(
                    "variant",
                    &variant,
                    &format!("{mode:?} mode has {} variants", mode.variant_count()),
                ));
            }
        };
        Ok(shape)
    }

    /// Same shape moved by an offset
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        match self {
            Self::Triangle(points) => Self::Triangle(points.map(|p| p.translate(dx, dy))),
            Self::Arcs(arcs) => Self::Arcs(arcs.map(|arc| ArcSegment {
                center: arc.center.translate(dx, dy),
                ..arc
            })),
        }
    }
}
