//! Randomized tile layout producing an immutable render plan

use crate::color::palette::Palette;
use crate::color::rgb::{Color, complement};
use crate::io::configuration::{
    ARC_VARIANTS, DARKEN_FACTOR, MAX_CELL_SIZE, MIN_CELL_SIZE, POLYGON_VARIANTS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::grid::GridSpec;
use ndarray::Array2;
use rand::Rng;

/// Global rendering style, chosen once per image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// One filled triangle per tile
    Polygon,
    /// Two stroked quarter arcs per tile
    Arc,
}

impl ShapeMode {
    /// Number of shape variants available in this mode
    pub const fn variant_count(self) -> usize {
        match self {
            Self::Polygon => POLYGON_VARIANTS,
            Self::Arc => ARC_VARIANTS,
        }
    }

    /// Draw a mode uniformly; a draw of 1 selects arcs
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_range(0..2) == 1 {
            Self::Arc
        } else {
            Self::Polygon
        }
    }
}

/// Randomized choices made before the palette is sampled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SketchStyle {
    /// Shape family for every tile
    pub shape_mode: ShapeMode,
    /// Cell edge length in pixels
    pub cell_size: u32,
}

impl SketchStyle {
    /// Draw the shape mode, then a cell size in `[MIN_CELL_SIZE, MAX_CELL_SIZE)`
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let shape_mode = ShapeMode::draw(rng);
        let cell_size = rng.random_range(MIN_CELL_SIZE..MAX_CELL_SIZE);
        Self {
            shape_mode,
            cell_size,
        }
    }
}

/// Render instruction for one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Column index
    pub col: usize,
    /// Row index
    pub row: usize,
    /// Left edge in canvas pixels
    pub x: u32,
    /// Top edge in canvas pixels
    pub y: u32,
    /// Shape variant within the plan's mode
    pub variant: usize,
    /// Fill color for triangles, stroke color for arcs
    pub color: Color,
}

/// Complete, immutable description of one generated image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    grid: GridSpec,
    shape_mode: ShapeMode,
    base_color: Color,
    background: Color,
    tiles: Array2<Tile>,
}

impl RenderPlan {
    /// Assemble a plan from explicit tiles
    ///
    /// Tiles must be listed column by column (outer loop over columns, inner
    /// over rows) and cover every cell exactly once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile count, a tile position or a
    /// shape variant doesn't match the grid and mode
    pub fn from_parts(
        grid: GridSpec,
        shape_mode: ShapeMode,
        base_color: Color,
        background: Color,
        tiles: Vec<Tile>,
    ) -> Result<Self> {
        if tiles.len() != grid.cell_count() {
            return Err(invalid_parameter(
                "tiles",
                &tiles.len(),
                &format!(
                    "expected {} tiles for a {}x{} grid",
                    grid.cell_count(),
                    grid.cols(),
                    grid.rows()
                ),
            ));
        }

        for (index, tile) in tiles.iter().enumerate() {
            let (col, row) = if grid.rows() == 0 {
                (0, 0)
            } else {
                (index / grid.rows(), index % grid.rows())
            };
            if (tile.col, tile.row) != (col, row)
                || (tile.x, tile.y) != grid.cell_origin(col, row)
            {
                return Err(invalid_parameter(
                    "tiles",
                    &format!("({}, {})", tile.col, tile.row),
                    &format!("tile {index} should sit at cell ({col}, {row})"),
                ));
            }
            if tile.variant >= shape_mode.variant_count() {
                return Err(invalid_parameter(
                    "variant",
                    &tile.variant,
                    &format!("{shape_mode:?} mode has {} variants", shape_mode.variant_count()),
                ));
            }
        }

        let tiles = Array2::from_shape_vec((grid.cols(), grid.rows()), tiles).map_err(|e| {
            invalid_parameter("tiles", &grid.cell_count(), &e)
        })?;

        Ok(Self {
            grid,
            shape_mode,
            base_color,
            background,
            tiles,
        })
    }

    /// Grid geometry
    pub const fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Shape family used by every tile
    pub const fn shape_mode(&self) -> ShapeMode {
        self.shape_mode
    }

    /// Palette color the background was derived from
    pub const fn base_color(&self) -> Color {
        self.base_color
    }

    /// Canvas fill color
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Tiles indexed by `[col, row]`
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Tile at the given grid coordinate
    pub fn tile(&self, col: usize, row: usize) -> Option<&Tile> {
        self.tiles.get([col, row])
    }

    /// Tiles in drawing order, column by column
    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

/// Draw a style and lay out tiles for an existing palette
///
/// # Errors
///
/// See [`build_plan_with_style`]
pub fn build_plan<R: Rng + ?Sized>(
    canvas_width: u32,
    canvas_height: u32,
    palette: &Palette,
    rng: &mut R,
) -> Result<RenderPlan> {
    let style = SketchStyle::draw(rng);
    build_plan_with_style(
        canvas_width,
        canvas_height,
        style,
        palette,
        DARKEN_FACTOR,
        rng,
    )
}

/// Lay out tiles for an already drawn style
///
/// Draws the base color index, then a `(variant, color)` pair per tile with
/// columns as the outer loop and rows as the inner loop.
///
/// # Errors
///
/// Returns `InvalidParameter` if the canvas or cell size is invalid
pub fn build_plan_with_style<R: Rng + ?Sized>(
    canvas_width: u32,
    canvas_height: u32,
    style: SketchStyle,
    palette: &Palette,
    darken_factor: f64,
    rng: &mut R,
) -> Result<RenderPlan> {
    let grid = GridSpec::new(canvas_width, canvas_height, style.cell_size)?;

    let base_color = palette.choose(rng)?;
    let background = complement(base_color, darken_factor);

    tracing::debug!(
        shape_mode = ?style.shape_mode,
        cell_size = style.cell_size,
        cols = grid.cols(),
        rows = grid.rows(),
        base = %base_color,
        background = %background,
        "laying out tiles"
    );

    let variant_count = style.shape_mode.variant_count();
    let mut tiles = Vec::with_capacity(grid.cell_count());
    for col in 0..grid.cols() {
        for row in 0..grid.rows() {
            let (x, y) = grid.cell_origin(col, row);
            let variant = rng.random_range(0..variant_count);
            let color = palette.choose(rng)?;
            tiles.push(Tile {
                col,
                row,
                x,
                y,
                variant,
                color,
            });
        }
    }

    RenderPlan::from_parts(grid, style.shape_mode, base_color, background, tiles)
}
