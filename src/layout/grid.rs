//! Regular grid geometry covering the canvas

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Tiling layout derived from canvas size and cell size
///
/// Only whole cells are placed, so a strip narrower than one cell may remain
/// uncovered along the right and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    cols: usize,
    rows: usize,
    cell_size: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl GridSpec {
    /// Derive the grid for a canvas and cell size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the cell size is zero or a canvas
    /// dimension is zero or exceeds `MAX_CANVAS_DIMENSION`
    pub fn new(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be positive",
            ));
        }

        for (parameter, value) in [
            ("canvas_width", canvas_width),
            ("canvas_height", canvas_height),
        ] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be within 1..={MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        Ok(Self {
            cols: (canvas_width / cell_size) as usize,
            rows: (canvas_height / cell_size) as usize,
            cell_size,
            canvas_width,
            canvas_height,
        })
    }

    /// Number of whole columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of whole rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length of a cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Top-left pixel of the cell at `(col, row)`
    pub const fn cell_origin(&self, col: usize, row: usize) -> (u32, u32) {
        (col as u32 * self.cell_size, row as u32 * self.cell_size)
    }
}
