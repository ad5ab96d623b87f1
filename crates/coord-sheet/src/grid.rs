//! Grid paint state.
//!
//! A [`Grid`] owns the R×C matrix of cell paint values together with the
//! materialized row and column label sequences. Cells reference colors by
//! identity ([`ColorId`]), never by selection slot, so reassigning a slot
//! does not retroactively repaint cells.

use serde::Serialize;

use crate::color::ColorId;
use crate::error::SheetError;
use crate::label;

/// Maximum number of rows in a grid.
pub const MAX_ROWS: usize = 1000;
/// Maximum number of columns in a grid (up to column "ZZ").
pub const MAX_COLS: usize = 702;

/// An R×C grid of paintable cells with spreadsheet-style labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    row_labels: Vec<u32>,
    col_labels: Vec<String>,
    // Row-major: cell (r, c) lives at r * cols + c.
    cells: Vec<Option<ColorId>>,
}

impl Grid {
    /// Create an all-unpainted grid.
    ///
    /// Fails with [`SheetError::InvalidDimension`] unless
    /// `1 <= rows <= 1000` and `1 <= cols <= 702`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SheetError> {
        if rows < 1 || rows > MAX_ROWS || cols < 1 || cols > MAX_COLS {
            return Err(SheetError::InvalidDimension { rows, cols });
        }
        let row_labels = (1..=rows as u32).collect();
        let col_labels = (0..cols as u32).map(label::encode).collect();
        Ok(Self {
            rows,
            cols,
            row_labels,
            col_labels,
            cells: vec![None; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 1-based row numbers, in row order.
    pub fn row_labels(&self) -> &[u32] {
        &self.row_labels
    }

    /// Bijective base-26 column labels, in column order.
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Paint one cell, overwriting any prior value.
    ///
    /// Callers are responsible for rebuilding the coordinate index
    /// afterwards; mutation and aggregation are deliberately decoupled.
    pub fn paint(&mut self, row: usize, col: usize, color: ColorId) -> Result<(), SheetError> {
        let idx = self.cell_index(row, col)?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// Read one cell's paint value (`None` = unpainted).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<ColorId>, SheetError> {
        let idx = self.cell_index(row, col)?;
        Ok(self.cells[idx])
    }

    /// The coordinate label for a cell: column label followed by the
    /// 1-based row number (`"C7"`).
    pub fn coordinate_label(&self, row: usize, col: usize) -> Result<String, SheetError> {
        self.cell_index(row, col)?;
        Ok(format!("{}{}", self.col_labels[col], self.row_labels[row]))
    }

    /// Iterate all cells in row-major order (row outer, column inner).
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Option<ColorId>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / self.cols, i % self.cols, *cell))
    }

    fn cell_index(&self, row: usize, col: usize) -> Result<usize, SheetError> {
        if row >= self.rows || col >= self.cols {
            return Err(SheetError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}
