//! Sheet generation and the active session.
//!
//! [`SheetSession::generate`] is the orchestrator: it validates the
//! generation parameters against the available palette and produces the
//! grid, selection, and coordinate index as one atomic bundle. Because it
//! builds a complete new value before the caller swaps it in, a failed
//! generate can never leave a half-replaced session behind.

use serde::Serialize;

use crate::color::{Color, ColorId};
use crate::error::SheetError;
use crate::grid::Grid;
use crate::index::{ColorCoordinates, CoordinateIndex};
use crate::selection::Selection;

/// One active sheet: grid, selection, and derived coordinate index.
///
/// Mutating operations that change what the aggregator would see
/// (`paint_active`, `set_slot`) rebuild the index before returning, so the
/// index is consistent with the grid whenever control leaves this type.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSession {
    grid: Grid,
    selection: Selection,
    index: CoordinateIndex,
}

impl SheetSession {
    /// Validate parameters and build a fresh session.
    ///
    /// All-or-nothing: any validation failure returns before anything is
    /// built, and the caller's previous session (if any) is untouched.
    pub fn generate(
        rows: usize,
        cols: usize,
        k: usize,
        available: &[Color],
    ) -> Result<Self, SheetError> {
        let grid = Grid::new(rows, cols)?;
        let selection = Selection::new(available, k)?;
        let index = CoordinateIndex::rebuild(&grid, &selection);
        Ok(Self {
            grid,
            selection,
            index,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn index(&self) -> &CoordinateIndex {
        &self.index
    }

    /// Paint one cell with the active slot's color and rebuild the index.
    pub fn paint_active(&mut self, row: usize, col: usize) -> Result<(), SheetError> {
        let color = self.selection.active_color().id;
        self.grid.paint(row, col, color)?;
        self.index = CoordinateIndex::rebuild(&self.grid, &self.selection);
        Ok(())
    }

    /// Replace a slot's color and rebuild the index.
    ///
    /// Cells painted with the slot's previous color keep that identity and
    /// drop out of the index until repainted (identity-keyed aggregation;
    /// no cascade repaint).
    pub fn set_slot(&mut self, slot: usize, color: Color) -> Result<(), SheetError> {
        self.selection.set_slot(slot, color)?;
        self.index = CoordinateIndex::rebuild(&self.grid, &self.selection);
        Ok(())
    }

    pub fn set_active_slot(&mut self, slot: usize) -> Result<(), SheetError> {
        self.selection.set_active_slot(slot)
    }

    /// The sorted coordinate labels for one color.
    pub fn coordinates(&self, id: ColorId) -> &[String] {
        self.index.query(id)
    }

    /// Read-only view of the whole session for rendering or export.
    pub fn snapshot(&self) -> SheetSnapshot {
        let cells = (0..self.grid.rows())
            .map(|row| {
                (0..self.grid.cols())
                    .map(|col| self.grid.get(row, col).unwrap_or(None))
                    .collect()
            })
            .collect();
        SheetSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            row_labels: self.grid.row_labels().to_vec(),
            col_labels: self.grid.col_labels().to_vec(),
            cells,
            slots: self.selection.slots().to_vec(),
            active_slot: self.selection.active_slot(),
            coordinates: self.index.entries().to_vec(),
        }
    }
}

/// Immutable snapshot of a session, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub row_labels: Vec<u32>,
    pub col_labels: Vec<String>,
    /// Row-major cell colors by identity; `None` = unpainted.
    pub cells: Vec<Vec<Option<ColorId>>>,
    pub slots: Vec<Color>,
    pub active_slot: usize,
    pub coordinates: Vec<ColorCoordinates>,
}
