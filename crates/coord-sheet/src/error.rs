//! Error types for sheet operations.
//!
//! Every operation in this crate either fully succeeds or fails with a
//! [`SheetError`] without mutating state, so callers can always retry
//! with corrected input.

use std::fmt;

use crate::color::Color;

/// Unified error type for grid, selection, and session operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetError {
    /// Requested grid dimensions fall outside the supported range.
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },
    /// Requested number of selection slots falls outside `[1, 10]`.
    InvalidSlotCount {
        /// Requested slot count
        requested: usize,
    },
    /// The available palette has fewer colors than the requested slot count.
    InsufficientPalette {
        /// Requested slot count
        requested: usize,
        /// Number of colors actually available
        available: usize,
    },
    /// The color already occupies a different selection slot.
    DuplicateColor {
        /// Slot the assignment targeted
        slot: usize,
        /// The rejected color
        color: Color,
    },
    /// Cell coordinates outside the grid extents.
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Slot index outside the selection extents.
    SlotOutOfBounds {
        slot: usize,
        slots: usize,
    },
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::InvalidDimension { rows, cols } => {
                write!(
                    f,
                    "invalid grid dimensions {}x{} (rows must be 1..=1000, columns 1..=702)",
                    rows, cols
                )
            }
            SheetError::InvalidSlotCount { requested } => {
                write!(
                    f,
                    "invalid color slot count {} (must be 1..=10)",
                    requested
                )
            }
            SheetError::InsufficientPalette {
                requested,
                available,
            } => {
                write!(
                    f,
                    "insufficient palette: {} slots requested but only {} colors available",
                    requested, available
                )
            }
            SheetError::DuplicateColor { slot, color } => {
                write!(
                    f,
                    "color '{}' already occupies another slot (rejected for slot {})",
                    color.name, slot
                )
            }
            SheetError::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({}, {}) is outside the {}x{} grid",
                    row, col, rows, cols
                )
            }
            SheetError::SlotOutOfBounds { slot, slots } => {
                write!(f, "slot {} is outside the selection of {} slots", slot, slots)
            }
        }
    }
}

impl std::error::Error for SheetError {}
