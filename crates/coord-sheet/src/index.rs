//! Coordinate aggregation.
//!
//! [`CoordinateIndex`] maps each selected color to the sorted list of
//! coordinate labels currently painted with it. It is derived data: fully
//! determined by a grid plus a selection, and rebuilt in full after every
//! mutation rather than maintained incrementally, so it can never drift
//! out of sync with the grid.

use serde::Serialize;

use crate::color::{Color, ColorId};
use crate::grid::Grid;
use crate::selection::Selection;

/// One selected color and its sorted coordinate labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorCoordinates {
    pub color: Color,
    pub labels: Vec<String>,
}

/// Per-color coordinate lists, in selection slot order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoordinateIndex {
    entries: Vec<ColorCoordinates>,
}

impl CoordinateIndex {
    /// Rebuild the index from scratch.
    ///
    /// Scans every cell in row-major order and collects the coordinate
    /// label of each painted cell under its color identity, for colors
    /// currently selected. Cells painted with a color that is no longer
    /// in any slot are skipped (they stay orphaned until repainted).
    ///
    /// Each color's labels end up in ascending lexicographic order of the
    /// label *string*: `"A10"` sorts before `"A2"`. This is a pinned
    /// compatibility policy, not a numeric row sort.
    pub fn rebuild(grid: &Grid, selection: &Selection) -> Self {
        let mut entries: Vec<ColorCoordinates> = selection
            .slots()
            .iter()
            .map(|color| ColorCoordinates {
                color: color.clone(),
                labels: Vec::new(),
            })
            .collect();

        for (row, col, cell) in grid.iter_cells() {
            let Some(id) = cell else { continue };
            let Some(entry) = entries.iter_mut().find(|e| e.color.id == id) else {
                continue;
            };
            // iter_cells visits each cell once, so a duplicate label would
            // mean inconsistent grid extents. Guard anyway.
            if let Ok(label) = grid.coordinate_label(row, col) {
                if !entry.labels.contains(&label) {
                    entry.labels.push(label);
                }
            }
        }

        for entry in &mut entries {
            entry.labels.sort();
        }
        Self { entries }
    }

    /// The sorted labels for one color, or an empty slice if the color is
    /// not currently selected.
    pub fn query(&self, id: ColorId) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.color.id == id)
            .map(|e| e.labels.as_slice())
            .unwrap_or(&[])
    }

    /// All entries, in selection slot order.
    pub fn entries(&self) -> &[ColorCoordinates] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    fn color(id: i64, name: &str, hex: &str) -> Color {
        Color::new(ColorId(id), name, hex.parse::<HexColor>().unwrap())
    }

    fn pool() -> Vec<Color> {
        vec![
            color(1, "Red", "#FF0000"),
            color(2, "Blue", "#0000FF"),
            color(3, "Green", "#008000"),
        ]
    }

    #[test]
    fn rebuild_on_empty_grid_yields_empty_lists() {
        let grid = Grid::new(4, 4).unwrap();
        let sel = Selection::new(&pool(), 3).unwrap();
        let index = CoordinateIndex::rebuild(&grid, &sel);
        assert_eq!(index.entries().len(), 3);
        for entry in index.entries() {
            assert!(entry.labels.is_empty());
        }
    }

    #[test]
    fn painted_cells_appear_under_their_color() {
        let mut grid = Grid::new(4, 4).unwrap();
        let sel = Selection::new(&pool(), 2).unwrap();
        grid.paint(0, 0, ColorId(1)).unwrap();
        grid.paint(2, 3, ColorId(1)).unwrap();
        grid.paint(1, 1, ColorId(2)).unwrap();
        let index = CoordinateIndex::rebuild(&grid, &sel);
        assert_eq!(index.query(ColorId(1)), &["A1", "D3"]);
        assert_eq!(index.query(ColorId(2)), &["B2"]);
    }

    #[test]
    fn unselected_colors_query_empty() {
        let grid = Grid::new(2, 2).unwrap();
        let sel = Selection::new(&pool(), 2).unwrap();
        let index = CoordinateIndex::rebuild(&grid, &sel);
        assert_eq!(index.query(ColorId(99)), &[] as &[String]);
    }

    #[test]
    fn orphaned_paint_is_excluded() {
        let mut grid = Grid::new(2, 2).unwrap();
        // Paint with a color that is not in the selection at rebuild time.
        grid.paint(0, 0, ColorId(42)).unwrap();
        let sel = Selection::new(&pool(), 2).unwrap();
        let index = CoordinateIndex::rebuild(&grid, &sel);
        assert_eq!(index.query(ColorId(42)), &[] as &[String]);
        assert_eq!(index.query(ColorId(1)), &[] as &[String]);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut grid = Grid::new(3, 3).unwrap();
        let sel = Selection::new(&pool(), 3).unwrap();
        grid.paint(0, 1, ColorId(3)).unwrap();
        grid.paint(2, 2, ColorId(1)).unwrap();
        let first = CoordinateIndex::rebuild(&grid, &sel);
        let second = CoordinateIndex::rebuild(&grid, &sel);
        assert_eq!(first, second);
    }

    #[test]
    fn labels_sort_lexicographically_not_numerically() {
        // Row 10 ("A10") sorts before row 2 ("A2") as strings. Pinned
        // behavior; downstream consumers rely on the string order.
        let mut grid = Grid::new(10, 1).unwrap();
        let sel = Selection::new(&pool(), 1).unwrap();
        grid.paint(9, 0, ColorId(1)).unwrap();
        grid.paint(1, 0, ColorId(1)).unwrap();
        let index = CoordinateIndex::rebuild(&grid, &sel);
        assert_eq!(index.query(ColorId(1)), &["A10", "A2"]);
    }
}
