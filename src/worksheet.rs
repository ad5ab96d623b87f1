//! Plain-text worksheet rendering.
//!
//! The sheet API hands out read-only snapshots; turning one into a
//! printable artifact is this module's job. Output is a labeled grid
//! (painted cells show their slot index) followed by the per-color
//! coordinate table.

use coord_sheet::{label, SheetSnapshot};

/// Render a snapshot as a printable text worksheet.
pub fn render(snapshot: &SheetSnapshot) -> String {
    let cell_width = snapshot
        .col_labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(1)
        .max(2);
    let row_width = snapshot
        .row_labels
        .last()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    let mut out = String::new();
    out.push_str(&format!(
        "Coordinate Worksheet ({}x{}, {} colors)\n\n",
        snapshot.rows,
        snapshot.cols,
        snapshot.slots.len()
    ));

    // Column header
    out.push_str(&" ".repeat(row_width));
    for label in &snapshot.col_labels {
        out.push_str(&format!(" {:>width$}", label, width = cell_width));
    }
    out.push('\n');

    // Grid rows: painted cells show the slot index of their color,
    // '?' for an orphaned color, '.' for unpainted.
    for (row_idx, row) in snapshot.cells.iter().enumerate() {
        out.push_str(&format!(
            "{:>width$}",
            snapshot.row_labels[row_idx],
            width = row_width
        ));
        for cell in row {
            let mark = match cell {
                Some(id) => snapshot
                    .slots
                    .iter()
                    .position(|c| c.id == *id)
                    .map(|slot| slot.to_string())
                    .unwrap_or_else(|| "?".to_string()),
                None => ".".to_string(),
            };
            out.push_str(&format!(" {:>width$}", mark, width = cell_width));
        }
        out.push('\n');
    }

    // Coordinate table
    out.push_str("\nColors:\n");
    for (slot, entry) in snapshot.coordinates.iter().enumerate() {
        let labels = if entry.labels.is_empty() {
            "-".to_string()
        } else {
            entry.labels.join(", ")
        };
        out.push_str(&format!(
            "  [{}] {} ({}): {}\n",
            slot, entry.color.name, entry.color.hex, labels
        ));
    }
    out
}

/// Parse a `LABEL=SLOT` paint spec like `"C7=2"` into
/// `(row, col, slot)` zero-based indices.
pub fn parse_cell_spec(spec: &str) -> Option<(usize, usize, usize)> {
    let (coord, slot) = spec.split_once('=')?;
    let slot: usize = slot.trim().parse().ok()?;

    let coord = coord.trim();
    let split = coord.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = coord.split_at(split);
    let col = label::decode(letters)? as usize;
    let row_number: usize = digits.parse().ok()?;
    if row_number == 0 {
        return None;
    }
    Some((row_number - 1, col, slot))
}
