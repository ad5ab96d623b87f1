//! Palette selection slots.
//!
//! A [`Selection`] holds the K colors a sheet works with, in slot order,
//! plus the single active slot used as the current paint color. The
//! defining invariant: no two slots ever hold colors with the same
//! identity. `set_slot` enforces it transactionally, restoring the slot's
//! previous occupant when a conflict is detected.

use serde::Serialize;

use crate::color::{Color, ColorId};
use crate::error::SheetError;

/// Maximum number of selection slots.
pub const MAX_SLOTS: usize = 10;

/// The ordered list of selected colors and the active paint slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    slots: Vec<Color>,
    active: usize,
}

impl Selection {
    /// Select the first `k` colors of `available`, in order.
    ///
    /// Fails with [`SheetError::InvalidSlotCount`] for `k` outside
    /// `[1, 10]` and [`SheetError::InsufficientPalette`] when the pool is
    /// shorter than `k`. The active slot starts at 0.
    pub fn new(available: &[Color], k: usize) -> Result<Self, SheetError> {
        if k < 1 || k > MAX_SLOTS {
            return Err(SheetError::InvalidSlotCount { requested: k });
        }
        if available.len() < k {
            return Err(SheetError::InsufficientPalette {
                requested: k,
                available: available.len(),
            });
        }
        Ok(Self {
            slots: available[..k].to_vec(),
            active: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Color] {
        &self.slots
    }

    pub fn slot(&self, slot: usize) -> Result<&Color, SheetError> {
        self.slots.get(slot).ok_or(SheetError::SlotOutOfBounds {
            slot,
            slots: self.slots.len(),
        })
    }

    /// Replace one slot's color.
    ///
    /// If `color` already occupies a *different* slot the assignment is
    /// rejected with [`SheetError::DuplicateColor`] carrying the rejected
    /// color, and the slot keeps its previous occupant. Reassigning a slot
    /// its own current color succeeds as a no-op.
    pub fn set_slot(&mut self, slot: usize, color: Color) -> Result<(), SheetError> {
        if slot >= self.slots.len() {
            return Err(SheetError::SlotOutOfBounds {
                slot,
                slots: self.slots.len(),
            });
        }
        // Install, then check the no-duplicate invariant over the whole
        // selection; roll back to the snapshot on conflict.
        let previous = std::mem::replace(&mut self.slots[slot], color);
        if self.has_duplicate_ids() {
            let rejected = std::mem::replace(&mut self.slots[slot], previous);
            return Err(SheetError::DuplicateColor {
                slot,
                color: rejected,
            });
        }
        Ok(())
    }

    /// Index of the slot whose color paints subsequent cells.
    pub fn active_slot(&self) -> usize {
        self.active
    }

    pub fn set_active_slot(&mut self, slot: usize) -> Result<(), SheetError> {
        if slot >= self.slots.len() {
            return Err(SheetError::SlotOutOfBounds {
                slot,
                slots: self.slots.len(),
            });
        }
        self.active = slot;
        Ok(())
    }

    /// The active slot's color.
    pub fn active_color(&self) -> &Color {
        // Invariant: active < slots.len() and slots is non-empty.
        &self.slots[self.active]
    }

    /// Whether a color identity is currently selected in any slot.
    pub fn contains(&self, id: ColorId) -> bool {
        self.slots.iter().any(|c| c.id == id)
    }

    fn has_duplicate_ids(&self) -> bool {
        for (i, a) in self.slots.iter().enumerate() {
            if self.slots[i + 1..].iter().any(|b| b.id == a.id) {
                return true;
            }
        }
        false
    }
}
