use std::sync::Arc;
use tokio::sync::Mutex;

use coord_sheet::{Color, ColorId, SheetSession, SheetSnapshot};

use crate::error::ApiError;
use crate::services::PaletteStore;

/// The single active sheet session.
///
/// All mutations run under one mutex so grid mutation and coordinate-index
/// rebuild are observed atomically by every reader. The palette snapshot
/// taken at generate time stays immutable for the session's lifetime: store
/// edits only affect the pool offered to the *next* generate.
pub struct SheetService {
    store: Arc<dyn PaletteStore>,
    state: Mutex<SheetState>,
}

#[derive(Default)]
struct SheetState {
    session: Option<SheetSession>,
    /// Available-palette snapshot the current session was generated from.
    palette: Vec<Color>,
}

impl SheetService {
    pub fn new(store: Arc<dyn PaletteStore>) -> Self {
        Self {
            store,
            state: Mutex::new(SheetState::default()),
        }
    }

    /// Validate parameters against a fresh palette listing and replace the
    /// active session. Any failure leaves the previous session intact.
    pub async fn generate(
        &self,
        rows: usize,
        cols: usize,
        k: usize,
    ) -> Result<SheetSnapshot, ApiError> {
        let available = self.store.list().await?;
        if available.is_empty() {
            return Err(ApiError::EmptyPalette);
        }
        let session = SheetSession::generate(rows, cols, k, &available)?;
        let snapshot = session.snapshot();

        let mut state = self.state.lock().await;
        state.session = Some(session);
        state.palette = available;

        tracing::info!(rows, cols, slots = k, "Generated new sheet");
        Ok(snapshot)
    }

    /// Snapshot of the active session.
    pub async fn snapshot(&self) -> Result<SheetSnapshot, ApiError> {
        let state = self.state.lock().await;
        state
            .session
            .as_ref()
            .map(SheetSession::snapshot)
            .ok_or(ApiError::NoActiveSheet)
    }

    /// Paint one cell with the active color.
    pub async fn paint(&self, row: usize, col: usize) -> Result<SheetSnapshot, ApiError> {
        let mut state = self.state.lock().await;
        let session = state.session.as_mut().ok_or(ApiError::NoActiveSheet)?;
        session.paint_active(row, col)?;
        Ok(session.snapshot())
    }

    /// Assign a color from the session's palette snapshot to a slot.
    pub async fn set_slot(
        &self,
        slot: usize,
        color_id: ColorId,
    ) -> Result<SheetSnapshot, ApiError> {
        let mut state = self.state.lock().await;
        let state = &mut *state;
        let session = state.session.as_mut().ok_or(ApiError::NoActiveSheet)?;
        let color = state
            .palette
            .iter()
            .find(|c| c.id == color_id)
            .cloned()
            .ok_or(ApiError::ColorNotFound)?;
        session.set_slot(slot, color)?;
        Ok(session.snapshot())
    }

    /// Change which slot paints subsequent cells.
    pub async fn set_active_slot(&self, slot: usize) -> Result<SheetSnapshot, ApiError> {
        let mut state = self.state.lock().await;
        let session = state.session.as_mut().ok_or(ApiError::NoActiveSheet)?;
        session.set_active_slot(slot)?;
        Ok(session.snapshot())
    }
}
