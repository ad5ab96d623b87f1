use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use coord_sheet::{ColorId, SheetSnapshot};

use super::colors::ColorResponse;
use crate::error::ApiError;
use crate::server::AppState;

/// Parameters for generating a new sheet
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Number of rows (1..=1000)
    pub rows: usize,
    /// Number of columns (1..=702)
    pub cols: usize,
    /// Number of color slots (1..=10, at most the palette size)
    pub colors: usize,
}

/// Cell to paint with the active color
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaintRequest {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

/// Color to assign to a selection slot
#[derive(Debug, Deserialize, ToSchema)]
pub struct SlotRequest {
    pub color_id: i64,
}

/// Slot to use as the current paint color
#[derive(Debug, Deserialize, ToSchema)]
pub struct ActiveSlotRequest {
    pub slot: usize,
}

/// One selected color and its painted coordinate labels, sorted
#[derive(Debug, Serialize, ToSchema)]
pub struct CoordinateListResponse {
    pub color: ColorResponse,
    /// Coordinate labels in ascending lexicographic order (e.g. "A10" < "A2")
    pub labels: Vec<String>,
}

/// Read-only view of the active sheet
#[derive(Debug, Serialize, ToSchema)]
pub struct SheetResponse {
    pub rows: usize,
    pub cols: usize,
    /// 1-based row numbers, in row order
    pub row_labels: Vec<u32>,
    /// Spreadsheet-style column labels, in column order
    pub col_labels: Vec<String>,
    /// Row-major cell paint state: color id or null for unpainted
    pub cells: Vec<Vec<Option<i64>>>,
    /// Selected colors, in slot order
    pub slots: Vec<ColorResponse>,
    /// Index of the slot used as the current paint color
    pub active_slot: usize,
    /// Per-color coordinate lists, in slot order
    pub coordinates: Vec<CoordinateListResponse>,
}

impl From<SheetSnapshot> for SheetResponse {
    fn from(snap: SheetSnapshot) -> Self {
        Self {
            rows: snap.rows,
            cols: snap.cols,
            row_labels: snap.row_labels,
            col_labels: snap.col_labels,
            cells: snap
                .cells
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.map(|id| id.0)).collect())
                .collect(),
            slots: snap.slots.into_iter().map(ColorResponse::from).collect(),
            active_slot: snap.active_slot,
            coordinates: snap
                .coordinates
                .into_iter()
                .map(|entry| CoordinateListResponse {
                    color: ColorResponse::from(entry.color),
                    labels: entry.labels,
                })
                .collect(),
        }
    }
}

/// Generate a new coordinate sheet
///
/// Replaces any existing sheet atomically; a validation failure leaves the
/// previous sheet untouched.
#[utoipa::path(
    post,
    path = "/api/sheet",
    request_body = GenerateRequest,
    responses(
        (status = 201, description = "Sheet generated", body = SheetResponse),
        (status = 400, description = "Invalid dimensions, slot count, or insufficient palette"),
    ),
    tag = "Sheet"
)]
pub async fn handle_generate_sheet(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state
        .sheets
        .generate(request.rows, request.cols, request.colors)
        .await?;
    Ok((StatusCode::CREATED, Json(SheetResponse::from(snapshot))))
}

/// Fetch the active sheet
#[utoipa::path(
    get,
    path = "/api/sheet",
    responses(
        (status = 200, description = "Active sheet", body = SheetResponse),
        (status = 404, description = "No sheet has been generated"),
    ),
    tag = "Sheet"
)]
pub async fn handle_get_sheet(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.sheets.snapshot().await?;
    Ok(Json(SheetResponse::from(snapshot)))
}

/// Paint one cell with the active color
#[utoipa::path(
    post,
    path = "/api/sheet/cells",
    request_body = PaintRequest,
    responses(
        (status = 200, description = "Cell painted, index rebuilt", body = SheetResponse),
        (status = 400, description = "Cell outside the grid"),
        (status = 404, description = "No sheet has been generated"),
    ),
    tag = "Sheet"
)]
pub async fn handle_paint_cell(
    State(state): State<AppState>,
    Json(request): Json<PaintRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.sheets.paint(request.row, request.col).await?;
    Ok(Json(SheetResponse::from(snapshot)))
}

/// Assign a palette color to a selection slot
///
/// Rejected with 409 when the color already occupies a different slot;
/// the slot keeps its previous color.
#[utoipa::path(
    put,
    path = "/api/sheet/slots/{slot}",
    request_body = SlotRequest,
    responses(
        (status = 200, description = "Slot updated", body = SheetResponse),
        (status = 400, description = "Slot outside the selection"),
        (status = 404, description = "No sheet, or color not in the session's palette"),
        (status = 409, description = "Color already occupies another slot"),
    ),
    params(
        ("slot" = usize, Path, description = "Slot index"),
    ),
    tag = "Sheet"
)]
pub async fn handle_set_slot(
    State(state): State<AppState>,
    Path(slot): Path<usize>,
    Json(request): Json<SlotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state
        .sheets
        .set_slot(slot, ColorId(request.color_id))
        .await?;
    Ok(Json(SheetResponse::from(snapshot)))
}

/// Select which slot paints subsequent cells
#[utoipa::path(
    put,
    path = "/api/sheet/active-slot",
    request_body = ActiveSlotRequest,
    responses(
        (status = 200, description = "Active slot changed", body = SheetResponse),
        (status = 400, description = "Slot outside the selection"),
        (status = 404, description = "No sheet has been generated"),
    ),
    tag = "Sheet"
)]
pub async fn handle_set_active_slot(
    State(state): State<AppState>,
    Json(request): Json<ActiveSlotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.sheets.set_active_slot(request.slot).await?;
    Ok(Json(SheetResponse::from(snapshot)))
}
