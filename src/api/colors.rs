use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use coord_sheet::{Color, ColorId};

use crate::error::{ApiError, StoreError};
use crate::server::AppState;

/// One palette color as returned by the colors API
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorResponse {
    /// Stable numeric identity
    pub id: i64,
    /// Display name, unique case-insensitively
    pub name: String,
    /// Hex value in `#RRGGBB` form, unique case-insensitively
    pub hex_value: String,
    /// Optional status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Color> for ColorResponse {
    fn from(color: Color) -> Self {
        Self {
            id: color.id.0,
            name: color.name,
            hex_value: color.hex.to_string(),
            message: None,
        }
    }
}

impl ColorResponse {
    fn with_message(color: Color, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::from(color)
        }
    }
}

/// Body for creating or updating a palette color
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Hex value in `#RRGGBB` form
    #[serde(default)]
    pub hex_value: Option<String>,
}

impl ColorRequest {
    /// Both fields are required; absence is a 400, not a 422.
    fn fields(&self) -> Result<(&str, &str), ApiError> {
        match (self.name.as_deref(), self.hex_value.as_deref()) {
            (Some(name), Some(hex_value)) => Ok((name, hex_value)),
            _ => Err(StoreError::MissingField.into()),
        }
    }
}

/// Response for a successful color deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteColorResponse {
    pub id: i64,
    pub message: String,
}

/// List all palette colors
///
/// Colors are ordered by name (case-insensitive).
#[utoipa::path(
    get,
    path = "/api/colors",
    responses(
        (status = 200, description = "All palette colors", body = [ColorResponse]),
    ),
    tag = "Palette"
)]
pub async fn handle_list_colors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let colors = state.palette.list().await?;
    let body: Vec<ColorResponse> = colors.into_iter().map(ColorResponse::from).collect();
    Ok(Json(body))
}

/// Add a new palette color
#[utoipa::path(
    post,
    path = "/api/colors",
    request_body = ColorRequest,
    responses(
        (status = 201, description = "Color added", body = ColorResponse),
        (status = 400, description = "Missing field or invalid hex value"),
        (status = 409, description = "Name or hex value already exists"),
    ),
    tag = "Palette"
)]
pub async fn handle_add_color(
    State(state): State<AppState>,
    Json(request): Json<ColorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (name, hex_value) = request.fields()?;
    let color = state.palette.add(name, hex_value).await?;

    tracing::info!(id = %color.id, name = %color.name, "Color added");
    Ok((
        StatusCode::CREATED,
        Json(ColorResponse::with_message(color, "Color added successfully")),
    ))
}

/// Update an existing palette color
#[utoipa::path(
    put,
    path = "/api/colors/{id}",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "Color updated", body = ColorResponse),
        (status = 400, description = "Missing field or invalid hex value"),
        (status = 404, description = "Color not found"),
        (status = 409, description = "Name or hex value already exists for another color"),
    ),
    params(
        ("id" = i64, Path, description = "Color id"),
    ),
    tag = "Palette"
)]
pub async fn handle_update_color(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ColorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (name, hex_value) = request.fields()?;
    let color = state.palette.update(ColorId(id), name, hex_value).await?;

    tracing::info!(id, name = %color.name, "Color updated");
    Ok(Json(ColorResponse::with_message(
        color,
        "Color updated successfully",
    )))
}

/// Delete a palette color
///
/// Refused when fewer than 2 colors would remain.
#[utoipa::path(
    delete,
    path = "/api/colors/{id}",
    responses(
        (status = 200, description = "Color deleted", body = DeleteColorResponse),
        (status = 400, description = "At least 2 colors must remain"),
        (status = 404, description = "Color not found"),
    ),
    params(
        ("id" = i64, Path, description = "Color id"),
    ),
    tag = "Palette"
)]
pub async fn handle_delete_color(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.palette.delete(ColorId(id)).await?;

    tracing::info!(id, "Color deleted");
    Ok(Json(DeleteColorResponse {
        id,
        message: "Color deleted successfully".to_string(),
    }))
}
