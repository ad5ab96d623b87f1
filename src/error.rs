use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use coord_sheet::SheetError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No active sheet. Generate one first.")]
    NoActiveSheet,

    #[error("Color not found")]
    ColorNotFound,

    #[error("No colors available in the palette")]
    EmptyPalette,

    #[error("{0}")]
    Sheet(#[from] SheetError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from the palette store.
///
/// Messages follow the store's public contract: name and hex value are
/// required, each is unique case-insensitively, and at least two colors
/// must survive any deletion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Color name and hex value are required")]
    MissingField,

    #[error("Invalid hex value format. Must be #RRGGBB")]
    InvalidHex(#[from] coord_sheet::ParseColorError),

    #[error("Color name or hex value already exists")]
    Conflict,

    #[error("Color not found")]
    NotFound,

    #[error("Cannot delete color. At least 2 colors must remain")]
    MinimumPalette,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NoActiveSheet => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::ColorNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::EmptyPalette => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Sheet(e) => {
                let status = match e {
                    SheetError::DuplicateColor { .. } => StatusCode::CONFLICT,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, e.to_string())
            }
            ApiError::Store(e) => {
                let status = match e {
                    StoreError::Conflict => StatusCode::CONFLICT,
                    StoreError::NotFound => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, e.to_string())
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::MissingField.to_string(),
            "Color name and hex value are required"
        );
        assert_eq!(
            StoreError::Conflict.to_string(),
            "Color name or hex value already exists"
        );
        assert_eq!(StoreError::NotFound.to_string(), "Color not found");
        assert_eq!(
            StoreError::MinimumPalette.to_string(),
            "Cannot delete color. At least 2 colors must remain"
        );
    }

    #[test]
    fn test_api_error_from_sheet_error() {
        let err: ApiError = SheetError::InvalidSlotCount { requested: 0 }.into();
        match err {
            ApiError::Sheet(_) => {}
            _ => panic!("Expected Sheet variant"),
        }
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        use coord_sheet::{Color, ColorId, HexColor};

        // NoActiveSheet -> NOT_FOUND
        let response = ApiError::NoActiveSheet.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // ColorNotFound -> NOT_FOUND
        let response = ApiError::ColorNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // EmptyPalette -> BAD_REQUEST
        let response = ApiError::EmptyPalette.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // DuplicateColor -> CONFLICT
        let red = Color::new(ColorId(1), "Red", "#FF0000".parse::<HexColor>().unwrap());
        let response = ApiError::Sheet(SheetError::DuplicateColor {
            slot: 1,
            color: red,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // Other sheet errors -> BAD_REQUEST
        let response =
            ApiError::Sheet(SheetError::InvalidDimension { rows: 0, cols: 5 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Store conflict -> CONFLICT
        let response = ApiError::Store(StoreError::Conflict).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // Store not found -> NOT_FOUND
        let response = ApiError::Store(StoreError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Minimum palette -> BAD_REQUEST
        let response = ApiError::Store(StoreError::MinimumPalette).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
