//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{InMemoryPaletteStore, PaletteStore, SheetService, DEFAULT_PALETTE};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub palette: Arc<dyn PaletteStore>,
    pub sheets: Arc<SheetService>,
}

/// Create application state with a seeded palette store.
pub async fn create_app_state(config: &AppConfig) -> AppState {
    let store = Arc::new(InMemoryPaletteStore::new());
    let seeded = if config.seed_colors.is_empty() {
        store.seed(DEFAULT_PALETTE).await
    } else {
        store
            .seed(
                config
                    .seed_colors
                    .iter()
                    .map(|c| (c.name.as_str(), c.hex_value.as_str())),
            )
            .await
    };
    tracing::info!(colors = seeded, "Palette store seeded");

    let palette: Arc<dyn PaletteStore> = store;
    let sheets = Arc::new(SheetService::new(palette.clone()));
    AppState { palette, sheets }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Palette CRUD
        .route(
            "/api/colors",
            get(api::handle_list_colors).post(api::handle_add_color),
        )
        .route(
            "/api/colors/:id",
            put(api::handle_update_color).delete(api::handle_delete_color),
        )
        // Sheet session
        .route(
            "/api/sheet",
            post(api::handle_generate_sheet).get(api::handle_get_sheet),
        )
        .route("/api/sheet/cells", post(api::handle_paint_cell))
        .route("/api/sheet/slots/:slot", put(api::handle_set_slot))
        .route("/api/sheet/active-slot", put(api::handle_set_active_slot))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
