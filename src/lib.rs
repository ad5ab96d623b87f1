//! Huegrid - coordinate coloring worksheet generator.
//!
//! HTTP server and CLI around the `coord-sheet` engine: palette CRUD,
//! sheet session operations, and plain-text worksheet export.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod worksheet;
