pub mod palette_store;
pub mod sheet_service;

pub use palette_store::{InMemoryPaletteStore, PaletteStore, DEFAULT_PALETTE};
pub use sheet_service::SheetService;
