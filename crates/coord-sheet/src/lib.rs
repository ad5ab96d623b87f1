//! coord-sheet: grid generation and coordinate aggregation for coloring
//! worksheets.
//!
//! A worksheet is a rectangular grid of labeled cells (rows numbered from 1,
//! columns lettered spreadsheet-style) painted with colors drawn from a
//! small selection. This crate owns the pure state machine behind it:
//!
//! - [`label`]: bijective base-26 column-label codec (`A`..`Z`, `AA`, ...)
//! - [`Grid`]: the R×C paint matrix and its label sequences
//! - [`Selection`]: the K color slots and the active paint color, with
//!   transactional duplicate prevention
//! - [`CoordinateIndex`]: derived per-color sorted coordinate lists
//! - [`SheetSession`]: the atomic generate orchestrator tying them together
//!
//! # Quick Start
//!
//! ```
//! use coord_sheet::{Color, ColorId, HexColor, SheetSession};
//!
//! let pool: Vec<Color> = [("Red", "#FF0000"), ("Blue", "#0000FF")]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, (name, hex))| {
//!         Color::new(ColorId(i as i64 + 1), *name, hex.parse::<HexColor>().unwrap())
//!     })
//!     .collect();
//!
//! let mut session = SheetSession::generate(5, 5, 2, &pool).unwrap();
//! session.paint_active(0, 0).unwrap();
//! assert_eq!(session.coordinates(ColorId(1)), &["A1"]);
//! ```
//!
//! The crate does no I/O and holds no global state; a session is a plain
//! value, and every operation either fully succeeds or fails with a
//! [`SheetError`] leaving the session untouched.

pub mod color;
pub mod error;
pub mod grid;
pub mod index;
pub mod label;
pub mod selection;
pub mod session;


pub use color::{Color, ColorId, HexColor, ParseColorError};
pub use error::SheetError;
pub use grid::{Grid, MAX_COLS, MAX_ROWS};
pub use index::{ColorCoordinates, CoordinateIndex};
pub use selection::{Selection, MAX_SLOTS};
pub use session::{SheetSession, SheetSnapshot};
