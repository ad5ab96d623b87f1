//! Color identity and hex value types.
//!
//! A [`Color`] is an immutable record fetched from the external palette
//! store. The core never edits a color's fields; it only decides which
//! colors occupy which selection slots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque, externally assigned color identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColorId(pub i64);

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error type for parsing `#RRGGBB` hex color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Missing the leading `#`
    MissingHash,
    /// Wrong length (must be `#` plus exactly 6 hex digits)
    InvalidLength {
        /// Number of characters found after the `#`
        found: usize,
    },
    /// Non-hexadecimal character encountered
    InvalidHex {
        /// The offending character
        ch: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => {
                write!(f, "hex color must start with '#'")
            }
            ParseColorError::InvalidLength { found } => {
                write!(
                    f,
                    "hex color must have exactly 6 digits after '#', found {}",
                    found
                )
            }
            ParseColorError::InvalidHex { ch } => {
                write!(f, "invalid hex digit '{}'", ch)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// A validated `#RRGGBB` hex color value.
///
/// Stored in canonical uppercase form, so two values that differ only in
/// case compare equal after parsing. Parsing accepts either case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// The canonical `#RRGGBB` string (uppercase digits).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        if digits.chars().count() != 6 {
            return Err(ParseColorError::InvalidLength {
                found: digits.chars().count(),
            });
        }
        for ch in digits.chars() {
            if !ch.is_ascii_hexdigit() {
                return Err(ParseColorError::InvalidHex { ch });
            }
        }
        Ok(HexColor(format!("#{}", digits.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> String {
        hex.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One palette color: stable identity, display name, hex value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: String,
    pub hex: HexColor,
}

impl Color {
    pub fn new(id: ColorId, name: impl Into<String>, hex: HexColor) -> Self {
        Self {
            id,
            name: name.into(),
            hex,
        }
    }
}
