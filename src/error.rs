//! Crate-level error types.

use std::fmt;

/// Errors produced by the molatlas crate.
///
/// Nothing in the per-frame path returns these: every failure the atlas
/// can hit is a configuration problem caught while the catalog, the
/// options or the geometry cache are being built.
#[derive(Debug)]
pub enum AtlasError {
    /// A preset identifier outside the supported catalog.
    UnknownPreset(u32),
    /// The compound catalog has no entries.
    EmptyCatalog,
    /// A catalog entry failed validation.
    InvalidCompound {
        /// Display name of the offending compound.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
    /// A built geometry violated a structural invariant.
    InvalidGeometry {
        /// Preset the geometry was built from.
        preset: u8,
        /// First violation found.
        reason: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// TOML catalog parsing failure.
    CatalogParse(String),
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(id) => write!(f, "unknown preset id {id}"),
            Self::EmptyCatalog => write!(f, "compound catalog is empty"),
            Self::InvalidCompound { name, reason } => {
                write!(f, "invalid compound '{name}': {reason}")
            }
            Self::InvalidGeometry { preset, reason } => {
                write!(f, "invalid geometry for preset {preset}: {reason}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AtlasError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
