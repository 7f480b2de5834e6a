//! Atlas configuration with TOML preset support.
//!
//! Display toggles, grid layout, the color palette and key bindings live
//! here. Options serialize to and from TOML so a setup can be saved as a
//! named preset and reloaded later.

mod colors;
mod display;
mod layout;

use std::path::Path;

pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AtlasError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[layout]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial display toggles and auto-rotate rate.
    pub display: DisplayOptions,
    /// Window and grid geometry.
    pub layout: LayoutOptions,
    /// Color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard bindings.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let content = std::fs::read_to_string(path).map_err(AtlasError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| AtlasError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AtlasError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AtlasError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AtlasError::Io)?;
        }
        std::fs::write(path, content).map_err(AtlasError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
