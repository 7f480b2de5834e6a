use serde::{Deserialize, Serialize};

use crate::molecule::Element;
use crate::renderer::Color;

/// Color palette for frames, tiles and heteroatoms.
///
/// Carbon has no entry: it always takes the owning compound's base color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorOptions {
    /// Whole-frame clear color.
    pub frame_background: Color,
    /// Fill behind each tile.
    pub tile_background: Color,
    /// Border of unselected tiles.
    pub border: Color,
    /// Border of the selected tile.
    pub border_selected: Color,
    /// Element label text.
    pub label: Color,
    /// Oxygen atoms.
    pub oxygen: Color,
    /// Nitrogen atoms.
    pub nitrogen: Color,
    /// Chlorine atoms.
    pub chlorine: Color,
    /// Fluorine atoms.
    pub fluorine: Color,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            frame_background: Color::rgb(10, 10, 14),
            tile_background: Color::rgb(16, 16, 20),
            border: Color::rgb(60, 60, 75),
            border_selected: Color::rgb(240, 240, 255),
            label: Color::rgb(245, 245, 255),
            oxygen: Color::from_rgba_u32(0xFF47_57FF),
            nitrogen: Color::from_rgba_u32(0x5F27_CDFF),
            chlorine: Color::from_rgba_u32(0x1DD1_A1FF),
            fluorine: Color::from_rgba_u32(0x48DB_FBFF),
        }
    }
}

impl ColorOptions {
    /// Fill color for an atom of `element` in a compound drawn in `base`.
    #[must_use]
    pub fn element_color(&self, element: Element, base: Color) -> Color {
        match element {
            Element::Carbon => base,
            Element::Oxygen => self.oxygen,
            Element::Nitrogen => self.nitrogen,
            Element::Chlorine => self.chlorine,
            Element::Fluorine => self.fluorine,
        }
    }
}
