//! The ordered, validated list of compounds the atlas shows.

use std::path::Path;

use serde::Deserialize;

use crate::error::AtlasError;
use crate::molecule::PresetId;
use crate::renderer::Color;

/// Display name and base color of the built-in compounds, in preset order.
const BUILTIN: [(&str, u32); 20] = [
    ("Testosterone", 0xE74C_3CFF),
    ("Testosterone Enanthate", 0x00D2_D3FF),
    ("Testosterone Cypionate", 0xF1C4_0FFF),
    ("Trenbolone", 0xE056_FDFF),
    ("Nandrolone / Deca", 0x2ECC_71FF),
    ("Boldenone / EQ", 0xE67E_22FF),
    ("Dianabol", 0x3498_DBFF),
    ("Anavar (Oxandrolone)", 0xFF6B_81FF),
    ("Winstrol (Stanozolol)", 0xF1C4_0FFF),
    ("Anadrol (Oxymetholone)", 0x8E1B_1BFF),
    ("Masteron (Drostanolone)", 0x7BED_9FFF),
    ("Primobolan (Methenolone)", 0x9B59_B6FF),
    ("Turinabol", 0x00D2_D3FF),
    ("Halotestin (Fluoxymesterone)", 0xE67E_22FF),
    ("Proviron (Mesterolone)", 0x6C5C_E7FF),
    ("Mibolerone", 0xA55E_EAFF),
    ("Superdrol", 0x8E44_ADFF),
    ("Oral Turinabol", 0x1ABC_9CFF),
    ("Testosterone Propionate", 0xFF6B_81FF),
    ("NPP", 0x00CE_C9FF),
];

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundDescriptor {
    /// Display name.
    pub name: String,
    /// Carbon and bond color.
    pub base_color: Color,
    /// Geometry recipe.
    pub preset: PresetId,
    /// Extra scale on top of the auto-fit zoom.
    pub base_scale: f32,
}

/// TOML shape of a compound before validation.
#[derive(Debug, Deserialize)]
struct CompoundEntry {
    name: String,
    base_color: Color,
    preset: u32,
    #[serde(default = "default_scale")]
    base_scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    compounds: Vec<CompoundEntry>,
}

/// Immutable, non-empty list of compounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    compounds: Vec<CompoundDescriptor>,
}

impl Catalog {
    /// Validate and wrap `compounds`.
    pub fn new(compounds: Vec<CompoundDescriptor>) -> Result<Self, AtlasError> {
        if compounds.is_empty() {
            return Err(AtlasError::EmptyCatalog);
        }
        for c in &compounds {
            if !c.base_scale.is_finite() || c.base_scale <= 0.0 {
                return Err(AtlasError::InvalidCompound {
                    name: c.name.clone(),
                    reason: format!(
                        "base_scale must be finite and positive, got {}",
                        c.base_scale
                    ),
                });
            }
        }
        Ok(Self { compounds })
    }

    /// The 20 compounds the atlas ships with, one per preset.
    #[must_use]
    pub fn builtin() -> Self {
        let compounds = BUILTIN
            .iter()
            .zip(PresetId::all())
            .map(|(&(name, color), preset)| CompoundDescriptor {
                name: name.to_owned(),
                base_color: Color::from_rgba_u32(color),
                preset,
                base_scale: 1.0,
            })
            .collect();
        Self { compounds }
    }

    /// Parse a `[[compounds]]` TOML document.
    pub fn from_toml(text: &str) -> Result<Self, AtlasError> {
        let file: CatalogFile = toml::from_str(text)
            .map_err(|e| AtlasError::CatalogParse(e.to_string()))?;
        let compounds = file
            .compounds
            .into_iter()
            .map(|entry| {
                let preset = PresetId::new(entry.preset).map_err(|_| {
                    AtlasError::InvalidCompound {
                        name: entry.name.clone(),
                        reason: format!("unknown preset {}", entry.preset),
                    }
                })?;
                Ok(CompoundDescriptor {
                    name: entry.name,
                    base_color: entry.base_color,
                    preset,
                    base_scale: entry.base_scale,
                })
            })
            .collect::<Result<Vec<_>, AtlasError>>()?;
        Self::new(compounds)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&text)?;
        log::debug!(
            "loaded {} compounds from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of compounds (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    /// Whether there are no compounds. Never true for a built catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Compound at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CompoundDescriptor> {
        self.compounds.get(index)
    }

    /// All compounds in display order.
    #[must_use]
    pub fn compounds(&self) -> &[CompoundDescriptor] {
        &self.compounds
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
