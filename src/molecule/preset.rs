//! Per-preset modification recipes.
//!
//! Every compound shares the same four-ring nucleus and the two common
//! oxygen substituents; what differs between presets is a short list of
//! [`Modification`]s applied afterwards, in order. The table below is the
//! whole catalog of recipes.

use glam::Vec3;

use super::{BondOrder, Element};
use crate::error::AtlasError;

/// Number of supported presets (`0..PRESET_COUNT`).
pub const PRESET_COUNT: u8 = 20;

/// Nucleus atom that side-chain tails hang off.
const TAIL_ATTACH: usize = 14;

/// A validated preset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetId(u8);

impl PresetId {
    /// Validate a raw identifier.
    pub fn new(id: u32) -> Result<Self, AtlasError> {
        u8::try_from(id)
            .ok()
            .filter(|&v| v < PRESET_COUNT)
            .map(Self)
            .ok_or(AtlasError::UnknownPreset(id))
    }

    /// Raw identifier.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every supported preset, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PRESET_COUNT).map(Self)
    }
}

impl TryFrom<u32> for PresetId {
    type Error = AtlasError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

/// One step of a preset recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modification {
    /// Append a chain of carbons to `attach`.
    ///
    /// Atom `i` sits at `attach + (1.1·(i+1), −0.4·i, z_wiggle·i)`, measured
    /// from the attach atom rather than from the previous chain atom.
    Tail {
        /// Atom the chain starts from.
        attach: usize,
        /// Number of carbons in the chain.
        segments: usize,
        /// Per-segment z drift.
        z_wiggle: f32,
    },
    /// Single-bond one extra atom at a fixed offset from `attach`.
    Substituent {
        /// Atom the substituent bonds to.
        attach: usize,
        /// Offset from the attach atom's position.
        offset: Vec3,
        /// Label of the new atom.
        element: Element,
    },
    /// Change the order of an existing bond, identified by its position in
    /// the bond list. Skipped unless the geometry has more than
    /// `when_more_than` bonds.
    PromoteBond {
        /// Index into the bond list.
        bond: usize,
        /// New order.
        order: BondOrder,
        /// Bond-count guard.
        when_more_than: usize,
    },
}

const fn tail(segments: usize, z_wiggle: f32) -> Modification {
    Modification::Tail {
        attach: TAIL_ATTACH,
        segments,
        z_wiggle,
    }
}

const fn substituent(
    attach: usize,
    offset: Vec3,
    element: Element,
) -> Modification {
    Modification::Substituent {
        attach,
        offset,
        element,
    }
}

const fn double(bond: usize, when_more_than: usize) -> Modification {
    Modification::PromoteBond {
        bond,
        order: BondOrder::Double,
        when_more_than,
    }
}

const METHYL_C5: Modification =
    substituent(5, Vec3::new(-1.2, 0.6, 0.2), Element::Carbon);
const METHYL_C6: Modification =
    substituent(6, Vec3::new(0.7, 1.0, 0.0), Element::Carbon);
const METHYL_C11: Modification =
    substituent(11, Vec3::new(0.9, -0.9, 0.3), Element::Carbon);
const OXO_C10: Modification =
    substituent(10, Vec3::new(0.2, 1.1, -0.4), Element::Oxygen);
const AMINO_C0: Modification =
    substituent(0, Vec3::new(-1.6, 0.2, 0.0), Element::Nitrogen);
const CHLORO_C1: Modification =
    substituent(1, Vec3::new(-1.2, 1.0, 0.1), Element::Chlorine);
const FLUORO_C9: Modification =
    substituent(9, Vec3::new(1.1, 0.8, -0.2), Element::Fluorine);

const BASELINE: &[Modification] = &[];
const ENANTHATE: &[Modification] = &[tail(6, 0.10)];
const CYPIONATE: &[Modification] = &[tail(7, -0.05)];
const TRIENE: &[Modification] =
    &[double(3, 10), double(8, 10), double(12, 15)];
const DIENE: &[Modification] = &[double(3, 10), double(8, 10)];
const METHYL_11: &[Modification] = &[METHYL_C11];
const METHYL_5: &[Modification] = &[METHYL_C5];
const OXO_10: &[Modification] = &[OXO_C10];
const AMINO_0: &[Modification] = &[AMINO_C0];
const METHYL_6: &[Modification] = &[METHYL_C6];
const CHLORO_1: &[Modification] = &[CHLORO_C1];
const FLUORO_9: &[Modification] = &[FLUORO_C9];
const METHYL_5_CHLORO_1: &[Modification] = &[METHYL_C5, CHLORO_C1];
const PROPIONATE: &[Modification] = &[tail(3, 0.05)];
const PHENYLPROPIONATE: &[Modification] = &[tail(3, -0.06)];

/// The modification list for `preset`.
#[must_use]
pub fn recipe(preset: PresetId) -> &'static [Modification] {
    match preset.get() {
        1 => ENANTHATE,
        2 => CYPIONATE,
        3 => TRIENE,
        4 | 10 | 14 | 15 => METHYL_11,
        5 => DIENE,
        6 | 16 => METHYL_5,
        7 | 9 => OXO_10,
        8 => AMINO_0,
        11 => METHYL_6,
        12 => CHLORO_1,
        13 => FLUORO_9,
        17 => METHYL_5_CHLORO_1,
        18 => PROPIONATE,
        19 => PHENYLPROPIONATE,
        _ => BASELINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: u32) -> PresetId {
        PresetId::new(id).unwrap()
    }

    #[test]
    fn rejects_ids_outside_catalog() {
        assert!(PresetId::new(19).is_ok());
        assert!(matches!(
            PresetId::new(20),
            Err(AtlasError::UnknownPreset(20))
        ));
        assert!(matches!(
            PresetId::try_from(1_000_u32),
            Err(AtlasError::UnknownPreset(1_000))
        ));
    }

    #[test]
    fn all_covers_catalog_in_order() {
        let ids: Vec<u8> = PresetId::all().map(PresetId::get).collect();
        assert_eq!(ids, (0..PRESET_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn baseline_has_no_modifications() {
        assert!(recipe(preset(0)).is_empty());
    }

    #[test]
    fn tails_attach_to_the_ester_carbon() {
        for (id, segments) in [(1, 6), (2, 7), (18, 3), (19, 3)] {
            match recipe(preset(id)) {
                [Modification::Tail {
                    attach,
                    segments: n,
                    ..
                }] => {
                    assert_eq!(*attach, TAIL_ATTACH);
                    assert_eq!(*n, segments, "preset {id}");
                }
                other => panic!("preset {id}: unexpected recipe {other:?}"),
            }
        }
    }

    #[test]
    fn triene_promotes_three_bonds() {
        let promoted: Vec<usize> = recipe(preset(3))
            .iter()
            .filter_map(|m| match m {
                Modification::PromoteBond { bond, .. } => Some(*bond),
                _ => None,
            })
            .collect();
        assert_eq!(promoted, vec![3, 8, 12]);
        assert_eq!(recipe(preset(5)).len(), 2);
    }

    #[test]
    fn shared_recipes() {
        for id in [4, 10, 14, 15] {
            assert_eq!(recipe(preset(id)), METHYL_11);
        }
        assert_eq!(recipe(preset(6)), recipe(preset(16)));
        assert_eq!(recipe(preset(7)), recipe(preset(9)));
    }

    #[test]
    fn combined_recipe_keeps_order() {
        assert_eq!(recipe(preset(17)), &[METHYL_C5, CHLORO_C1]);
    }
}
