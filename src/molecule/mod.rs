//! Bonded-atom geometry for the compound catalog.
//!
//! A [`MoleculeGeometry`] is built once per compound by [`build`] and is
//! read-only afterwards. Storage is bounded: adding past [`MAX_ATOMS`] or
//! [`MAX_BONDS`] is dropped silently, which is why every catalog preset is
//! checked against [`MoleculeGeometry::first_violation`] in the tests.

mod builder;
pub mod preset;

pub use builder::build;
use glam::Vec3;
pub use preset::{recipe, Modification, PresetId, PRESET_COUNT};

use crate::error::AtlasError;

/// Maximum number of atoms a geometry can hold.
pub const MAX_ATOMS: usize = 64;
/// Maximum number of bonds a geometry can hold.
pub const MAX_BONDS: usize = 96;
/// Sanity bound on any coordinate component, in model units.
pub const MAX_COORDINATE: f32 = 200.0;

/// Atom label. Carbon is the default and is drawn in the compound color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Element {
    /// Carbon.
    #[default]
    Carbon,
    /// Oxygen.
    Oxygen,
    /// Nitrogen.
    Nitrogen,
    /// Chlorine.
    Chlorine,
    /// Fluorine.
    Fluorine,
}

impl Element {
    /// Chemical symbol used for on-screen labels.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Carbon => "C",
            Self::Oxygen => "O",
            Self::Nitrogen => "N",
            Self::Chlorine => "Cl",
            Self::Fluorine => "F",
        }
    }
}

/// Bond multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    /// Single bond.
    #[default]
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
}

impl BondOrder {
    /// Numeric multiplicity (1, 2 or 3).
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// A labelled point in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// Model-space position.
    pub position: Vec3,
    /// Atom label.
    pub element: Element,
}

/// A bond between two atoms, addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// Index of the first atom.
    pub from: usize,
    /// Index of the second atom.
    pub to: usize,
    /// Bond multiplicity.
    pub order: BondOrder,
}

/// Fixed-capacity atom and bond lists in creation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoleculeGeometry {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MoleculeGeometry {
    /// Empty geometry with storage reserved up to capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            atoms: Vec::with_capacity(MAX_ATOMS),
            bonds: Vec::with_capacity(MAX_BONDS),
        }
    }

    /// Atoms in creation order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds in creation order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Number of atoms.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds.
    #[must_use]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Position of atom `index`, if it exists.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.atoms.get(index).map(|a| a.position)
    }

    /// Append an atom and return its index, or `None` when full.
    pub fn push_atom(&mut self, position: Vec3, element: Element) -> Option<usize> {
        if self.atoms.len() >= MAX_ATOMS {
            return None;
        }
        self.atoms.push(Atom { position, element });
        Some(self.atoms.len() - 1)
    }

    /// Append a bond. Dropped when the bond list is full.
    pub fn push_bond(&mut self, from: usize, to: usize, order: BondOrder) {
        if self.bonds.len() >= MAX_BONDS {
            return;
        }
        self.bonds.push(Bond { from, to, order });
    }

    /// Change the order of an existing bond. Out-of-range indices are
    /// ignored.
    pub fn set_bond_order(&mut self, index: usize, order: BondOrder) {
        if let Some(bond) = self.bonds.get_mut(index) {
            bond.order = order;
        }
    }

    /// Describe the first broken invariant, or `None` if the geometry is
    /// well-formed.
    #[must_use]
    pub fn first_violation(&self) -> Option<String> {
        if self.atoms.is_empty() {
            return Some("no atoms".to_owned());
        }
        if self.bonds.is_empty() {
            return Some("no bonds".to_owned());
        }
        if self.atoms.len() > MAX_ATOMS || self.bonds.len() > MAX_BONDS {
            return Some("capacity exceeded".to_owned());
        }
        for (i, atom) in self.atoms.iter().enumerate() {
            let p = atom.position;
            if !p.is_finite() {
                return Some(format!("atom {i} has a non-finite coordinate"));
            }
            if p.abs().max_element() >= MAX_COORDINATE {
                return Some(format!("atom {i} is out of bounds at {p}"));
            }
        }
        let n = self.atoms.len();
        for (i, bond) in self.bonds.iter().enumerate() {
            if bond.from >= n || bond.to >= n {
                return Some(format!(
                    "bond {i} references a missing atom ({} -> {})",
                    bond.from, bond.to
                ));
            }
            if bond.from == bond.to {
                return Some(format!("bond {i} is a self-bond on {}", bond.from));
            }
        }
        None
    }

    /// Check every structural invariant, naming `preset` in the error.
    pub fn validate(&self, preset: PresetId) -> Result<(), AtlasError> {
        match self.first_violation() {
            None => Ok(()),
            Some(reason) => Err(AtlasError::InvalidGeometry {
                preset: preset.get(),
                reason,
            }),
        }
    }
}
