//! Procedural construction of a compound geometry from its preset.

use std::f32::consts::TAU;

use glam::Vec3;

use super::preset::{recipe, Modification, PresetId};
use super::{BondOrder, Element, MoleculeGeometry};

/// Spacing between successive tail carbons along x.
const TAIL_STEP: f32 = 1.1;
/// Per-segment y drift of a tail.
const TAIL_DROP: f32 = 0.4;

/// Attach atom and offset of the common hydroxyl oxygen.
const HYDROXYL: (usize, Vec3) = (2, Vec3::new(-0.2, 1.4, 0.8));
/// Attach atom and offset of the common carbonyl oxygen.
const CARBONYL: (usize, Vec3) = (8, Vec3::new(0.3, -1.2, -0.6));

/// One ring of the four-ring nucleus.
struct RingSpec {
    size: usize,
    radius: f32,
    center: Vec3,
    /// Bonds to the previous ring as (previous-ring local, this-ring local)
    /// atom pairs. The rings sit side by side and share no atoms.
    fusion: [(usize, usize); 2],
}

const NUCLEUS: [RingSpec; 4] = [
    RingSpec {
        size: 6,
        radius: 1.8,
        center: Vec3::new(0.0, 0.0, 0.0),
        fusion: [(0, 0); 2],
    },
    RingSpec {
        size: 6,
        radius: 1.8,
        center: Vec3::new(2.8, 0.0, 0.2),
        fusion: [(1, 4), (2, 5)],
    },
    RingSpec {
        size: 5,
        radius: 1.6,
        center: Vec3::new(2.8, 2.8, -0.2),
        fusion: [(1, 3), (2, 4)],
    },
    RingSpec {
        size: 5,
        radius: 1.3,
        center: Vec3::new(4.8, 4.3, 0.15),
        fusion: [(1, 3), (2, 4)],
    },
];

/// Build the geometry for `preset`.
///
/// Pure and deterministic: the same preset always yields a bit-identical
/// geometry, which is what lets the scene build its cache once at startup.
#[must_use]
pub fn build(preset: PresetId) -> MoleculeGeometry {
    let mut mol = MoleculeGeometry::new();
    add_nucleus(&mut mol);
    let (attach, offset) = HYDROXYL;
    add_substituent(&mut mol, attach, offset, Element::Oxygen, BondOrder::Single);
    let (attach, offset) = CARBONYL;
    add_substituent(&mut mol, attach, offset, Element::Oxygen, BondOrder::Double);

    for modification in recipe(preset) {
        apply(&mut mol, modification);
    }
    mol
}

fn add_nucleus(mol: &mut MoleculeGeometry) {
    let mut previous_base: Option<usize> = None;
    for ring in &NUCLEUS {
        let base = mol.atom_count();
        let step = TAU / ring.size as f32;
        for i in 0..ring.size {
            let angle = i as f32 * step;
            let offset = Vec3::new(angle.cos(), angle.sin(), 0.0) * ring.radius;
            let _ = mol.push_atom(ring.center + offset, Element::Carbon);
        }
        for i in 0..ring.size {
            let next = base + (i + 1) % ring.size;
            mol.push_bond(base + i, next, BondOrder::Single);
        }
        if let Some(prev) = previous_base {
            for (a, b) in ring.fusion {
                mol.push_bond(prev + a, base + b, BondOrder::Single);
            }
        }
        previous_base = Some(base);
    }
}

fn add_substituent(
    mol: &mut MoleculeGeometry,
    attach: usize,
    offset: Vec3,
    element: Element,
    order: BondOrder,
) {
    let Some(anchor) = mol.position(attach) else {
        return;
    };
    if let Some(atom) = mol.push_atom(anchor + offset, element) {
        mol.push_bond(attach, atom, order);
    }
}

fn add_tail(
    mol: &mut MoleculeGeometry,
    attach: usize,
    segments: usize,
    z_wiggle: f32,
) {
    let Some(anchor) = mol.position(attach) else {
        return;
    };
    let mut previous = attach;
    for i in 0..segments {
        let i_f = i as f32;
        let position = anchor
            + Vec3::new(
                TAIL_STEP * (i_f + 1.0),
                -TAIL_DROP * i_f,
                z_wiggle * i_f,
            );
        let Some(current) = mol.push_atom(position, Element::Carbon) else {
            return;
        };
        mol.push_bond(previous, current, BondOrder::Single);
        previous = current;
    }
}

fn apply(mol: &mut MoleculeGeometry, modification: &Modification) {
    match *modification {
        Modification::Tail {
            attach,
            segments,
            z_wiggle,
        } => add_tail(mol, attach, segments, z_wiggle),
        Modification::Substituent {
            attach,
            offset,
            element,
        } => add_substituent(mol, attach, offset, element, BondOrder::Single),
        Modification::PromoteBond {
            bond,
            order,
            when_more_than,
        } => {
            if mol.bond_count() > when_more_than {
                mol.set_bond_order(bond, order);
            }
        }
    }
}
