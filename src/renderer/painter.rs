//! Painter's-algorithm compositor.
//!
//! There is no depth buffer, so what ends up on top is decided entirely by
//! emission order. Every frame the painter projects each atom once, builds
//! separate bond and atom lists, sorts each by ascending depth, and emits all
//! bonds before any atom. Atoms therefore always cover bonds, whatever
//! their relative depth.

use glam::Vec2;

use super::command::{Color, DrawCommand, Rect};
use super::style;
use crate::camera::{
    bounding_radius, fit_zoom, project_to_screen, rotate, ScreenPoint,
    ViewState,
};
use crate::molecule::{Element, MoleculeGeometry};
use crate::options::ColorOptions;
use crate::scene::CompoundDescriptor;

/// Bond alpha on the selected tile.
const SELECTED_BOND_ALPHA: u8 = 230;
/// Bond alpha on every other tile.
const UNSELECTED_BOND_ALPHA: u8 = 140;
/// Atom radius shrinks by this fraction per unit of depth.
const DEPTH_FALLOFF: f32 = 0.05;
const MIN_DEPTH_SCALE: f32 = 0.6;
const MAX_DEPTH_SCALE: f32 = 1.35;

/// Per-frame switches shared by every tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Seconds since the atlas started.
    pub time_seconds: f32,
    /// Whether the time-driven turntable rotation is on.
    pub auto_rotate: bool,
    /// Wireframe instead of solid ball-and-stick.
    pub wireframe: bool,
}

/// One tile to paint: where it goes and whether it has the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    /// Screen rectangle the tile occupies.
    pub viewport: Rect,
    /// Whether this tile is the selected/focused one.
    pub selected: bool,
}

/// A projected atom ready for styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenAtom {
    /// Index into the geometry's atom list.
    pub atom_index: usize,
    /// Rotated z (sort key).
    pub depth: f32,
    /// Screen x.
    pub x: f32,
    /// Screen y.
    pub y: f32,
    /// Depth-scaled radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
    /// Atom label.
    pub element: Element,
}

/// A projected bond ready for styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBond {
    /// Start x.
    pub x1: f32,
    /// Start y.
    pub y1: f32,
    /// End x.
    pub x2: f32,
    /// End y.
    pub y2: f32,
    /// Mean depth of the two endpoints (sort key).
    pub depth: f32,
    /// Bond multiplicity (1..=3).
    pub order: u8,
    /// Stroke base color.
    pub color: Color,
    /// Stroke opacity.
    pub alpha: u8,
}

/// Bond and atom lists for one tile, each sorted by ascending depth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedMolecule {
    /// Bonds, lowest depth first.
    pub bonds: Vec<ScreenBond>,
    /// Atoms, lowest depth first.
    pub atoms: Vec<ScreenAtom>,
}

/// Turns compounds into draw commands.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    colors: &'a ColorOptions,
    auto_rotate_speed: Vec2,
}

impl<'a> Painter<'a> {
    /// Create a painter using `colors`; `auto_rotate_speed` is the
    /// (yaw, pitch) turntable rate in radians per second.
    #[must_use]
    pub fn new(colors: &'a ColorOptions, auto_rotate_speed: Vec2) -> Self {
        Self {
            colors,
            auto_rotate_speed,
        }
    }

    /// Effective (yaw, pitch) for `view` at this frame.
    #[must_use]
    pub fn camera_angles(&self, view: &ViewState, frame: &FrameParams) -> Vec2 {
        let auto = if frame.auto_rotate {
            self.auto_rotate_speed * frame.time_seconds
        } else {
            Vec2::ZERO
        };
        Vec2::new(view.yaw, view.pitch) + auto
    }

    /// Project `geometry` into sorted screen-space bond and atom lists.
    #[must_use]
    pub fn project(
        &self,
        compound: &CompoundDescriptor,
        geometry: &MoleculeGeometry,
        view: &ViewState,
        tile: &TileParams,
        frame: &FrameParams,
    ) -> ProjectedMolecule {
        let angles = self.camera_angles(view, frame);
        let (cx, cy) = tile.viewport.center();
        let center = Vec2::new(cx, cy) + view.pan;
        let zoom = fit_zoom(
            &tile.viewport,
            bounding_radius(geometry),
            compound.base_scale,
            view.zoom,
        );

        let points: Vec<ScreenPoint> = geometry
            .atoms()
            .iter()
            .map(|atom| {
                let rotated = rotate(atom.position, angles.x, angles.y);
                project_to_screen(rotated, zoom, center.x, center.y)
            })
            .collect();

        let alpha = if tile.selected {
            SELECTED_BOND_ALPHA
        } else {
            UNSELECTED_BOND_ALPHA
        };
        let mut bonds: Vec<ScreenBond> = geometry
            .bonds()
            .iter()
            .filter_map(|bond| {
                let a = points.get(bond.from)?;
                let b = points.get(bond.to)?;
                Some(ScreenBond {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    depth: (a.depth + b.depth) * 0.5,
                    order: bond.order.value(),
                    color: compound.base_color,
                    alpha,
                })
            })
            .collect();

        let mut atoms: Vec<ScreenAtom> = geometry
            .atoms()
            .iter()
            .zip(&points)
            .enumerate()
            .map(|(i, (atom, p))| {
                let depth_scale = (1.0 - p.depth * DEPTH_FALLOFF)
                    .clamp(MIN_DEPTH_SCALE, MAX_DEPTH_SCALE);
                ScreenAtom {
                    atom_index: i,
                    depth: p.depth,
                    x: p.x,
                    y: p.y,
                    radius: style::atom_base_size(atom.element, frame.wireframe)
                        * depth_scale,
                    color: self
                        .colors
                        .element_color(atom.element, compound.base_color),
                    element: atom.element,
                }
            })
            .collect();

        // Stable and total: NaN depths sort to the end instead of panicking.
        bonds.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        atoms.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        ProjectedMolecule { bonds, atoms }
    }

    /// Append the commands for one tile: clip, background, border, bonds,
    /// atoms, unclip.
    pub fn paint_tile(
        &self,
        out: &mut Vec<DrawCommand>,
        compound: &CompoundDescriptor,
        geometry: &MoleculeGeometry,
        view: &ViewState,
        tile: &TileParams,
        frame: &FrameParams,
    ) {
        let rect = tile.viewport;
        out.push(DrawCommand::ClipRect { rect });
        out.push(DrawCommand::FillRect {
            rect,
            color: self.colors.tile_background,
        });
        out.push(DrawCommand::StrokeRect {
            rect,
            color: if tile.selected {
                self.colors.border_selected
            } else {
                self.colors.border
            },
        });

        let projected = self.project(compound, geometry, view, tile, frame);
        for bond in &projected.bonds {
            style::emit_bond(out, bond, frame.wireframe);
        }
        let atom_style = style::AtomStyle {
            wireframe: frame.wireframe,
            selected: tile.selected,
            label_color: self.colors.label,
        };
        for atom in &projected.atoms {
            style::emit_atom(out, atom, &atom_style);
        }

        out.push(DrawCommand::ResetClip);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::molecule::{build, BondOrder, PresetId};

    fn compound(preset: u32) -> CompoundDescriptor {
        CompoundDescriptor {
            name: "Test".to_owned(),
            base_color: Color::from_rgba_u32(0xE74C_3CFF),
            preset: PresetId::new(preset).unwrap(),
            base_scale: 1.0,
        }
    }

    fn tile(selected: bool) -> TileParams {
        TileParams {
            viewport: Rect::new(0.0, 0.0, 300.0, 200.0),
            selected,
        }
    }

    fn frame(wireframe: bool) -> FrameParams {
        FrameParams {
            time_seconds: 0.0,
            auto_rotate: false,
            wireframe,
        }
    }

    fn painter(colors: &ColorOptions) -> Painter<'_> {
        Painter::new(colors, Vec2::new(0.7, 0.25))
    }

    #[test]
    fn lists_are_sorted_by_depth() {
        let colors = ColorOptions::default();
        let p = painter(&colors);
        for id in PresetId::all() {
            let c = compound(u32::from(id.get()));
            let geometry = build(id);
            let projected = p.project(
                &c,
                &geometry,
                &ViewState::default(),
                &tile(false),
                &frame(false),
            );
            assert_eq!(projected.atoms.len(), geometry.atom_count());
            assert_eq!(projected.bonds.len(), geometry.bond_count());
            assert!(projected
                .atoms
                .windows(2)
                .all(|w| w[0].depth <= w[1].depth));
            assert!(projected
                .bonds
                .windows(2)
                .all(|w| w[0].depth <= w[1].depth));
        }
    }

    #[test]
    fn bond_depth_is_endpoint_mean_and_alpha_follows_selection() {
        let mut geometry = MoleculeGeometry::new();
        let _ = geometry.push_atom(Vec3::new(0.0, 0.0, -2.0), Element::Carbon);
        let _ = geometry.push_atom(Vec3::new(1.0, 0.0, 4.0), Element::Oxygen);
        geometry.push_bond(0, 1, BondOrder::Double);

        let colors = ColorOptions::default();
        let p = painter(&colors);
        let mut view = ViewState::default();
        view.pitch = 0.0;

        let sel = p.project(&compound(0), &geometry, &view, &tile(true), &frame(false));
        assert_eq!(sel.bonds[0].depth, 1.0);
        assert_eq!(sel.bonds[0].order, 2);
        assert_eq!(sel.bonds[0].alpha, SELECTED_BOND_ALPHA);

        let unsel =
            p.project(&compound(0), &geometry, &view, &tile(false), &frame(false));
        assert_eq!(unsel.bonds[0].alpha, UNSELECTED_BOND_ALPHA);
    }

    #[test]
    fn depth_scales_radius_within_clamp() {
        let mut geometry = MoleculeGeometry::new();
        let _ = geometry.push_atom(Vec3::new(0.0, 0.0, 30.0), Element::Carbon);
        let _ = geometry.push_atom(Vec3::new(0.0, 0.0, -30.0), Element::Carbon);
        let _ = geometry.push_atom(Vec3::new(1.0, 0.0, 0.0), Element::Carbon);
        geometry.push_bond(0, 1, BondOrder::Single);

        let colors = ColorOptions::default();
        let p = painter(&colors);
        let mut view = ViewState::default();
        view.pitch = 0.0;
        let projected =
            p.project(&compound(0), &geometry, &view, &tile(false), &frame(false));

        let radii: Vec<f32> = projected.atoms.iter().map(|a| a.radius).collect();
        assert!((radii[0] - 7.0 * 1.35).abs() < 1e-5);
        assert!((radii[1] - 7.0).abs() < 1e-5);
        assert!((radii[2] - 7.0 * 0.6).abs() < 1e-5);
        assert_eq!(projected.atoms[0].atom_index, 1);
        assert_eq!(projected.atoms[2].atom_index, 0);
    }

    #[test]
    fn element_colors_override_base_color() {
        let colors = ColorOptions::default();
        let p = painter(&colors);
        let c = compound(8);
        let geometry = build(c.preset);
        let projected =
            p.project(&c, &geometry, &ViewState::default(), &tile(false), &frame(true));
        for atom in &projected.atoms {
            let expected = match atom.element {
                Element::Carbon => c.base_color,
                Element::Oxygen => colors.oxygen,
                Element::Nitrogen => colors.nitrogen,
                Element::Chlorine => colors.chlorine,
                Element::Fluorine => colors.fluorine,
            };
            assert_eq!(atom.color, expected);
        }
    }

    #[test]
    fn auto_rotate_is_a_function_of_time() {
        let colors = ColorOptions::default();
        let p = painter(&colors);
        let view = ViewState::default();
        let mut f = frame(false);
        f.time_seconds = 2.0;
        assert_eq!(p.camera_angles(&view, &f), Vec2::new(0.0, 0.5));
        f.auto_rotate = true;
        let angles = p.camera_angles(&view, &f);
        assert!((angles.x - 1.4).abs() < 1e-6);
        assert!((angles.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pan_shifts_projection_center() {
        let mut geometry = MoleculeGeometry::new();
        let _ = geometry.push_atom(Vec3::ZERO, Element::Carbon);
        let _ = geometry.push_atom(Vec3::X, Element::Carbon);
        geometry.push_bond(0, 1, BondOrder::Single);

        let colors = ColorOptions::default();
        let p = painter(&colors);
        let mut view = ViewState::default();
        view.pan_by(12.0, -8.0);
        let projected =
            p.project(&compound(0), &geometry, &view, &tile(false), &frame(false));
        let origin = projected
            .atoms
            .iter()
            .find(|a| a.atom_index == 0)
            .unwrap();
        assert_eq!((origin.x, origin.y), (162.0, 92.0));
    }

    #[test]
    fn tile_is_framed_and_atoms_follow_bonds() {
        let colors = ColorOptions::default();
        let p = painter(&colors);
        let c = compound(3);
        let geometry = build(c.preset);
        let mut out = Vec::new();
        p.paint_tile(
            &mut out,
            &c,
            &geometry,
            &ViewState::default(),
            &tile(true),
            &frame(false),
        );

        assert!(matches!(out.first(), Some(DrawCommand::ClipRect { .. })));
        assert!(matches!(out.get(1), Some(DrawCommand::FillRect { .. })));
        assert!(matches!(
            out.get(2),
            Some(DrawCommand::StrokeRect { color, .. }) if *color == colors.border_selected
        ));
        assert_eq!(out.last(), Some(&DrawCommand::ResetClip));

        let last_line = out
            .iter()
            .rposition(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .unwrap();
        let first_circle = out
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .unwrap();
        assert!(last_line < first_circle);
    }
}
