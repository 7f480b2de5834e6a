//! Wireframe and solid ball-and-stick emitters.
//!
//! Each function turns one screen-space bond or atom into the stroke and
//! circle commands for the active style. Ordering across primitives is the
//! painter's job; these only fix the layering within a primitive.

use super::command::{Color, DrawCommand};
use super::painter::{ScreenAtom, ScreenBond};
use crate::molecule::Element;

// Wireframe bonds
const WIRE_BOND_DARKEN: f32 = 0.55;
const WIRE_BOND_LIGHTEN: f32 = 0.20;
const WIRE_OUTER_WIDTH: f32 = 4.0;
const WIRE_INNER_WIDTH: f32 = 2.0;
const WIRE_DOUBLE_OFFSET: (f32, f32) = (2.0, -2.0);
const WIRE_DOUBLE_OUTER_WIDTH: f32 = 3.0;
const WIRE_DOUBLE_INNER_WIDTH: f32 = 2.0;

// Wireframe atoms
const WIRE_ATOM_LIGHTEN: f32 = 0.05;
const WIRE_ATOM_MIN_RADIUS: f32 = 2.0;
const WIRE_ATOM_MAX_RADIUS: f32 = 5.0;
const WIRE_ATOM_ALPHA_SELECTED: u8 = 220;
const WIRE_ATOM_ALPHA: u8 = 170;

// Solid bonds
const SOLID_BOND_SHADE: f32 = 0.35;
const SOLID_DOUBLE_OFFSET: (f32, f32) = (3.0, -3.0);

// Solid atoms
const RIM_DARKEN: f32 = 0.40;
const RIM_GROWTH: f32 = 2.0;
const HIGHLIGHT_LIGHTEN: f32 = 0.60;
const HIGHLIGHT_ALPHA: u8 = 220;
const GLINT_OFFSET: f32 = 2.0;
const GLINT_ALPHA: u8 = 200;
const LABEL_GAP: f32 = 4.0;
const LABEL_RISE: f32 = 6.0;

/// Unscaled atom radius in pixels for `element` in the given style.
#[must_use]
pub fn atom_base_size(element: Element, wireframe: bool) -> f32 {
    match (element, wireframe) {
        (Element::Carbon | Element::Nitrogen, true) => 3.5,
        (Element::Carbon | Element::Nitrogen, false) => 7.0,
        (Element::Oxygen, true) => 4.0,
        (Element::Oxygen, false) => 8.0,
        (Element::Chlorine | Element::Fluorine, true) => 4.2,
        (Element::Chlorine | Element::Fluorine, false) => 9.0,
    }
}

/// Settings shared by every atom of one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomStyle {
    /// Wireframe instead of solid.
    pub wireframe: bool,
    /// Whether the owning tile is selected.
    pub selected: bool,
    /// Color for element labels.
    pub label_color: Color,
}

fn stroke(
    out: &mut Vec<DrawCommand>,
    bond: &ScreenBond,
    offset: (f32, f32),
    thickness: f32,
    color: Color,
) {
    out.push(DrawCommand::StrokeLine {
        x1: bond.x1 + offset.0,
        y1: bond.y1 + offset.1,
        x2: bond.x2 + offset.0,
        y2: bond.y2 + offset.1,
        thickness,
        color,
        alpha: bond.alpha,
    });
}

/// Emit the strokes for one bond.
pub fn emit_bond(out: &mut Vec<DrawCommand>, bond: &ScreenBond, wireframe: bool) {
    if wireframe {
        let dark = bond.color.darken(WIRE_BOND_DARKEN);
        let bright = bond.color.lighten(WIRE_BOND_LIGHTEN);
        stroke(out, bond, (0.0, 0.0), WIRE_OUTER_WIDTH, dark);
        stroke(out, bond, (0.0, 0.0), WIRE_INNER_WIDTH, bright);
        if bond.order == 2 {
            stroke(out, bond, WIRE_DOUBLE_OFFSET, WIRE_DOUBLE_OUTER_WIDTH, dark);
            stroke(out, bond, WIRE_DOUBLE_OFFSET, WIRE_DOUBLE_INNER_WIDTH, bright);
        }
        return;
    }

    let (outer, inner) = match bond.order {
        3 => (10.0, 5.0),
        2 => (8.0, 4.0),
        _ => (6.0, 3.0),
    };
    let dark = bond.color.darken(SOLID_BOND_SHADE);
    let bright = bond.color.lighten(SOLID_BOND_SHADE);
    stroke(out, bond, (0.0, 0.0), outer, dark);
    stroke(out, bond, (0.0, 0.0), inner, bright);
    if bond.order == 2 {
        stroke(out, bond, SOLID_DOUBLE_OFFSET, outer - 2.0, dark);
        stroke(out, bond, SOLID_DOUBLE_OFFSET, inner - 1.0, bright);
    }
}

/// Emit the circles (and possibly a label) for one atom.
pub fn emit_atom(out: &mut Vec<DrawCommand>, atom: &ScreenAtom, style: &AtomStyle) {
    let r = atom.radius;

    if style.wireframe {
        out.push(DrawCommand::FillCircle {
            x: atom.x,
            y: atom.y,
            radius: r.clamp(WIRE_ATOM_MIN_RADIUS, WIRE_ATOM_MAX_RADIUS),
            color: atom.color.lighten(WIRE_ATOM_LIGHTEN),
            alpha: if style.selected {
                WIRE_ATOM_ALPHA_SELECTED
            } else {
                WIRE_ATOM_ALPHA
            },
        });
        return;
    }

    // rim, body, highlight, glint
    out.push(DrawCommand::FillCircle {
        x: atom.x,
        y: atom.y,
        radius: r + RIM_GROWTH,
        color: atom.color.darken(RIM_DARKEN),
        alpha: 255,
    });
    out.push(DrawCommand::FillCircle {
        x: atom.x,
        y: atom.y,
        radius: r,
        color: atom.color,
        alpha: 255,
    });
    let hx = atom.x - r / 3.0;
    let hy = atom.y - r / 3.0;
    out.push(DrawCommand::FillCircle {
        x: hx,
        y: hy,
        radius: (r * 0.45).clamp(2.0, 12.0),
        color: atom.color.lighten(HIGHLIGHT_LIGHTEN),
        alpha: HIGHLIGHT_ALPHA,
    });
    out.push(DrawCommand::FillCircle {
        x: hx - GLINT_OFFSET,
        y: hy - GLINT_OFFSET,
        radius: (r * 0.12).clamp(1.0, 4.0),
        color: Color::WHITE,
        alpha: GLINT_ALPHA,
    });

    if style.selected && atom.element != Element::Carbon {
        out.push(DrawCommand::Label {
            x: atom.x + r + LABEL_GAP,
            y: atom.y - LABEL_RISE,
            text: atom.element.symbol(),
            color: style.label_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::rgb(200, 100, 50);

    fn bond(order: u8) -> ScreenBond {
        ScreenBond {
            x1: 10.0,
            y1: 20.0,
            x2: 30.0,
            y2: 40.0,
            depth: 0.0,
            order,
            color: BASE,
            alpha: 140,
        }
    }

    fn atom(element: Element, radius: f32) -> ScreenAtom {
        ScreenAtom {
            atom_index: 0,
            depth: 0.0,
            x: 100.0,
            y: 50.0,
            radius,
            color: BASE,
            element,
        }
    }

    fn style(wireframe: bool, selected: bool) -> AtomStyle {
        AtomStyle {
            wireframe,
            selected,
            label_color: Color::rgb(245, 245, 255),
        }
    }

    fn widths(cmds: &[DrawCommand]) -> Vec<f32> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeLine { thickness, .. } => Some(*thickness),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn wireframe_single_bond_is_dark_then_bright() {
        let mut out = Vec::new();
        emit_bond(&mut out, &bond(1), true);
        assert_eq!(widths(&out), vec![4.0, 2.0]);
        assert!(matches!(
            out[0],
            DrawCommand::StrokeLine { color, alpha: 140, .. } if color == BASE.darken(0.55)
        ));
        assert!(matches!(
            out[1],
            DrawCommand::StrokeLine { color, .. } if color == BASE.lighten(0.20)
        ));
    }

    #[test]
    fn wireframe_double_bond_adds_offset_pair() {
        let mut out = Vec::new();
        emit_bond(&mut out, &bond(2), true);
        assert_eq!(widths(&out), vec![4.0, 2.0, 3.0, 2.0]);
        assert!(matches!(
            out[2],
            DrawCommand::StrokeLine { x1, y1, .. } if x1 == 12.0 && y1 == 18.0
        ));
    }

    #[test]
    fn solid_bond_widths_follow_order() {
        for (order, expected) in [
            (1, vec![6.0, 3.0]),
            (2, vec![8.0, 4.0, 6.0, 3.0]),
            (3, vec![10.0, 5.0]),
        ] {
            let mut out = Vec::new();
            emit_bond(&mut out, &bond(order), false);
            assert_eq!(widths(&out), expected, "order {order}");
        }
    }

    #[test]
    fn solid_double_offset_is_three_pixels() {
        let mut out = Vec::new();
        emit_bond(&mut out, &bond(2), false);
        assert!(matches!(
            out[3],
            DrawCommand::StrokeLine { x2, y2, .. } if x2 == 33.0 && y2 == 37.0
        ));
    }

    #[test]
    fn solid_atom_has_four_layers() {
        let mut out = Vec::new();
        emit_atom(&mut out, &atom(Element::Carbon, 9.0), &style(false, true));
        assert_eq!(out.len(), 4);
        let radii: Vec<f32> = out
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 4);
        assert_eq!(radii[0], 11.0);
        assert_eq!(radii[1], 9.0);
        assert!((radii[2] - 4.05).abs() < 1e-5);
        assert!((radii[3] - 1.08).abs() < 1e-5);
        assert!(matches!(
            out[3],
            DrawCommand::FillCircle { x, y, color, alpha: 200, .. }
                if x == 95.0 && y == 45.0 && color == Color::WHITE
        ));
    }

    #[test]
    fn selected_heteroatom_gets_label() {
        let mut out = Vec::new();
        emit_atom(&mut out, &atom(Element::Oxygen, 8.0), &style(false, true));
        assert_eq!(out.len(), 5);
        assert!(matches!(
            out[4],
            DrawCommand::Label { x, y, text: "O", .. } if x == 112.0 && y == 44.0
        ));

        out.clear();
        emit_atom(&mut out, &atom(Element::Oxygen, 8.0), &style(false, false));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn wireframe_atom_radius_is_clamped() {
        for (radius, expected) in [(1.0, 2.0), (3.5, 3.5), (9.0, 5.0)] {
            let mut out = Vec::new();
            emit_atom(&mut out, &atom(Element::Nitrogen, radius), &style(true, false));
            assert_eq!(out.len(), 1);
            assert!(matches!(
                out[0],
                DrawCommand::FillCircle { radius: r, alpha: 170, .. } if r == expected
            ));
        }
    }

    #[test]
    fn base_sizes() {
        assert_eq!(atom_base_size(Element::Carbon, false), 7.0);
        assert_eq!(atom_base_size(Element::Nitrogen, true), 3.5);
        assert_eq!(atom_base_size(Element::Oxygen, false), 8.0);
        assert_eq!(atom_base_size(Element::Fluorine, true), 4.2);
        assert_eq!(atom_base_size(Element::Chlorine, false), 9.0);
    }
}
