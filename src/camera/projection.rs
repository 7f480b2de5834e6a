//! Model-to-screen mapping: yaw/pitch rotation, perspective divide, and the
//! auto-fit zoom that sizes a molecule to its viewport.

use glam::Vec3;

use crate::molecule::MoleculeGeometry;
use crate::renderer::command::Rect;

/// Perspective focal distance `F` in `F / (F + z)`.
pub const FOCAL_DISTANCE: f32 = 900.0;
/// Fraction of the smaller viewport side the bounding sphere fills at
/// zoom 1.
pub const FIT_FRACTION: f32 = 0.38;
/// Bounding radii below this are treated as degenerate.
const MIN_RADIUS: f32 = 1e-3;

/// A projected point: screen position plus the raw rotated z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal screen coordinate.
    pub x: f32,
    /// Vertical screen coordinate (grows downward).
    pub y: f32,
    /// Rotated model-space z, used only as a sort key.
    pub depth: f32,
}

/// Rotate `p` by `yaw` about y, then by `pitch` about the yawed x axis.
///
/// The order is fixed; swapping it changes how a drag feels.
#[must_use]
pub fn rotate(p: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let x1 = cy * p.x + sy * p.z;
    let z1 = -sy * p.x + cy * p.z;

    let (sp, cp) = pitch.sin_cos();
    let y2 = cp * p.y - sp * z1;
    let z2 = sp * p.y + cp * z1;

    Vec3::new(x1, y2, z2)
}

/// Project an already-rotated point onto the screen around
/// `(center_x, center_y)`.
///
/// Perspective scales x and y only; `depth` is `p.z` unchanged.
#[must_use]
pub fn project_to_screen(
    p: Vec3,
    zoom: f32,
    center_x: f32,
    center_y: f32,
) -> ScreenPoint {
    let perspective = FOCAL_DISTANCE / (FOCAL_DISTANCE + p.z);
    ScreenPoint {
        x: center_x + p.x * zoom * perspective,
        y: center_y - p.y * zoom * perspective,
        depth: p.z,
    }
}

/// Largest distance of any atom from the model origin, or `1.0` for a
/// degenerate geometry.
#[must_use]
pub fn bounding_radius(geometry: &MoleculeGeometry) -> f32 {
    let r = geometry
        .atoms()
        .iter()
        .map(|a| a.position.length_squared())
        .fold(0.0_f32, f32::max)
        .sqrt();
    if r < MIN_RADIUS {
        1.0
    } else {
        r
    }
}

/// Pixels per model unit for a molecule of `radius` in `viewport`.
#[must_use]
pub fn fit_zoom(
    viewport: &Rect,
    radius: f32,
    base_scale: f32,
    view_zoom: f32,
) -> f32 {
    viewport.w.min(viewport.h) * FIT_FRACTION / radius * base_scale * view_zoom
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::molecule::{BondOrder, Element};

    #[test]
    fn zero_rotation_is_identity() {
        for p in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, -7.0),
            Vec3::ZERO,
        ] {
            assert_eq!(rotate(p, 0.0, 0.0), p);
        }
    }

    #[test]
    fn quarter_yaw_moves_x_to_negative_z() {
        let q = rotate(Vec3::X, FRAC_PI_2, 0.0);
        assert!(q.x.abs() < 1e-4);
        assert!((q.z + 1.0).abs() < 1e-4);
    }

    #[test]
    fn yaw_then_pitch_is_not_commutative() {
        let p = Vec3::new(1.0, 0.5, -0.3);
        let yaw_first = rotate(p, 0.7, 0.4);
        let pitch_first = {
            let pitched = rotate(p, 0.0, 0.4);
            rotate(pitched, 0.7, 0.0)
        };
        assert!((yaw_first - pitch_first).length() > 1e-3);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(3.0, -1.0, 2.0);
        let q = rotate(p, 1.3, -0.8);
        assert!((p.length() - q.length()).abs() < 1e-5);
    }

    #[test]
    fn depth_is_raw_z() {
        for (p, zoom) in [
            (Vec3::new(10.0, 3.0, 0.0), 100.0),
            (Vec3::new(-2.0, 8.0, 500.0), 0.5),
            (Vec3::new(0.0, 0.0, -3.25), 42.0),
        ] {
            let s = project_to_screen(p, zoom, 800.0, 450.0);
            assert_eq!(s.depth, p.z);
        }
    }

    #[test]
    fn farther_points_shrink_toward_center() {
        let near = project_to_screen(Vec3::new(10.0, 0.0, 0.0), 100.0, 800.0, 450.0);
        let far = project_to_screen(Vec3::new(10.0, 0.0, 500.0), 100.0, 800.0, 450.0);
        assert!((far.x - 800.0).abs() < (near.x - 800.0).abs());
    }

    #[test]
    fn zero_y_stays_on_center_line() {
        for p in [Vec3::new(10.0, 0.0, 0.0), Vec3::new(-3.0, 0.0, 250.0)] {
            let s = project_to_screen(p, 73.0, 800.0, 450.0);
            assert_eq!(s.y, 450.0);
        }
    }

    #[test]
    fn screen_y_is_flipped() {
        let s = project_to_screen(Vec3::new(0.0, 1.0, 0.0), 10.0, 0.0, 0.0);
        assert!(s.y < 0.0);
    }

    #[test]
    fn bounding_radius_of_degenerate_geometry_is_one() {
        let mut mol = MoleculeGeometry::new();
        assert_eq!(bounding_radius(&mol), 1.0);
        let _ = mol.push_atom(Vec3::ZERO, Element::Carbon);
        assert_eq!(bounding_radius(&mol), 1.0);
    }

    #[test]
    fn bounding_radius_is_farthest_atom() {
        let mut mol = MoleculeGeometry::new();
        let _ = mol.push_atom(Vec3::new(1.0, 0.0, 0.0), Element::Carbon);
        let _ = mol.push_atom(Vec3::new(0.0, 3.0, 4.0), Element::Oxygen);
        mol.push_bond(0, 1, BondOrder::Single);
        assert!((bounding_radius(&mol) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn fit_zoom_uses_smaller_side() {
        let viewport = Rect::new(0.0, 0.0, 400.0, 200.0);
        let zoom = fit_zoom(&viewport, 2.0, 1.0, 1.0);
        assert!((zoom - 200.0 * 0.38 / 2.0).abs() < 1e-4);
        let doubled = fit_zoom(&viewport, 2.0, 1.0, 2.0);
        assert!((doubled - 2.0 * zoom).abs() < 1e-4);
    }
}
