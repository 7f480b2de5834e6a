//! Per-tile camera pose and its input-driven update rules.

use glam::Vec2;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SENSITIVITY: f32 = 0.01;
/// Pitch is kept inside `[-PITCH_LIMIT, PITCH_LIMIT]` so the camera never
/// flips over a pole.
pub const PITCH_LIMIT: f32 = 1.2;
/// Zoom multiplier per positive wheel notch.
pub const ZOOM_IN_STEP: f32 = 1.08;
/// Zoom multiplier per negative wheel notch.
pub const ZOOM_OUT_STEP: f32 = 0.92;
/// Smallest allowed zoom multiplier.
pub const MIN_ZOOM: f32 = 0.35;
/// Largest allowed zoom multiplier.
pub const MAX_ZOOM: f32 = 4.0;
/// Pitch a freshly reset view starts at.
pub const DEFAULT_PITCH: f32 = 0.5;

/// Camera pose for one tile.
///
/// Pitch and zoom are clamped after every mutation, so out-of-range values
/// never reach the projector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Rotation about the vertical axis, radians.
    pub yaw: f32,
    /// Rotation about the yawed horizontal axis, radians.
    pub pitch: f32,
    /// Screen-space offset in pixels.
    pub pan: Vec2,
    /// Multiplier on top of the auto-fit zoom.
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewState {
    /// Apply a rotate drag of `dx`, `dy` pixels.
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + dy * ROTATE_SENSITIVITY)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a pan drag of `dx`, `dy` pixels.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan += Vec2::new(dx, dy);
    }

    /// Step the zoom by one wheel notch in the direction of `notch`.
    pub fn zoom_by(&mut self, notch: f32) {
        let factor = if notch > 0.0 {
            ZOOM_IN_STEP
        } else if notch < 0.0 {
            ZOOM_OUT_STEP
        } else {
            return;
        };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Restore the default pose.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
