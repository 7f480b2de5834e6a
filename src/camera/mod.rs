//! Camera system for the atlas tiles.
//!
//! Each tile owns a [`ViewState`] (yaw, pitch, pan, zoom) that input
//! mutates; the [`projection`] functions turn model-space atoms into screen
//! points for the painter.

/// Rotation, perspective projection and auto-fit zoom.
pub mod projection;
/// Per-tile camera pose and its update rules.
pub mod view;

pub use projection::{
    bounding_radius, fit_zoom, project_to_screen, rotate, ScreenPoint,
};
pub use view::ViewState;
