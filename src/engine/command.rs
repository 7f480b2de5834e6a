//! The atlas's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it came from a key press, a mouse
//! gesture or a programmatic call, is an `AtlasCommand`. Consumers construct
//! commands and pass them to
//! [`AtlasEngine::execute`](super::AtlasEngine::execute).

use glam::Vec2;

/// Grid navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// A discrete or parameterized operation the atlas can perform.
///
/// ```ignore
/// engine.execute(AtlasCommand::ToggleWireframe);
/// engine.execute(AtlasCommand::Zoom { notches: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtlasCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Move the grid selection one step; ignored in focus mode.
    MoveSelection(Direction),

    /// Select the next compound, wrapping at the end.
    SelectNext,

    /// Select the previous compound, wrapping at the start.
    SelectPrevious,

    // ── Display ─────────────────────────────────────────────────────
    /// Switch between wireframe and solid ball-and-stick.
    ToggleWireframe,

    /// Enter or leave single-compound focus mode.
    ToggleFocus,

    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,

    // ── Camera (selected compound) ──────────────────────────────────
    /// Restore the default view.
    ResetView,

    /// Rotate by `delta` pixels of drag.
    RotateView {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan by `delta` pixels of drag.
    PanView {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Step the zoom (positive = in, negative = out).
    Zoom {
        /// Wheel notches; only the sign matters.
        notches: f32,
    },

    // ── Lifecycle ───────────────────────────────────────────────────
    /// Ask the host loop to stop.
    Quit,
}
