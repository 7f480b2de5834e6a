//! Converts raw platform events into atlas commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! which buttons are held) and the key-binding map. It is the only thing
//! that sits between raw window events and the engine's
//! [`execute`](crate::engine::AtlasEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::command::{AtlasCommand, Direction};

/// Maps physical key strings to [`AtlasCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"Tab"`, `"Escape"`, `"ArrowLeft"`, etc.
///
/// Only discrete commands can be bound; drag and wheel commands come from
/// the mouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`AtlasCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Leave the atlas.
    Quit,
    /// Switch between wireframe and solid.
    ToggleWireframe,
    /// Enter or leave focus mode.
    ToggleFocus,
    /// Restore the selected compound's default view.
    ResetView,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Move the grid selection left.
    MoveLeft,
    /// Move the grid selection right.
    MoveRight,
    /// Move the grid selection up.
    MoveUp,
    /// Move the grid selection down.
    MoveDown,
    /// Select the next compound, wrapping.
    SelectNext,
    /// Select the previous compound, wrapping.
    SelectPrevious,
}

impl KeyCommandTag {
    fn to_command(self) -> AtlasCommand {
        match self {
            Self::Quit => AtlasCommand::Quit,
            Self::ToggleWireframe => AtlasCommand::ToggleWireframe,
            Self::ToggleFocus => AtlasCommand::ToggleFocus,
            Self::ResetView => AtlasCommand::ResetView,
            Self::ToggleAutoRotate => AtlasCommand::ToggleAutoRotate,
            Self::MoveLeft => AtlasCommand::MoveSelection(Direction::Left),
            Self::MoveRight => AtlasCommand::MoveSelection(Direction::Right),
            Self::MoveUp => AtlasCommand::MoveSelection(Direction::Up),
            Self::MoveDown => AtlasCommand::MoveSelection(Direction::Down),
            Self::SelectNext => AtlasCommand::SelectNext,
            Self::SelectPrevious => AtlasCommand::SelectPrevious,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Escape".into(), KeyCommandTag::Quit),
            ("Space".into(), KeyCommandTag::ToggleWireframe),
            ("Enter".into(), KeyCommandTag::ToggleFocus),
            ("KeyR".into(), KeyCommandTag::ResetView),
            ("KeyA".into(), KeyCommandTag::ToggleAutoRotate),
            ("ArrowLeft".into(), KeyCommandTag::MoveLeft),
            ("ArrowRight".into(), KeyCommandTag::MoveRight),
            ("ArrowUp".into(), KeyCommandTag::MoveUp),
            ("ArrowDown".into(), KeyCommandTag::MoveDown),
            ("Tab".into(), KeyCommandTag::SelectNext),
            ("Backquote".into(), KeyCommandTag::SelectPrevious),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<AtlasCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`, if any.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`AtlasCommand`]s.
///
/// # Usage
///
/// ```ignore
/// for cmd in input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last known cursor position; `None` until the first motion event.
    cursor: Option<Vec2>,
    /// Whether the left button is held (rotate drag).
    left_held: bool,
    /// Whether the right button is held (pan drag).
    right_held: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels, once known.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether a rotate or pan drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.left_held || self.right_held
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<AtlasCommand> {
        let command = self.key_bindings.lookup(key);
        if command.is_none() {
            log::trace!("unbound key {key}");
        }
        command
    }

    /// Process a raw input event into zero or more commands.
    ///
    /// Motion with both buttons held yields a rotate and a pan.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<AtlasCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.left_held = pressed,
                    MouseButton::Right => self.right_held = pressed,
                    MouseButton::Middle => {}
                }
                Vec::new()
            }
            InputEvent::Scroll { delta } if delta != 0.0 => {
                vec![AtlasCommand::Zoom { notches: delta }]
            }
            InputEvent::Scroll { .. } => Vec::new(),
            InputEvent::KeyPressed { key } => {
                self.handle_key_press(&key).into_iter().collect()
            }
        }
    }

    /// Cursor moved: compute the delta and turn held buttons into drags.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<AtlasCommand> {
        let pos = Vec2::new(x, y);
        let Some(last) = self.cursor.replace(pos) else {
            return Vec::new();
        };
        let delta = pos - last;
        if delta == Vec2::ZERO {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if self.left_held {
            commands.push(AtlasCommand::RotateView { delta });
        }
        if self.right_held {
            commands.push(AtlasCommand::PanView { delta });
        }
        commands
    }
}
