//! The atlas engine: owns the scene and options, executes commands, and
//! turns the current state into a frame of draw commands.

pub mod command;

pub use command::{AtlasCommand, Direction};

use crate::error::AtlasError;
use crate::options::Options;
use crate::renderer::{DrawCommand, FrameParams, Painter, TileParams};
use crate::scene::{Atlas, Catalog};

/// Headless atlas engine.
///
/// ```ignore
/// let mut engine = AtlasEngine::new(Catalog::builtin(), Options::default())?;
/// engine.execute(AtlasCommand::ToggleWireframe);
/// backend.submit(&engine.render_frame(clock.seconds()));
/// ```
#[derive(Debug, Clone)]
pub struct AtlasEngine {
    atlas: Atlas,
    options: Options,
    should_quit: bool,
}

impl AtlasEngine {
    /// Build the scene for `catalog` using `options`.
    pub fn new(catalog: Catalog, options: Options) -> Result<Self, AtlasError> {
        let atlas = Atlas::new(catalog, &options.layout, &options.display)?;
        log::info!("atlas ready with {} compounds", atlas.len());
        Ok(Self {
            atlas,
            options,
            should_quit: false,
        })
    }

    /// Read-only scene access.
    #[must_use]
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether a [`AtlasCommand::Quit`] has been executed.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one command to the scene.
    pub fn execute(&mut self, command: AtlasCommand) {
        log::trace!("execute {command:?}");
        match command {
            AtlasCommand::MoveSelection(direction) => {
                self.atlas.move_selection(direction);
            }
            AtlasCommand::SelectNext => self.atlas.select_next(),
            AtlasCommand::SelectPrevious => self.atlas.select_previous(),
            AtlasCommand::ToggleWireframe => self.atlas.toggle_wireframe(),
            AtlasCommand::ToggleFocus => self.atlas.toggle_focus(),
            AtlasCommand::ToggleAutoRotate => self.atlas.toggle_auto_rotate(),
            AtlasCommand::ResetView => self.atlas.reset_view(),
            AtlasCommand::RotateView { delta } => {
                if let Some(view) = self.atlas.selected_view_mut() {
                    view.rotate_by(delta.x, delta.y);
                }
            }
            AtlasCommand::PanView { delta } => {
                if let Some(view) = self.atlas.selected_view_mut() {
                    view.pan_by(delta.x, delta.y);
                }
            }
            AtlasCommand::Zoom { notches } => {
                if let Some(view) = self.atlas.selected_view_mut() {
                    view.zoom_by(notches);
                }
            }
            AtlasCommand::Quit => self.should_quit = true,
        }
    }

    /// Build the full command list for a frame at `time_seconds`.
    ///
    /// The list always starts with a `Clear`. Grid mode then paints every
    /// tile in catalog order; focus mode paints only the selected compound
    /// in the focus viewport.
    #[must_use]
    pub fn render_frame(&self, time_seconds: f32) -> Vec<DrawCommand> {
        let painter = Painter::new(
            &self.options.colors,
            self.options.display.auto_rotate_speed(),
        );
        let frame = FrameParams {
            time_seconds,
            auto_rotate: self.atlas.auto_rotate(),
            wireframe: self.atlas.wireframe(),
        };

        let mut out = vec![DrawCommand::Clear {
            color: self.options.colors.frame_background,
        }];

        let layout = self.atlas.layout();
        if self.atlas.focused() {
            let index = self.atlas.selected();
            if let Some((compound, geometry, view)) = self.atlas.entry(index) {
                let tile = TileParams {
                    viewport: layout.focus_rect(),
                    selected: true,
                };
                painter.paint_tile(
                    &mut out, compound, geometry, view, &tile, &frame,
                );
            }
        } else {
            for index in 0..self.atlas.len() {
                let Some((compound, geometry, view)) = self.atlas.entry(index)
                else {
                    continue;
                };
                let tile = TileParams {
                    viewport: layout.tile_rect(index),
                    selected: index == self.atlas.selected(),
                };
                painter.paint_tile(
                    &mut out, compound, geometry, view, &tile, &frame,
                );
            }
        }
        out
    }

    /// Title-bar text describing the current state.
    #[must_use]
    pub fn status_line(&self) -> String {
        let name = self
            .atlas
            .selected_compound()
            .map_or("", |c| c.name.as_str());
        let auto = if self.atlas.auto_rotate() { "ON" } else { "OFF" };
        if self.atlas.focused() {
            format!(
                "Structural Atlas | Focus: {name} | Space: mode | Enter: back | \
                 Mouse: rotate/pan/zoom | R: reset | A: auto {auto}"
            )
        } else {
            format!(
                "Structural Atlas | selected: {name} | Space: mode | \
                 Enter: focus | Arrows: move | Mouse: rotate/pan/zoom | \
                 R: reset | A: auto {auto}"
            )
        }
    }
}
