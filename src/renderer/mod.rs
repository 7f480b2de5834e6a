//! Draw-list construction for the atlas.
//!
//! The core never touches pixels. [`painter::Painter`] turns a compound's
//! geometry and view into an ordered list of [`command::DrawCommand`]s, and
//! any [`command::RenderBackend`] can execute that list.

pub mod command;
pub mod painter;
pub mod style;

pub use command::{Color, DrawCommand, Rect, RenderBackend};
pub use painter::{FrameParams, Painter, TileParams};
