// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural molecule atlas rendered as depth-sorted 2D draw lists.
//!
//! Molatlas builds a fixed ball-and-stick geometry for every compound in a
//! catalog, lets each compound be rotated, panned and zoomed on its own,
//! and turns the whole scene into an ordered list of draw commands every
//! frame. It never touches pixels: a host supplies a
//! [`renderer::RenderBackend`] that rasterizes the commands.
//!
//! # Key entry points
//!
//! - [`engine::AtlasEngine`] - owns the scene, executes commands, renders
//!   frames
//! - [`scene::Catalog`] - the validated compound list
//! - [`molecule::build`] - deterministic preset to geometry construction
//! - [`input::InputProcessor`] - raw input events to [`engine::AtlasCommand`]s
//! - [`options::Options`] - runtime configuration (display, layout, colors,
//!   key bindings)
//!
//! # Architecture
//!
//! Everything runs on one thread. Geometry is built once when the engine is
//! created; after that a frame is a pure function of the scene state and the
//! elapsed time. Per frame, each atom is rotated and perspective-projected
//! once, bonds and atoms are sorted by depth separately, and all bonds are
//! emitted before any atom (painter's algorithm, no depth buffer).

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod molecule;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;

pub use engine::{AtlasCommand, AtlasEngine};
pub use error::AtlasError;
