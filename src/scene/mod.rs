//! Authoritative atlas state: the catalog, its geometry cache, one camera
//! per compound, the selection and the display flags.
//!
//! Geometry is built and validated once in [`Atlas::new`] and is read-only
//! afterwards; everything else here is mutated by engine commands.

pub mod catalog;
pub mod layout;

pub use catalog::{Catalog, CompoundDescriptor};
pub use layout::GridLayout;

use crate::camera::ViewState;
use crate::engine::command::Direction;
use crate::error::AtlasError;
use crate::molecule::{build, MoleculeGeometry};
use crate::options::{DisplayOptions, LayoutOptions};

/// The atlas scene.
#[derive(Debug, Clone)]
pub struct Atlas {
    catalog: Catalog,
    /// One geometry per catalog entry, same order.
    geometries: Vec<MoleculeGeometry>,
    /// One camera per catalog entry, same order.
    views: Vec<ViewState>,
    layout: GridLayout,
    selected: usize,
    wireframe: bool,
    focused: bool,
    auto_rotate: bool,
}

impl Atlas {
    /// Build the geometry cache for `catalog` and set up default views.
    ///
    /// Fails with [`AtlasError::InvalidGeometry`] if any built geometry
    /// breaks a structural invariant.
    pub fn new(
        catalog: Catalog,
        layout: &LayoutOptions,
        display: &DisplayOptions,
    ) -> Result<Self, AtlasError> {
        let geometries = catalog
            .compounds()
            .iter()
            .map(|c| {
                let geometry = build(c.preset);
                geometry.validate(c.preset)?;
                log::debug!(
                    "built {} (preset {}): {} atoms, {} bonds",
                    c.name,
                    c.preset.get(),
                    geometry.atom_count(),
                    geometry.bond_count()
                );
                Ok(geometry)
            })
            .collect::<Result<Vec<_>, AtlasError>>()?;

        let count = catalog.len();
        Ok(Self {
            geometries,
            views: vec![ViewState::default(); count],
            layout: GridLayout::new(layout, count),
            catalog,
            selected: 0,
            wireframe: display.wireframe,
            focused: false,
            auto_rotate: display.auto_rotate,
        })
    }

    // -- Queries --

    /// The compound catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of compounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the atlas has no compounds (never true once built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Compound, geometry and view at `index`.
    #[must_use]
    pub fn entry(
        &self,
        index: usize,
    ) -> Option<(&CompoundDescriptor, &MoleculeGeometry, &ViewState)> {
        Some((
            self.catalog.get(index)?,
            self.geometries.get(index)?,
            self.views.get(index)?,
        ))
    }

    /// Cached geometry at `index`.
    #[must_use]
    pub fn geometry(&self, index: usize) -> Option<&MoleculeGeometry> {
        self.geometries.get(index)
    }

    /// Camera of the compound at `index`.
    #[must_use]
    pub fn view(&self, index: usize) -> Option<&ViewState> {
        self.views.get(index)
    }

    /// Grid geometry.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Index of the selected compound.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected compound.
    #[must_use]
    pub fn selected_compound(&self) -> Option<&CompoundDescriptor> {
        self.catalog.get(self.selected)
    }

    /// Whether wireframe style is active.
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Whether only the selected compound is shown.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Whether turntable auto-rotation is on.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    // -- Mutation --

    /// Camera of the selected compound.
    pub fn selected_view_mut(&mut self) -> Option<&mut ViewState> {
        self.views.get_mut(self.selected)
    }

    /// Grid navigation. Ignored in focus mode.
    pub fn move_selection(&mut self, direction: Direction) {
        if self.focused {
            log::debug!("ignoring {direction:?} while focused");
            return;
        }
        self.selected = self.layout.step(self.selected, direction);
    }

    /// Select the next compound, wrapping to the first.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.len();
    }

    /// Select the previous compound, wrapping to the last.
    pub fn select_previous(&mut self) {
        let n = self.len();
        self.selected = (self.selected + n - 1) % n;
    }

    /// Switch between wireframe and solid.
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    /// Enter or leave focus mode.
    pub fn toggle_focus(&mut self) {
        self.focused = !self.focused;
    }

    /// Toggle auto-rotation.
    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Restore the selected compound's default view.
    pub fn reset_view(&mut self) {
        if let Some(view) = self.selected_view_mut() {
            view.reset();
        }
    }
}
