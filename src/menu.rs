//! Menu data and the shared hover state.
//!
//! Owns the fixed [`MenuCatalog`], the single [`HoverState`] slot read by the
//! 3D view and the overlay, and the [`HoverIntent`] messages through which
//! both pointer surfaces request changes.

mod entities;
mod systems;

pub use entities::{
    EntryId, HoverIntent, HoverState, MENU_ENTRIES, MenuCatalog, MenuEntry, MenuError,
};
pub use systems::apply_hover_intents;

use bevy::prelude::*;

/// Ordering for systems that depend on the hover slot being up to date.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuSet {
    /// Drains [`HoverIntent`]s into [`HoverState`].
    ApplyHover,
}

/// Menu catalog, hover slot and hover intent plumbing.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<EntryId>()
            .register_type::<HoverState>()
            .init_resource::<MenuCatalog>()
            .init_resource::<HoverState>()
            .add_message::<HoverIntent>()
            .configure_sets(Update, MenuSet::ApplyHover)
            .add_systems(Update, apply_hover_intents.in_set(MenuSet::ApplyHover));
    }
}
