//! 2D egui overlay: the menu rows on the right and the info panel for the
//! hovered entry on the left.
//!
//! Rows never touch [`HoverState`](crate::menu::HoverState) directly; they
//! emit [`HoverIntent`]s when the pointer crosses a row boundary.

mod systems;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::NEON_GREEN;
use crate::menu::{EntryId, HoverIntent};

/// Layout and styling of the overlay.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct OverlayConfig {
    /// Share of the window width taken by the menu column.
    pub menu_width_fraction: f32,
    /// Minimum inner height of a menu row.
    pub row_height: f32,
    /// Vertical gap between rows.
    pub row_gap: f32,
    /// How far the active row slides left, in points.
    pub active_nudge: f32,
    /// Distance of the info panel from the left window edge.
    pub info_margin: f32,
    /// Inner width of the info panel.
    pub info_width: f32,
    /// Seconds for the info panel fade-in.
    pub fade_secs: f32,
    /// Points the info panel rises while fading in.
    pub fade_rise: f32,
    /// Accent color for borders and text.
    pub accent: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            menu_width_fraction: 1.0 / 3.0,
            row_height: 28.0,
            row_gap: 16.0,
            active_nudge: 10.0,
            info_margin: 96.0,
            info_width: 384.0,
            fade_secs: 0.5,
            fade_rise: 16.0,
            accent: NEON_GREEN,
        }
    }
}

/// Menu rows and info panel.
pub struct OverlayPlugin(pub OverlayConfig);

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<OverlayConfig>()
            .insert_resource(self.0.clone())
            .add_systems(
                EguiPrimaryContextPass,
                (systems::draw_menu, systems::draw_info_panel),
            );
    }
}

/// Intents to emit when the row under the pointer changes from `prev` to `now`.
///
/// A leave always precedes the enter, so that applying them in order ends on
/// the newly hovered row.
pub fn row_intents(prev: Option<EntryId>, now: Option<EntryId>) -> Vec<HoverIntent> {
    if prev == now {
        return Vec::new();
    }
    prev.map(|_| HoverIntent::Leave)
        .into_iter()
        .chain(now.map(HoverIntent::Enter))
        .collect()
}

/// Footer text showing an entry's vertex.
pub fn coord_text(position: IVec3) -> String {
    format!("COORD: {} / {} / {}", position.x, position.y, position.z)
}
