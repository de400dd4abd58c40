//! Normalized pointer position over the primary window.
//!
//! Feeds the cube parallax; independent of the hover slot.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::math;

/// Cursor position in `[-1, 1]` on both axes, y up. Keeps its last value
/// while the cursor is outside the window.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PointerPosition(pub Vec2);

/// Tracks [`PointerPosition`] every frame.
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PointerPosition>()
            .init_resource::<PointerPosition>()
            .add_systems(PreUpdate, track_pointer);
    }
}

/// Writes the primary window's cursor into [`PointerPosition`].
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerPosition>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if let Some(pos) = math::normalize_cursor(cursor, window.size()) {
        pointer.set_if_neq(PointerPosition(pos));
    }
}
