use bevy::prelude::*;

/// Marker for the single scene camera.
#[derive(Component, Reflect)]
pub struct MenuCamera;

/// Shared material handles for the neon visual theme.
#[derive(Resource)]
pub struct NeonMaterials {
    /// Emissive green for the cube's outer frame.
    pub edge: Handle<StandardMaterial>,
    /// Corner "hardware" brackets.
    pub bracket: Handle<StandardMaterial>,
    /// Wireframe lines of the inner core.
    pub core_wire: Handle<StandardMaterial>,
    /// Faint additive solid inside the core wireframe.
    pub core_ghost: Handle<StandardMaterial>,
    /// Floating data particles.
    pub particle: Handle<StandardMaterial>,
}
