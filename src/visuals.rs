//! Scene visuals: camera, bloom, tonemapping, and shared materials.
//!
//! Spawns the orthographic `Camera3d` with HDR + bloom post-processing and
//! creates the [`NeonMaterials`] resource consumed by `cube` when spawning
//! geometry.

mod entities;
mod systems;

pub use entities::{MenuCamera, NeonMaterials};
pub use systems::setup_visuals;

use bevy::prelude::*;

/// Camera and shared-material settings.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct VisualsConfig {
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
    /// World-units visible vertically in the orthographic view.
    pub viewport_height: f32,
    /// Camera distance along +Z, looking at the origin.
    pub camera_distance: f32,
    /// Background clear color.
    pub clear_color: Color,
    /// Emissive multiplier applied to the neon color for HDR glow.
    pub neon_emissive: f32,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            bloom_intensity: 0.3,
            viewport_height: 8.0,
            camera_distance: 50.0,
            clear_color: Color::BLACK,
            neon_emissive: 4.0,
        }
    }
}

/// Sets up the camera, bloom, tonemapping, and shared neon materials.
pub struct VisualsPlugin(pub VisualsConfig);

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<VisualsConfig>()
            .register_type::<MenuCamera>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(Startup, setup_visuals);
    }
}
